// src/config/settings.rs
//
// Persisted user preferences. Loaded once at startup, written back only by
// explicit actions (e.g. a theme toggle); no other writers.

use std::{fs, path::Path};

use super::consts::SETTINGS_FILE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn flip(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub theme: Theme,
    pub include_headers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { theme: Theme::Light, include_headers: true }
    }
}

pub fn load() -> Settings {
    load_from(SETTINGS_FILE)
}

pub fn load_from(path: &str) -> Settings {
    if !Path::new(path).exists() {
        return Settings::default();
    }
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(_) => return Settings::default(),
    };
    let mut cfg = Settings::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(eq) = line.find('=') {
            let key = line[..eq].trim();
            let val = line[eq + 1..].trim();
            match key {
                "theme" => {
                    if val.eq_ignore_ascii_case("dark") {
                        cfg.theme = Theme::Dark;
                    }
                }
                "include_headers" => {
                    cfg.include_headers = val == "1" || val.eq_ignore_ascii_case("true");
                }
                _ => {}
            }
        }
    }
    cfg
}

pub fn save(cfg: &Settings) {
    save_to(SETTINGS_FILE, cfg)
}

pub fn save_to(path: &str, cfg: &Settings) {
    let mut s = String::new();
    s.push_str(&format!("theme={}\n", cfg.theme.as_str()));
    s.push_str(&format!("include_headers={}\n", if cfg.include_headers { 1 } else { 0 }));
    if let Some(parent) = Path::new(path).parent() {
        let _ = fs::create_dir_all(parent);
    }
    let _ = fs::write(path, s);
}
