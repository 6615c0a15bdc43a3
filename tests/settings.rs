// tests/settings.rs

use std::fs;
use std::path::PathBuf;

use dnafl::config::settings::{load_from, save_to, Settings, Theme};

fn tmp_file(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("dnafl_settings_{}", name));
    let _ = fs::remove_file(&p);
    p
}

#[test]
fn missing_file_loads_defaults() {
    let cfg = load_from("/nonexistent/dnafl-settings");
    assert_eq!(cfg, Settings::default());
    assert_eq!(cfg.theme, Theme::Light);
    assert!(cfg.include_headers);
}

#[test]
fn theme_toggle_round_trips_through_the_file() {
    let path = tmp_file("roundtrip");
    let path_str = path.to_str().unwrap();

    let mut cfg = load_from(path_str);
    cfg.theme = cfg.theme.flip();
    cfg.include_headers = false;
    save_to(path_str, &cfg);

    let back = load_from(path_str);
    assert_eq!(back.theme, Theme::Dark);
    assert!(!back.include_headers);
}

#[test]
fn unknown_keys_and_comments_are_ignored() {
    let path = tmp_file("unknown");
    fs::write(&path, "# comment\nmystery=42\ntheme=dark\n").unwrap();
    let cfg = load_from(path.to_str().unwrap());
    assert_eq!(cfg.theme, Theme::Dark);
}
