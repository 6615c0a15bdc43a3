// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::core::sanitize::sanitize_filename;
use crate::csv::Delim;
use super::consts::DEFAULT_EXPORT_DIR;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        self.delim().ext()
    }
    pub fn delim(&self) -> Delim {
        match self {
            ExportFormat::Csv => Delim::Csv,
            ExportFormat::Tsv => Delim::Tsv,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    dir: PathBuf,
    file_stem: Option<OsString>, // without extension; None → tab id + date
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            file_stem: None,
        }
    }
}

impl ExportOptions {
    /// Resolves the output file. Without an explicit path the stem embeds
    /// the active tab id and today's date, e.g. `dna-list_2026-08-29.csv`.
    pub fn out_path(&self, tab_id: &str) -> PathBuf {
        let mut path = self.dir.clone();
        let stem = match &self.file_stem {
            Some(s) => s.to_string_lossy().into_owned(),
            None => format!(
                "{}_{}",
                sanitize_filename(tab_id, "tab"),
                Local::now().date_naive()
            ),
        };
        path.push(format!("{}.{}", stem, self.format.ext()));
        path
    }

    /// Parse user text into dir + stem. A pasted extension is ignored;
    /// the format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                self.dir = parent.to_path_buf();
            }
        }
        if let Some(stem) = p.file_stem() {
            self.file_stem = Some(stem.to_os_string());
        }
    }
}
