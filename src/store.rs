// src/store.rs
//
// Table construction plus the on-disk cache of fetched tab data.
// A Table is built once per load and replaced wholesale on reload;
// nothing mutates it afterward.

use std::io::Write;
use std::{fs, io, path::PathBuf};

use crate::config::consts::{STORE_DIR, TABS_SUBDIR};
use crate::csv::{self, Delim};
use crate::record::{self, Record};

pub struct Table {
    pub header: Vec<String>,
    pub records: Vec<Record>,
    pub date_col: Option<usize>,
    pub county_col: Option<usize>,
    counties: Vec<String>,
}

impl Table {
    /// Pure construction from a header and raw rows (already header-width).
    /// Distinct county values are computed here, once.
    pub fn build(header: Vec<String>, raw_rows: Vec<Vec<String>>) -> Self {
        let date_col = col_index_in(&header, "Date");
        let county_col = col_index_in(&header, "County");

        let records: Vec<Record> = raw_rows
            .into_iter()
            .map(|r| record::normalize(r, date_col))
            .collect();

        let mut counties: Vec<String> = Vec::new();
        if let Some(col) = county_col {
            for rec in &records {
                let v = rec.cell(col);
                if v.is_empty() {
                    continue;
                }
                if !counties.iter().any(|c| c.eq_ignore_ascii_case(v)) {
                    counties.push(v.to_string());
                }
            }
            counties.sort_by_key(|c| c.to_lowercase());
        }

        Self { header, records, date_col, county_col, counties }
    }

    pub fn from_csv_text(text: &str) -> Self {
        let raw = csv::parse_table(text, Delim::Csv);
        Self::build(raw.header, raw.rows)
    }

    /// Case-insensitive column lookup by header name.
    pub fn col_index(&self, name: &str) -> Option<usize> {
        col_index_in(&self.header, name)
    }

    /// Distinct county values, sorted case-insensitively. Populates the
    /// county selector.
    pub fn distinct_counties(&self) -> &[String] {
        &self.counties
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn col_index_in(header: &[String], name: &str) -> Option<usize> {
    header.iter().position(|h| h.eq_ignore_ascii_case(name))
}

/* ---------------- Tab cache ---------------- */

pub fn tab_cache_path(tab_id: &str) -> PathBuf {
    PathBuf::from(STORE_DIR)
        .join(TABS_SUBDIR)
        .join(format!("{tab_id}.csv"))
}

/// Cache the raw fetched text for a tab, verbatim.
pub fn save_tab_text(tab_id: &str, text: &str) -> io::Result<PathBuf> {
    let path = tab_cache_path(tab_id);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, text)?;
    Ok(path)
}

/// Write rows produced locally (the scrape pipeline) as a tab cache file.
pub fn save_tab_rows(tab_id: &str, header: &[String], rows: &[Vec<String>]) -> io::Result<PathBuf> {
    let path = tab_cache_path(tab_id);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(&path)?;
    let mut out = io::BufWriter::new(file);
    csv::write_row(&mut out, header, Delim::Csv)?;
    for row in rows {
        csv::write_row(&mut out, row, Delim::Csv)?;
    }
    out.flush()?;
    Ok(path)
}

pub fn load_tab(tab_id: &str) -> Result<Table, Box<dyn std::error::Error>> {
    let path = tab_cache_path(tab_id);
    let text = fs::read_to_string(&path)
        .map_err(|e| format!("no cached data for tab '{}' ({}): {}", tab_id, path.display(), e))?;
    Ok(Table::from_csv_text(&text))
}
