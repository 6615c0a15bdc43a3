// src/record.rs
//
// Row normalization: raw string fields → trimmed cells plus a typed date
// derived from the designated date column. Rows are never dropped for an
// unparsable date; they are tagged and kept (partial data beats no data).

use chrono::NaiveDate;

use crate::core::sanitize::normalize_ws;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// One cell per header column, trimmed and whitespace-collapsed.
    pub cells: Vec<String>,
    /// Derived from the date column; `None` when no format matched.
    pub parsed_date: Option<NaiveDate>,
    /// False when date parsing failed (the row is retained regardless).
    pub date_valid: bool,
}

impl Record {
    /// Cell by column index; out-of-range reads as empty (the parser pads
    /// rows to header width, so this only happens for bad column indices).
    pub fn cell(&self, col: usize) -> &str {
        self.cells.get(col).map(String::as_str).unwrap_or("")
    }
}

/// Normalize one raw row. `date_col` designates the date column, if the
/// table has one; a parse failure is logged per row, as a warning.
pub fn normalize(raw: Vec<String>, date_col: Option<usize>) -> Record {
    let cells: Vec<String> = raw.iter().map(|c| normalize_ws(c)).collect();

    let mut parsed_date = None;
    let mut date_valid = false;
    if let Some(col) = date_col {
        let text = cells.get(col).map(String::as_str).unwrap_or("");
        match parse_date(text) {
            Some(d) => {
                parsed_date = Some(d);
                date_valid = true;
            }
            None => {
                logw!("Date: no accepted format matched {:?}", text);
            }
        }
    }

    Record { cells, parsed_date, date_valid }
}

/// Ordered format list; the first match wins. The order is fixed: it
/// decides how ambiguous strings classify, so it must not be "improved".
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    if let Some(d) = parse_month_year(s) {
        return Some(d);
    }
    // Long locale form, e.g. "January 5, 2024"
    NaiveDate::parse_from_str(s, "%B %d, %Y").ok()
}

/// `MM-YY` → first day of that month, two-digit years pivoted into 2000–2099.
fn parse_month_year(s: &str) -> Option<NaiveDate> {
    let (m, y) = s.split_once('-')?;
    if m.len() > 2 || y.len() != 2 {
        return None;
    }
    let month: u32 = m.trim().parse().ok()?;
    let year: i32 = y.trim().parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    NaiveDate::from_ymd_opt(2000 + year, month, 1)
}
