// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self {
            Delim::Csv => ',',
            Delim::Tsv => '\t',
        }
    }
    pub fn ext(self) -> &'static str {
        match self {
            Delim::Csv => "csv",
            Delim::Tsv => "tsv",
        }
    }
}

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV record parser (quotes + CRLF tolerant). std-only.
///
/// A separator or newline inside quotes is literal text; `""` inside quotes
/// is an escaped quote. Blank records and the empty record produced by a
/// trailing final newline are dropped.
pub fn parse_rows(text: &str, delim: Delim) -> Vec<Vec<String>> {
    let sep = delim.sep();
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row: Vec<String> = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                if row.len() == 1 && row[0].is_empty() {
                    // blank line / trailing newline artifact
                    row.clear();
                } else {
                    rows.push(take(&mut row));
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush the last record even if the text ends without a newline
    // (or with an unterminated quote).
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Header + data rows, with every row forced to header width.
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Parse delimited text whose first record names the columns.
///
/// Rows whose field count does not match the header are salvaged (padded
/// with empty fields or truncated) and logged as warnings. A malformed row
/// never aborts the rest of the parse.
pub fn parse_table(text: &str, delim: Delim) -> RawTable {
    let mut records = parse_rows(text, delim).into_iter();
    let header = records.next().unwrap_or_default();
    let width = header.len();

    let mut rows = Vec::new();
    for (n, mut row) in records.enumerate() {
        if row.len() != width {
            logw!(
                "CSV: row {} has {} fields, header has {}, salvaging",
                n + 2, // 1-based, counting the header line
                row.len(),
                width
            );
            row.resize(width, String::new());
        }
        rows.push(row);
    }

    RawTable { header, rows }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV record to any writer, quoting exactly the grammar
/// `parse_rows` accepts, so exported text round-trips field-for-field.
pub fn write_row<W: Write>(mut w: W, row: &[String], delim: Delim) -> io::Result<()> {
    let sep = delim.sep();
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, "{}", sep)?;
        } else {
            first = false;
        }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Serialize a view's rows (already in header order) for export or copy.
pub fn to_export_string(
    header: &[String],
    rows: &[Vec<String>],
    include_headers: bool,
    delim: Delim,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers && !header.is_empty() {
        let _ = write_row(&mut buf, header, delim);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, delim);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
