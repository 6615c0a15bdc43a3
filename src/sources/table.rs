// src/sources/table.rs
//
// Declarative spec for sources that publish a plain HTML table: where the
// page lives, how many cells a data row needs, and how cells map to an
// Entry. Extraction itself is shared.

use crate::core::{html, net};

use super::{Entry, Source};

pub struct TableSource {
    pub label: &'static str,
    pub county: &'static str,
    pub host: &'static str,
    pub path: &'static str,
    /// Rows with fewer cells are skipped (spacer/footer rows).
    pub min_cols: usize,
    pub map_row: fn(&TableSource, &[String]) -> Option<Entry>,
}

impl Source for TableSource {
    fn label(&self) -> &'static str {
        self.label
    }

    fn county(&self) -> &'static str {
        self.county
    }

    fn collect(&self) -> Result<Vec<Entry>, Box<dyn std::error::Error>> {
        let doc = net::http_get(self.host, self.path)?;
        let rows = extract_rows(&doc).ok_or_else(|| format!("{}: no table found", self.label))?;

        let mut out = Vec::new();
        for cells in rows {
            if cells.len() < self.min_cols {
                continue;
            }
            if let Some(entry) = (self.map_row)(self, &cells) {
                out.push(entry);
            }
        }
        Ok(out)
    }
}

/// Cell text of every data row of the first `<table>` in `doc`.
/// The first `<tr>` is the header and is skipped; rows without `<td>`
/// cells (pure `<th>` rows) drop out on their own.
pub fn extract_rows(doc: &str) -> Option<Vec<Vec<String>>> {
    let table = html::tag_blocks(doc, "table").next()?;
    let rows = html::tag_blocks(table, "tr")
        .skip(1)
        .map(|tr| html::tag_blocks(tr, "td").map(html::inner_text).collect::<Vec<String>>())
        .filter(|cells| !cells.is_empty())
        .collect();
    Some(rows)
}
