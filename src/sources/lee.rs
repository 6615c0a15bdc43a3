// src/sources/lee.rs
//
// Lee County sheriff, static enjoined-persons table.
// Columns: 0 = name, 1 = case number, 2 = injunction date, 3 = notes.

use super::{Entry, table::TableSource};

pub fn source() -> TableSource {
    TableSource {
        label: "Lee Sheriff Enjoined",
        county: "Lee",
        host: "www.sheriffleefl.org",
        path: "/animal-abuser-registry-enjoined/",
        min_cols: 3,
        map_row,
    }
}

fn map_row(src: &TableSource, cols: &[String]) -> Option<Entry> {
    let notes = cols.get(3).map(String::as_str).unwrap_or("");
    Some(Entry {
        name: cols[0].clone(),
        date: cols[2].clone(),
        county: src.county.to_string(),
        source: src.label.to_string(),
        kind: "Enjoined".to_string(),
        details: format!("Case: {} | {}", cols[1], notes),
    })
}
