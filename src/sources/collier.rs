// src/sources/collier.rs
//
// Collier County sheriff abuse-search table.
// Columns: 0 = type, 1 = name, 2 = DOB, 4 = case, 5 = expiration, 6 = charge.
// The expiration date stands in for the registration date when present.

use super::{Entry, table::TableSource, today_stamp};

pub fn source() -> TableSource {
    TableSource {
        label: "Collier Sheriff",
        county: "Collier",
        host: "www2.colliersheriff.org",
        path: "/animalabusesearch",
        min_cols: 7,
        map_row,
    }
}

fn map_row(src: &TableSource, cols: &[String]) -> Option<Entry> {
    let date = if cols[5].is_empty() || cols[5] == "N/A" {
        today_stamp()
    } else {
        cols[5].clone()
    };
    Some(Entry {
        name: cols[1].clone(),
        date,
        county: src.county.to_string(),
        source: src.label.to_string(),
        kind: cols[0].clone(),
        details: format!("DOB: {} | Case: {} | Charge: {}", cols[2], cols[4], cols[6]),
    })
}
