// src/sources/mod.rs
//
// County source adapters. Each source fetches one public registry page and
// shapes it into Entry values with the canonical master columns. Sources
// that the counties only serve through browser automation or PDF blobs are
// not scraped here; the aggregation pipeline treats whatever a source
// returns as opaque extracted rows.

pub mod collier;
pub mod lee;
pub mod marion;
pub mod table;

use chrono::Local;

/// One registry row as extracted from a county source, pre-standardization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub date: String,
    pub county: String,
    pub source: String,
    /// "Convicted", "Enjoined", or whatever the county publishes.
    pub kind: String,
    pub details: String,
}

impl Entry {
    /// Master column order: Name, Date, County, Source, Type, Details.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.date.clone(),
            self.county.clone(),
            self.source.clone(),
            self.kind.clone(),
            self.details.clone(),
        ]
    }
}

pub trait Source {
    fn label(&self) -> &'static str;
    fn county(&self) -> &'static str;
    fn collect(&self) -> Result<Vec<Entry>, Box<dyn std::error::Error>>;
}

/// All enabled sources, in run order.
pub fn registry() -> Vec<Box<dyn Source>> {
    vec![
        Box::new(lee::source()),
        Box::new(collier::source()),
        Box::new(marion::MarionSource),
    ]
}

/// Today's date as the registry's canonical `YYYY-MM-DD`, used where a
/// county omits the date and "date added" is the best available proxy.
pub(crate) fn today_stamp() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
