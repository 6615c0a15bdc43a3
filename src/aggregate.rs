// src/aggregate.rs
//
// The scrape pipeline: run every source in order, standardize and dedupe
// the union, and write the master tab cache. One failed source is logged
// and skipped; only a run where every source fails is an error.

use std::collections::HashSet;

use crate::config::consts::{MASTER_COLUMNS, MASTER_TAB_ID};
use crate::progress::Progress;
use crate::record;
use crate::sources::{Entry, Source};
use crate::store::{self, Table};

/// Full sequential fetch-parse-dedupe-write run. Returns the master Table
/// that was written to the tab cache.
pub fn run(
    sources: &[Box<dyn Source>],
    progress: &mut dyn Progress,
) -> Result<Table, Box<dyn std::error::Error>> {
    progress.begin(sources.len());
    logf!("Scrape: starting run over {} sources", sources.len());

    let mut all: Vec<Entry> = Vec::new();
    let mut failed: Vec<&str> = Vec::new();
    for src in sources {
        match src.collect() {
            Ok(entries) if !entries.is_empty() => {
                logf!("Scrape: {} OK, {} records", src.label(), entries.len());
                progress.log(&format!("{}: {} records", src.label(), entries.len()));
                all.extend(entries);
            }
            Ok(_) => {
                logw!("Scrape: {} yielded 0 records", src.label());
                progress.log(&format!("{}: 0 records", src.label()));
            }
            Err(e) => {
                loge!("Scrape: {} failed: {}", src.label(), e);
                progress.log(&format!("{} failed: {}", src.label(), e));
                failed.push(src.label());
            }
        }
        progress.source_done(src.label());
    }

    if !failed.is_empty() {
        loge!("Scrape: {} of {} sources failed: {}", failed.len(), sources.len(), failed.join(", "));
        progress.log(&format!(
            "{} of {} sources failed: {}",
            failed.len(),
            sources.len(),
            failed.join(", ")
        ));
    }

    if all.is_empty() {
        progress.finish();
        return Err("no data collected from any source".into());
    }

    let entries = dedupe(standardize(all));
    logf!("Scrape: {} unique records after dedupe", entries.len());

    let header: Vec<String> = MASTER_COLUMNS.iter().map(|s| s.to_string()).collect();
    let rows: Vec<Vec<String>> = entries.iter().map(Entry::to_row).collect();
    let path = match store::save_tab_rows(MASTER_TAB_ID, &header, &rows) {
        Ok(p) => p,
        Err(e) => {
            progress.finish();
            return Err(e.into());
        }
    };
    logf!("Scrape: wrote master tab to {}", path.display());

    progress.finish();
    Ok(Table::build(header, rows))
}

/// The cleaning pass every aggregated row gets: whitespace collapsed,
/// blanks filled with "N/A", and the date restringified to `YYYY-MM-DD`
/// ("Unknown" when no accepted format matches).
pub fn standardize(entries: Vec<Entry>) -> Vec<Entry> {
    use crate::core::sanitize::or_na;

    entries
        .into_iter()
        .map(|e| {
            let date = match record::parse_date(&e.date) {
                Some(d) => d.format("%Y-%m-%d").to_string(),
                None => "Unknown".to_string(),
            };
            Entry {
                name: or_na(&e.name),
                date,
                county: or_na(&e.county),
                source: or_na(&e.source),
                kind: or_na(&e.kind),
                details: or_na(&e.details),
            }
        })
        .collect()
}

/// Drop duplicates on (Name, County, Date), keeping the newest-dated entry;
/// output stays sorted newest-first, undated entries at the end.
pub fn dedupe(mut entries: Vec<Entry>) -> Vec<Entry> {
    entries.sort_by(|a, b| {
        let da = record::parse_date(&a.date);
        let db = record::parse_date(&b.date);
        match (da, db) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
    });

    let mut seen: HashSet<(String, String, String)> = HashSet::new();
    entries.retain(|e| {
        seen.insert((e.name.to_lowercase(), e.county.to_lowercase(), e.date.clone()))
    });
    entries
}
