// src/sources/marion.rs
//
// Marion County animal services. No table: entries are loose text blocks
// with "Name:" / "Conviction Date:" labels, so we scan paragraph-ish
// blocks and pull labelled values out of the visible text.

use crate::core::{html, net};

use super::{Entry, Source};

const HOST: &str = "animalservices.marionfl.org";
const PATH: &str = "/animal-control/animal-control-and-pet-laws/animal-abuser-registry";

pub struct MarionSource;

impl Source for MarionSource {
    fn label(&self) -> &'static str {
        "Marion Animal Services"
    }

    fn county(&self) -> &'static str {
        "Marion"
    }

    fn collect(&self) -> Result<Vec<Entry>, Box<dyn std::error::Error>> {
        let doc = net::http_get(HOST, PATH)?;
        Ok(extract_entries(&doc))
    }
}

pub fn extract_entries(doc: &str) -> Vec<Entry> {
    let mut out = Vec::new();
    for block in html::tag_blocks(doc, "p") {
        let text = html::inner_text(block);
        let Some(name) = labelled_value(&text, "Name:") else { continue };
        let date = labelled_value(&text, "Conviction Date:").unwrap_or_else(|| "Unknown".to_string());
        out.push(Entry {
            name,
            date,
            county: "Marion".to_string(),
            source: "Marion Animal Services".to_string(),
            kind: "Convicted".to_string(),
            details: text,
        });
    }
    out
}

/// Labels Marion uses inside one entry block.
const LABELS: [&str; 4] = ["name:", "conviction date:", "address:", "case:"];

/// Value after `label`, cut at the next `|` separator or the next label.
fn labelled_value(text: &str, label: &str) -> Option<String> {
    let lc = html::to_lower(text);
    let at = lc.find(&html::to_lower(label))? + label.len();
    let rest = &text[at..];
    let rest_lc = &lc[at..];

    let mut end = rest.find('|').unwrap_or(rest.len());
    for other in LABELS {
        if let Some(i) = rest_lc.find(other) {
            end = end.min(i);
        }
    }
    let value = rest[..end].trim();
    if value.is_empty() { None } else { Some(value.to_string()) }
}
