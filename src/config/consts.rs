// src/config/consts.rs
//
// Process-wide constants: store layout, the published spreadsheet feed,
// tab definitions, and the canonical master column set.

pub const STORE_DIR: &str = ".store";
pub const TABS_SUBDIR: &str = "tabs";
pub const LOG_FILE: &str = ".store/dnafl.log";
pub const SETTINGS_FILE: &str = ".store/settings";

pub const DEFAULT_EXPORT_DIR: &str = "export";

/// Published spreadsheet that is the system of record.
/// Updated out-of-band by the scrape pipeline; the dashboard only reads.
pub const SHEET_HOST: &str = "docs.google.com";
pub const SHEET_ID: &str = "1V0ERkUXzc2G_SvSVUaVac50KyNOpw4N7bL6yAiZospY";

/// Canonical column set of the master tab, in serialization order.
pub const MASTER_COLUMNS: [&str; 6] = ["Name", "Date", "County", "Source", "Type", "Details"];

pub const MASTER_TAB_ID: &str = "dna-list";

/// A named dataset backed by one spreadsheet tab.
pub struct TabSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub sheet_name: &'static str,
}

pub const TABS: [TabSpec; 2] = [
    TabSpec { id: MASTER_TAB_ID, label: "DNA List", sheet_name: "DNA List" },
    TabSpec { id: "enjoined", label: "Enjoined List", sheet_name: "Enjoined" },
];

pub fn find_tab(id: &str) -> Option<&'static TabSpec> {
    TABS.iter().find(|t| t.id.eq_ignore_ascii_case(id))
}

/// CSV export path for a tab on the published sheet.
pub fn feed_path(tab: &TabSpec) -> String {
    let sheet = tab.sheet_name.replace(' ', "%20");
    format!("/spreadsheets/d/{SHEET_ID}/gviz/tq?tqx=out:csv&sheet={sheet}")
}
