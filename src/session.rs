// src/session.rs
//
// Per-tab state: the current Table, active filter/sort/page, and a fetch
// generation counter. State transitions are whole-value replacements; the
// latest completed fetch wins and stale results are discarded.

use crate::query::{Filter, SortSpec};
use crate::store::Table;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The new table replaced the old one.
    Swapped,
    /// A newer fetch superseded this one; result discarded.
    Stale,
    /// Fetch failed; the prior table (if any) stays displayed.
    Failed,
}

#[derive(Default)]
pub struct TabSession {
    table: Option<Table>,
    pub filter: Filter,
    pub sort: Option<SortSpec>,
    pub page_index: usize,
    generation: u64,
}

impl TabSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    /// Replacing the filter resets to the first page, so a now-nonexistent
    /// page is never shown.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.page_index = 0;
    }

    /// Sort toggle: same column flips direction, new column starts ascending.
    /// Also resets to the first page.
    pub fn toggle_sort(&mut self, column: usize) {
        self.sort = Some(SortSpec::toggle(self.sort.as_ref(), column));
        self.page_index = 0;
    }

    pub fn set_page(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    /// Tag a new fetch. Any earlier in-flight fetch is superseded from
    /// this point on.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn complete_fetch(
        &mut self,
        generation: u64,
        result: Result<Table, Box<dyn std::error::Error>>,
    ) -> FetchOutcome {
        if generation != self.generation {
            logf!(
                "Fetch: discarding stale result (generation {} < {})",
                generation, self.generation
            );
            return FetchOutcome::Stale;
        }
        match result {
            Ok(table) => {
                // Sort column may not exist in the replacement header.
                if self.sort.is_some_and(|s| s.column >= table.header.len()) {
                    self.sort = None;
                }
                self.table = Some(table);
                self.page_index = 0;
                FetchOutcome::Swapped
            }
            Err(e) => {
                loge!("Fetch: failed, keeping prior table: {}", e);
                FetchOutcome::Failed
            }
        }
    }
}
