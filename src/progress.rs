// src/progress.rs
/// Lightweight progress reporting for long-running operations (scrape/fetch).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of sources (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one source finishes, successfully or not.
    fn source_done(&mut self, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
