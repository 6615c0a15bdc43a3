// src/lib.rs

#[macro_use]
pub mod log;

pub mod config;
pub mod core;

pub mod aggregate;
pub mod cli;
pub mod csv;
pub mod file;
pub mod paging;
pub mod progress;
pub mod query;
pub mod record;
pub mod session;
pub mod sources;
pub mod store;
