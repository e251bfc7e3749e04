//! Core types and trait definitions for the CWA forecast pipeline.
//!
//! This crate is free of HTTP and database dependencies. The fetcher, loader
//! and viewer crates all depend on it.

pub mod error;
pub mod extract;
pub mod record;
pub mod store;

pub use error::{Error, Result};
pub use extract::extract_records;
pub use record::{DISPLAY_LABELS, LocationRecord, TABLE_NAME};
