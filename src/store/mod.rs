//! Application storage module for appdock.
//!
//! This module maps application identifiers and relative paths onto a
//! directory tree on disk:
//! - Per-application directories under a single applications root
//! - Lazy, incremental directory creation as uploads arrive
//! - Staging of inbound uploads before they are moved into place
//! - Entry-point and asset lookup for the serving surface

mod apps;
mod staging;

pub use apps::{AppStore, AssetLookup};
pub use staging::{StagedUpload, TempStore};

/// File name of an application's entry point.
pub const ENTRY_POINT: &str = "index.html";
