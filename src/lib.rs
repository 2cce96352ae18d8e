//! appdock - Upload-and-serve gateway for static web applications.
//!
//! Accepts multipart file uploads tagged with an application identifier,
//! stores them under a per-application directory tree, and serves each
//! application back over HTTP with `index.html` as the entry point.

pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod web;

pub use config::Config;
pub use error::{AppdockError, Result};
pub use store::{AppStore, AssetLookup, StagedUpload, TempStore};
pub use web::{ApiError, GatewayServer};
