//! Web surface for appdock.
//!
//! Request handling for the upload-and-serve gateway: multipart uploads in,
//! per-application static assets out.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::GatewayServer;
