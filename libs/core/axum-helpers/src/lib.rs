//! Shared HTTP plumbing for the catalog workspace.
//!
//! Provides the standard error response shape, validated JSON extraction,
//! health endpoints and the server bootstrap (bind + serve + graceful
//! shutdown). Domain crates convert their own error enums into [`AppError`]
//! so every failure leaving the service is a structured JSON body.

pub mod errors;
pub mod extractors;
pub mod health;
pub mod server;

pub use errors::{AppError, ErrorResponse};
pub use extractors::ValidatedJson;
