//! Transcript API Library
//!
//! This crate provides the HTTP handlers, authorization middleware, and application setup for
//! the transcript store.

// Module declarations
mod api_doc;
mod handlers;
pub mod setup;
mod utils;

// Public modules
pub mod auth;
pub mod error;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
