//! HTTP server module
//!
//! This module handles HTTP request routing and handling:
//! - Axum router with the catalog endpoints
//! - Video listing handler (200 with records, 400 with `[]`)
//! - Static serving of the media store under `/media`
//! - CORS and request tracing middleware

pub mod handlers;
pub mod routes;

pub use routes::create_router;
