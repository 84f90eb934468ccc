//! Cryptocalc Core - Domain types and services.
//!
//! This crate contains the conversion logic for the crypto calculation
//! service. It is transport-agnostic and defines traits that are wired
//! up by the `server` crate.

pub mod errors;
pub mod fx;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
