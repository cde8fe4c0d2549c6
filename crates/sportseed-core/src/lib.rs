//! Core types and trait definitions for sportseed.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! store backend, the scraping source and the HTTP layer all depend on it.

pub mod error;
pub mod ingest;
pub mod leagues;
pub mod source;
pub mod sport;
pub mod store;

pub use error::{Error, Result};
