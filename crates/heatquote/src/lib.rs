//! Boiler and cylinder recommendation service for installation quotes.
//!
//! The `quotes` module owns the scenario catalogue, the matching engine, and
//! the quote intake surface. `config`, `telemetry`, and `error` carry the
//! service plumbing shared with the API crate.

pub mod config;
pub mod error;
pub mod quotes;
pub mod telemetry;
