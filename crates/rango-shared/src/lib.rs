//! # Rango Shared
//!
//! Configuration, telemetry, and constants shared across the Rango crates.

pub mod config;
pub mod constants;
pub mod telemetry;

pub use config::AppConfig;
