//! Common types and utilities for coexsim
//!
//! This crate provides the shared parameter objects, error type and logging
//! setup used across all coexsim crates.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{AntennaConfig, AntennaPatternKind};
pub use error::Error;
pub use logging::{init_logging, init_logging_with_filter, LogLevel};
