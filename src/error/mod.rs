//! Error handling for the modcheck tool
//!
//! Provides the error enum, severity levels and the result alias used
//! throughout the crate.

pub mod types;

pub use types::{CheckError, ErrorSeverity, Result};
