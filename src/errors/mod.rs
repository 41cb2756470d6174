//! Error types for the perfspan library.
//!
//! This module follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`OptionsError`],
//!   [`TracerError`])
//! - **Unified error type** ([`PerfSpanError`]) for commands that just want to
//!   propagate with `?`
//!
//! A missing token in a command's argument string is never an error. It is the
//! default state: standard tracer, no system metrics.
//!
//! # Examples
//!
//! ```rust
//! use perfspan::{deserialize_options_from_json, PerfSpanError};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct TypingOptions {
//!     text: String,
//!     delay_ms: u64,
//! }
//!
//! fn parse(json: &str) -> Result<TypingOptions, PerfSpanError> {
//!     // OptionsError converts into PerfSpanError
//!     Ok(deserialize_options_from_json(json)?)
//! }
//!
//! assert!(parse(r#"{"text": "abc", "delay_ms": 5}"#).is_ok());
//! assert!(matches!(parse("{}"), Err(PerfSpanError::Options(_))));
//! ```

mod options;
mod tracer;

pub use options::OptionsError;
pub use tracer::TracerError;

/// Unified error type for all perfspan operations.
///
/// All module-specific error types convert to `PerfSpanError` via `From`, so
/// `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum PerfSpanError {
    /// Error from command option parsing.
    #[error("Options error: {0}")]
    Options(#[from] OptionsError),

    /// Error from tracer installation or lookup.
    #[error("Tracer error: {0}")]
    Tracer(#[from] TracerError),
}
