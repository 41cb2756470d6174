//! Configuration for command tracing
//!
//! This module controls how the two tracers are named and which resource the
//! host's tracer provider advertises.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use perfspan::PerfSpanConfig;
//!
//! let config = PerfSpanConfig::default();
//! assert_eq!(config.standard_scope, "performance-plugin");
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use perfspan::PerfSpanConfigBuilder;
//!
//! let config = PerfSpanConfigBuilder::new()
//!     .service_name("ide-perf-suite")
//!     .warmup_scope("ide-perf-suite-warmup")
//!     .build();
//! ```
//!
//! # Example: Loading from JSON
//!
//! The config is `Deserialize` with a default for every field, so a host can
//! parse it with the same helper commands use for their options.
//!
//! ```rust
//! use perfspan::{deserialize_options_from_json, PerfSpanConfig};
//!
//! let config: PerfSpanConfig =
//!     deserialize_options_from_json(r#"{"service_name": "nightly"}"#).unwrap();
//! assert_eq!(config.service_name, "nightly");
//! assert_eq!(config.warmup_scope, "performance-plugin-warmup");
//! ```

use serde::{Deserialize, Serialize};

use crate::tracers::TracerMode;

pub mod constants;

/// Configuration for command tracing
///
/// Use [`PerfSpanConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerfSpanConfig {
    /// `service.name` resource attribute for the SDK provider
    /// Default: `perfspan`
    pub service_name: String,

    /// Instrumentation scope of the tracer used for measured runs
    /// Default: `performance-plugin`
    pub standard_scope: String,

    /// Instrumentation scope of the tracer used for warm-up runs
    /// Default: `performance-plugin-warmup`
    pub warmup_scope: String,

    /// Version recorded on both instrumentation scopes
    /// Default: this crate's version
    pub scope_version: Option<String>,
}

impl Default for PerfSpanConfig {
    fn default() -> Self {
        Self {
            service_name: constants::DEFAULT_SERVICE_NAME.to_string(),
            standard_scope: constants::scopes::STANDARD.to_string(),
            warmup_scope: constants::scopes::WARMUP.to_string(),
            scope_version: Some(env!("CARGO_PKG_VERSION").to_string()),
        }
    }
}

impl PerfSpanConfig {
    /// Instrumentation scope name for a tracer mode
    ///
    /// # Example
    ///
    /// ```rust
    /// use perfspan::{PerfSpanConfig, TracerMode};
    ///
    /// let config = PerfSpanConfig::default();
    /// assert_eq!(config.scope_name(TracerMode::Warmup), "performance-plugin-warmup");
    /// ```
    pub fn scope_name(&self, mode: TracerMode) -> &str {
        match mode {
            TracerMode::Standard => &self.standard_scope,
            TracerMode::Warmup => &self.warmup_scope,
        }
    }
}

/// Builder for [`PerfSpanConfig`]
///
/// # Example
///
/// ```rust
/// use perfspan::PerfSpanConfigBuilder;
///
/// let config = PerfSpanConfigBuilder::new()
///     .standard_scope("suite")
///     .scope_version(None)
///     .build();
/// assert!(config.scope_version.is_none());
/// ```
pub struct PerfSpanConfigBuilder {
    config: PerfSpanConfig,
}

impl Default for PerfSpanConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PerfSpanConfigBuilder {
    /// Create a new builder starting from [`PerfSpanConfig::default`]
    pub fn new() -> Self {
        Self {
            config: PerfSpanConfig::default(),
        }
    }

    /// Set the `service.name` resource attribute
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.config.service_name = name.into();
        self
    }

    /// Set the scope name of the standard tracer
    pub fn standard_scope(mut self, scope: impl Into<String>) -> Self {
        self.config.standard_scope = scope.into();
        self
    }

    /// Set the scope name of the warm-up tracer
    pub fn warmup_scope(mut self, scope: impl Into<String>) -> Self {
        self.config.warmup_scope = scope.into();
        self
    }

    /// Set (or clear) the version recorded on both scopes
    pub fn scope_version(mut self, version: Option<String>) -> Self {
        self.config.scope_version = version;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> PerfSpanConfig {
        self.config
    }
}
