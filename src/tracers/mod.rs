// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The standard and warm-up tracers
//!
//! Every command binds to exactly one of two tracers: spans from measured runs
//! go to the standard tracer, spans from warm-up runs go to the warm-up tracer
//! so exporters and dashboards can keep them apart.
//!
//! The pair is an explicit dependency ([`PerformanceTracers`]) shared through
//! an `Arc`. Hosts that want a single process-wide set install one with
//! [`install_global_tracers`] at start-up.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use opentelemetry::trace::noop::NoopTracerProvider;
//! use perfspan::{PerfSpanConfig, PerformanceTracers, TracerMode};
//!
//! let provider = NoopTracerProvider::new();
//! let tracers = Arc::new(PerformanceTracers::from_provider(
//!     &provider,
//!     &PerfSpanConfig::default(),
//! ));
//! let _warmup = tracers.get(TracerMode::Warmup);
//! ```

use std::fmt;

use opentelemetry::trace::{Tracer, TracerProvider};
use opentelemetry::InstrumentationScope;

use crate::config::constants::tokens;
use crate::config::PerfSpanConfig;

mod global;

pub use global::{install_global_tracers, installed_tracers, tracer_provider_builder};

/// Which tracer a command is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TracerMode {
    /// Measured run
    Standard,
    /// Warm-up run, excluded from primary measurement
    Warmup,
}

impl TracerMode {
    /// Select the mode for a command argument string
    ///
    /// Any occurrence of `WARMUP` selects [`TracerMode::Warmup`].
    ///
    /// ```rust
    /// use perfspan::TracerMode;
    ///
    /// assert_eq!(TracerMode::from_argument("WARMUP 3"), TracerMode::Warmup);
    /// assert_eq!(TracerMode::from_argument("warmup"), TracerMode::Standard);
    /// ```
    pub fn from_argument(argument: &str) -> Self {
        if argument.contains(tokens::WARMUP) {
            TracerMode::Warmup
        } else {
            TracerMode::Standard
        }
    }

    pub fn is_warmup(self) -> bool {
        matches!(self, TracerMode::Warmup)
    }
}

impl fmt::Display for TracerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TracerMode::Standard => f.write_str("standard"),
            TracerMode::Warmup => f.write_str("warmup"),
        }
    }
}

/// The two tracer handles every command chooses from
///
/// Read-only after construction. Concurrent span creation is delegated to the
/// tracer implementation, so `PerformanceTracers<T>` is `Send + Sync` whenever
/// `T` is.
pub struct PerformanceTracers<T> {
    standard: T,
    warmup: T,
}

impl<T: Tracer> PerformanceTracers<T> {
    /// Create a tracer set from two existing tracers
    ///
    /// Tests use this to substitute in-memory or fake tracers.
    pub fn new(standard: T, warmup: T) -> Self {
        Self { standard, warmup }
    }

    /// Create both tracers from a tracer provider
    ///
    /// Each tracer gets its own instrumentation scope, named by
    /// [`PerfSpanConfig::scope_name`] and versioned by
    /// [`PerfSpanConfig::scope_version`].
    pub fn from_provider<P>(provider: &P, config: &PerfSpanConfig) -> Self
    where
        P: TracerProvider<Tracer = T>,
    {
        Self {
            standard: provider.tracer_with_scope(scope(config, TracerMode::Standard)),
            warmup: provider.tracer_with_scope(scope(config, TracerMode::Warmup)),
        }
    }

    /// Tracer for a mode
    pub fn get(&self, mode: TracerMode) -> &T {
        match mode {
            TracerMode::Standard => &self.standard,
            TracerMode::Warmup => &self.warmup,
        }
    }

    pub fn standard(&self) -> &T {
        &self.standard
    }

    pub fn warmup(&self) -> &T {
        &self.warmup
    }
}

impl<T> fmt::Debug for PerformanceTracers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PerformanceTracers")
            .field("tracer", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

fn scope(config: &PerfSpanConfig, mode: TracerMode) -> InstrumentationScope {
    let builder = InstrumentationScope::builder(config.scope_name(mode).to_string());
    match &config.scope_version {
        Some(version) => builder.with_version(version.clone()).build(),
        None => builder.build(),
    }
}
