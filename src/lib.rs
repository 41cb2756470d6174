//! Command-scoped OpenTelemetry spans for scripted performance tests.
//!
//! A performance script is a list of `%command args...` lines run by a host
//! playback engine. For each command, this crate:
//!
//! - routes spans to a warm-up tracer when the arguments contain `WARMUP`
//! - attaches host and system attributes when they contain
//!   `ENABLE_SYSTEM_METRICS`
//! - decodes JSON command options into caller-defined types
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use opentelemetry::trace::Span;
//! use perfspan::{
//!     tracer_provider_builder, CommandInvocation, CommandTracer, PerfSpanConfig,
//!     PerformanceTracers,
//! };
//!
//! let config = PerfSpanConfig::default();
//! let provider = tracer_provider_builder(&config).build();
//! let tracers = Arc::new(PerformanceTracers::from_provider(&provider, &config));
//!
//! let invocation = CommandInvocation::new("%typing hello ENABLE_SYSTEM_METRICS", 4);
//! let command = CommandTracer::new("typing", invocation, tracers);
//!
//! let mut span = command.start_span("typing");
//! // ... measured work ...
//! span.end();
//! # let _ = provider.shutdown();
//! ```

mod command;
pub mod config;
mod errors;
mod options;
mod system;
mod telemetry;
mod tracers;

pub use command::{command_prefix, CommandInvocation, CommandTracer, PerformanceCommand};
pub use config::{PerfSpanConfig, PerfSpanConfigBuilder};
pub use errors::{OptionsError, PerfSpanError, TracerError};
pub use options::deserialize_options_from_json;
pub use system::{attach_system_attributes, SystemInfo};
pub use tracers::{
    install_global_tracers, installed_tracers, tracer_provider_builder, PerformanceTracers,
    TracerMode,
};
