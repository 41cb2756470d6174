// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Command-scoped tracing
//!
//! A [`CommandTracer`] turns one command invocation into spans on the right
//! tracer:
//!
//! - `WARMUP` anywhere in the argument string binds the command to the warm-up
//!   tracer, once, at construction
//! - `ENABLE_SYSTEM_METRICS` puts host and system attributes on every span the
//!   command starts
//!
//! Commands expose the behaviour through the [`PerformanceCommand`] trait by
//! holding a `CommandTracer`.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use opentelemetry::trace::noop::NoopTracerProvider;
//! use opentelemetry::trace::Span;
//! use perfspan::{CommandInvocation, CommandTracer, PerfSpanConfig, PerformanceTracers};
//!
//! let tracers = Arc::new(PerformanceTracers::from_provider(
//!     &NoopTracerProvider::new(),
//!     &PerfSpanConfig::default(),
//! ));
//! let invocation = CommandInvocation::new("%openFile src/Main.kt WARMUP", 7);
//! let command = CommandTracer::new("openFile", invocation, tracers);
//!
//! assert!(command.is_warmup_mode());
//! assert!(!command.system_metrics_enabled());
//!
//! let mut span = command.start_span("open");
//! span.end();
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use opentelemetry::global::BoxedTracer;
use opentelemetry::trace::{Span, Status, Tracer};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::config::constants::tokens;
use crate::errors::{OptionsError, TracerError};
use crate::options;
use crate::system::{attach_system_attributes, SystemInfo};
use crate::telemetry::spans;
use crate::tracers::{installed_tracers, PerformanceTracers, TracerMode};

mod invocation;

pub use invocation::{command_prefix, CommandInvocation};

/// Tracing state for one command invocation
///
/// The tracer binding is decided in [`CommandTracer::new`] and never
/// re-evaluated. Nothing is mutated after construction, so a `CommandTracer`
/// can be shared across threads when `T` allows it.
pub struct CommandTracer<T = BoxedTracer> {
    name: String,
    prefix: String,
    invocation: CommandInvocation,
    mode: TracerMode,
    tracers: Arc<PerformanceTracers<T>>,
}

impl<T: Tracer> CommandTracer<T> {
    /// Bind a command invocation to the standard or warm-up tracer
    pub fn new(
        name: impl Into<String>,
        invocation: CommandInvocation,
        tracers: Arc<PerformanceTracers<T>>,
    ) -> Self {
        let name = name.into();
        let span = spans::bind_command(&name, invocation.line());
        let _guard = span.enter();

        let prefix = command_prefix(&name);
        let mode = TracerMode::from_argument(invocation.argument(&prefix));
        debug!(%mode, "Bound command to tracer");

        Self {
            name,
            prefix,
            invocation,
            mode,
            tracers,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `%` followed by the command name
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn invocation(&self) -> &CommandInvocation {
        &self.invocation
    }

    /// Argument string following the prefix, trimmed
    pub fn argument(&self) -> &str {
        self.invocation.argument(&self.prefix)
    }

    /// Whether the argument string contains `WARMUP`
    pub fn is_warmup_mode(&self) -> bool {
        self.argument().contains(tokens::WARMUP)
    }

    /// Whether the argument string contains `ENABLE_SYSTEM_METRICS`
    pub fn system_metrics_enabled(&self) -> bool {
        self.argument().contains(tokens::ENABLE_SYSTEM_METRICS)
    }

    /// Mode chosen at construction
    pub fn mode(&self) -> TracerMode {
        self.mode
    }

    /// Tracer chosen at construction
    pub fn tracer(&self) -> &T {
        self.tracers.get(self.mode)
    }

    /// Start a span named `name` on the bound tracer
    ///
    /// With system metrics enabled, a fresh [`SystemInfo`] snapshot is placed
    /// ahead of any other attribute. The caller owns the returned span and must
    /// end it on every exit path; SDK spans end when dropped.
    pub fn start_span(&self, name: impl Into<Cow<'static, str>>) -> T::Span {
        let name = name.into();
        let system_metrics = self.system_metrics_enabled();
        let span = spans::start_span(&self.name, &name, self.mode, system_metrics);
        let _guard = span.enter();

        if name.is_empty() {
            warn!("Starting span with an empty name");
        }

        let tracer = self.tracer();
        let mut builder = tracer.span_builder(name);
        if system_metrics {
            builder = attach_system_attributes(builder, &SystemInfo::collect());
        }

        trace!("Starting span");
        builder.start(tracer)
    }

    /// Run `f` inside a span that is ended on every exit path
    ///
    /// An `Err` from `f` marks the span status as error with the error's
    /// display text. The result is returned unchanged.
    pub fn in_span<F, R, E>(&self, name: impl Into<Cow<'static, str>>, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut T::Span) -> Result<R, E>,
        E: fmt::Display,
    {
        let mut span = self.start_span(name);
        let result = f(&mut span);
        if let Err(e) = &result {
            span.set_status(Status::error(e.to_string()));
        }
        span.end();
        result
    }

    /// Deserialize this command's JSON options into `S`
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::MalformedOptions`] when `json` does not fit `S`.
    pub fn deserialize_options_from_json<S>(&self, json: &str) -> Result<S, OptionsError>
    where
        S: DeserializeOwned,
    {
        options::deserialize_options_from_json(json)
    }
}

impl CommandTracer<BoxedTracer> {
    /// Bind a command invocation using the process-wide tracer set
    ///
    /// # Errors
    ///
    /// Returns [`TracerError::TracingUnavailable`] when no tracer set has been
    /// installed with [`crate::install_global_tracers`].
    pub fn from_installed(
        name: impl Into<String>,
        invocation: CommandInvocation,
    ) -> Result<Self, TracerError> {
        Ok(Self::new(name, invocation, installed_tracers()?))
    }
}

impl<T> Clone for CommandTracer<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            prefix: self.prefix.clone(),
            invocation: self.invocation.clone(),
            mode: self.mode,
            tracers: Arc::clone(&self.tracers),
        }
    }
}

impl<T> fmt::Debug for CommandTracer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandTracer")
            .field("name", &self.name)
            .field("invocation", &self.invocation)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

/// Capability interface for performance commands
///
/// A concrete command declares a stable [`NAME`](Self::NAME), keeps the
/// [`CommandTracer`] built by [`bind`](Self::bind), and gets the tracing
/// operations by delegation.
///
/// ```rust
/// use std::sync::Arc;
///
/// use opentelemetry::trace::noop::{NoopTracer, NoopTracerProvider};
/// use perfspan::{
///     CommandInvocation, CommandTracer, PerfSpanConfig, PerformanceCommand, PerformanceTracers,
/// };
///
/// struct SleepCommand {
///     tracer: CommandTracer<NoopTracer>,
/// }
///
/// impl PerformanceCommand for SleepCommand {
///     const NAME: &'static str = "sleep";
///     type Tracer = NoopTracer;
///
///     fn command_tracer(&self) -> &CommandTracer<NoopTracer> {
///         &self.tracer
///     }
/// }
///
/// let tracers = Arc::new(PerformanceTracers::from_provider(
///     &NoopTracerProvider::new(),
///     &PerfSpanConfig::default(),
/// ));
/// let command = SleepCommand {
///     tracer: SleepCommand::bind(CommandInvocation::new("%sleep 100 WARMUP", 1), tracers),
/// };
/// assert_eq!(command.prefix(), "%sleep");
/// assert!(command.is_warmup_mode());
/// ```
pub trait PerformanceCommand {
    /// Stable command name; the script prefix is `%` followed by it
    const NAME: &'static str;

    type Tracer: Tracer;

    fn command_tracer(&self) -> &CommandTracer<Self::Tracer>;

    /// Build the command tracer for an invocation of this command
    fn bind(
        invocation: CommandInvocation,
        tracers: Arc<PerformanceTracers<Self::Tracer>>,
    ) -> CommandTracer<Self::Tracer>
    where
        Self: Sized,
    {
        CommandTracer::new(Self::NAME, invocation, tracers)
    }

    fn name(&self) -> &str {
        self.command_tracer().name()
    }

    fn prefix(&self) -> &str {
        self.command_tracer().prefix()
    }

    fn is_warmup_mode(&self) -> bool {
        self.command_tracer().is_warmup_mode()
    }

    fn system_metrics_enabled(&self) -> bool {
        self.command_tracer().system_metrics_enabled()
    }

    fn start_span(
        &self,
        name: impl Into<Cow<'static, str>>,
    ) -> <Self::Tracer as Tracer>::Span {
        self.command_tracer().start_span(name)
    }

    fn deserialize_options_from_json<S>(&self, json: &str) -> Result<S, OptionsError>
    where
        S: DeserializeOwned,
    {
        self.command_tracer().deserialize_options_from_json(json)
    }
}
