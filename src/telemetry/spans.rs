// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for perfspan's own diagnostics.
//!
//! Telemetry concerns stay out of the business logic: instead of
//! `#[instrument]` attributes, each instrumented operation has a matching
//! helper here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&self, param: Type) -> T {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::Span;

use crate::tracers::TracerMode;

/// Create span for binding a command invocation to a tracer.
///
/// Parent: host's command execution, if any
/// Children: none
#[inline]
pub(crate) fn bind_command(command: &str, line: usize) -> Span {
    tracing::debug_span!("perfspan.bind_command", command = command, line = line)
}

/// Create span for starting a command span on the bound tracer.
///
/// Parent: host's command execution, if any
/// Children: collect_system_info when system metrics are enabled
#[inline]
pub(crate) fn start_span(
    command: &str,
    span_name: &str,
    mode: TracerMode,
    system_metrics: bool,
) -> Span {
    tracing::trace_span!(
        "perfspan.start_span",
        command = command,
        span_name = span_name,
        mode = %mode,
        system_metrics = system_metrics,
    )
}

/// Create span for snapshotting host and system facts.
///
/// Parent: start_span
/// Children: none
#[inline]
pub(crate) fn collect_system_info() -> Span {
    tracing::trace_span!("perfspan.collect_system_info")
}

/// Create span for installing the process-wide tracer set.
///
/// Parent: None (runs once at process start)
/// Children: none
#[inline]
pub(crate) fn install_global_tracers(standard_scope: &str, warmup_scope: &str) -> Span {
    tracing::info_span!(
        "perfspan.install_global_tracers",
        standard_scope = standard_scope,
        warmup_scope = warmup_scope,
    )
}
