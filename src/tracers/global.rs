// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Process-wide tracer set
//!
//! The set is created once, after the host has registered its OpenTelemetry
//! provider, and is never replaced for the rest of the process.

use std::sync::{Arc, OnceLock};

use opentelemetry::global::{self, BoxedTracer};
use opentelemetry::KeyValue;
use opentelemetry_sdk::trace::{SdkTracerProvider, TracerProviderBuilder};
use opentelemetry_sdk::Resource;
use tracing::info;

use super::PerformanceTracers;
use crate::config::PerfSpanConfig;
use crate::errors::TracerError;
use crate::telemetry::spans;

static INSTALLED: OnceLock<Arc<PerformanceTracers<BoxedTracer>>> = OnceLock::new();

/// Install the process-wide tracer set from the global OpenTelemetry provider
///
/// Call after `opentelemetry::global::set_tracer_provider`. Tracers created
/// from a provider registered later are unaffected by it.
///
/// # Errors
///
/// Returns [`TracerError::AlreadyInstalled`] on every call after the first.
pub fn install_global_tracers(
    config: &PerfSpanConfig,
) -> Result<Arc<PerformanceTracers<BoxedTracer>>, TracerError> {
    let span = spans::install_global_tracers(&config.standard_scope, &config.warmup_scope);
    let _guard = span.enter();

    if INSTALLED.get().is_some() {
        return Err(TracerError::AlreadyInstalled);
    }

    let tracers = Arc::new(PerformanceTracers::from_provider(
        &global::tracer_provider(),
        config,
    ));
    INSTALLED
        .set(Arc::clone(&tracers))
        .map_err(|_| TracerError::AlreadyInstalled)?;

    info!("Installed standard and warm-up tracers");
    Ok(tracers)
}

/// The process-wide tracer set
///
/// # Errors
///
/// Returns [`TracerError::TracingUnavailable`] when
/// [`install_global_tracers`] has not run yet.
pub fn installed_tracers() -> Result<Arc<PerformanceTracers<BoxedTracer>>, TracerError> {
    INSTALLED
        .get()
        .cloned()
        .ok_or_else(|| TracerError::unavailable("no tracer set has been installed"))
}

/// SDK provider builder carrying this crate's resource
///
/// The resource advertises `service.name` from the config and
/// `service.version`. The host adds its exporter, builds the provider and
/// registers it globally before calling [`install_global_tracers`].
///
/// ```rust
/// use perfspan::{tracer_provider_builder, PerfSpanConfig};
///
/// let provider = tracer_provider_builder(&PerfSpanConfig::default()).build();
/// # let _ = provider.shutdown();
/// ```
pub fn tracer_provider_builder(config: &PerfSpanConfig) -> TracerProviderBuilder {
    let resource = Resource::builder()
        .with_service_name(config.service_name.clone())
        .with_attribute(KeyValue::new(
            "service.version",
            env!("CARGO_PKG_VERSION"),
        ))
        .build();

    SdkTracerProvider::builder().with_resource(resource)
}
