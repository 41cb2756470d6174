// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! System metric attributes for command spans
//!
//! When a command runs with `ENABLE_SYSTEM_METRICS`, every span it starts
//! carries a snapshot of the machine it ran on, so timings can be correlated
//! with hardware and OS context.
//!
//! [`attach_system_attributes`] is a plain function over a span builder; the
//! command tracer composes it only when metrics are enabled.

use opentelemetry::trace::SpanBuilder;
use opentelemetry::KeyValue;
use sysinfo::{MemoryRefreshKind, RefreshKind, System};
use tracing::debug;

use crate::config::constants::attributes;
use crate::telemetry::spans;

/// Host and system facts at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInfo {
    /// Host name, if the OS reports one
    pub host_name: Option<String>,
    /// OS family (`linux`, `macos`, `windows`, ...)
    pub os_type: String,
    /// Long OS version string, if available
    pub os_description: Option<String>,
    /// CPU architecture (`x86_64`, `aarch64`, ...)
    pub arch: String,
    /// Logical CPUs available to this process
    pub cpu_count: usize,
    /// Installed RAM in bytes
    pub total_memory_bytes: u64,
    /// RAM in use in bytes
    pub used_memory_bytes: u64,
    pub process_id: u32,
}

impl SystemInfo {
    /// Snapshot the current host
    ///
    /// Facts that cannot be read are left empty; collection never fails.
    pub fn collect() -> Self {
        let span = spans::collect_system_info();
        let _guard = span.enter();

        let host_name = match hostname::get() {
            Ok(name) => Some(name.to_string_lossy().into_owned()),
            Err(e) => {
                debug!(error = %e, "Host name unavailable");
                None
            }
        };

        let cpu_count =
            std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);

        let sys = System::new_with_specifics(
            RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram()),
        );

        Self {
            host_name,
            os_type: std::env::consts::OS.to_string(),
            os_description: System::long_os_version(),
            arch: std::env::consts::ARCH.to_string(),
            cpu_count,
            total_memory_bytes: sys.total_memory(),
            used_memory_bytes: sys.used_memory(),
            process_id: std::process::id(),
        }
    }

    /// Span attributes for this snapshot, in a fixed order
    ///
    /// Unknown optional facts produce no attribute at all.
    pub fn to_attributes(&self) -> Vec<KeyValue> {
        let mut attrs = Vec::with_capacity(attributes::ALL.len());
        if let Some(host_name) = &self.host_name {
            attrs.push(KeyValue::new(attributes::HOST_NAME, host_name.clone()));
        }
        attrs.push(KeyValue::new(attributes::OS_TYPE, self.os_type.clone()));
        if let Some(description) = &self.os_description {
            attrs.push(KeyValue::new(attributes::OS_DESCRIPTION, description.clone()));
        }
        attrs.push(KeyValue::new(attributes::HOST_ARCH, self.arch.clone()));
        attrs.push(KeyValue::new(
            attributes::HOST_CPU_COUNT,
            saturating_i64(self.cpu_count as u64),
        ));
        attrs.push(KeyValue::new(
            attributes::MEMORY_TOTAL,
            saturating_i64(self.total_memory_bytes),
        ));
        attrs.push(KeyValue::new(
            attributes::MEMORY_USED,
            saturating_i64(self.used_memory_bytes),
        ));
        attrs.push(KeyValue::new(
            attributes::PROCESS_PID,
            i64::from(self.process_id),
        ));
        attrs
    }
}

/// Put system attributes on a span builder ahead of its own attributes
///
/// Purely additive: the name, parent context and every attribute already on
/// the builder are kept.
///
/// ```rust
/// use opentelemetry::trace::SpanBuilder;
/// use opentelemetry::KeyValue;
/// use perfspan::{attach_system_attributes, SystemInfo};
///
/// let builder = SpanBuilder::from_name("phase1")
///     .with_attributes(vec![KeyValue::new("file", "Main.kt")]);
/// let builder = attach_system_attributes(builder, &SystemInfo::collect());
///
/// let attributes = builder.attributes.unwrap();
/// assert_eq!(attributes.last().unwrap().key.as_str(), "file");
/// assert_eq!(builder.name, "phase1");
/// ```
pub fn attach_system_attributes(mut builder: SpanBuilder, info: &SystemInfo) -> SpanBuilder {
    let mut attrs = info.to_attributes();
    if let Some(existing) = builder.attributes.take() {
        attrs.extend(existing);
    }
    builder.attributes = Some(attrs);
    builder
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
