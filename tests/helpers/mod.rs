// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for perfspan integration tests
//!
//! Provides an in-memory tracer set whose finished spans can be inspected,
//! plus a sample command built on [`PerformanceCommand`].

use std::io;
use std::sync::{Arc, Mutex};

use opentelemetry_sdk::trace::{InMemorySpanExporter, SdkTracer, SdkTracerProvider, SpanData};
use perfspan::{
    CommandInvocation, CommandTracer, PerfSpanConfig, PerformanceCommand, PerformanceTracers,
};
use serde::Deserialize;
use tracing_subscriber::fmt::MakeWriter;

/// Tracer set backed by an in-memory exporter
///
/// Spans are exported synchronously when they end, so
/// [`finished_spans`](Self::finished_spans) sees them immediately.
///
/// # Example
///
/// ```rust,ignore
/// let tracing = InMemoryTracing::new();
/// let command = tracing.command("mycommand", "%mycommand WARMUP");
/// drop(command.start_span("phase1"));
/// assert_eq!(tracing.finished_spans()[0].name, "phase1");
/// ```
#[allow(dead_code)]
pub struct InMemoryTracing {
    pub provider: SdkTracerProvider,
    pub exporter: InMemorySpanExporter,
    pub tracers: Arc<PerformanceTracers<SdkTracer>>,
}

#[allow(dead_code)]
impl InMemoryTracing {
    pub fn new() -> Self {
        Self::with_config(&PerfSpanConfig::default())
    }

    pub fn with_config(config: &PerfSpanConfig) -> Self {
        let exporter = InMemorySpanExporter::default();
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(exporter.clone())
            .build();
        let tracers = Arc::new(PerformanceTracers::from_provider(&provider, config));

        Self {
            provider,
            exporter,
            tracers,
        }
    }

    /// Bind a command named `name` to an invocation on line 1
    pub fn command(&self, name: &str, text: &str) -> CommandTracer<SdkTracer> {
        CommandTracer::new(
            name,
            CommandInvocation::new(text, 1),
            Arc::clone(&self.tracers),
        )
    }

    pub fn finished_spans(&self) -> Vec<SpanData> {
        self.exporter
            .get_finished_spans()
            .expect("in-memory exporter should be readable")
    }

    pub fn single_span(&self) -> SpanData {
        let mut spans = self.finished_spans();
        assert_eq!(spans.len(), 1, "expected exactly one finished span");
        spans.remove(0)
    }
}

/// Attribute keys of a finished span, in recorded order
#[allow(dead_code)]
pub fn attribute_keys(span: &SpanData) -> Vec<String> {
    span.attributes
        .iter()
        .map(|kv| kv.key.as_str().to_string())
        .collect()
}

/// Options accepted by [`OpenFileCommand`]
#[allow(dead_code)]
#[derive(Debug, Deserialize, PartialEq)]
pub struct OpenFileOptions {
    pub file: String,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

/// Sample command that opens a file inside a measured span
#[allow(dead_code)]
pub struct OpenFileCommand {
    tracer: CommandTracer<SdkTracer>,
}

#[allow(dead_code)]
impl OpenFileCommand {
    pub fn new(invocation: CommandInvocation, tracers: Arc<PerformanceTracers<SdkTracer>>) -> Self {
        Self {
            tracer: Self::bind(invocation, tracers),
        }
    }
}

impl PerformanceCommand for OpenFileCommand {
    const NAME: &'static str = "openFile";
    type Tracer = SdkTracer;

    fn command_tracer(&self) -> &CommandTracer<SdkTracer> {
        &self.tracer
    }
}

/// Shared in-memory writer for capturing log output
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

#[allow(dead_code)]
impl CapturedLogs {
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .expect("log buffer poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
