//! Tests for command tracers against the OpenTelemetry SDK
//!
//! Spans are exported to an in-memory exporter so that names, scopes,
//! attributes and statuses can be checked after the spans end.

mod helpers;

use std::collections::HashSet;
use std::sync::Arc;

use helpers::{attribute_keys, InMemoryTracing, OpenFileCommand, OpenFileOptions};
use opentelemetry::trace::{Span, Status, TraceContextExt, Tracer};
use opentelemetry::{Context, KeyValue};
use perfspan::config::constants::{attributes, scopes};
use perfspan::{
    CommandInvocation, OptionsError, PerfSpanConfigBuilder, PerformanceCommand, TracerMode,
};

#[test]
fn test_warmup_with_system_metrics_scenario() {
    let tracing = InMemoryTracing::new();
    let command = tracing.command("mycommand", "%mycommand WARMUP ENABLE_SYSTEM_METRICS");

    assert!(command.is_warmup_mode());
    assert!(command.system_metrics_enabled());
    assert_eq!(command.mode(), TracerMode::Warmup);

    let mut span = command.start_span("phase1");
    span.end();

    let exported = tracing.single_span();
    assert_eq!(exported.name, "phase1");
    assert_eq!(exported.instrumentation_scope.name(), scopes::WARMUP);

    let keys = attribute_keys(&exported);
    for key in [
        attributes::OS_TYPE,
        attributes::HOST_ARCH,
        attributes::HOST_CPU_COUNT,
        attributes::MEMORY_TOTAL,
        attributes::MEMORY_USED,
        attributes::PROCESS_PID,
    ] {
        assert!(keys.iter().any(|k| k == key), "missing attribute {key}");
    }
    assert!(exported
        .attributes
        .contains(&KeyValue::new(attributes::HOST_ARCH, std::env::consts::ARCH)));
}

#[test]
fn test_plain_invocation_scenario() {
    let tracing = InMemoryTracing::new();
    let command = tracing.command("mycommand", "%mycommand");

    assert!(!command.is_warmup_mode());
    assert!(!command.system_metrics_enabled());

    drop(command.start_span("phase1"));

    let exported = tracing.single_span();
    assert_eq!(exported.name, "phase1");
    assert_eq!(exported.instrumentation_scope.name(), scopes::STANDARD);
    assert!(exported.attributes.is_empty());
}

#[test]
fn test_metrics_attributes_are_superset() {
    let tracing = InMemoryTracing::new();
    let plain = tracing.command("mycommand", "%mycommand");
    let enriched = tracing.command("mycommand", "%mycommand ENABLE_SYSTEM_METRICS");

    for command in [&plain, &enriched] {
        let mut span = command.start_span("indexing");
        span.set_attribute(KeyValue::new("files", 120_i64));
        span.end();
    }

    let spans = tracing.finished_spans();
    assert_eq!(spans.len(), 2);
    let plain_keys: HashSet<String> = attribute_keys(&spans[0]).into_iter().collect();
    let enriched_keys: HashSet<String> = attribute_keys(&spans[1]).into_iter().collect();

    assert!(plain_keys.is_subset(&enriched_keys));
    assert!(enriched_keys.len() > plain_keys.len());
    assert_eq!(spans[0].name, spans[1].name);
}

#[test]
fn test_system_attributes_precede_span_attributes() {
    let tracing = InMemoryTracing::new();
    let command = tracing.command("mycommand", "%mycommand ENABLE_SYSTEM_METRICS");

    let mut span = command.start_span("typing");
    span.set_attribute(KeyValue::new("chars", 10_i64));
    span.end();

    let keys = attribute_keys(&tracing.single_span());
    assert!(attributes::ALL.contains(&keys[0].as_str()));
    assert_eq!(keys.last().map(String::as_str), Some("chars"));
}

#[test]
fn test_system_metrics_keep_parent_context() {
    let tracing = InMemoryTracing::new();
    let command = tracing.command("mycommand", "%mycommand ENABLE_SYSTEM_METRICS");

    let parent = tracing.tracers.standard().start("script");
    let parent_id = parent.span_context().span_id();
    let cx = Context::current_with_span(parent);

    {
        let _attached = cx.clone().attach();
        drop(command.start_span("child"));
    }
    cx.span().end();

    let spans = tracing.finished_spans();
    let child = spans
        .iter()
        .find(|span| span.name == "child")
        .expect("child span exported");
    assert_eq!(child.parent_span_id, parent_id);
    assert_eq!(child.span_context.trace_id(), cx.span().span_context().trace_id());
    assert!(!child.attributes.is_empty());
}

#[test]
fn test_binding_fixed_for_every_span() {
    let tracing = InMemoryTracing::new();
    let command = tracing.command("mycommand", "%mycommand WARMUP");

    for name in ["first", "second", "third"] {
        assert!(command.is_warmup_mode());
        drop(command.start_span(name));
    }

    let spans = tracing.finished_spans();
    assert_eq!(spans.len(), 3);
    assert!(spans
        .iter()
        .all(|span| span.instrumentation_scope.name() == scopes::WARMUP));
    assert_eq!(command.mode(), TracerMode::Warmup);
}

#[test]
fn test_metrics_only_stays_on_standard_tracer() {
    let tracing = InMemoryTracing::new();
    let command = tracing.command("mycommand", "%mycommand ENABLE_SYSTEM_METRICS");

    drop(command.start_span("phase1"));

    let exported = tracing.single_span();
    assert_eq!(exported.instrumentation_scope.name(), scopes::STANDARD);
    assert!(!exported.attributes.is_empty());
}

#[test]
fn test_span_ends_on_drop() {
    let tracing = InMemoryTracing::new();
    let command = tracing.command("mycommand", "%mycommand");

    {
        let _span = command.start_span("scoped");
        assert!(tracing.finished_spans().is_empty());
    }

    assert_eq!(tracing.single_span().name, "scoped");
}

#[test]
fn test_in_span_marks_errors() {
    let tracing = InMemoryTracing::new();
    let command = tracing.command("mycommand", "%mycommand");

    let ok: Result<usize, String> = command.in_span("ok", |span| {
        span.set_attribute(KeyValue::new("step", "load"));
        Ok(3)
    });
    assert_eq!(ok, Ok(3));

    let err: anyhow::Result<()> = command.in_span("fails", |_| Err(anyhow::anyhow!("file not found")));
    assert!(err.is_err());

    let spans = tracing.finished_spans();
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].name, "ok");
    assert_eq!(spans[0].status, Status::Unset);
    assert_eq!(spans[1].name, "fails");
    assert_eq!(spans[1].status, Status::error("file not found"));
}

#[test]
fn test_custom_scope_names() {
    let config = PerfSpanConfigBuilder::new()
        .standard_scope("suite")
        .warmup_scope("suite-warmup")
        .scope_version(Some("2.0.0".to_string()))
        .build();
    let tracing = InMemoryTracing::with_config(&config);

    drop(tracing.command("a", "%a").start_span("one"));
    drop(tracing.command("b", "%b WARMUP").start_span("two"));

    let spans = tracing.finished_spans();
    assert_eq!(spans[0].instrumentation_scope.name(), "suite");
    assert_eq!(spans[1].instrumentation_scope.name(), "suite-warmup");
    assert_eq!(spans[1].instrumentation_scope.version(), Some("2.0.0"));
}

#[test]
fn test_concurrent_commands_share_tracers() {
    let tracing = InMemoryTracing::new();

    std::thread::scope(|scope| {
        for worker in 0..8 {
            let tracers = Arc::clone(&tracing.tracers);
            scope.spawn(move || {
                let text = if worker % 2 == 0 {
                    "%typing WARMUP"
                } else {
                    "%typing"
                };
                let command =
                    perfspan::CommandTracer::new("typing", CommandInvocation::new(text, worker), tracers);
                for _ in 0..10 {
                    drop(command.start_span(format!("worker-{worker}")));
                }
            });
        }
    });

    let spans = tracing.finished_spans();
    assert_eq!(spans.len(), 80);
    let warmup = spans
        .iter()
        .filter(|span| span.instrumentation_scope.name() == scopes::WARMUP)
        .count();
    assert_eq!(warmup, 40);
}

#[test]
fn test_performance_command_delegation() {
    let tracing = InMemoryTracing::new();
    let command = OpenFileCommand::new(
        CommandInvocation::new("%openFile ENABLE_SYSTEM_METRICS", 9),
        Arc::clone(&tracing.tracers),
    );

    assert_eq!(command.name(), "openFile");
    assert_eq!(command.prefix(), "%openFile");
    assert!(!command.is_warmup_mode());
    assert!(command.system_metrics_enabled());

    let options: OpenFileOptions = command
        .deserialize_options_from_json(r#"{"file": "src/Main.kt", "extra": 1}"#)
        .unwrap();
    assert_eq!(
        options,
        OpenFileOptions {
            file: "src/Main.kt".to_string(),
            timeout_ms: None,
        }
    );

    let mut span = command.start_span("openFile");
    span.set_attribute(KeyValue::new("file", options.file));
    span.end();

    let exported = tracing.single_span();
    assert_eq!(exported.name, "openFile");
    assert!(attribute_keys(&exported).iter().any(|k| k == "file"));
}

#[test]
fn test_malformed_command_options() {
    let tracing = InMemoryTracing::new();
    let command = OpenFileCommand::new(
        CommandInvocation::new("%openFile", 1),
        Arc::clone(&tracing.tracers),
    );

    let err = command
        .deserialize_options_from_json::<OpenFileOptions>(r#"{"file": 12}"#)
        .unwrap_err();
    assert!(matches!(err, OptionsError::MalformedOptions { .. }));
    assert!(err.shape().ends_with("OpenFileOptions"));
}
