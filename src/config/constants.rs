//! Fixed literals shared by the command tracer
//!
//! This module centralizes the command prefix, the reserved argument tokens and
//! the attribute keys attached to spans, so detection logic and tests agree on
//! the exact strings.

/// Character that introduces a command in a script line (`%openFile ...`)
pub const COMMAND_PREFIX: &str = "%";

/// Reserved argument tokens
///
/// Both tokens are matched case-sensitively by plain substring containment
/// anywhere in the argument string. A token embedded in an unrelated value
/// (`path=/tmp/WARMUP_DIR`) still counts.
pub mod tokens {
    /// Marks the run as a warm-up; spans go to the warm-up tracer
    pub const WARMUP: &str = "WARMUP";

    /// Requests system attributes on every span started by the command
    pub const ENABLE_SYSTEM_METRICS: &str = "ENABLE_SYSTEM_METRICS";
}

/// Default instrumentation scope names for the two tracers
pub mod scopes {
    /// Scope of the tracer used for measured runs
    pub const STANDARD: &str = "performance-plugin";

    /// Scope of the tracer used for warm-up runs
    pub const WARMUP: &str = "performance-plugin-warmup";
}

/// Default `service.name` resource attribute
pub const DEFAULT_SERVICE_NAME: &str = "perfspan";

/// Span attribute keys used for system metrics
///
/// Keys follow OpenTelemetry semantic conventions where one exists.
pub mod attributes {
    pub const HOST_NAME: &str = "host.name";
    pub const HOST_ARCH: &str = "host.arch";
    pub const HOST_CPU_COUNT: &str = "host.cpu.count";
    pub const OS_TYPE: &str = "os.type";
    pub const OS_DESCRIPTION: &str = "os.description";
    pub const MEMORY_TOTAL: &str = "system.memory.total";
    pub const MEMORY_USED: &str = "system.memory.used";
    pub const PROCESS_PID: &str = "process.pid";

    /// Every key [`crate::attach_system_attributes`] may emit
    pub const ALL: [&str; 8] = [
        HOST_NAME,
        HOST_ARCH,
        HOST_CPU_COUNT,
        OS_TYPE,
        OS_DESCRIPTION,
        MEMORY_TOTAL,
        MEMORY_USED,
        PROCESS_PID,
    ];
}
