//! Error types for tracer installation and lookup.

/// Errors from the process-wide tracer set.
///
/// A missing tracer set is fatal to the command being executed. Callers should
/// fail the command instead of retrying or measuring without spans.
///
/// # Examples
///
/// ```rust
/// use perfspan::TracerError;
///
/// let error = TracerError::unavailable("no tracer set installed");
/// assert_eq!(error.to_string(), "Tracing unavailable: no tracer set installed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TracerError {
    /// No tracer can produce spans for the command.
    #[error("Tracing unavailable: {reason}")]
    TracingUnavailable {
        /// Why no tracer is available
        reason: String,
    },

    /// The process-wide tracer set was already installed.
    ///
    /// Tracers are initialized once at process start and never replaced.
    #[error("Tracers already installed; they cannot be reinitialized")]
    AlreadyInstalled,
}

impl TracerError {
    /// Create a `TracingUnavailable` error with a reason.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        TracerError::TracingUnavailable {
            reason: reason.into(),
        }
    }
}
