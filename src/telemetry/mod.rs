//! Diagnostic logging for perfspan itself.
//!
//! These are `tracing` spans describing what the library does. They are
//! separate from the OpenTelemetry spans handed to commands.

pub(crate) mod spans;

// Note: All span functions are internal (pub(crate)) and not re-exported
