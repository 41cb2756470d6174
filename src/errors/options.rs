//! Error types for command option parsing.

/// Errors that can occur while deserializing command options.
///
/// # Examples
///
/// ```rust
/// use perfspan::{deserialize_options_from_json, OptionsError};
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize)]
/// struct Options {
///     x: i64,
/// }
///
/// let err = deserialize_options_from_json::<Options>(r#"{"x": "oops"}"#).unwrap_err();
/// assert!(matches!(err, OptionsError::MalformedOptions { .. }));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    /// The payload is not valid JSON or does not fit the target shape.
    ///
    /// Missing required fields and type mismatches land here. Unknown fields
    /// never do.
    #[error("Malformed options for {shape}: {source}")]
    MalformedOptions {
        /// Type name of the shape that was requested
        shape: &'static str,
        /// The underlying JSON error, with line and column
        #[source]
        source: serde_json::Error,
    },
}

impl OptionsError {
    /// Create a `MalformedOptions` error for the shape `S`.
    pub fn malformed<S>(source: serde_json::Error) -> Self {
        OptionsError::MalformedOptions {
            shape: std::any::type_name::<S>(),
            source,
        }
    }

    /// Type name of the shape that failed to deserialize.
    pub fn shape(&self) -> &'static str {
        match self {
            OptionsError::MalformedOptions { shape, .. } => shape,
        }
    }
}
