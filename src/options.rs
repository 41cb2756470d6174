//! JSON-encoded command options
//!
//! Commands that take structured arguments receive them as a JSON string and
//! decode it into their own option type. No schema is enforced beyond what the
//! target type declares: unknown fields are ignored, missing required fields
//! fail.

use serde::de::DeserializeOwned;

use crate::errors::OptionsError;

/// Deserialize a JSON options payload into the shape `S`.
///
/// # Errors
///
/// Returns [`OptionsError::MalformedOptions`] when `json` is not valid JSON or
/// does not satisfy `S`. The error is never replaced with a default value.
///
/// # Example
///
/// ```rust
/// use perfspan::deserialize_options_from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize)]
/// struct ScrollOptions {
///     lines: u32,
///     #[serde(default)]
///     smooth: bool,
/// }
///
/// let options: ScrollOptions =
///     deserialize_options_from_json(r#"{"lines": 40, "unrelated": [1, 2]}"#).unwrap();
/// assert_eq!(options.lines, 40);
/// assert!(!options.smooth);
/// ```
pub fn deserialize_options_from_json<S>(json: &str) -> Result<S, OptionsError>
where
    S: DeserializeOwned,
{
    serde_json::from_str(json).map_err(OptionsError::malformed::<S>)
}
