use thiserror::Error;

/// Errors surfaced at the simulation's input boundaries.
///
/// Nothing inside a tick returns these; they come from registration,
/// configuration loading, and user controls.
#[derive(Debug, Error)]
pub enum OrreryError {
    /// A body name that was never registered.
    #[error("no body named `{0}` is registered")]
    NotFound(String),

    /// A negative, zero, non-finite, or out-of-range numeric parameter.
    #[error("invalid value for {parameter}: {value}")]
    InvalidParameter { parameter: String, value: f64 },

    /// Two bodies registered under the same name.
    #[error("a body named `{0}` is already registered")]
    DuplicateBody(String),

    /// Malformed JSON configuration or catalog.
    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl OrreryError {
    pub(crate) fn invalid(parameter: impl Into<String>, value: f64) -> Self {
        OrreryError::InvalidParameter {
            parameter: parameter.into(),
            value,
        }
    }
}
