use thiserror::Error;

/// Errors surfaced by the registry and the interpolation engine.
#[derive(Debug, Error)]
pub enum InterpolateError {
    /// `resolve` was called directly with a name nothing is registered under.
    /// Unreachable through `interpolate`, which only resolves names it
    /// enumerated itself.
    #[error("no resolver registered for tag `:{0}`")]
    NotFound(String),

    /// Unknown key encountered while merging caller options onto the
    /// defaults. Never produced by the engine core.
    #[error("invalid option key `{0}`")]
    InvalidOption(String),

    /// Uniform failure type for resolver authors. The engine never wraps
    /// resolver errors itself; whatever a resolver returns propagates as-is.
    #[error("resolver `:{tag}` failed: {message}")]
    Resolver { tag: String, message: String },
}

impl InterpolateError {
    /// Shorthand for resolvers reporting their own failures.
    pub fn resolver(tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Resolver {
            tag: tag.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InterpolateError>;
