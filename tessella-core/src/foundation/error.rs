use std::path::PathBuf;

/// Convenience result type used across Tessella.
pub type StitchResult<T> = Result<T, StitchError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum StitchError {
    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The candidate set was empty after filtering or per-file recovery.
    #[error("no input: {0}")]
    NoInput(String),

    /// A single source file could not be decoded.
    #[error("decode error for '{}': {reason}", .path.display())]
    Decode {
        /// Offending source file.
        path: PathBuf,
        /// Decoder failure description.
        reason: String,
    },

    /// A single source file could not be re-encoded as a PNG intermediate.
    #[error("conversion error for '{}': {reason}", .path.display())]
    Conversion {
        /// Offending source file.
        path: PathBuf,
        /// Converter failure description.
        reason: String,
    },

    /// Errors while allocating, painting, or persisting the output canvas.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StitchError {
    /// Build a [`StitchError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StitchError::NoInput`] value.
    pub fn no_input(msg: impl Into<String>) -> Self {
        Self::NoInput(msg.into())
    }

    /// Build a [`StitchError::Decode`] value.
    pub fn decode(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`StitchError::Conversion`] value.
    pub fn conversion(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Conversion {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`StitchError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
