//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// IO error while writing a document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A category filter matched nothing.
    #[error("unknown category '{name}'")]
    UnknownCategory {
        /// Name as given by the caller.
        name: String,
    },
}

impl CodegenError {
    /// Creates an unknown category error for the given name.
    pub fn unknown_category(name: impl Into<String>) -> Self {
        Self::UnknownCategory { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_display() {
        let err = CodegenError::unknown_category("Nope");
        assert_eq!(err.to_string(), "unknown category 'Nope'");
    }

    #[test]
    fn test_io_from() {
        let err: CodegenError = std::io::Error::other("closed").into();
        assert!(matches!(err, CodegenError::Io(_)));
        assert!(err.to_string().starts_with("IO error"));
    }
}
