//! Error handling for gomod-tree
//!
//! Errors come in two layers:
//! - [`ModTreeError`] - strongly typed failures raised by the library
//! - [`ErrorContext`] - a wrapper adding a user-facing suggestion and details
//!
//! Only failures that prevent establishing the root module's identity are
//! surfaced as errors. Problems discovered while walking transitive
//! dependencies (a missing cache entry, an unreadable `go.mod`) are absorbed by
//! the walker and never reach this module.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gomod_tree::core::{ModTreeError, user_friendly_error};
//!
//! let err = anyhow::Error::from(ModTreeError::ManifestNotFound {
//!     path: "/work/project/go.mod".to_string(),
//! });
//! user_friendly_error(err).display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for gomod-tree operations.
///
/// # Error Categories
///
/// ## Project setup (fatal)
/// - [`ProjectRootUnresolved`] - the module path could not be turned into a directory
/// - [`ManifestNotFound`] - no `go.mod` in the project directory
/// - [`ManifestParseError`] - the `go.mod` is malformed
///
/// ## Configuration (fatal)
/// - [`InvalidDepth`] - the depth bound is neither `-1` nor a positive integer
/// - [`CacheRootUnavailable`] - no `GOPATH` and no home directory to default from
///
/// ## Conversions
/// - [`IoError`] - from [`std::io::Error`]
/// - [`JsonError`] - from [`serde_json::Error`]
///
/// [`ProjectRootUnresolved`]: ModTreeError::ProjectRootUnresolved
/// [`ManifestNotFound`]: ModTreeError::ManifestNotFound
/// [`ManifestParseError`]: ModTreeError::ManifestParseError
/// [`InvalidDepth`]: ModTreeError::InvalidDepth
/// [`CacheRootUnavailable`]: ModTreeError::CacheRootUnavailable
/// [`IoError`]: ModTreeError::IoError
/// [`JsonError`]: ModTreeError::JsonError
#[derive(Error, Debug)]
pub enum ModTreeError {
    /// Manifest file (go.mod) not found in the project directory
    ///
    /// The tool cannot proceed without knowing the root module's identity,
    /// so this is always fatal.
    #[error("go.mod is not present in {path}")]
    ManifestNotFound {
        /// Path where the manifest was expected
        path: String,
    },

    /// Manifest parsing error
    #[error("Invalid go.mod syntax in {file}: {reason}")]
    ManifestParseError {
        /// Path to the manifest file that failed to parse
        file: String,
        /// Specific reason for the parsing failure, including the line number
        reason: String,
    },

    /// The `--module-path` argument could not be resolved to a directory
    #[error("Cannot resolve project path '{path}': {reason}")]
    ProjectRootUnresolved {
        /// The path as supplied by the user
        path: String,
        /// Why resolution failed
        reason: String,
    },

    /// Depth bound outside the accepted range
    #[error("Invalid depth {value}: must be -1 (unlimited) or an integer greater than 0")]
    InvalidDepth {
        /// The rejected value
        value: i64,
    },

    /// Cache root could not be determined
    #[error("Unable to determine the module cache root: {reason}")]
    CacheRootUnavailable {
        /// Why the lookup failed
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error context wrapper that provides user-friendly error information.
///
/// Built by [`user_friendly_error`] or by hand with the builder methods.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: ModTreeError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: ModTreeError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colors.
    ///
    /// The error is shown in red, details in yellow and the suggestion in green.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`].
///
/// [`ModTreeError`] values anywhere in the error chain get tailored
/// suggestions. A bare [`std::io::Error`] is wrapped as [`ModTreeError::IoError`].
/// Anything else keeps its full context chain in the details.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let chain = format!("{error:#}");

    let error = match error.downcast::<ModTreeError>() {
        Ok(err) => return create_error_context(err),
        Err(other) => other,
    };

    match error.downcast::<std::io::Error>() {
        Ok(io_error) => create_error_context(ModTreeError::IoError(io_error)),
        Err(other) => {
            ErrorContext::new(ModTreeError::IoError(std::io::Error::other(other.to_string())))
                .with_details(chain)
        }
    }
}

fn create_error_context(error: ModTreeError) -> ErrorContext {
    match &error {
        ModTreeError::ManifestNotFound { .. } => ErrorContext::new(error)
            .with_suggestion("Run the tool from the root of your Go project, or pass --module-path pointing at the directory that holds go.mod")
            .with_details("The root module's identity is read from go.mod; nothing can be resolved without it"),

        ModTreeError::ManifestParseError { file, .. } => {
            let suggestion = format!("Check the syntax in {file}. Try 'go mod tidy' to normalize the file");
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        ModTreeError::ProjectRootUnresolved { .. } => ErrorContext::new(error)
            .with_suggestion("Pass an absolute path, '.', or a '~'-relative path to --module-path"),

        ModTreeError::InvalidDepth { .. } => ErrorContext::new(error)
            .with_suggestion("Use --max-depth -1 to walk the full graph, or a positive integer to limit it"),

        ModTreeError::CacheRootUnavailable { .. } => ErrorContext::new(error)
            .with_suggestion("Set the GOPATH environment variable or pass --gopath"),

        ModTreeError::IoError(io_error) => {
            let suggestion = match io_error.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    "Check file ownership and permissions of the project directory"
                }
                std::io::ErrorKind::NotFound => {
                    "Check that the file or directory exists and the path is correct"
                }
                _ => "Re-run with --verbose for more information",
            };
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        ModTreeError::JsonError(_) => ErrorContext::new(error)
            .with_details("The dependency graph could not be serialized"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_error_display() {
        let error = ModTreeError::ManifestNotFound {
            path: "/tmp/project/go.mod".to_string(),
        };
        assert_eq!(error.to_string(), "go.mod is not present in /tmp/project/go.mod");

        let error = ModTreeError::InvalidDepth {
            value: 0,
        };
        assert!(error.to_string().contains("Invalid depth 0"));
    }

    #[test]
    fn test_error_context_display() {
        let ctx = ErrorContext::new(ModTreeError::InvalidDepth {
            value: -4,
        })
        .with_suggestion("Use -1")
        .with_details("depth must be positive");

        let display = format!("{ctx}");
        assert!(display.contains("Invalid depth -4"));
        assert!(display.contains("Details: depth must be positive"));
        assert!(display.contains("Suggestion: Use -1"));
    }

    #[test]
    fn test_user_friendly_error_typed() {
        let err = anyhow::Error::from(ModTreeError::ManifestNotFound {
            path: "x".to_string(),
        });
        let ctx = user_friendly_error(err);
        assert!(matches!(ctx.error, ModTreeError::ManifestNotFound { .. }));
        assert!(ctx.suggestion.is_some());
    }

    #[test]
    fn test_user_friendly_error_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let ctx = user_friendly_error(anyhow::Error::from(io_error));
        assert!(matches!(ctx.error, ModTreeError::IoError(_)));
        assert_eq!(
            ctx.suggestion.as_deref(),
            Some("Check file ownership and permissions of the project directory")
        );
    }

    #[test]
    fn test_user_friendly_error_keeps_context_chain() {
        let result: anyhow::Result<()> =
            Err(anyhow::anyhow!("inner failure")).context("while reading project");
        let ctx = user_friendly_error(result.unwrap_err());
        let details = ctx.details.unwrap();
        assert!(details.contains("while reading project"));
        assert!(details.contains("inner failure"));
    }
}
