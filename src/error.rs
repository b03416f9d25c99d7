//! Error types for onboarding checks.
//!
//! This module defines [`OnboardError`], the error type used throughout the
//! checker, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - [`OnboardError::UnsupportedScheme`] is the one error the check runner
//!   absorbs; it turns the check into a skip
//! - Every other variant aborts the run unless `--keep-going` is set
//! - The top-level run wraps these in `anyhow::Error` to add context

use thiserror::Error;

/// Core error type for onboarding checks.
#[derive(Debug, Error)]
pub enum OnboardError {
    /// A URL could not be fetched because its scheme is missing or not HTTP(S).
    #[error("Unsupported URL scheme: '{url}'")]
    UnsupportedScheme { url: String },

    /// The executable for a command could not be found or spawned.
    #[error("Command not found: {command}")]
    CommandNotFound { command: String },

    /// A command that must succeed exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A version string could not be parsed into integer components.
    #[error("Cannot parse version from '{input}'")]
    VersionParse { input: String },

    /// Command output did not have the expected shape.
    #[error("Unexpected output from `{command}`: {output}")]
    UnexpectedOutput { command: String, output: String },

    /// An answer was required but none could be read.
    #[error("No answer available for '{key}' (type one on stdin or set ONBOARD_PROMPT_{})", .key.to_uppercase())]
    MissingInput { key: String },

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON we expected.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OnboardError {
    /// Whether the check runner treats this error as a skip rather than a failure.
    pub fn is_skip(&self) -> bool {
        matches!(self, OnboardError::UnsupportedScheme { .. })
    }
}

/// Result type alias for onboarding operations.
pub type Result<T> = std::result::Result<T, OnboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_scheme_displays_url() {
        let err = OnboardError::UnsupportedScheme {
            url: "avatars/123".into(),
        };
        assert!(err.to_string().contains("avatars/123"));
    }

    #[test]
    fn only_unsupported_scheme_is_skip() {
        assert!(OnboardError::UnsupportedScheme { url: String::new() }.is_skip());
        assert!(!OnboardError::CommandNotFound {
            command: "asdf".into()
        }
        .is_skip());
        assert!(!OnboardError::VersionParse {
            input: "abc".into()
        }
        .is_skip());
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = OnboardError::CommandFailed {
            command: "gem list".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("gem list"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn missing_input_names_env_var() {
        let err = OnboardError::MissingInput {
            key: "email_match".into(),
        };
        assert!(err.to_string().contains("ONBOARD_PROMPT_EMAIL_MATCH"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: OnboardError = io_err.into();
        assert!(matches!(err, OnboardError::Io(_)));
    }
}
