//! Error types for the anteroom client.
//!
//! Specialized error types for each domain (authentication, configuration,
//! user directory) aggregated into a single [`Error`] enum, with
//! `thiserror` providing the `Display` and `Error` implementations.
//! Authentication errors double as the user-facing notice text; directory
//! errors are logged by the application controller and never surfaced.

pub mod auth;
pub mod config;
pub mod directory;

use thiserror::Error;

use crate::error::{auth::AuthError, config::ConfigError, directory::DirectoryError};

/// Aggregate error type for the anteroom client.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error from reading the process environment.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error from a login attempt.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// User directory error from a fetch.
    #[error(transparent)]
    DirectoryError(#[from] DirectoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    mod display {
        use super::*;

        /// Expect the aggregate error to pass domain text through unchanged
        #[test]
        fn passes_through_inner_text() {
            let error = Error::from(AuthError::MissingInput);
            assert_eq!(
                error.to_string(),
                "Please enter both username and password."
            );

            let error = Error::from(ConfigError::MissingEnvVar("API_BASE_URL".to_string()));
            assert_eq!(
                error.to_string(),
                "Missing required environment variable: API_BASE_URL"
            );

            let error = Error::from(DirectoryError::Transport("connection refused".to_string()));
            assert_eq!(error.to_string(), "Request failed: connection refused");
        }
    }
}
