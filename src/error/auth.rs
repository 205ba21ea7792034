use thiserror::Error;

/// Errors surfaced by a login attempt.
///
/// The `Display` text of each variant is the exact notice shown to the
/// user; every attempt ends in exactly one of these or the success notice.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Username or password was empty; no request was sent.
    #[error("Please enter both username and password.")]
    MissingInput,
    /// The login request could not be completed.
    #[error("Request failed: {0}")]
    Transport(String),
    /// The login endpoint answered with no body at all.
    #[error("No data received.")]
    EmptyResponse,
    /// The response carried no token; the credentials were rejected.
    #[error("Invalid username or password.")]
    InvalidCredentials,
}
