use thiserror::Error;

/// Errors from the user directory fetches.
///
/// These never reach the user as a notice: the application controller logs
/// them and leaves the affected slot unchanged.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The request could not be completed.
    #[error("Request failed: {0}")]
    Transport(String),
    /// The response body did not match the expected envelope shape.
    #[error("Error decoding response: {0}")]
    Decode(#[from] serde_json::Error),
}
