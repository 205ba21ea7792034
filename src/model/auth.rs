use serde::{Deserialize, Serialize};

/// Request body for `POST /api/login`.
///
/// The login form captures a username; the wire contract calls the field
/// `email`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username, sent as `email`.
    pub email: String,
    /// Password, sent in the clear to the login endpoint.
    pub password: String,
}

/// Opaque proof of a successful authentication.
///
/// The login payload is only ever checked for the presence of a token, the
/// payload itself is kept as-is and never parsed further.
#[derive(Clone, Debug)]
pub struct SessionToken {
    raw: String,
}

impl SessionToken {
    pub(crate) fn new(raw: String) -> Self {
        Self { raw }
    }

    /// The raw login response payload the token was found in.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}
