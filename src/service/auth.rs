//! Authentication service.
//!
//! Validates login input, submits the request, and interprets the payload.
//! Success is detected by searching the raw body for the substring
//! `"token"`, a known weak point kept for parity with the deployed
//! behavior; a structured response schema with an explicit discriminant
//! would be the stricter replacement.

use crate::{
    api::ApiClient,
    error::auth::AuthError,
    model::auth::{LoginRequest, SessionToken},
};

/// Service handling login attempts against the auth endpoint.
pub struct AuthService<'a> {
    api: &'a ApiClient,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Authenticates the given credentials against the login endpoint.
    ///
    /// Empty input fails immediately with [`AuthError::MissingInput`]
    /// without touching the network. Otherwise a single request is issued
    /// and the response body decides the outcome: no body at all, a body
    /// with a token, or a body without one.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SessionToken, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingInput);
        }

        let request = LoginRequest {
            email: username.to_string(),
            password: password.to_string(),
        };

        let body = self.api.login(&request).await?;

        if body.is_empty() {
            return Err(AuthError::EmptyResponse);
        }

        if body.contains("token") {
            Ok(SessionToken::new(body))
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
