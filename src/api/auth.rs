use crate::{api::ApiClient, error::auth::AuthError, model::auth::LoginRequest};

impl ApiClient {
    /// Submits the login request and returns the raw response body.
    ///
    /// Interpreting the body (token presence, emptiness) is left to the
    /// auth service; the transport only distinguishes delivered from
    /// failed. The HTTP status is deliberately ignored.
    pub async fn login(&self, request: &LoginRequest) -> Result<String, AuthError> {
        let response = self
            .http
            .post(self.url("/api/login"))
            .json(request)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))
    }
}
