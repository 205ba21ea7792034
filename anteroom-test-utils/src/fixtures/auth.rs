//! Login endpoint fixtures.

use mockito::Mock;
use serde_json::json;

use crate::{constant::TEST_LOGIN_TOKEN, TestSetup};

impl TestSetup {
    /// Fixtures for the login endpoint.
    pub fn auth(&mut self) -> AuthFixtures<'_> {
        AuthFixtures { setup: self }
    }
}

/// Fixture handle mounting login endpoint mocks.
pub struct AuthFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> AuthFixtures<'a> {
    /// Mounts a login endpoint answering with a token body.
    pub fn with_login_success(&mut self, expected_requests: usize) -> Mock {
        self.with_login_body(
            json!({ "token": TEST_LOGIN_TOKEN }).to_string(),
            expected_requests,
        )
    }

    /// Mounts a login endpoint rejecting the credentials.
    pub fn with_login_failure(&mut self, expected_requests: usize) -> Mock {
        self.with_login_body(
            json!({ "error": "user not found" }).to_string(),
            expected_requests,
        )
    }

    /// Mounts a login endpoint answering with an empty body.
    pub fn with_login_empty_response(&mut self, expected_requests: usize) -> Mock {
        self.with_login_body(String::new(), expected_requests)
    }

    /// Mounts a login endpoint answering 200 with the given body.
    ///
    /// Only requests carrying a JSON content type match; the client is
    /// expected to post the credentials as a JSON document.
    pub fn with_login_body(&mut self, body: String, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", "/api/login")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }
}
