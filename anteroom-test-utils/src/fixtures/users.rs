//! User directory endpoint fixtures.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::TestSetup;

/// Canonical record for the featured single user.
pub fn janet_weaver() -> Value {
    json!({
        "id": 2,
        "email": "janet.weaver@reqres.in",
        "first_name": "Janet",
        "last_name": "Weaver",
        "avatar": "https://reqres.in/img/faces/2-image.jpg"
    })
}

/// A user record with every field derived from `id`.
pub fn mock_user(id: i32) -> Value {
    json!({
        "id": id,
        "email": format!("user.{id}@reqres.in"),
        "first_name": format!("First{id}"),
        "last_name": format!("Last{id}"),
        "avatar": format!("https://reqres.in/img/faces/{id}-image.jpg")
    })
}

impl TestSetup {
    /// Fixtures for the user directory endpoints.
    pub fn users(&mut self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

/// Fixture handle mounting user directory endpoint mocks.
pub struct UserFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> UserFixtures<'a> {
    /// Mounts the single-user endpoint serving the given record under the
    /// `data` envelope.
    pub fn with_single_user_endpoint(
        &mut self,
        user_id: i32,
        user: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/api/users/{}", user_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "data": user }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mounts the users-list endpoint serving the given records for a page,
    /// in the order given.
    pub fn with_users_page_endpoint(
        &mut self,
        page: u32,
        users: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/api/users")
            .match_query(Matcher::UrlEncoded("page".into(), page.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "data": users }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mounts a single-user endpoint answering with a body that does not
    /// match the expected envelope shape.
    pub fn with_malformed_single_user_endpoint(
        &mut self,
        user_id: i32,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/api/users/{}", user_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "unexpected": "shape" }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mounts a users-list endpoint answering with a body that does not
    /// match the expected envelope shape.
    pub fn with_malformed_users_page_endpoint(
        &mut self,
        page: u32,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/api/users")
            .match_query(Matcher::UrlEncoded("page".into(), page.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "unexpected": "shape" }).to_string())
            .expect(expected_requests)
            .create()
    }
}
