use serde::{Deserialize, Serialize};

/// A user record as served by the directory API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable numeric ID of the record.
    pub id: i32,
    /// Email address, also the display identity on the home screen.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// URL of the avatar image; the wire field is named `avatar`.
    #[serde(rename = "avatar")]
    pub avatar_url: String,
}

impl User {
    /// Display name, given name first.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Response envelope for `GET /api/users/{id}`.
#[derive(Debug, Deserialize)]
pub struct SingleUserResponse {
    /// The requested record.
    pub data: User,
}

/// Response envelope for `GET /api/users?page={page}`.
#[derive(Debug, Deserialize)]
pub struct UserListResponse {
    /// One page of records, in server order.
    pub data: Vec<User>,
}
