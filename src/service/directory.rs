//! User directory service.
//!
//! Fetches the featured single user and pages of the user list, unwrapping
//! the `data` envelope the API serves. Decoding is all-or-nothing: one bad
//! record fails the whole response.

use crate::{api::ApiClient, error::directory::DirectoryError, model::user::User};

/// Service reading user records from the directory API.
pub struct DirectoryService<'a> {
    api: &'a ApiClient,
}

impl<'a> DirectoryService<'a> {
    /// Creates a new instance of [`DirectoryService`]
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Fetches a single user record by ID.
    pub async fn fetch_single_user(&self, user_id: i32) -> Result<User, DirectoryError> {
        let response = self.api.get_user(user_id).await?;

        Ok(response.data)
    }

    /// Fetches one page of users, preserving server order.
    pub async fn fetch_users_page(&self, page: u32) -> Result<Vec<User>, DirectoryError> {
        let response = self.api.list_users(page).await?;

        Ok(response.data)
    }
}
