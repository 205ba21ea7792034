use crate::{
    api::ApiClient,
    error::directory::DirectoryError,
    model::user::{SingleUserResponse, UserListResponse},
};

impl ApiClient {
    /// Fetches a single user record by ID.
    pub async fn get_user(&self, user_id: i32) -> Result<SingleUserResponse, DirectoryError> {
        let body = self.get_text(&format!("/api/users/{user_id}")).await?;

        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches one page of the user list.
    pub async fn list_users(&self, page: u32) -> Result<UserListResponse, DirectoryError> {
        let body = self.get_text(&format!("/api/users?page={page}")).await?;

        Ok(serde_json::from_str(&body)?)
    }

    async fn get_text(&self, path: &str) -> Result<String, DirectoryError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))
    }
}
