//! HTTP client for the remote API.
//!
//! One [`ApiClient`] is built per process from the configuration and shared
//! by every operation. Endpoint groups live in their own files (`auth`,
//! `users`); this module only owns the transport and base URL handling.

pub mod auth;
pub mod users;

use crate::config::Config;

/// HTTP client bound to a single API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client routing every request to `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a client from the environment-driven configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod new {
        use super::*;

        /// Expect trailing slashes to be dropped from the base URL
        #[test]
        fn trims_trailing_slash() {
            let api = ApiClient::new("http://127.0.0.1:8080/");

            assert_eq!(api.url("/api/login"), "http://127.0.0.1:8080/api/login");
        }
    }
}
