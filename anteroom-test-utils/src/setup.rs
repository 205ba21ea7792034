use mockito::{Server, ServerGuard};

/// Shared test environment providing one mock API server per test.
pub struct TestSetup {
    /// Mock HTTP server standing in for the remote API.
    pub server: ServerGuard,
}

impl TestSetup {
    /// Starts a fresh mock server for a single test.
    pub async fn new() -> Self {
        let server = Server::new_async().await;

        TestSetup { server }
    }

    /// Base URL clients under test should route their requests to.
    pub fn url(&self) -> String {
        self.server.url()
    }
}
