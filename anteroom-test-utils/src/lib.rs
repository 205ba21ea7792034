//! Test utilities for the anteroom crate.
//!
//! Provides a mockito-backed [`TestSetup`] standing in for the remote API,
//! fixture helpers for the login and user directory endpoints, and the
//! constants the canonical fixtures are built from.
//!
//! This crate deliberately does not depend on `anteroom` itself; fixture
//! bodies are raw JSON so the wire contract is pinned independently of the
//! client's model types.

pub mod constant;
pub mod fixtures;
pub mod setup;

pub use setup::TestSetup;

pub mod prelude {
    //! Common imports for tests.

    pub use crate::{
        constant::{TEST_LOGIN_PASSWORD, TEST_LOGIN_TOKEN, TEST_LOGIN_USERNAME},
        fixtures::users::{janet_weaver, mock_user},
        TestSetup,
    };
}
