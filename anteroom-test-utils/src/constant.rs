//! Shared constants for login and user directory fixtures.

/// Username accepted by the canonical login fixtures.
pub static TEST_LOGIN_USERNAME: &str = "eve.holt@reqres.in";

/// Password accepted by the canonical login fixtures.
pub static TEST_LOGIN_PASSWORD: &str = "cityslicka";

/// Token value embedded in successful login fixture bodies.
pub static TEST_LOGIN_TOKEN: &str = "QpwL5tke4Pnpja7X4";
