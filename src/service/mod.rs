//! Business rules sitting between the API client and the stores.
//!
//! Services interpret API responses into state-ready values: the auth
//! service turns a login payload into a session token or a user-facing
//! error, the directory service unwraps the user record envelopes.

pub mod auth;
pub mod directory;
