//! Mock HTTP endpoint fixtures for the remote API.
//!
//! Each fixture mounts an endpoint on the [`TestSetup`](crate::TestSetup)
//! server and returns the [`mockito::Mock`] handle so tests can assert how
//! many requests actually reached it.

pub mod auth;
pub mod users;
