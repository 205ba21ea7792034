//! Wire data models shared between the API client and the view state.

pub mod auth;
pub mod user;
