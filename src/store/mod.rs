//! Owned view state.
//!
//! Session state and home screen state are plain structs owned by the
//! application controller; nothing in here is global, shared, or
//! self-updating. All mutation happens on the controller's context.

pub mod home;
pub mod session;
