//! Client core for a login-gated user directory demo.
//!
//! Models a small mobile-style client against a ReqRes-compatible REST API:
//! a login screen backed by a remote authentication endpoint, and a home
//! screen showing one featured user plus the first page of a user
//! directory. Rendering is left to an embedding view layer; [`App`]
//! consumes [`Intent`]s and emits [`ViewEvent`]s, and everything else (the
//! HTTP transport, response interpretation, owned state) sits behind it.

#![warn(missing_docs)]

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod store;

pub use app::{App, Intent, ViewEvent};
pub use config::Config;
pub use error::Error;
