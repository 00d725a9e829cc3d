//! Portfolio Admin Core Library
//!
//! Provides the UI-independent logic of the portfolio administration console:
//! - Resource services for URL groups, URLs and public projects
//! - The global notification slot fed by every failed API call
//! - List and form page controllers (load state, join/filter, validation)
//!
//! Controllers never perform I/O on their own: a front end starts a request
//! with a `begin_*` call, runs it however it likes, and hands the result back
//! with the matching `finish_*` call.

pub mod controllers;
pub mod error;
pub mod notification;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use notification::{Notification, NotificationCenter, NotificationKind};
pub use services::ServiceContext;
