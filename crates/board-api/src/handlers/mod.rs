//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod auth;
pub mod categories;
pub mod comments;
pub mod engagement;
pub mod health;
pub mod messages;
pub mod notifications;
pub mod tags;
pub mod users;
