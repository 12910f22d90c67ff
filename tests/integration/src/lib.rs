//! Integration test utilities for the message board
//!
//! Boots the full API against a real PostgreSQL and drives it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
