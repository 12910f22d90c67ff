//! # board-api
//!
//! REST API server for the message board, built with Axum.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{build_state, create_app, create_app_state, run, run_server};
pub use state::AppState;
