//! HTTP server implementation
//!
//! This module provides the HTTP server and the JSON management API over the
//! access control store.

pub mod routes;

pub mod builder;
pub mod server;
pub mod state;


pub use builder::{ServerBuilder, run_server};
pub use server::HttpServer;
pub use state::AppState;
