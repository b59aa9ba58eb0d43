//! Core domain types
//!
//! Plain data shared by the store, the HTTP layer and callers embedding the
//! library.

pub mod models;
