//! Shared types
//!
//! Plain data models used by the store crate and any service or API layer
//! built on top of it. Nothing here knows about the database.

pub mod models;
