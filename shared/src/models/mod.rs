//! Data models
//!
//! Shared between role-store and callers (service / API layers).
//! IDs are opaque strings assigned by the store.

pub mod role;

// Re-exports
pub use role::*;
