//! Database Models
//!
//! Document shapes for the store; the domain types live in `shared::models`.

pub mod role;

pub use role::RoleRow;
