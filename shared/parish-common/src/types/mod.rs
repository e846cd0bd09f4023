//! Shared Types

pub mod user;

pub use user::{UserPermissionsUpdate, UserRecord};
