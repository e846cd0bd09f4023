//! Parish Common Library
//!
//! Wire types exchanged with the parish REST API. The console only reads and
//! writes the user fields that drive permission gating.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
