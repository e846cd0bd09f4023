//! Parish Console
//!
//! Permission core of the parish administration dashboard: resolves what a
//! user may see and do in the editor, and models the grant/revoke toggles
//! an administrator applies before saving a user back to the API.

pub mod config;
pub mod labels;
pub mod permissions;
pub mod report;
