//! Permission system types and utilities.
//!
//! Effective permissions are derived from three inputs:
//! - Role defaults: the static catalog's base set for the user's role
//! - Extra grants: per-user additions on top of the role
//! - Denials: per-user revocations, which always win
//!
//! `SUPER_ADMIN` short-circuits all of the above and holds everything.

pub mod catalog;
pub mod editor;
pub mod overrides;
pub mod resolver;
pub mod role;

pub use catalog::{
    permission_set, Permission, PermissionCatalog, PermissionDef, PermissionGroup, PermissionSet,
    RoleDefaults,
};
pub use editor::{PermissionDraft, PermissionRow, PermissionSummary};
pub use overrides::{set_permission_override, OverrideMode, PermissionOverrides};
pub use resolver::{
    resolve_effective_permissions, resolve_effective_permissions_str, resolve_role_permissions,
    resolve_role_permissions_str, PermissionError, PermissionResolver, UnknownRolePolicy,
};
pub use role::Role;
