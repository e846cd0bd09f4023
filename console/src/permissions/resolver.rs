//! Permission resolution logic.
//!
//! Computes the effective permission set used to gate editor affordances.
//! Client-side gating is a convenience only; the API enforces authorization
//! on its own.

use parish_common::UserRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::catalog::{permission_set, PermissionCatalog, PermissionSet};
use super::role::Role;

/// Base permissions for a role.
///
/// `SUPER_ADMIN` gets the complete enumeration. Any other role gets its
/// entry from the role table, or [`PermissionError::UnknownRole`] if the
/// table has none.
pub fn resolve_role_permissions(
    catalog: &PermissionCatalog,
    role: Role,
) -> Result<PermissionSet, PermissionError> {
    if role.is_super_admin() {
        return Ok(catalog.all_permissions());
    }

    catalog
        .role_defaults(role)
        .ok_or_else(|| PermissionError::UnknownRole(role.to_string()))
}

/// Effective permissions for a role with per-user overrides.
///
/// Resolution order:
/// 1. `SUPER_ADMIN` has everything; overrides are ignored
/// 2. Start with the role's base permissions
/// 3. Add extra grants that exist in the catalog
/// 4. Remove denied permissions (denial wins over base and extra)
pub fn resolve_effective_permissions(
    catalog: &PermissionCatalog,
    role: Role,
    extra: &PermissionSet,
    denied: &PermissionSet,
) -> Result<PermissionSet, PermissionError> {
    if role.is_super_admin() {
        return Ok(catalog.all_permissions());
    }

    let mut effective = resolve_role_permissions(catalog, role)?;
    effective.extend(
        extra
            .iter()
            .filter(|perm| catalog.contains(perm.as_str()))
            .cloned(),
    );
    effective.retain(|perm| !denied.contains(perm));

    debug!(
        %role,
        extra = extra.len(),
        denied = denied.len(),
        effective = effective.len(),
        "Resolved effective permissions"
    );

    Ok(effective)
}

/// [`resolve_role_permissions`] for a raw role name.
pub fn resolve_role_permissions_str(
    catalog: &PermissionCatalog,
    role: &str,
) -> Result<PermissionSet, PermissionError> {
    resolve_role_permissions(catalog, role.parse()?)
}

/// [`resolve_effective_permissions`] for a raw role name.
pub fn resolve_effective_permissions_str(
    catalog: &PermissionCatalog,
    role: &str,
    extra: &PermissionSet,
    denied: &PermissionSet,
) -> Result<PermissionSet, PermissionError> {
    resolve_effective_permissions(catalog, role.parse()?, extra, denied)
}

/// What to do when a role cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownRolePolicy {
    /// Return the error to the caller.
    Strict,
    /// Log and treat the role as holding no permissions.
    #[default]
    FailClosed,
}

/// Catalog plus unknown-role policy, the entry point used by the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissionResolver {
    catalog: PermissionCatalog,
    policy: UnknownRolePolicy,
}

impl PermissionResolver {
    #[must_use]
    pub const fn new(catalog: PermissionCatalog, policy: UnknownRolePolicy) -> Self {
        Self { catalog, policy }
    }

    #[must_use]
    pub const fn catalog(&self) -> &PermissionCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn policy(&self) -> UnknownRolePolicy {
        self.policy
    }

    /// Base permissions for a raw role name, subject to the policy.
    pub fn role_permissions(&self, role: &str) -> Result<PermissionSet, PermissionError> {
        self.apply_policy(role, resolve_role_permissions_str(&self.catalog, role))
    }

    /// Effective permissions for a raw role name, subject to the policy.
    pub fn effective_permissions(
        &self,
        role: &str,
        extra: &PermissionSet,
        denied: &PermissionSet,
    ) -> Result<PermissionSet, PermissionError> {
        self.apply_policy(
            role,
            resolve_effective_permissions_str(&self.catalog, role, extra, denied),
        )
    }

    /// Effective permissions for a user record fetched from the API.
    #[tracing::instrument(skip(self, user), fields(user_id = %user.id, role = %user.role))]
    pub fn effective_for_record(
        &self,
        user: &UserRecord,
    ) -> Result<PermissionSet, PermissionError> {
        self.effective_permissions(
            &user.role,
            &permission_set(&user.extra_permissions),
            &permission_set(&user.denied_permissions),
        )
    }

    fn apply_policy(
        &self,
        role: &str,
        resolved: Result<PermissionSet, PermissionError>,
    ) -> Result<PermissionSet, PermissionError> {
        match (resolved, self.policy) {
            (Err(PermissionError::UnknownRole(_)), UnknownRolePolicy::FailClosed) => {
                warn!(role, "Unknown role, granting no permissions");
                Ok(PermissionSet::new())
            }
            (result, _) => result,
        }
    }
}

/// Permission resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// Role is not part of the enumeration or has no catalog entry.
    #[error("Unknown role: {0}")]
    UnknownRole(String),
}
