//! Per-user permission overrides.
//!
//! A user record carries two override sets on top of the role defaults:
//! extra grants and explicit denials. The editor keeps them mutually
//! exclusive at the point of mutation.

use serde::{Deserialize, Serialize};

use super::catalog::{permission_set, Permission, PermissionSet};

/// Which override set a toggle targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideMode {
    /// Grant beyond the role defaults.
    Extra,
    /// Revoke even if the role grants it.
    Denied,
}

/// Extra and denied permission sets for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionOverrides {
    #[serde(default)]
    pub extra: PermissionSet,
    #[serde(default)]
    pub denied: PermissionSet,
}

impl PermissionOverrides {
    /// Build overrides as given, without resolving overlap.
    pub fn new<E, D>(extra: E, denied: D) -> Self
    where
        E: IntoIterator,
        E::Item: Into<Permission>,
        D: IntoIterator,
        D::Item: Into<Permission>,
    {
        Self {
            extra: permission_set(extra),
            denied: permission_set(denied),
        }
    }

    /// Drop any token that is both granted and denied from the extra set.
    ///
    /// Matches resolution, where denial always wins.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let denied = &self.denied;
        self.extra.retain(|perm| !denied.contains(perm));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extra.is_empty() && self.denied.is_empty()
    }

    /// Extra grants as wire tokens, sorted.
    #[must_use]
    pub fn extra_tokens(&self) -> Vec<String> {
        self.extra.iter().map(ToString::to_string).collect()
    }

    /// Denials as wire tokens, sorted.
    #[must_use]
    pub fn denied_tokens(&self) -> Vec<String> {
        self.denied.iter().map(ToString::to_string).collect()
    }
}

/// Apply one grant/revoke toggle and return the new overrides.
///
/// Checking a permission in one mode removes it from the other; unchecking
/// only touches the targeted set. `state` is left untouched. The token is not
/// checked against the catalog.
#[must_use]
pub fn set_permission_override(
    state: &PermissionOverrides,
    permission: &Permission,
    mode: OverrideMode,
    checked: bool,
) -> PermissionOverrides {
    let mut next = state.clone();

    let (target, other) = match mode {
        OverrideMode::Extra => (&mut next.extra, &mut next.denied),
        OverrideMode::Denied => (&mut next.denied, &mut next.extra),
    };

    if checked {
        target.insert(permission.clone());
        other.remove(permission);
    } else {
        target.remove(permission);
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(token: &str) -> Permission {
        Permission::new(token)
    }

    #[test]
    fn test_grant_adds_to_extra() {
        let state = PermissionOverrides::default();
        let next =
            set_permission_override(&state, &perm("MEMBERS_EXPORT"), OverrideMode::Extra, true);

        assert!(next.extra.contains("MEMBERS_EXPORT"));
        assert!(next.denied.is_empty());
    }

    #[test]
    fn test_deny_clears_prior_grant() {
        let state = PermissionOverrides::new(["MEMBERS_EXPORT"], Vec::<String>::new());
        let next =
            set_permission_override(&state, &perm("MEMBERS_EXPORT"), OverrideMode::Denied, true);

        assert!(next.extra.is_empty());
        assert!(next.denied.contains("MEMBERS_EXPORT"));
    }

    #[test]
    fn test_unchecking_extra_leaves_denied_alone() {
        let state = PermissionOverrides::new(["MEMBERS_EXPORT"], ["USERS_UPDATE"]);
        let next =
            set_permission_override(&state, &perm("MEMBERS_EXPORT"), OverrideMode::Extra, false);

        assert!(next.extra.is_empty());
        assert_eq!(next.denied, state.denied);
    }

    #[test]
    fn test_unchecking_denied_leaves_extra_alone() {
        let state = PermissionOverrides::new(["MEMBERS_EXPORT"], ["USERS_UPDATE"]);
        let next =
            set_permission_override(&state, &perm("USERS_UPDATE"), OverrideMode::Denied, false);

        assert!(next.denied.is_empty());
        assert_eq!(next.extra, state.extra);
    }

    #[test]
    fn test_unchecking_absent_token_is_noop() {
        let state = PermissionOverrides::new(["MEMBERS_EXPORT"], ["USERS_UPDATE"]);
        let next =
            set_permission_override(&state, &perm("SECTORS_DELETE"), OverrideMode::Denied, false);
        assert_eq!(next, state);
    }

    #[test]
    fn test_input_state_not_mutated() {
        let state = PermissionOverrides::new(Vec::<String>::new(), ["USERS_DELETE"]);
        let before = state.clone();

        let _ = set_permission_override(&state, &perm("USERS_DELETE"), OverrideMode::Extra, true);

        assert_eq!(state, before);
    }

    #[test]
    fn test_unknown_token_passes_through() {
        let state = PermissionOverrides::default();
        let next =
            set_permission_override(&state, &perm("CHOIR_MANAGE"), OverrideMode::Extra, true);
        assert!(next.extra.contains("CHOIR_MANAGE"));
    }

    #[test]
    fn test_normalized_prefers_denial() {
        let overrides =
            PermissionOverrides::new(["USERS_DELETE", "MEMBERS_EXPORT"], ["USERS_DELETE"]);
        let overrides = overrides.normalized();

        assert_eq!(overrides.extra_tokens(), vec!["MEMBERS_EXPORT"]);
        assert_eq!(overrides.denied_tokens(), vec!["USERS_DELETE"]);
    }

    #[test]
    fn test_tokens_are_sorted_and_deduplicated() {
        let overrides = PermissionOverrides::new(
            ["SECTORS_VIEW", "MEMBERS_EXPORT", "SECTORS_VIEW"],
            Vec::<String>::new(),
        );
        assert_eq!(overrides.extra_tokens(), vec!["MEMBERS_EXPORT", "SECTORS_VIEW"]);
    }

    #[test]
    fn test_serde_shape() {
        let overrides = PermissionOverrides::new(["USERS_DELETE"], ["USERS_UPDATE"]);
        let json = serde_json::to_string(&overrides).unwrap();
        assert_eq!(json, r#"{"extra":["USERS_DELETE"],"denied":["USERS_UPDATE"]}"#);

        let empty: PermissionOverrides = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }
}
