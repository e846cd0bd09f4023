//! Permission editor state.
//!
//! Holds the role and override edits for one user between fetching the
//! record and saving it back. Every edit produces a new state value, which
//! keeps undo/redo a matter of swapping snapshots.

use std::collections::VecDeque;

use parish_common::{UserPermissionsUpdate, UserRecord};
use serde::Serialize;

use crate::labels::{label_for, Language};

use super::catalog::{Permission, PermissionGroup, PermissionSet};
use super::overrides::{set_permission_override, OverrideMode, PermissionOverrides};
use super::resolver::{PermissionError, PermissionResolver};
use super::role::Role;

/// Edits kept for undo; the oldest are discarded beyond this.
pub const MAX_UNDO_HISTORY: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
struct DraftState {
    /// Raw role name; may be one the console does not recognize.
    role: String,
    overrides: PermissionOverrides,
}

impl DraftState {
    fn is_super_admin(&self) -> bool {
        self.role == Role::SuperAdmin.as_str()
    }
}

/// Editable permission state for one user.
#[derive(Debug, Clone)]
pub struct PermissionDraft {
    original: DraftState,
    current: DraftState,
    undo: VecDeque<DraftState>,
    redo: Vec<DraftState>,
}

impl PermissionDraft {
    /// Start editing a fetched user record.
    ///
    /// Overrides are normalized on the way in: a token both granted and
    /// denied stays denied, and `SUPER_ADMIN` overrides are cleared. The
    /// original values are kept as fetched, so such a record starts dirty
    /// and saving it repairs the stored data.
    #[must_use]
    pub fn from_record(user: &UserRecord) -> Self {
        let original = DraftState {
            role: user.role.clone(),
            overrides: PermissionOverrides::new(&user.extra_permissions, &user.denied_permissions),
        };

        let mut current = original.clone();
        current.overrides = if current.is_super_admin() {
            PermissionOverrides::default()
        } else {
            current.overrides.normalized()
        };

        Self {
            original,
            current,
            undo: VecDeque::new(),
            redo: Vec::new(),
        }
    }

    /// Current raw role name.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.current.role
    }

    #[must_use]
    pub const fn overrides(&self) -> &PermissionOverrides {
        &self.current.overrides
    }

    /// Grant or revoke one permission.
    ///
    /// Ignored for `SUPER_ADMIN`, whose overrides are always empty. Returns
    /// whether the state changed.
    pub fn toggle(&mut self, permission: &Permission, mode: OverrideMode, checked: bool) -> bool {
        if self.current.is_super_admin() {
            return false;
        }

        let overrides =
            set_permission_override(&self.current.overrides, permission, mode, checked);
        self.commit(DraftState {
            role: self.current.role.clone(),
            overrides,
        })
    }

    /// Change the role. Switching to `SUPER_ADMIN` clears all overrides.
    pub fn set_role(&mut self, role: Role) -> bool {
        let overrides = if role.is_super_admin() {
            PermissionOverrides::default()
        } else {
            self.current.overrides.clone()
        };

        self.commit(DraftState {
            role: role.as_str().to_string(),
            overrides,
        })
    }

    /// Revert the last edit. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo.pop_back() else {
            return false;
        };
        self.redo.push(std::mem::replace(&mut self.current, previous));
        true
    }

    /// Reapply the last undone edit.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };
        let previous = std::mem::replace(&mut self.current, next);
        self.push_undo(previous);
        true
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Whether the draft differs from the fetched record.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.current != self.original
    }

    /// Effective permissions for the current draft.
    pub fn effective(
        &self,
        resolver: &PermissionResolver,
    ) -> Result<PermissionSet, PermissionError> {
        resolver.effective_permissions(
            &self.current.role,
            &self.current.overrides.extra,
            &self.current.overrides.denied,
        )
    }

    /// Live counts shown above the permission table.
    pub fn summary(
        &self,
        resolver: &PermissionResolver,
    ) -> Result<PermissionSummary, PermissionError> {
        Ok(PermissionSummary {
            extra_granted: self.current.overrides.extra.len(),
            revoked: self.current.overrides.denied.len(),
            effective_total: self.effective(resolver)?.len(),
        })
    }

    /// One row per catalog permission, in catalog order.
    pub fn rows(
        &self,
        resolver: &PermissionResolver,
    ) -> Result<Vec<PermissionRow>, PermissionError> {
        let base = resolver.role_permissions(&self.current.role)?;
        let effective = self.effective(resolver)?;
        let overrides = &self.current.overrides;

        Ok(resolver
            .catalog()
            .definitions()
            .iter()
            .map(|def| PermissionRow {
                key: def.key,
                group: def.group,
                granted_by_role: base.contains(def.key),
                extra: overrides.extra.contains(def.key),
                denied: overrides.denied.contains(def.key),
                effective: effective.contains(def.key),
            })
            .collect())
    }

    /// Update payload carrying only the fields that changed.
    #[must_use]
    pub fn update_payload(&self) -> UserPermissionsUpdate {
        let (original, current) = (&self.original, &self.current);

        UserPermissionsUpdate {
            role: (current.role != original.role).then(|| current.role.clone()),
            extra_permissions: (current.overrides.extra != original.overrides.extra)
                .then(|| current.overrides.extra_tokens()),
            denied_permissions: (current.overrides.denied != original.overrides.denied)
                .then(|| current.overrides.denied_tokens()),
        }
    }

    /// Treat the current state as saved.
    pub fn mark_saved(&mut self) {
        self.original = self.current.clone();
    }

    fn commit(&mut self, next: DraftState) -> bool {
        if next == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, next);
        self.push_undo(previous);
        self.redo.clear();
        true
    }

    fn push_undo(&mut self, previous: DraftState) {
        if self.undo.len() == MAX_UNDO_HISTORY {
            self.undo.pop_front();
        }
        self.undo.push_back(previous);
    }
}

/// Override and effective-permission counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSummary {
    pub extra_granted: usize,
    pub revoked: usize,
    pub effective_total: usize,
}

impl PermissionSummary {
    /// Captions such as "2 extra granted", in display order.
    #[must_use]
    pub fn captions(&self, language: Language) -> [String; 3] {
        [
            format!(
                "{} {}",
                self.extra_granted,
                label_for("summary.extra_granted", language)
            ),
            format!("{} {}", self.revoked, label_for("summary.revoked", language)),
            format!(
                "{} {}",
                self.effective_total,
                label_for("summary.effective_total", language)
            ),
        ]
    }
}

/// Editor row for one permission with its two toggle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRow {
    pub key: &'static str,
    pub group: PermissionGroup,
    pub granted_by_role: bool,
    pub extra: bool,
    pub denied: bool,
    pub effective: bool,
}
