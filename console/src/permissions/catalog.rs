//! Static permission catalog.
//!
//! The catalog is compiled-in configuration data:
//! - A flat enumeration of every permission token, grouped by feature area
//! - A table mapping each non-`SUPER_ADMIN` role to its base permissions
//!
//! `SUPER_ADMIN` never appears in the role table; it implicitly holds the
//! whole enumeration.

use std::borrow::Borrow;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::role::Role;

/// Opaque permission token (e.g. `USERS_UPDATE`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(SmolStr);

impl Permission {
    pub fn new(token: impl AsRef<str>) -> Self {
        Self(SmolStr::new(token))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Permission {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Permission {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Permission {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<&String> for Permission {
    fn from(token: &String) -> Self {
        Self::new(token)
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A set of permission tokens. Iterates in token order.
pub type PermissionSet = BTreeSet<Permission>;

/// Collect tokens into a [`PermissionSet`], collapsing duplicates.
pub fn permission_set<I, T>(tokens: I) -> PermissionSet
where
    I: IntoIterator<Item = T>,
    T: Into<Permission>,
{
    tokens.into_iter().map(Into::into).collect()
}

/// Feature area a permission belongs to. Drives row grouping in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionGroup {
    Users,
    Members,
    Families,
    Meetings,
    Sectors,
    Confessions,
    Visitations,
    Notifications,
}

impl PermissionGroup {
    /// Label key used with [`crate::labels::label_for`].
    #[must_use]
    pub const fn label_key(&self) -> &'static str {
        match self {
            Self::Users => "group.users",
            Self::Members => "group.members",
            Self::Families => "group.families",
            Self::Meetings => "group.meetings",
            Self::Sectors => "group.sectors",
            Self::Confessions => "group.confessions",
            Self::Visitations => "group.visitations",
            Self::Notifications => "group.notifications",
        }
    }
}

/// One entry of the permission enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionDef {
    /// Token stored in user records and sent to the API.
    pub key: &'static str,
    /// Feature area.
    pub group: PermissionGroup,
}

impl PermissionDef {
    #[must_use]
    pub const fn new(key: &'static str, group: PermissionGroup) -> Self {
        Self { key, group }
    }
}

/// Base permissions for one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleDefaults {
    pub role: Role,
    pub permissions: &'static [&'static str],
}

/// Permission enumeration plus role defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionCatalog {
    permissions: &'static [PermissionDef],
    role_defaults: &'static [RoleDefaults],
}

impl PermissionCatalog {
    /// Build a catalog from static tables.
    ///
    /// A role missing from `role_defaults` resolves to
    /// [`PermissionError::UnknownRole`](super::PermissionError::UnknownRole).
    #[must_use]
    pub const fn new(
        permissions: &'static [PermissionDef],
        role_defaults: &'static [RoleDefaults],
    ) -> Self {
        Self {
            permissions,
            role_defaults,
        }
    }

    /// The dashboard's compiled-in catalog.
    #[must_use]
    pub const fn builtin() -> Self {
        Self::new(BUILTIN_PERMISSIONS, BUILTIN_ROLE_DEFAULTS)
    }

    /// Every permission definition, in catalog order.
    #[must_use]
    pub const fn definitions(&self) -> &'static [PermissionDef] {
        self.permissions
    }

    /// The complete permission enumeration as a set.
    #[must_use]
    pub fn all_permissions(&self) -> PermissionSet {
        permission_set(self.permissions.iter().map(|def| def.key))
    }

    /// Whether `token` is part of the enumeration.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.permissions.iter().any(|def| def.key == token)
    }

    /// Look up a permission definition by token.
    #[must_use]
    pub fn definition(&self, token: &str) -> Option<&'static PermissionDef> {
        self.permissions.iter().find(|def| def.key == token)
    }

    /// Base permissions for `role` from the role table.
    ///
    /// Returns `None` when the table has no entry for the role. Tokens the
    /// enumeration does not list are dropped. This does not special-case
    /// `SUPER_ADMIN`; see [`super::resolve_role_permissions`].
    #[must_use]
    pub fn role_defaults(&self, role: Role) -> Option<PermissionSet> {
        self.role_defaults
            .iter()
            .find(|entry| entry.role == role)
            .map(|entry| {
                permission_set(
                    entry
                        .permissions
                        .iter()
                        .copied()
                        .filter(|key| self.contains(key)),
                )
            })
    }

    /// Permissions grouped by feature area, groups in order of first
    /// appearance in the enumeration.
    #[must_use]
    pub fn groups(&self) -> Vec<(PermissionGroup, Vec<&'static PermissionDef>)> {
        let mut groups: Vec<(PermissionGroup, Vec<&'static PermissionDef>)> = Vec::new();

        for def in self.permissions {
            match groups.iter_mut().find(|(group, _)| *group == def.group) {
                Some((_, defs)) => defs.push(def),
                None => groups.push((def.group, vec![def])),
            }
        }

        groups
    }
}

impl Default for PermissionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

use PermissionGroup as G;

/// Every permission the dashboard knows about.
pub const BUILTIN_PERMISSIONS: &[PermissionDef] = &[
    // === Users ===
    PermissionDef::new("USERS_VIEW_SELF", G::Users),
    PermissionDef::new("USERS_VIEW", G::Users),
    PermissionDef::new("USERS_CREATE", G::Users),
    PermissionDef::new("USERS_UPDATE", G::Users),
    PermissionDef::new("USERS_DELETE", G::Users),
    PermissionDef::new("USERS_MANAGE_PERMISSIONS", G::Users),
    // === Members ===
    PermissionDef::new("MEMBERS_VIEW", G::Members),
    PermissionDef::new("MEMBERS_CREATE", G::Members),
    PermissionDef::new("MEMBERS_UPDATE", G::Members),
    PermissionDef::new("MEMBERS_DELETE", G::Members),
    PermissionDef::new("MEMBERS_EXPORT", G::Members),
    // === Families ===
    PermissionDef::new("FAMILIES_VIEW", G::Families),
    PermissionDef::new("FAMILIES_CREATE", G::Families),
    PermissionDef::new("FAMILIES_UPDATE", G::Families),
    PermissionDef::new("FAMILIES_DELETE", G::Families),
    // === Meetings ===
    PermissionDef::new("MEETINGS_VIEW", G::Meetings),
    PermissionDef::new("MEETINGS_CREATE", G::Meetings),
    PermissionDef::new("MEETINGS_UPDATE", G::Meetings),
    PermissionDef::new("MEETINGS_DELETE", G::Meetings),
    // === Sectors ===
    PermissionDef::new("SECTORS_VIEW", G::Sectors),
    PermissionDef::new("SECTORS_CREATE", G::Sectors),
    PermissionDef::new("SECTORS_UPDATE", G::Sectors),
    PermissionDef::new("SECTORS_DELETE", G::Sectors),
    // === Confessions ===
    PermissionDef::new("CONFESSIONS_VIEW", G::Confessions),
    PermissionDef::new("CONFESSIONS_SCHEDULE", G::Confessions),
    PermissionDef::new("CONFESSIONS_UPDATE", G::Confessions),
    PermissionDef::new("CONFESSIONS_CANCEL", G::Confessions),
    // === Visitations ===
    PermissionDef::new("VISITATIONS_VIEW", G::Visitations),
    PermissionDef::new("VISITATIONS_CREATE", G::Visitations),
    PermissionDef::new("VISITATIONS_UPDATE", G::Visitations),
    PermissionDef::new("VISITATIONS_DELETE", G::Visitations),
    // === Notifications ===
    PermissionDef::new("NOTIFICATIONS_VIEW", G::Notifications),
    PermissionDef::new("NOTIFICATIONS_SEND", G::Notifications),
];

/// Base permissions for a plain user: read-only access to their own account
/// and the parish directory.
const USER_DEFAULTS: &[&str] = &[
    "USERS_VIEW_SELF",
    "MEMBERS_VIEW",
    "FAMILIES_VIEW",
    "MEETINGS_VIEW",
    "CONFESSIONS_VIEW",
    "NOTIFICATIONS_VIEW",
];

/// Base permissions for an admin. Deletion, account creation and permission
/// management are left to `SUPER_ADMIN` or explicit grants.
const ADMIN_DEFAULTS: &[&str] = &[
    "USERS_VIEW_SELF",
    "USERS_VIEW",
    "USERS_UPDATE",
    "MEMBERS_VIEW",
    "MEMBERS_CREATE",
    "MEMBERS_UPDATE",
    "FAMILIES_VIEW",
    "FAMILIES_CREATE",
    "FAMILIES_UPDATE",
    "MEETINGS_VIEW",
    "MEETINGS_CREATE",
    "MEETINGS_UPDATE",
    "SECTORS_VIEW",
    "CONFESSIONS_VIEW",
    "CONFESSIONS_SCHEDULE",
    "CONFESSIONS_UPDATE",
    "VISITATIONS_VIEW",
    "VISITATIONS_CREATE",
    "VISITATIONS_UPDATE",
    "NOTIFICATIONS_VIEW",
    "NOTIFICATIONS_SEND",
];

pub const BUILTIN_ROLE_DEFAULTS: &[RoleDefaults] = &[
    RoleDefaults {
        role: Role::User,
        permissions: USER_DEFAULTS,
    },
    RoleDefaults {
        role: Role::Admin,
        permissions: ADMIN_DEFAULTS,
    },
];
