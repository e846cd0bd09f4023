//! Account roles.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::resolver::PermissionError;

/// Fixed role enumeration. Wire form is `USER`, `ADMIN`, `SUPER_ADMIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
    /// Holds every permission; overrides never apply.
    SuperAdmin,
}

impl Role {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
            Self::SuperAdmin => "SUPER_ADMIN",
        }
    }

    /// Returns all roles, lowest privilege first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::User, Self::Admin, Self::SuperAdmin]
    }

    #[must_use]
    pub const fn is_super_admin(&self) -> bool {
        matches!(self, Self::SuperAdmin)
    }

    /// Label key used with [`crate::labels::label_for`].
    #[must_use]
    pub const fn label_key(&self) -> &'static str {
        match self {
            Self::User => "role.user",
            Self::Admin => "role.admin",
            Self::SuperAdmin => "role.super_admin",
        }
    }
}

impl FromStr for Role {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| PermissionError::UnknownRole(s.to_string()))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_roles() {
        assert_eq!("USER".parse::<Role>().unwrap(), Role::User);
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("SUPER_ADMIN".parse::<Role>().unwrap(), Role::SuperAdmin);
    }

    #[test]
    fn test_parse_unknown_role() {
        let err = "DEACON".parse::<Role>().unwrap_err();
        assert_eq!(err, PermissionError::UnknownRole("DEACON".to_string()));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("admin".parse::<Role>().is_err());
        assert!(" ADMIN".parse::<Role>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for role in Role::all() {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), *role);
        }
    }

    #[test]
    fn test_serde_matches_as_str() {
        for role in Role::all() {
            let json = serde_json::to_string(role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }

    #[test]
    fn test_only_super_admin_is_super_admin() {
        assert!(Role::SuperAdmin.is_super_admin());
        assert!(!Role::Admin.is_super_admin());
        assert!(!Role::User.is_super_admin());
    }
}
