//! User Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::Result;

/// User record as returned by the parish API.
///
/// `role` is kept as the raw string the server sent so that a role the
/// console does not know about still decodes; resolving it is the console's
/// job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// User ID.
    pub id: Uuid,
    /// Login name (unique).
    pub username: String,
    /// Display name.
    #[serde(default)]
    pub display_name: String,
    /// Role name (`USER`, `ADMIN`, `SUPER_ADMIN`).
    pub role: String,
    /// Permissions granted on top of the role defaults.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub extra_permissions: Vec<String>,
    /// Permissions revoked even if the role grants them.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub denied_permissions: Vec<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last modified.
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Decode a user record from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Payload for the user update call.
///
/// Only the fields that changed are present; `None` fields are left out of
/// the JSON body entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissionsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_permissions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denied_permissions: Option<Vec<String>>,
}

impl UserPermissionsUpdate {
    /// Whether there is nothing to send.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.role.is_none() && self.extra_permissions.is_none() && self.denied_permissions.is_none()
    }

    /// Encode the payload as a JSON body.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
