//! Permission preview report.
//!
//! A serializable snapshot of what a user record resolves to, used by the
//! `parish-permissions` binary.

use parish_common::{UserPermissionsUpdate, UserRecord};
use serde::Serialize;
use uuid::Uuid;

use crate::labels::{label_for, Language};
use crate::permissions::{
    PermissionDraft, PermissionError, PermissionResolver, PermissionSummary, Role,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionReport {
    pub user_id: Uuid,
    pub username: String,
    pub role: String,
    pub role_label: String,
    pub effective: Vec<String>,
    pub summary: PermissionSummary,
    pub captions: [String; 3],
    /// Non-empty when loading the record had to repair its overrides.
    pub pending_update: Option<UserPermissionsUpdate>,
}

impl PermissionReport {
    pub fn build(
        user: &UserRecord,
        resolver: &PermissionResolver,
        language: Language,
    ) -> Result<Self, PermissionError> {
        let draft = PermissionDraft::from_record(user);
        let effective = draft.effective(resolver)?;
        let summary = draft.summary(resolver)?;

        let role_label = user
            .role
            .parse::<Role>()
            .map(|role| label_for(role.label_key(), language).to_string())
            .unwrap_or_else(|_| user.role.clone());

        let update = draft.update_payload();
        let pending_update = (!update.is_empty()).then_some(update);

        Ok(Self {
            user_id: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
            role_label,
            effective: effective.iter().map(ToString::to_string).collect(),
            captions: summary.captions(language),
            summary,
            pending_update,
        })
    }
}
