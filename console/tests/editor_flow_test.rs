//! End-to-end editor flow: fetch a record, edit it, build the update body.

use parish_common::{UserPermissionsUpdate, UserRecord};
use parish_console::labels::Language;
use parish_console::permissions::{
    OverrideMode, Permission, PermissionDraft, PermissionResolver, Role,
};

const FETCHED: &str = r#"{
    "id": "0190a6b2-7c1e-7a4f-9a61-3f2d1c0b9e8a",
    "username": "servant.george",
    "displayName": "George Fahmy",
    "role": "USER",
    "extraPermissions": ["VISITATIONS_VIEW"],
    "deniedPermissions": null,
    "createdAt": "2025-09-01T08:00:00Z",
    "updatedAt": "2026-02-14T12:00:00Z"
}"#;

fn fetched() -> UserRecord {
    UserRecord::from_json(FETCHED).unwrap()
}

#[test]
fn test_grant_visitations_and_save() {
    let resolver = PermissionResolver::default();
    let mut draft = PermissionDraft::from_record(&fetched());

    let before = draft.summary(&resolver).unwrap();
    assert_eq!(before.extra_granted, 1);
    assert_eq!(before.revoked, 0);

    draft.toggle(
        &Permission::new("VISITATIONS_CREATE"),
        OverrideMode::Extra,
        true,
    );
    draft.toggle(&Permission::new("MEMBERS_VIEW"), OverrideMode::Denied, true);

    let after = draft.summary(&resolver).unwrap();
    assert_eq!(after.extra_granted, 2);
    assert_eq!(after.revoked, 1);
    assert_eq!(after.effective_total, before.effective_total + 1 - 1);

    let payload = draft.update_payload();
    assert_eq!(
        payload,
        UserPermissionsUpdate {
            role: None,
            extra_permissions: Some(vec![
                "VISITATIONS_CREATE".to_string(),
                "VISITATIONS_VIEW".to_string()
            ]),
            denied_permissions: Some(vec!["MEMBERS_VIEW".to_string()]),
        }
    );
    assert_eq!(
        payload.to_json().unwrap(),
        r#"{"extraPermissions":["VISITATIONS_CREATE","VISITATIONS_VIEW"],"deniedPermissions":["MEMBERS_VIEW"]}"#
    );
}

#[test]
fn test_flipping_grant_to_denial_and_back() {
    let mut draft = PermissionDraft::from_record(&fetched());
    let perm = Permission::new("VISITATIONS_VIEW");

    draft.toggle(&perm, OverrideMode::Denied, true);
    assert!(!draft.overrides().extra.contains(&perm));
    assert!(draft.overrides().denied.contains(&perm));

    draft.toggle(&perm, OverrideMode::Denied, false);
    assert!(draft.overrides().is_empty());

    // Two undos bring the original grant back.
    assert!(draft.undo());
    assert!(draft.undo());
    assert!(draft.overrides().extra.contains(&perm));
    assert!(!draft.is_dirty());
}

#[test]
fn test_promote_to_super_admin() {
    let resolver = PermissionResolver::default();
    let mut draft = PermissionDraft::from_record(&fetched());

    draft.set_role(Role::SuperAdmin);

    let summary = draft.summary(&resolver).unwrap();
    assert_eq!(summary.extra_granted, 0);
    assert_eq!(summary.revoked, 0);
    assert_eq!(
        summary.effective_total,
        resolver.catalog().definitions().len()
    );

    let rows = draft.rows(&resolver).unwrap();
    assert!(rows.iter().all(|row| row.effective && row.granted_by_role));

    let payload = draft.update_payload();
    assert_eq!(payload.role.as_deref(), Some("SUPER_ADMIN"));
    assert_eq!(payload.extra_permissions, Some(vec![]));
    assert_eq!(payload.denied_permissions, None);
}

#[test]
fn test_rows_group_by_feature_area() {
    let resolver = PermissionResolver::default();
    let draft = PermissionDraft::from_record(&fetched());
    let rows = draft.rows(&resolver).unwrap();

    let mut seen = Vec::new();
    for row in &rows {
        if seen.last() != Some(&row.group) {
            assert!(!seen.contains(&row.group), "{:?} rows are split", row.group);
            seen.push(row.group);
        }
    }
    assert_eq!(seen.len(), resolver.catalog().groups().len());
}

#[test]
fn test_captions_follow_language() {
    let resolver = PermissionResolver::default();
    let draft = PermissionDraft::from_record(&fetched());
    let summary = draft.summary(&resolver).unwrap();

    let [extra, _, _] = summary.captions(Language::English);
    assert_eq!(extra, "1 extra granted");

    let [extra, _, _] = summary.captions(Language::Arabic);
    assert!(extra.starts_with("1 "));
    assert_ne!(extra, "1 extra granted");
}
