//! 审计模型单元测试
//!
//! 操作枚举、快照规则与过滤条件的结构性测试
//! （依赖数据库的读写路径放在 repository 层的 SQL 中保证）

use chrono::Utc;
use listing_admin::models::audit::*;
use uuid::Uuid;

#[test]
fn test_audit_action_string_representation() {
    assert_eq!(AuditAction::Viewed.as_str(), "viewed");
    assert_eq!(AuditAction::Approved.as_str(), "approved");
    assert_eq!(AuditAction::Rejected.as_str(), "rejected");
    assert_eq!(AuditAction::Edited.as_str(), "edited");
}

#[test]
fn test_audit_action_parse() {
    assert_eq!("viewed".parse::<AuditAction>(), Ok(AuditAction::Viewed));
    assert_eq!("edited".parse::<AuditAction>(), Ok(AuditAction::Edited));
    assert!("deleted".parse::<AuditAction>().is_err());
    assert!("VIEWED".parse::<AuditAction>().is_err());
}

#[test]
fn test_audit_action_serde_lowercase() {
    assert_eq!(
        serde_json::to_string(&AuditAction::Approved).unwrap(),
        "\"approved\""
    );
    let parsed: AuditAction = serde_json::from_str("\"rejected\"").unwrap();
    assert_eq!(parsed, AuditAction::Rejected);
}

#[test]
fn test_viewed_entry_has_no_snapshots() {
    let entry = NewAuditEntry {
        listing_id: Uuid::new_v4(),
        admin_id: Uuid::new_v4(),
        action: AuditAction::Viewed,
        previous_data: None,
        new_data: None,
    };

    assert!(entry.previous_data.is_none());
    assert!(entry.new_data.is_none());
}

#[test]
fn test_mutation_entry_carries_both_snapshots() {
    let previous = serde_json::json!({"status": "pending", "make": "Toyota"});
    let new = serde_json::json!({"status": "approved", "make": "Toyota"});

    let entry = NewAuditEntry {
        listing_id: Uuid::new_v4(),
        admin_id: Uuid::new_v4(),
        action: AuditAction::Approved,
        previous_data: Some(previous.clone()),
        new_data: Some(new.clone()),
    };

    assert_eq!(entry.previous_data.unwrap()["status"], "pending");
    assert_eq!(entry.new_data.unwrap()["status"], "approved");
}

#[test]
fn test_entry_serialization_shape() {
    let entry = AuditTrailEntry {
        id: Uuid::new_v4(),
        listing_id: Uuid::new_v4(),
        admin_id: Uuid::new_v4(),
        action: AuditAction::Edited,
        previous_data: Some(serde_json::json!({"price": 40.0})),
        new_data: Some(serde_json::json!({"price": 45.0})),
        created_at: Utc::now(),
    };

    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(value["action"], "edited");
    assert_eq!(value["previous_data"]["price"], 40.0);
    assert_eq!(value["new_data"]["price"], 45.0);
    assert!(value["created_at"].is_string());
}

#[test]
fn test_filters_default_is_unfiltered() {
    let filters = AuditTrailFilters::default();
    assert!(filters.listing_id.is_none());
    assert!(filters.action.is_none());
}

#[test]
fn test_filters_combine_listing_and_action() {
    let listing_id = Uuid::new_v4();
    let filters = AuditTrailFilters {
        listing_id: Some(listing_id),
        action: Some(AuditAction::Rejected),
    };

    assert_eq!(filters.listing_id, Some(listing_id));
    assert_eq!(filters.action, Some(AuditAction::Rejected));
}
