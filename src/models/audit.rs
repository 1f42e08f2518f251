//! 审计记录数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// 审计操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
pub enum AuditAction {
    Viewed,
    Approved,
    Rejected,
    Edited,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Viewed => "viewed",
            AuditAction::Approved => "approved",
            AuditAction::Rejected => "rejected",
            AuditAction::Edited => "edited",
        }
    }

    /// 操作到前端图标的纯映射
    pub fn icon(&self) -> &'static str {
        match self {
            AuditAction::Viewed => "eye",
            AuditAction::Approved => "check-circle",
            AuditAction::Rejected => "x-circle",
            AuditAction::Edited => "pencil",
        }
    }
}

impl FromStr for AuditAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "viewed" => Ok(AuditAction::Viewed),
            "approved" => Ok(AuditAction::Approved),
            "rejected" => Ok(AuditAction::Rejected),
            "edited" => Ok(AuditAction::Edited),
            _ => Err(()),
        }
    }
}

/// 审计记录实体：只追加，插入后从不修改
/// listing_id 是弱引用，车源软删除后记录仍然保留并可查询
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AuditTrailEntry {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub admin_id: Uuid,
    pub action: AuditAction,
    /// 变更前的完整车源快照；viewed 操作为空
    pub previous_data: Option<serde_json::Value>,
    /// 变更后的完整车源快照；viewed 操作为空
    pub new_data: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// 新审计记录参数
#[derive(Debug, Clone)]
pub struct NewAuditEntry {
    pub listing_id: Uuid,
    pub admin_id: Uuid,
    pub action: AuditAction,
    pub previous_data: Option<serde_json::Value>,
    pub new_data: Option<serde_json::Value>,
}

/// 审计记录过滤条件
#[derive(Debug, Clone, Default)]
pub struct AuditTrailFilters {
    pub listing_id: Option<Uuid>,
    pub action: Option<AuditAction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_action_roundtrip() {
        for s in ["viewed", "approved", "rejected", "edited"] {
            let action: AuditAction = s.parse().unwrap();
            assert_eq!(action.as_str(), s);
        }
        assert!("deleted".parse::<AuditAction>().is_err());
    }

    #[test]
    fn test_audit_action_icons_distinct() {
        let icons = [
            AuditAction::Viewed.icon(),
            AuditAction::Approved.icon(),
            AuditAction::Rejected.icon(),
            AuditAction::Edited.icon(),
        ];
        for (i, a) in icons.iter().enumerate() {
            for b in icons.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
