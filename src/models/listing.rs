//! 车源数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use crate::models::audit::AuditAction;

/// 车源审核状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
pub enum ListingStatus {
    Pending,
    Approved,
    Rejected,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Pending => "pending",
            ListingStatus::Approved => "approved",
            ListingStatus::Rejected => "rejected",
        }
    }

    /// 状态到前端徽章颜色的纯映射
    pub fn badge_color(&self) -> &'static str {
        match self {
            ListingStatus::Pending => "yellow",
            ListingStatus::Approved => "green",
            ListingStatus::Rejected => "red",
        }
    }
}

impl FromStr for ListingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ListingStatus::Pending),
            "approved" => Ok(ListingStatus::Approved),
            "rejected" => Ok(ListingStatus::Rejected),
            _ => Err(()),
        }
    }
}

/// 燃料类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

/// 变速箱类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
pub enum Transmission {
    Manual,
    Automatic,
}

/// 车源实体
/// 由外部系统创建，本服务只做审核与编辑，从不物理删除
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CarListing {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub location: String,
    pub description: Option<String>,
    pub image_urls: Vec<String>,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_phone: Option<String>,
    pub mileage: Option<i32>,
    pub fuel_type: Option<FuelType>,
    pub transmission: Option<Transmission>,
    pub features: Vec<String>,
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// 软删除标记；已删除的行对所有业务读取不可见
    pub deleted_at: Option<DateTime<Utc>>,
}

/// 编辑请求：全字段替换（id/created_at/deleted_at 除外）
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateListingRequest {
    #[validate(length(min = 1))]
    pub make: String,
    #[validate(length(min = 1))]
    pub model: String,
    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(length(min = 1))]
    pub location: String,
    pub description: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[validate(length(min = 1))]
    pub owner_name: String,
    #[validate(email)]
    pub owner_email: String,
    pub owner_phone: Option<String>,
    #[validate(range(min = 0))]
    pub mileage: Option<i32>,
    pub fuel_type: Option<FuelType>,
    pub transmission: Option<Transmission>,
    #[serde(default)]
    pub features: Vec<String>,
    pub status: ListingStatus,
}

/// 列表过滤条件
#[derive(Debug, Clone, Default)]
pub struct ListingFilters {
    /// None 表示不过滤状态（即 "all"）
    pub status: Option<ListingStatus>,
    /// 在 make/model/location/owner_name 上做不区分大小写的子串匹配
    pub search: Option<String>,
}

/// 审核决定：批准或拒绝
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    /// 决定写入的目标状态
    pub fn target_status(&self) -> ListingStatus {
        match self {
            ReviewDecision::Approve => ListingStatus::Approved,
            ReviewDecision::Reject => ListingStatus::Rejected,
        }
    }

    /// 决定对应的审计操作
    pub fn audit_action(&self) -> AuditAction {
        match self {
            ReviewDecision::Approve => AuditAction::Approved,
            ReviewDecision::Reject => AuditAction::Rejected,
        }
    }
}
