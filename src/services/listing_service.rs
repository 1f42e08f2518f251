//! 车源审核服务
//! 查看/编辑/批准/拒绝，以及每个操作的审计记录落库

use crate::{
    error::AppError,
    models::{audit::*, listing::*},
    repository::listing_repo::ListingRepository,
    services::AuditService,
};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

pub struct ListingService {
    db: PgPool,
    audit: Arc<AuditService>,
}

impl ListingService {
    pub fn new(db: PgPool, audit: Arc<AuditService>) -> Self {
        Self { db, audit }
    }

    /// 分页列出车源
    ///
    /// 行读取与总数统计是两条独立查询，并发写入间隙下 total 可能与当前页
    /// 短暂不一致；列表页只做展示，接受这种读偏差。合并为单条窗口函数
    /// 查询（COUNT(*) OVER ()）会在超出末页的空页上丢失 total，不可取。
    pub async fn list(
        &self,
        filters: &ListingFilters,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<CarListing>, i64), AppError> {
        let repo = ListingRepository::new(self.db.clone());
        let listings = repo.list(filters, limit, offset).await?;
        let total = repo.count(filters).await?;
        Ok((listings, total))
    }

    /// 获取单个车源；不存在或已软删除返回 NotFound
    pub async fn get(&self, id: Uuid) -> Result<CarListing, AppError> {
        let repo = ListingRepository::new(self.db.clone());
        repo.get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Listing".to_string()))
    }

    /// 查看车源：读取本身不改变数据，但记录一条 viewed 审计（无快照）
    pub async fn view(&self, id: Uuid, admin_id: Uuid) -> Result<CarListing, AppError> {
        let listing = self.get(id).await?;

        self.record_audit(NewAuditEntry {
            listing_id: id,
            admin_id,
            action: AuditAction::Viewed,
            previous_data: None,
            new_data: None,
        })
        .await;

        Ok(listing)
    }

    /// 编辑车源：全字段替换，记录 edited 审计与前后快照
    ///
    /// 更新与审计插入是两条独立语句，之间没有事务边界；
    /// 审计日志是诊断用途，主操作的成功不依赖审计持久化。
    pub async fn update(
        &self,
        id: Uuid,
        req: &UpdateListingRequest,
        admin_id: Uuid,
    ) -> Result<CarListing, AppError> {
        let current = self.get(id).await?;

        let repo = ListingRepository::new(self.db.clone());
        let updated = repo
            .update(id, req)
            .await?
            .ok_or_else(|| AppError::NotFound("Listing".to_string()))?;

        self.record_audit(NewAuditEntry {
            listing_id: id,
            admin_id,
            action: AuditAction::Edited,
            previous_data: snapshot(&current),
            new_data: snapshot(&updated),
        })
        .await;

        Ok(updated)
    }

    /// 审核车源：写入批准/拒绝状态，记录对应审计与前后快照
    pub async fn review(
        &self,
        id: Uuid,
        decision: ReviewDecision,
        admin_id: Uuid,
    ) -> Result<CarListing, AppError> {
        let current = self.get(id).await?;

        let repo = ListingRepository::new(self.db.clone());
        let updated = repo
            .set_status(id, decision.target_status())
            .await?
            .ok_or_else(|| AppError::NotFound("Listing".to_string()))?;

        self.record_audit(NewAuditEntry {
            listing_id: id,
            admin_id,
            action: decision.audit_action(),
            previous_data: snapshot(&current),
            new_data: snapshot(&updated),
        })
        .await;

        Ok(updated)
    }

    /// 审计写入失败只记日志，从不让主操作失败或回滚
    async fn record_audit(&self, entry: NewAuditEntry) {
        let listing_id = entry.listing_id;
        let action = entry.action;

        if let Err(e) = self.audit.record(entry).await {
            metrics::counter!("audit_trail_write_failures_total").increment(1);
            tracing::warn!(
                listing_id = %listing_id,
                action = action.as_str(),
                error = %e,
                "Failed to record audit trail entry"
            );
        }
    }
}

/// 车源快照（完整行状态转 JSON）
fn snapshot(listing: &CarListing) -> Option<serde_json::Value> {
    serde_json::to_value(listing).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_listing(status: ListingStatus) -> CarListing {
        CarListing {
            id: Uuid::new_v4(),
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2021,
            price: 45.0,
            location: "Nairobi".to_string(),
            description: None,
            image_urls: vec![],
            owner_name: "Jane Doe".to_string(),
            owner_email: "jane@example.com".to_string(),
            owner_phone: None,
            mileage: Some(42000),
            fuel_type: Some(FuelType::Petrol),
            transmission: Some(Transmission::Automatic),
            features: vec!["Bluetooth".to_string()],
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[test]
    fn test_snapshot_carries_full_row_state() {
        let listing = sample_listing(ListingStatus::Pending);
        let value = snapshot(&listing).unwrap();

        assert_eq!(value["status"], "pending");
        assert_eq!(value["make"], "Toyota");
        assert_eq!(value["owner_email"], "jane@example.com");
        assert!(value["deleted_at"].is_null());
    }

    #[test]
    fn test_snapshot_reflects_status_transition() {
        let before = snapshot(&sample_listing(ListingStatus::Pending)).unwrap();
        let after = snapshot(&sample_listing(ListingStatus::Rejected)).unwrap();

        assert_eq!(before["status"], "pending");
        assert_eq!(after["status"], "rejected");
    }
}
