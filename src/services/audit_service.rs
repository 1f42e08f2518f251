//! 审计日志服务

use crate::{
    error::AppError,
    models::audit::*,
    repository::audit_repo::AuditRepository,
};
use sqlx::PgPool;
use uuid::Uuid;

pub struct AuditService {
    db: PgPool,
}

impl AuditService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 记录一条审计记录
    pub async fn record(&self, params: NewAuditEntry) -> Result<(), AppError> {
        let entry = AuditTrailEntry {
            id: Uuid::new_v4(),
            listing_id: params.listing_id,
            admin_id: params.admin_id,
            action: params.action,
            previous_data: params.previous_data,
            new_data: params.new_data,
            created_at: chrono::Utc::now(),
        };

        let repo = AuditRepository::new(self.db.clone());
        repo.insert_entry(&entry).await?;

        Ok(())
    }

    /// 查询审计记录
    pub async fn query_entries(
        &self,
        filters: &AuditTrailFilters,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AuditTrailEntry>, AppError> {
        let repo = AuditRepository::new(self.db.clone());
        repo.query_entries(filters, limit, offset).await
    }

    /// 统计审计记录数量
    pub async fn count_entries(&self, filters: &AuditTrailFilters) -> Result<i64, AppError> {
        let repo = AuditRepository::new(self.db.clone());
        repo.count_entries(filters).await
    }
}
