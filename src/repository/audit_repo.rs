//! Audit repository (审计数据访问)
//!
//! 只追加：没有 UPDATE/DELETE 路径，查询也不关心车源的软删除状态

use crate::{error::AppError, models::audit::*};
use sqlx::{PgPool, Row};

pub struct AuditRepository {
    db: PgPool,
}

impl AuditRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 插入审计记录
    pub async fn insert_entry(&self, entry: &AuditTrailEntry) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO listing_audit_trail (
                id, listing_id, admin_id, action, previous_data, new_data, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(entry.id)
        .bind(entry.listing_id)
        .bind(entry.admin_id)
        .bind(entry.action)
        .bind(&entry.previous_data)
        .bind(&entry.new_data)
        .bind(entry.created_at)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    /// 查询审计记录，按时间倒序
    pub async fn query_entries(
        &self,
        filters: &AuditTrailFilters,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AuditTrailEntry>, AppError> {
        let mut query = String::from("SELECT * FROM listing_audit_trail WHERE 1=1");
        let mut index = 0;

        if filters.listing_id.is_some() {
            index += 1;
            query.push_str(&format!(" AND listing_id = ${}", index));
        }
        if filters.action.is_some() {
            index += 1;
            query.push_str(&format!(" AND action = ${}", index));
        }

        query.push_str(&format!(
            " ORDER BY created_at DESC LIMIT ${} OFFSET ${}",
            index + 1,
            index + 2
        ));

        let mut query_builder = sqlx::query_as::<_, AuditTrailEntry>(&query);

        if let Some(listing_id) = filters.listing_id {
            query_builder = query_builder.bind(listing_id);
        }
        if let Some(action) = filters.action {
            query_builder = query_builder.bind(action);
        }

        let entries = query_builder
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.db)
            .await?;

        Ok(entries)
    }

    /// 统计审计记录数量
    pub async fn count_entries(&self, filters: &AuditTrailFilters) -> Result<i64, AppError> {
        let mut query = String::from("SELECT COUNT(*) FROM listing_audit_trail WHERE 1=1");
        let mut index = 0;

        if filters.listing_id.is_some() {
            index += 1;
            query.push_str(&format!(" AND listing_id = ${}", index));
        }
        if filters.action.is_some() {
            index += 1;
            query.push_str(&format!(" AND action = ${}", index));
        }

        let mut query_builder = sqlx::query(&query);

        if let Some(listing_id) = filters.listing_id {
            query_builder = query_builder.bind(listing_id);
        }
        if let Some(action) = filters.action {
            query_builder = query_builder.bind(action);
        }

        let count: i64 = query_builder.fetch_one(&self.db).await?.get(0);
        Ok(count)
    }
}
