//! Listing repository (车源数据访问)
//!
//! 所有业务读取都带 deleted_at IS NULL 谓词，软删除过滤只在这一层做

use crate::{error::AppError, models::listing::*};
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub struct ListingRepository {
    db: PgPool,
}

impl ListingRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 列出车源，按创建时间倒序
    pub async fn list(
        &self,
        filters: &ListingFilters,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CarListing>, AppError> {
        let mut query = String::from("SELECT * FROM car_listings WHERE deleted_at IS NULL");
        let mut index = 0;

        if filters.status.is_some() {
            index += 1;
            query.push_str(&format!(" AND status = ${}", index));
        }
        if filters.search.is_some() {
            index += 1;
            query.push_str(&format!(
                " AND (make ILIKE ${i} OR model ILIKE ${i} OR location ILIKE ${i} OR owner_name ILIKE ${i})",
                i = index
            ));
        }

        query.push_str(&format!(
            " ORDER BY created_at DESC LIMIT ${} OFFSET ${}",
            index + 1,
            index + 2
        ));

        let mut query_builder = sqlx::query_as::<_, CarListing>(&query);

        if let Some(status) = filters.status {
            query_builder = query_builder.bind(status);
        }
        if let Some(search) = &filters.search {
            query_builder = query_builder.bind(like_pattern(search));
        }

        let listings = query_builder
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.db)
            .await?;

        Ok(listings)
    }

    /// 统计符合过滤条件的车源数量
    pub async fn count(&self, filters: &ListingFilters) -> Result<i64, AppError> {
        let mut query = String::from("SELECT COUNT(*) FROM car_listings WHERE deleted_at IS NULL");
        let mut index = 0;

        if filters.status.is_some() {
            index += 1;
            query.push_str(&format!(" AND status = ${}", index));
        }
        if filters.search.is_some() {
            index += 1;
            query.push_str(&format!(
                " AND (make ILIKE ${i} OR model ILIKE ${i} OR location ILIKE ${i} OR owner_name ILIKE ${i})",
                i = index
            ));
        }

        let mut query_builder = sqlx::query(&query);

        if let Some(status) = filters.status {
            query_builder = query_builder.bind(status);
        }
        if let Some(search) = &filters.search {
            query_builder = query_builder.bind(like_pattern(search));
        }

        let count: i64 = query_builder.fetch_one(&self.db).await?.get(0);
        Ok(count)
    }

    /// 获取单个车源（排除软删除）
    pub async fn get(&self, id: Uuid) -> Result<Option<CarListing>, AppError> {
        let listing = sqlx::query_as::<_, CarListing>(
            "SELECT * FROM car_listings WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(listing)
    }

    /// 全字段替换可编辑属性；id/created_at/deleted_at 不可变
    pub async fn update(
        &self,
        id: Uuid,
        req: &UpdateListingRequest,
    ) -> Result<Option<CarListing>, AppError> {
        let listing = sqlx::query_as::<_, CarListing>(
            r#"
            UPDATE car_listings
            SET
                make = $2,
                model = $3,
                year = $4,
                price = $5,
                location = $6,
                description = $7,
                image_urls = $8,
                owner_name = $9,
                owner_email = $10,
                owner_phone = $11,
                mileage = $12,
                fuel_type = $13,
                transmission = $14,
                features = $15,
                status = $16,
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&req.make)
        .bind(&req.model)
        .bind(req.year)
        .bind(req.price)
        .bind(&req.location)
        .bind(&req.description)
        .bind(&req.image_urls)
        .bind(&req.owner_name)
        .bind(&req.owner_email)
        .bind(&req.owner_phone)
        .bind(req.mileage)
        .bind(req.fuel_type)
        .bind(req.transmission)
        .bind(&req.features)
        .bind(req.status)
        .fetch_optional(&self.db)
        .await?;

        Ok(listing)
    }

    /// 只写状态字段（批准/拒绝）
    pub async fn set_status(
        &self,
        id: Uuid,
        status: ListingStatus,
    ) -> Result<Option<CarListing>, AppError> {
        let listing = sqlx::query_as::<_, CarListing>(
            r#"
            UPDATE car_listings
            SET status = $2, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.db)
        .await?;

        Ok(listing)
    }
}

/// 搜索词转 ILIKE 模式：转义通配符后做两侧模糊匹配
pub(crate) fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_plain() {
        assert_eq!(like_pattern("toyota"), "%toyota%");
        assert_eq!(like_pattern("TOY"), "%TOY%");
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("back\\slash"), "%back\\\\slash%");
    }
}
