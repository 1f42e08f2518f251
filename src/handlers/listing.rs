//! 车源审核的 HTTP 处理器

use crate::{
    auth::middleware::AuthContext,
    error::AppError,
    middleware::AppState,
    models::{listing::*, pagination::Pagination},
};
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct ListingListQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// pending | approved | rejected | all
    pub status: Option<String>,
    pub search: Option<String>,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

/// 解析状态过滤参数；"all"/空串等价于不过滤
fn parse_status_filter(raw: Option<&str>) -> Result<Option<ListingStatus>, AppError> {
    match raw {
        None | Some("") | Some("all") => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("Invalid status filter: {}", s))),
    }
}

/// 列出车源（分页 + 状态/搜索过滤）
pub async fn list_listings(
    State(state): State<Arc<AppState>>,
    _auth_context: AuthContext,
    Query(query): Query<ListingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    super::validate_page_params(query.page, query.limit)?;

    let filters = ListingFilters {
        status: parse_status_filter(query.status.as_deref())?,
        search: query.search.filter(|s| !s.trim().is_empty()),
    };

    let offset = Pagination::offset(query.page, query.limit);
    let (listings, total) = state.listing_service.list(&filters, query.limit, offset).await?;

    Ok(Json(json!({
        "listings": listings,
        "pagination": Pagination::new(query.page, query.limit, total),
    })))
}

/// 查看车源详情（记录 viewed 审计）
pub async fn get_listing(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let listing = state
        .listing_service
        .view(id, auth_context.admin_id)
        .await?;

    Ok(Json(json!({ "listing": listing })))
}

/// 编辑车源
pub async fn update_listing(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateListingRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let listing = state
        .listing_service
        .update(id, &req, auth_context.admin_id)
        .await?;

    Ok(Json(json!({
        "message": "车源更新成功",
        "listing": listing,
    })))
}

/// 批准车源
pub async fn approve_listing(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let listing = state
        .listing_service
        .review(id, ReviewDecision::Approve, auth_context.admin_id)
        .await?;

    Ok(Json(json!({
        "message": "车源已批准",
        "listing": listing,
    })))
}

/// 拒绝车源
pub async fn reject_listing(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let listing = state
        .listing_service
        .review(id, ReviewDecision::Reject, auth_context.admin_id)
        .await?;

    Ok(Json(json!({
        "message": "车源已拒绝",
        "listing": listing,
    })))
}
