//! 审计记录的 HTTP 处理器

use crate::{
    auth::middleware::AuthContext,
    error::AppError,
    middleware::AppState,
    models::{audit::*, pagination::Pagination},
};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct AuditTrailQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub listing_id: Option<Uuid>,
    /// viewed | approved | rejected | edited
    pub action: Option<String>,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    20
}

fn parse_action_filter(raw: Option<&str>) -> Result<Option<AuditAction>, AppError> {
    match raw {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("Invalid action filter: {}", s))),
    }
}

/// 列出审计记录（分页 + 车源/操作过滤）
/// 不过滤车源的软删除状态：已删除车源的历史记录仍然可见
pub async fn list_audit_trail(
    State(state): State<Arc<AppState>>,
    _auth_context: AuthContext,
    Query(query): Query<AuditTrailQuery>,
) -> Result<impl IntoResponse, AppError> {
    super::validate_page_params(query.page, query.limit)?;

    let filters = AuditTrailFilters {
        listing_id: query.listing_id,
        action: parse_action_filter(query.action.as_deref())?,
    };

    let offset = Pagination::offset(query.page, query.limit);
    let entries = state
        .audit_service
        .query_entries(&filters, query.limit, offset)
        .await?;
    let total = state.audit_service.count_entries(&filters).await?;

    Ok(Json(json!({
        "audit_trail": entries,
        "pagination": Pagination::new(query.page, query.limit, total),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action_filter() {
        assert_eq!(parse_action_filter(None).unwrap(), None);
        assert_eq!(parse_action_filter(Some("")).unwrap(), None);
        assert_eq!(
            parse_action_filter(Some("viewed")).unwrap(),
            Some(AuditAction::Viewed)
        );
        assert_eq!(
            parse_action_filter(Some("edited")).unwrap(),
            Some(AuditAction::Edited)
        );
        assert!(parse_action_filter(Some("bogus")).is_err());
    }

    #[test]
    fn test_audit_default_limit_differs_from_listings() {
        assert_eq!(default_limit(), 20);
    }
}
