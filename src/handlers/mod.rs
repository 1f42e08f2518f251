//! HTTP 处理器模块

pub mod audit;
pub mod health;
pub mod listing;
pub mod metrics;

use crate::error::AppError;

/// 校验分页参数：page >= 1 且 limit >= 1
pub(crate) fn validate_page_params(page: i64, limit: i64) -> Result<(), AppError> {
    if page < 1 {
        return Err(AppError::BadRequest("page must be >= 1".to_string()));
    }
    if limit < 1 {
        return Err(AppError::BadRequest("limit must be >= 1".to_string()));
    }
    Ok(())
}
