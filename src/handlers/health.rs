//! 健康检查处理器
//! /health 存活探针，/ready 就绪探针（含数据库检查）

use crate::{db, middleware::AppState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// 记录应用启动时间（main 启动时调用一次）
pub fn set_start_time() {
    let _ = START_TIME.set(Instant::now());
}

/// 启动以来的秒数
pub fn get_uptime() -> u64 {
    START_TIME
        .get()
        .map(|start| start.elapsed().as_secs())
        .unwrap_or(0)
}

/// 存活检查：不触达数据库
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": get_uptime(),
    }))
}

/// 就绪检查：数据库不可用时返回 503
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let (ready, db_status) = match db::health_check(&state.db).await {
        db::HealthStatus::Healthy => (true, "ok"),
        db::HealthStatus::Unhealthy(_) => (false, "failed"),
    };

    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(json!({
            "ready": ready,
            "checks": [
                { "name": "database", "status": db_status }
            ],
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uptime_after_start() {
        set_start_time();
        // set 之后 uptime 单调不减
        let first = get_uptime();
        assert!(get_uptime() >= first);
    }
}
