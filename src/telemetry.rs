//! 日志与指标初始化
//! tracing 订阅器（json/pretty）与 metrics 描述注册

use crate::config::AppConfig;
use tracing_subscriber::EnvFilter;

/// 初始化日志订阅器
/// RUST_LOG 优先于配置中的日志级别
pub fn init_telemetry(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    match config.logging.format.to_lowercase().as_str() {
        "pretty" => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .pretty()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .init();
        }
    }
}

/// 注册指标描述
pub fn init_metrics() {
    metrics::describe_counter!("http_requests_total", "Total number of HTTP requests");
    metrics::describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request latency in seconds"
    );
    metrics::describe_counter!(
        "audit_trail_write_failures_total",
        "Audit trail inserts that failed and were swallowed"
    );
    metrics::describe_gauge!("db.pool.size", "Database connection pool size");
    metrics::describe_gauge!("db.pool.idle", "Idle database connections");
}
