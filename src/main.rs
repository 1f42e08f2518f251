//! 车源审核后台服务主入口

use listing_admin::{
    auth::jwt::JwtService,
    config::AppConfig,
    db,
    handlers::health,
    middleware::AppState,
    routes,
    services::{AuditService, ListingService},
    telemetry,
};
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::watch;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ===== CLI 参数处理 =====
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" => {
                println!("listing-admin {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("未知参数: {}", args[1]);
                print_help();
                std::process::exit(1);
            }
        }
    }

    // 加载 .env 文件（开发环境）
    // 按优先级加载：.env.local > .env.development > .env
    // 生产环境应该直接设置环境变量，不依赖 .env 文件
    if let Ok(path) = std::env::var("ADMIN_ENV") {
        dotenv::from_filename(format!(".env.{}", path)).ok();
    } else {
        dotenv::from_filename(".env.local").ok();
        dotenv::from_filename(".env.development").ok();
        dotenv::dotenv().ok();
    }

    // 设置应用启动时间
    health::set_start_time();

    // 1. 加载配置
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        anyhow::anyhow!("Failed to load configuration: {}", e)
    })?;

    // 2. 初始化日志与指标
    telemetry::init_telemetry(&config);
    telemetry::init_metrics();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Listing admin service starting..."
    );

    // 3. 数据库连接池 + 迁移
    let db_pool = db::create_pool(&config.database).await?;
    db::run_migrations(&db_pool).await?;

    tracing::info!("Database initialized");

    // 4. 构建应用状态
    let jwt_service = Arc::new(JwtService::from_config(&config));
    let audit_service = Arc::new(AuditService::new(db_pool.clone()));
    let listing_service = Arc::new(ListingService::new(
        db_pool.clone(),
        audit_service.clone(),
    ));

    let app_state = Arc::new(AppState {
        config: config.clone(),
        db: db_pool,
        listing_service,
        audit_service,
        jwt_service,
    });

    // 5. 构建路由
    let app = routes::create_router(app_state);

    // 6. 启动服务器
    let addr = &config.server.addr;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(
        addr = %addr,
        "Server listening"
    );

    // 7. 优雅关闭：信号到达后开始排空，排空时长受超时约束
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(wait_for_shutdown_signal(shutdown_tx));

    let mut drain_signal = shutdown_rx.clone();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = drain_signal.changed().await;
    });

    let forced = serve_with_deadline(
        server.into_future(),
        shutdown_rx,
        config.server.graceful_shutdown_timeout_secs,
    )
    .await?;

    if forced {
        tracing::warn!("Graceful shutdown timeout reached, forcing exit");
    } else {
        tracing::info!("Server shutdown complete");
    }
    Ok(())
}

/// 等待关闭信号（Ctrl+C / SIGTERM）并广播
async fn wait_for_shutdown_signal(tx: watch::Sender<bool>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Terminate signal received, starting graceful shutdown");
        },
    }

    let _ = tx.send(true);
}

/// 等待服务器排空；信号到达后超过时限仍未排空则放弃等待。
/// 返回是否因超时被强制结束。
async fn serve_with_deadline<F>(
    server: F,
    mut shutdown: watch::Receiver<bool>,
    timeout_secs: u64,
) -> std::io::Result<bool>
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    tokio::select! {
        result = server => {
            result?;
            Ok(false)
        }
        _ = async {
            let _ = shutdown.changed().await;
            tokio::time::sleep(tokio::time::Duration::from_secs(timeout_secs)).await;
        } => Ok(true)
    }
}


/// 打印帮助信息
fn print_help() {
    println!("listing-admin {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("用法: listing-admin [选项]");
    println!();
    println!("选项:");
    println!("  --version     打印版本信息并退出");
    println!("  --help        打印此帮助信息并退出");
    println!();
    println!("环境变量:");
    println!("  所有配置通过环境变量完成");
    println!("  可用选项请参考 .env.example");
}
