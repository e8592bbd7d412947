//! # Auth Service 主程序
//!
//! 进程启动：日志 → 配置 → 数据库初始化 → HTTP 服务器

use std::sync::Arc;

use auth_service::server::{AppContext, HttpServer};
use auth_service::{Result, ServiceError, config, database, logging};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志系统
    logging::init_logging(None);

    // 执行数据初始化（数据库连接、迁移与基础数据）
    let context = run_data_initialization()
        .await
        .map_err(|e| ServiceError::Database {
            message: format!("数据初始化失败: {e}"),
            source: Some(e),
        })?;

    // 启动服务
    info!("服务启动");
    let server = HttpServer::new(Arc::new(context))?;
    if let Err(e) = server.serve().await {
        error!("服务启动失败: {e:?}");
        std::process::exit(1);
    }

    info!("服务正常关闭");
    Ok(())
}

/// 数据初始化函数
async fn run_data_initialization() -> anyhow::Result<AppContext> {
    info!("开始数据初始化过程...");

    // 获取配置并初始化数据库连接
    let config = config::load_config().map_err(|e| anyhow::anyhow!("配置加载失败: {e}"))?;

    let db = database::init_database(&config.database.url)
        .await
        .map_err(|e| anyhow::anyhow!("数据库连接失败: {e}"))?;

    // 首先运行数据库迁移，确保表结构存在
    info!("执行数据库迁移...");
    database::run_migrations(&db)
        .await
        .map_err(|e| anyhow::anyhow!("数据库迁移失败: {e}"))?;

    database::check_database_status(&db)
        .await
        .map_err(|e| anyhow::anyhow!("数据库状态检查失败: {e}"))?;

    // 检查基础数据并按需播种
    info!("检查基础数据完整性...");
    database::ensure_system_actor(&db)
        .await
        .map_err(|e| anyhow::anyhow!("基础数据检查失败: {e}"))?;

    info!("数据初始化过程完成");
    Ok(AppContext { config, db })
}
