//! # 日志配置模块
//!
//! 初始化 tracing 日志系统，默认抑制数据库查询的详细日志

use std::env;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化日志系统
///
/// 过滤规则优先取 `RUST_LOG` 环境变量；未设置时使用内置默认值，
/// 生产环境下关闭 sqlx 查询日志。
pub fn init_logging(log_level: Option<&String>) {
    let level = log_level.map_or("info", std::string::String::as_str);

    // 默认配置：完全禁止数据库查询的详细日志
    let default_filter =
        format!("{level},auth_service=debug,sqlx::query=off,sea_orm::query=warn,sqlx=warn");

    let log_filter = env::var("RUST_LOG").unwrap_or(default_filter);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| log_filter.into()))
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false),
        )
        .init();
}
