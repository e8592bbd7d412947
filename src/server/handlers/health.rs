//! 健康检查相关处理器

use axum::extract::State;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::server::{AppState, response};

/// 健康检查信息
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthInfo {
    pub status: String,
    pub database: String,
    pub version: String,
}

/// 服务健康检查
///
/// 始终返回 200，数据库连通性体现在 `database` 字段中。
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = match state.db.ping().await {
        Ok(()) => "connected".to_string(),
        Err(e) => {
            tracing::warn!("数据库健康检查失败: {}", e);
            "disconnected".to_string()
        }
    };

    response::success(HealthInfo {
        status: "healthy".to_string(),
        database,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
