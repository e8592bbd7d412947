//! # 路由配置
//!
//! 定义所有API路由和路由组织

use axum::Router;
use axum::routing::get;

use crate::server::server::AppState;

/// 创建所有路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // 请求诊断端点
        .route(
            "/info",
            get(crate::server::handlers::inspect::inspect)
                .post(crate::server::handlers::inspect::inspect),
        )
        // 健康检查路由
        .nest("/health", health_routes())
        .with_state(state)
}

/// 健康检查路由
fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(crate::server::handlers::health::health_check))
}
