//! # HTTP 服务器
//!
//! Axum HTTP服务器，承载请求诊断端点与健康检查API

use std::net::SocketAddr;
use std::ops::Deref;
use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{AppConfig, ServerConfig};
use crate::error::{Result, ServiceError};

/// 应用上下文
///
/// 持久层句柄在进程启动时初始化一次，此后作为上下文显式传递，
/// 不存在模块级的全局句柄。
pub struct AppContext {
    /// 应用配置
    pub config: AppConfig,
    /// 数据库连接
    pub db: DatabaseConnection,
}

/// 服务器应用状态
#[derive(Clone)]
pub struct AppState {
    context: Arc<AppContext>,
}

impl AppState {
    #[must_use]
    pub const fn new(context: Arc<AppContext>) -> Self {
        Self { context }
    }
}

impl Deref for AppState {
    type Target = AppContext;

    fn deref(&self) -> &Self::Target {
        &self.context
    }
}

/// HTTP 服务器
pub struct HttpServer {
    /// 服务器配置
    config: ServerConfig,
    /// 路由器
    router: Router,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(context: Arc<AppContext>) -> Result<Self> {
        let config = context.config.server.clone();
        let state = AppState::new(context);
        let router = Self::create_router(state, &config);

        Ok(Self { config, router })
    }

    /// 创建路由器
    fn create_router(state: AppState, config: &ServerConfig) -> Router {
        let mut router = super::routes::create_routes(state).layer(TraceLayer::new_for_http());

        if config.enable_cors {
            router = router.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        router
    }

    /// 启动服务器并阻塞至退出
    pub async fn serve(self) -> Result<()> {
        let addr: SocketAddr = format!("{}:{}", self.config.bind_address, self.config.port)
            .parse()
            .map_err(|e| {
                ServiceError::server_init(format!(
                    "无效的监听地址 {}:{} ({e})",
                    self.config.bind_address, self.config.port
                ))
            })?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServiceError::server_start_with_source(format!("监听 {addr} 失败"), e))?;

        info!("HTTP 服务器监听于 {}", addr);

        axum::serve(
            listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .map_err(|e| ServiceError::server_start_with_source("服务器运行失败", e))
    }
}
