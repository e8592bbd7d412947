//! # HTTP 服务器模块
//!
//! 基于 Axum 的 HTTP 服务器：路由、处理器与统一响应格式

pub mod handlers;
pub mod response;
pub mod routes;
#[allow(clippy::module_inception)]
pub mod server;

pub use server::{AppContext, AppState, HttpServer};
