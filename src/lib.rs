//! # Auth Service Library
//!
//! OTP 认证后端骨架核心库：请求诊断端点与认证实体存储层

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod server;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{Result, ServiceError};
