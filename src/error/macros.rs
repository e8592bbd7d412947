//! # 错误处理宏

/// 快速创建配置错误的宏
#[macro_export]
macro_rules! config_error {
    ($($arg:tt)*) => {
        $crate::error::ServiceError::config(format!($($arg)*))
    };
}

/// 快速创建数据库错误的宏
#[macro_export]
macro_rules! database_error {
    ($($arg:tt)*) => {
        $crate::error::ServiceError::database(format!($($arg)*))
    };
}
