//! # 实体构造错误

use thiserror::Error;

/// 实体构造阶段的校验错误
///
/// 引用完整性（外键、唯一约束）不在这里检查，由持久层负责。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// 必填字段缺失或为空白
    #[error("缺少必填字段: {0}")]
    MissingField(&'static str),

    /// 字段超出长度限制
    #[error("字段 {field} 超出长度限制 (最大 {max} 字符)")]
    TooLong { field: &'static str, max: usize },
}
