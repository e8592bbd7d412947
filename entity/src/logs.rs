//! # 日志实体定义
//!
//! 审计日志表的 Sea-ORM 实体模型。只追加，与其他实体无关联。

use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// 审计日志实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub level: String,
    pub message: String,
    pub pathname: String,
    pub lineno: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// 构造一条审计日志记录
    pub fn create(
        level: impl Into<String>,
        message: impl Into<String>,
        pathname: impl Into<String>,
        lineno: i32,
    ) -> Result<Self, ValidationError> {
        let level = level.into();
        let message = message.into();
        let pathname = pathname.into();

        if level.trim().is_empty() {
            return Err(ValidationError::MissingField("level"));
        }
        if message.trim().is_empty() {
            return Err(ValidationError::MissingField("message"));
        }
        if pathname.trim().is_empty() {
            return Err(ValidationError::MissingField("pathname"));
        }

        Ok(Self {
            level: Set(level),
            message: Set(message),
            pathname: Set(pathname),
            lineno: Set(lineno),
            ..Default::default()
        })
    }
}
