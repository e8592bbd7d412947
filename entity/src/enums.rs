//! # 状态枚举定义
//!
//! 所有实体共享的字符串枚举。取值集合是封闭的：
//! 数据库列为字符串，映射到这里的枚举，任何集合外的值都无法表示。

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 用户生命周期状态
///
/// 注意：状态间不存在强制的迁移图，任意状态都可以被直接写入。
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[sea_orm(string_value = "created")]
    Created,
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "blocked")]
    Blocked,
    #[sea_orm(string_value = "disabled")]
    Disabled,
    #[sea_orm(string_value = "deleted")]
    Deleted,
}

impl Default for UserStatus {
    fn default() -> Self {
        Self::Created
    }
}

/// 用户角色
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[sea_orm(string_value = "superadmin")]
    Superadmin,
    #[sea_orm(string_value = "trainer")]
    Trainer,
    #[sea_orm(string_value = "user")]
    User,
    #[sea_orm(string_value = "guest")]
    Guest,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Guest
    }
}

/// 有效/无效二值状态（客户端会话与 OTP 共用）
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum ValidStatus {
    #[sea_orm(string_value = "valid")]
    Valid,
    #[sea_orm(string_value = "invalid")]
    Invalid,
}

impl Default for ValidStatus {
    fn default() -> Self {
        Self::Valid
    }
}
