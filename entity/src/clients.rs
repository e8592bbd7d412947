//! # 客户端会话实体定义
//!
//! 客户端会话表的 Sea-ORM 实体模型。
//! 会话可选地归属一个用户，缺省归属系统操作者；每个会话至多关联一条 OTP 记录，
//! 这一约束由 `otps.client_id` 上的唯一索引承载。

use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::DEFAULT_ACTOR_ID;
use crate::enums::ValidStatus;
use crate::error::ValidationError;

/// 客户端会话实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTime,
    #[sea_orm(unique)]
    pub client_session_id: String,
    pub user_id: Option<i32>,
    pub status: ValidStatus,
    pub ip: Option<String>,
    pub salt: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    User,
    #[sea_orm(has_one = "super::otps::Entity")]
    Otp,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::otps::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Otp.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// 客户端会话构造输入
#[derive(Debug, Clone)]
pub struct NewClient {
    pub client_session_id: String,
    pub salt: String,
    /// 未提供时归属系统操作者 [`DEFAULT_ACTOR_ID`]
    pub user_id: Option<i32>,
    pub ip: Option<String>,
}

impl ActiveModel {
    /// 构造新的客户端会话，初始状态为 `valid`
    pub fn create(input: NewClient) -> Result<Self, ValidationError> {
        if input.client_session_id.trim().is_empty() {
            return Err(ValidationError::MissingField("client_session_id"));
        }
        if input.salt.trim().is_empty() {
            return Err(ValidationError::MissingField("salt"));
        }

        Ok(Self {
            client_session_id: Set(input.client_session_id),
            user_id: Set(Some(input.user_id.unwrap_or(DEFAULT_ACTOR_ID))),
            status: Set(ValidStatus::Valid),
            ip: Set(input.ip),
            salt: Set(input.salt),
            ..Default::default()
        })
    }

    /// 覆写会话状态
    ///
    /// 仅写字段，不做状态迁移校验。
    pub fn set_status(&mut self, status: ValidStatus) {
        self.status = Set(status);
    }
}

impl Model {
    /// 会话是否有效
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.status == ValidStatus::Valid
    }
}
