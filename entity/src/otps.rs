//! # OTP 实体定义
//!
//! 一次性密码记录表的 Sea-ORM 实体模型。
//! 每条记录绑定唯一的客户端会话；这里只定义存储字段，
//! 不实现下发或校验算法。

use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::enums::ValidStatus;
use crate::error::ValidationError;

/// OTP 码的最大长度
pub const OTP_MAX_LEN: usize = 7;

/// OTP 实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "otps")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub client_id: i32,
    pub otp: String,
    pub created_at: DateTime,
    pub status: ValidStatus,
    pub wrong_attempt: i32,
    pub send_attempt: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clients::Entity",
        from = "Column::ClientId",
        to = "super::clients::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Client,
}

impl Related<super::clients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// 为指定客户端会话构造 OTP 记录
    ///
    /// 计数器从 0 开始，初始状态为 `valid`。
    /// `client_id` 的唯一性由持久层的唯一索引保证，这里不做查询。
    pub fn create(client_id: i32, otp: impl Into<String>) -> Result<Self, ValidationError> {
        let otp = otp.into();
        if otp.trim().is_empty() {
            return Err(ValidationError::MissingField("otp"));
        }
        if otp.chars().count() > OTP_MAX_LEN {
            return Err(ValidationError::TooLong {
                field: "otp",
                max: OTP_MAX_LEN,
            });
        }

        Ok(Self {
            client_id: Set(client_id),
            otp: Set(otp),
            status: Set(ValidStatus::Valid),
            wrong_attempt: Set(0),
            send_attempt: Set(0),
            ..Default::default()
        })
    }
}
