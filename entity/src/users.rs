//! # 用户实体定义
//!
//! 用户基础信息表的 Sea-ORM 实体模型。
//! 用户属于唯一的机构，删除是逻辑删除（状态置为 `deleted`，不移除行）。

use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::DEFAULT_ACTOR;
use crate::enums::{UserRole, UserStatus};
use crate::error::ValidationError;

/// 用户实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub firstname: String,
    pub middlename: Option<String>,
    pub lastname: Option<String>,
    pub dob: DateTime,
    pub mobile: String,
    pub organisation_id: i32,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_by: String,
    pub created_at: DateTime,
    pub updated_by: String,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organisations::Entity",
        from = "Column::OrganisationId",
        to = "super::organisations::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Organisation,
    #[sea_orm(has_many = "super::clients::Entity")]
    Clients,
}

impl Related<super::organisations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organisation.def()
    }
}

impl Related<super::clients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// 用户构造输入
#[derive(Debug, Clone)]
pub struct NewUser {
    pub firstname: String,
    pub middlename: Option<String>,
    pub lastname: Option<String>,
    pub dob: DateTime,
    pub mobile: String,
    pub organisation_id: i32,
    /// 操作者标识，缺省为系统操作者 [`DEFAULT_ACTOR`]
    pub created_by: Option<String>,
    /// 缺省为 `created` 状态
    pub status: Option<UserStatus>,
    /// 缺省回落到 `created_by`
    pub updated_by: Option<String>,
}

impl ActiveModel {
    /// 构造新用户
    ///
    /// 姓名统一转为大写（对已是大写的输入幂等）；
    /// `updated_by` 未提供时回落到 `created_by`。
    pub fn create(input: NewUser) -> Result<Self, ValidationError> {
        if input.firstname.trim().is_empty() {
            return Err(ValidationError::MissingField("firstname"));
        }
        if input.mobile.trim().is_empty() {
            return Err(ValidationError::MissingField("mobile"));
        }

        let created_by = match input.created_by {
            Some(actor) if !actor.trim().is_empty() => actor,
            Some(_) => return Err(ValidationError::MissingField("created_by")),
            None => DEFAULT_ACTOR.to_string(),
        };
        let updated_by = input.updated_by.unwrap_or_else(|| created_by.clone());

        Ok(Self {
            firstname: Set(input.firstname.to_uppercase()),
            middlename: Set(input.middlename.map(|name| name.to_uppercase())),
            lastname: Set(input.lastname.map(|name| name.to_uppercase())),
            dob: Set(input.dob),
            mobile: Set(input.mobile),
            organisation_id: Set(input.organisation_id),
            role: Set(UserRole::default()),
            status: Set(input.status.unwrap_or_default()),
            created_by: Set(created_by),
            updated_by: Set(updated_by),
            ..Default::default()
        })
    }
}

impl Model {
    /// 用户是否处于激活状态
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// 用户是否被封禁
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.status == UserStatus::Blocked
    }

    /// 用户是否已被逻辑删除
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.status == UserStatus::Deleted
    }
}
