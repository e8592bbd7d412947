//! # 机构实体定义
//!
//! 机构信息表的 Sea-ORM 实体模型

use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// 机构实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "organisations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub state: String,
    pub district: String,
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::users::Entity")]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// 机构构造输入
#[derive(Debug, Clone)]
pub struct NewOrganisation {
    pub name: String,
    pub state: String,
    pub district: String,
    pub address: String,
}

impl ActiveModel {
    /// 构造新机构，所有字段均为必填
    pub fn create(input: NewOrganisation) -> Result<Self, ValidationError> {
        if input.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if input.state.trim().is_empty() {
            return Err(ValidationError::MissingField("state"));
        }
        if input.district.trim().is_empty() {
            return Err(ValidationError::MissingField("district"));
        }
        if input.address.trim().is_empty() {
            return Err(ValidationError::MissingField("address"));
        }

        Ok(Self {
            name: Set(input.name),
            state: Set(input.state),
            district: Set(input.district),
            address: Set(input.address),
            ..Default::default()
        })
    }
}
