//! # Entity 模块
//!
//! 包含所有 Sea-ORM 实体定义

pub mod clients;
pub mod enums;
pub mod error;
pub mod logs;
pub mod organisations;
pub mod otps;
pub mod users;

pub use clients::Entity as Clients;
pub use logs::Entity as Logs;
pub use organisations::Entity as Organisations;
pub use otps::Entity as Otps;
pub use users::Entity as Users;

pub use enums::{UserRole, UserStatus, ValidStatus};
pub use error::ValidationError;

/// 系统/匿名操作者的保留标识（字符串形式，用于 `created_by` / `updated_by`）
pub const DEFAULT_ACTOR: &str = "1";

/// 系统/匿名操作者的保留主键（用于 `clients.user_id` 的缺省关联）
pub const DEFAULT_ACTOR_ID: i32 = 1;

#[cfg(test)]
mod tests;
