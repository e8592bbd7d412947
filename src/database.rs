//! # 数据库模块
//!
//! 数据库连接、迁移管理与基础数据初始化

use crate::database_error;
use crate::error::ServiceError;
use entity::{DEFAULT_ACTOR, DEFAULT_ACTOR_ID, organisations, users};
use sea_orm::{Database, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// 初始化数据库连接
pub async fn init_database(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    info!(
        "正在连接数据库: {}",
        if database_url.starts_with("sqlite:") {
            &database_url[..std::cmp::min(database_url.len(), 50)]
        } else {
            database_url
        }
    );

    // 对于SQLite数据库，确保数据库文件的目录和文件存在
    if database_url.starts_with("sqlite:") && !database_url.contains(":memory:") {
        let db_path = database_url
            .strip_prefix("sqlite://")
            .unwrap_or(database_url.strip_prefix("sqlite:").unwrap_or(database_url));
        let db_file_path = Path::new(db_path);

        // 确保父目录存在
        if let Some(parent_dir) = db_file_path.parent() {
            if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
                debug!("创建数据库目录: {}", parent_dir.display());
                std::fs::create_dir_all(parent_dir).map_err(|e| {
                    DbErr::Custom(format!(
                        "无法创建数据库目录 {}: {}",
                        parent_dir.display(),
                        e
                    ))
                })?;
            }
        }

        // 确保数据库文件存在（如果不存在则创建空文件）
        if !db_file_path.exists() {
            debug!("创建数据库文件: {}", db_file_path.display());
            std::fs::File::create(db_file_path).map_err(|e| {
                DbErr::Custom(format!(
                    "无法创建数据库文件 {}: {}",
                    db_file_path.display(),
                    e
                ))
            })?;
        }
    }

    let db = Database::connect(database_url).await?;

    info!("数据库连接成功");
    Ok(db)
}

/// 运行数据库迁移
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    info!("开始运行数据库迁移...");

    match ::migration::Migrator::up(db, None).await {
        Ok(()) => {
            info!("数据库迁移完成");
            Ok(())
        }
        Err(e) => {
            error!("数据库迁移失败: {}", e);
            Err(e)
        }
    }
}

/// 检查数据库状态
pub async fn check_database_status(db: &DatabaseConnection) -> Result<(), DbErr> {
    info!("检查数据库状态...");

    let status = ::migration::Migrator::get_pending_migrations(db).await?;

    if status.is_empty() {
        info!("所有迁移都已应用");
    } else {
        warn!("有 {} 个待应用的迁移", status.len());
    }

    Ok(())
}

/// 确保系统操作者存在
///
/// `created_by`/`updated_by` 与 `clients.user_id` 的缺省值引用保留操作者
/// [`DEFAULT_ACTOR`]，这里在空库上播种对应的机构与用户行，保证该引用始终可解析。
pub async fn ensure_system_actor(db: &DatabaseConnection) -> crate::error::Result<()> {
    info!("检查系统操作者数据...");

    let user_count = users::Entity::find()
        .count(db)
        .await
        .map_err(|e| database_error!("查询用户数据失败: {e}"))?;

    if user_count > 0 {
        if users::Entity::find_by_id(DEFAULT_ACTOR_ID)
            .one(db)
            .await
            .map_err(|e| database_error!("查询系统操作者失败: {e}"))?
            .is_none()
        {
            warn!("用户表非空但系统操作者 (id={DEFAULT_ACTOR_ID}) 不存在");
        }
        return Ok(());
    }

    info!("用户表为空，播种系统机构与系统操作者...");

    let org = organisations::ActiveModel::create(organisations::NewOrganisation {
        name: "SYSTEM".to_string(),
        state: "SYSTEM".to_string(),
        district: "SYSTEM".to_string(),
        address: "SYSTEM".to_string(),
    })?;
    let org_result = organisations::Entity::insert(org)
        .exec(db)
        .await
        .map_err(|e| ServiceError::database_with_source("插入系统机构失败", e))?;

    let system_user = users::ActiveModel::create(users::NewUser {
        firstname: "SYSTEM".to_string(),
        middlename: None,
        lastname: None,
        dob: chrono::NaiveDateTime::default(),
        mobile: "0000000000".to_string(),
        organisation_id: org_result.last_insert_id,
        created_by: Some(DEFAULT_ACTOR.to_string()),
        status: None,
        updated_by: None,
    })?;
    let user_result = users::Entity::insert(system_user)
        .exec(db)
        .await
        .map_err(|e| ServiceError::database_with_source("插入系统操作者失败", e))?;

    // 哨兵引用依赖系统操作者落在保留主键上
    if user_result.last_insert_id != DEFAULT_ACTOR_ID {
        return Err(database_error!(
            "系统操作者主键异常: 期望 {DEFAULT_ACTOR_ID}, 实际 {}",
            user_result.last_insert_id
        ));
    }

    info!("系统操作者播种完成 (id={DEFAULT_ACTOR_ID})");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::{clients, otps};
    use sea_orm::Database;

    async fn fresh_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        run_migrations(&db).await.unwrap();
        db
    }

    #[tokio::test]
    async fn system_actor_is_seeded_on_reserved_id() {
        let db = fresh_db().await;
        ensure_system_actor(&db).await.unwrap();

        let actor = users::Entity::find_by_id(DEFAULT_ACTOR_ID)
            .one(&db)
            .await
            .unwrap()
            .expect("系统操作者应存在");
        assert_eq!(actor.created_by, DEFAULT_ACTOR);
        assert_eq!(actor.updated_by, DEFAULT_ACTOR);

        // 重复调用不重复播种
        ensure_system_actor(&db).await.unwrap();
        assert_eq!(users::Entity::find().count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn second_otp_for_same_client_is_rejected() {
        let db = fresh_db().await;
        ensure_system_actor(&db).await.unwrap();

        let client = clients::ActiveModel::create(clients::NewClient {
            client_session_id: "sess-abc".to_string(),
            salt: "salty".to_string(),
            user_id: None,
            ip: None,
        })
        .unwrap();
        let client_id = clients::Entity::insert(client)
            .exec(&db)
            .await
            .unwrap()
            .last_insert_id;

        let first = otps::ActiveModel::create(client_id, "1234567").unwrap();
        otps::Entity::insert(first).exec(&db).await.unwrap();

        // 唯一索引保证每个会话至多一条 OTP 记录
        let second = otps::ActiveModel::create(client_id, "7654321").unwrap();
        let result = otps::Entity::insert(second).exec(&db).await;
        assert!(result.is_err());
    }
}
