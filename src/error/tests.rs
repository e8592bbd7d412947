use super::{Context, ServiceError};
use pretty_assertions::assert_eq;

#[test]
fn constructors_produce_expected_variants() {
    assert!(matches!(
        ServiceError::config("bad"),
        ServiceError::Config { .. }
    ));
    assert!(matches!(
        ServiceError::database("down"),
        ServiceError::Database { .. }
    ));
    assert!(matches!(
        ServiceError::business("nope"),
        ServiceError::Business { .. }
    ));
}

#[test]
fn validation_error_converts_from_entity() {
    let err: ServiceError = entity::ValidationError::MissingField("firstname").into();

    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(err.to_string(), "校验错误: 缺少必填字段: firstname");
}

#[test]
fn db_err_converts_to_database_variant() {
    let err: ServiceError = sea_orm::DbErr::Custom("connection lost".to_string()).into();

    assert!(matches!(err, ServiceError::Database { .. }));
}

#[test]
fn context_wraps_the_source_error() {
    let result: super::Result<()> =
        Err(sea_orm::DbErr::Custom("boom".to_string())).context("迁移执行失败");

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "迁移执行失败");
    assert!(matches!(err, ServiceError::Context { .. }));
}
