//! # 实体定义测试
//!
//! 测试所有 Sea-ORM 实体构造器的缺省值、归一化与校验逻辑

#[cfg(test)]
mod tests {
    use crate::enums::{UserRole, UserStatus, ValidStatus};
    use crate::error::ValidationError;
    use crate::otps::OTP_MAX_LEN;
    use crate::{DEFAULT_ACTOR, DEFAULT_ACTOR_ID, clients, logs, organisations, otps, users};
    use chrono::NaiveDate;
    use sea_orm::ActiveValue;

    fn test_dob() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(1990, 4, 12)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn new_user_input() -> users::NewUser {
        users::NewUser {
            firstname: "john".to_string(),
            middlename: Some("k".to_string()),
            lastname: Some("doe".to_string()),
            dob: test_dob(),
            mobile: "9876543210".to_string(),
            organisation_id: 1,
            created_by: Some("7".to_string()),
            status: None,
            updated_by: None,
        }
    }

    #[test]
    fn user_names_are_uppercased() {
        let user = users::ActiveModel::create(new_user_input()).unwrap();

        assert_eq!(user.firstname.as_ref(), "JOHN");
        assert_eq!(user.middlename.as_ref(), &Some("K".to_string()));
        assert_eq!(user.lastname.as_ref(), &Some("DOE".to_string()));
    }

    #[test]
    fn user_uppercasing_is_idempotent() {
        let mut input = new_user_input();
        input.firstname = "JOHN".to_string();
        let user = users::ActiveModel::create(input).unwrap();

        assert_eq!(user.firstname.as_ref(), "JOHN");
    }

    #[test]
    fn user_updated_by_falls_back_to_created_by() {
        let user = users::ActiveModel::create(new_user_input()).unwrap();

        assert_eq!(user.created_by.as_ref(), "7");
        assert_eq!(user.updated_by.as_ref(), "7");
    }

    #[test]
    fn user_explicit_updated_by_is_kept() {
        let mut input = new_user_input();
        input.updated_by = Some("42".to_string());
        let user = users::ActiveModel::create(input).unwrap();

        assert_eq!(user.updated_by.as_ref(), "42");
    }

    #[test]
    fn user_defaults_to_created_status_and_guest_role() {
        let user = users::ActiveModel::create(new_user_input()).unwrap();

        assert_eq!(user.status.as_ref(), &UserStatus::Created);
        assert_eq!(user.role.as_ref(), &UserRole::Guest);
    }

    #[test]
    fn user_created_by_defaults_to_system_actor() {
        let mut input = new_user_input();
        input.created_by = None;
        let user = users::ActiveModel::create(input).unwrap();

        assert_eq!(user.created_by.as_ref(), DEFAULT_ACTOR);
        assert_eq!(user.updated_by.as_ref(), DEFAULT_ACTOR);
    }

    #[test]
    fn user_rejects_blank_firstname() {
        let mut input = new_user_input();
        input.firstname = "   ".to_string();
        let err = users::ActiveModel::create(input).unwrap_err();

        assert_eq!(err, ValidationError::MissingField("firstname"));
    }

    #[test]
    fn user_rejects_blank_mobile() {
        let mut input = new_user_input();
        input.mobile = String::new();
        let err = users::ActiveModel::create(input).unwrap_err();

        assert_eq!(err, ValidationError::MissingField("mobile"));
    }

    #[test]
    fn user_status_predicates_follow_status_field() {
        let mut user = users::Model {
            id: 1,
            firstname: "JOHN".to_string(),
            middlename: None,
            lastname: None,
            dob: test_dob(),
            mobile: "9876543210".to_string(),
            organisation_id: 1,
            role: UserRole::Guest,
            status: UserStatus::Created,
            created_by: "1".to_string(),
            created_at: test_dob(),
            updated_by: "1".to_string(),
            updated_at: test_dob(),
        };

        assert!(!user.is_active());
        assert!(!user.is_blocked());
        assert!(!user.is_deleted());

        user.status = UserStatus::Active;
        assert!(user.is_active());

        user.status = UserStatus::Blocked;
        assert!(user.is_blocked());

        // 逻辑删除：状态置为 deleted，行仍然存在
        user.status = UserStatus::Deleted;
        assert!(user.is_deleted());
        assert!(!user.is_active());
    }

    #[test]
    fn client_defaults_to_system_actor_and_valid_status() {
        let client = clients::ActiveModel::create(clients::NewClient {
            client_session_id: "sess-abc".to_string(),
            salt: "salty".to_string(),
            user_id: None,
            ip: None,
        })
        .unwrap();

        assert_eq!(client.user_id.as_ref(), &Some(DEFAULT_ACTOR_ID));
        assert_eq!(client.status.as_ref(), &ValidStatus::Valid);
    }

    #[test]
    fn client_keeps_explicit_user_reference() {
        let client = clients::ActiveModel::create(clients::NewClient {
            client_session_id: "sess-abc".to_string(),
            salt: "salty".to_string(),
            user_id: Some(9),
            ip: Some("10.0.0.8".to_string()),
        })
        .unwrap();

        assert_eq!(client.user_id.as_ref(), &Some(9));
        assert_eq!(client.ip.as_ref(), &Some("10.0.0.8".to_string()));
    }

    #[test]
    fn client_rejects_blank_session_id_and_salt() {
        let err = clients::ActiveModel::create(clients::NewClient {
            client_session_id: String::new(),
            salt: "salty".to_string(),
            user_id: None,
            ip: None,
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingField("client_session_id"));

        let err = clients::ActiveModel::create(clients::NewClient {
            client_session_id: "sess-abc".to_string(),
            salt: " ".to_string(),
            user_id: None,
            ip: None,
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingField("salt"));
    }

    #[test]
    fn client_set_status_flips_validity() {
        let mut client = clients::ActiveModel::create(clients::NewClient {
            client_session_id: "sess-abc".to_string(),
            salt: "salty".to_string(),
            user_id: None,
            ip: None,
        })
        .unwrap();
        assert_eq!(client.status.as_ref(), &ValidStatus::Valid);

        client.set_status(ValidStatus::Invalid);
        assert_eq!(client.status.as_ref(), &ValidStatus::Invalid);
    }

    #[test]
    fn client_model_is_valid_reads_status() {
        let model = clients::Model {
            id: 1,
            created_at: test_dob(),
            client_session_id: "sess-abc".to_string(),
            user_id: Some(DEFAULT_ACTOR_ID),
            status: ValidStatus::Valid,
            ip: None,
            salt: "salty".to_string(),
        };
        assert!(model.is_valid());

        let invalid = clients::Model {
            status: ValidStatus::Invalid,
            ..model
        };
        assert!(!invalid.is_valid());
    }

    #[test]
    fn otp_starts_valid_with_zeroed_counters() {
        let otp = otps::ActiveModel::create(1, "1234567").unwrap();

        assert_eq!(otp.client_id.as_ref(), &1);
        assert_eq!(otp.otp.as_ref(), "1234567");
        assert_eq!(otp.status.as_ref(), &ValidStatus::Valid);
        assert_eq!(otp.wrong_attempt.as_ref(), &0);
        assert_eq!(otp.send_attempt.as_ref(), &0);
    }

    #[test]
    fn otp_rejects_overlong_code() {
        let err = otps::ActiveModel::create(1, "12345678").unwrap_err();

        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "otp",
                max: OTP_MAX_LEN,
            }
        );
    }

    #[test]
    fn otp_rejects_blank_code() {
        let err = otps::ActiveModel::create(1, "").unwrap_err();

        assert_eq!(err, ValidationError::MissingField("otp"));
    }

    #[test]
    fn organisation_requires_all_fields() {
        let org = organisations::ActiveModel::create(organisations::NewOrganisation {
            name: "Acme Training".to_string(),
            state: "Kerala".to_string(),
            district: "Ernakulam".to_string(),
            address: "12 MG Road".to_string(),
        })
        .unwrap();
        assert_eq!(org.name.as_ref(), "Acme Training");

        let err = organisations::ActiveModel::create(organisations::NewOrganisation {
            name: "Acme Training".to_string(),
            state: String::new(),
            district: "Ernakulam".to_string(),
            address: "12 MG Road".to_string(),
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingField("state"));
    }

    #[test]
    fn log_entry_captures_origin() {
        let log = logs::ActiveModel::create("ERROR", "boom", "src/server/mod.rs", 42).unwrap();

        assert_eq!(log.level.as_ref(), "ERROR");
        assert_eq!(log.message.as_ref(), "boom");
        assert_eq!(log.pathname.as_ref(), "src/server/mod.rs");
        assert_eq!(log.lineno.as_ref(), &42);
        // created_at 由数据库填充
        assert!(matches!(log.created_at, ActiveValue::NotSet));
    }
}
