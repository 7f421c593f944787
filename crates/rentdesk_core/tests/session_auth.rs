use rentdesk_core::db::migrations::latest_version;
use rentdesk_core::db::open_db_in_memory;
use rentdesk_core::service::session_service::{
    KEY_IS_AUTH, KEY_USERNAME, KEY_USER_PROFILE, KEY_USER_ROLE,
};
use rentdesk_core::{
    RepoError, RoleKind, SessionService, SettingsRepository, SqliteSettingsRepository, Theme,
    UserProfile,
};
use rusqlite::Connection;

#[test]
fn admin_credentials_log_in_with_admin_role() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::try_new(&conn).unwrap();
    let mut session = SessionService::load(repo).unwrap();

    assert!(session.login("admin", "772012").unwrap());
    assert!(session.is_authenticated());
    assert_eq!(session.role(), Some(RoleKind::Admin));
    assert_eq!(session.username(), Some("admin"));

    let reader = SqliteSettingsRepository::try_new(&conn).unwrap();
    assert_eq!(reader.get(KEY_IS_AUTH).unwrap().as_deref(), Some("true"));
    assert_eq!(reader.get(KEY_USER_ROLE).unwrap().as_deref(), Some("Admin"));
    assert_eq!(reader.get(KEY_USERNAME).unwrap().as_deref(), Some("admin"));
}

#[test]
fn employee_credentials_log_in_with_employee_role() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::try_new(&conn).unwrap();
    let mut session = SessionService::load(repo).unwrap();

    assert!(session.login("employee", "123").unwrap());
    assert_eq!(session.role(), Some(RoleKind::Employee));
}

#[test]
fn wrong_credentials_leave_prior_state_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::try_new(&conn).unwrap();
    let mut session = SessionService::load(repo).unwrap();

    assert!(session.login("admin", "772012").unwrap());
    assert!(!session.login("admin", "wrong").unwrap());
    assert!(!session.login("guest", "123").unwrap());

    assert!(session.is_authenticated());
    assert_eq!(session.role(), Some(RoleKind::Admin));

    let reader = SqliteSettingsRepository::try_new(&conn).unwrap();
    assert_eq!(reader.get(KEY_USER_ROLE).unwrap().as_deref(), Some("Admin"));
}

#[test]
fn logout_removes_session_keys_and_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::try_new(&conn).unwrap();
    let mut session = SessionService::load(repo).unwrap();

    session.login("admin", "772012").unwrap();
    session.logout().unwrap();
    session.logout().unwrap();

    assert!(!session.is_authenticated());
    assert_eq!(session.role(), None);
    assert_eq!(session.username(), None);

    let reader = SqliteSettingsRepository::try_new(&conn).unwrap();
    assert_eq!(reader.get(KEY_IS_AUTH).unwrap(), None);
    assert_eq!(reader.get(KEY_USER_ROLE).unwrap(), None);
    assert_eq!(reader.get(KEY_USERNAME).unwrap(), None);
}

#[test]
fn session_rehydrates_from_persisted_keys() {
    let conn = open_db_in_memory().unwrap();

    {
        let repo = SqliteSettingsRepository::try_new(&conn).unwrap();
        let mut session = SessionService::load(repo).unwrap();
        session.login("employee", "123").unwrap();
    }

    let repo = SqliteSettingsRepository::try_new(&conn).unwrap();
    let session = SessionService::load(repo).unwrap();
    assert!(session.is_authenticated());
    assert_eq!(session.role(), Some(RoleKind::Employee));
    assert_eq!(session.username(), Some("employee"));
}

#[test]
fn profile_round_trips_through_persistence() {
    let conn = open_db_in_memory().unwrap();
    let profile = UserProfile {
        first_name: "Huda".to_string(),
        last_name: "Saleh".to_string(),
        email: "huda@prms.com".to_string(),
        phone: "+971 50 111 2222".to_string(),
        photo: "https://example.com/huda.png".to_string(),
    };

    {
        let repo = SqliteSettingsRepository::try_new(&conn).unwrap();
        let mut session = SessionService::load(repo).unwrap();
        session.update_profile(profile.clone()).unwrap();
    }

    let repo = SqliteSettingsRepository::try_new(&conn).unwrap();
    let session = SessionService::load(repo).unwrap();
    assert_eq!(session.profile(), &profile);
}

#[test]
fn corrupt_persisted_profile_falls_back_to_default() {
    let conn = open_db_in_memory().unwrap();

    {
        let repo = SqliteSettingsRepository::try_new(&conn).unwrap();
        repo.set(KEY_USER_PROFILE, "@@not-base64@@").unwrap();
    }

    let repo = SqliteSettingsRepository::try_new(&conn).unwrap();
    let session = SessionService::load(repo).unwrap();
    assert_eq!(session.profile(), &UserProfile::default());
}

#[test]
fn missing_profile_uses_default() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::try_new(&conn).unwrap();
    let session = SessionService::load(repo).unwrap();

    assert_eq!(session.profile(), &UserProfile::default());
    assert!(!session.is_authenticated());
}

#[test]
fn theme_defaults_to_light_and_persists() {
    let conn = open_db_in_memory().unwrap();

    {
        let repo = SqliteSettingsRepository::try_new(&conn).unwrap();
        let mut session = SessionService::load(repo).unwrap();
        assert_eq!(session.theme(), Theme::Light);
        session.set_theme(Theme::Dark).unwrap();
    }

    let repo = SqliteSettingsRepository::try_new(&conn).unwrap();
    let session = SessionService::load(repo).unwrap();
    assert_eq!(session.theme(), Theme::Dark);
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteSettingsRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_settings_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteSettingsRepository::try_new(&conn),
        Err(RepoError::MissingRequiredTable("settings"))
    ));
}
