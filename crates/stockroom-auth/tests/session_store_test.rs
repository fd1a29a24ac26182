//! Integration tests for the session store.

use stockroom_auth::config::AuthConfig;
use stockroom_auth::error::AuthError;
use stockroom_auth::gate::{Decision, can_enter};
use stockroom_auth::session::{LoginInput, SessionStore};
use stockroom_auth::state::SessionState;
use stockroom_core::models::identity::Role;
use stockroom_core::error::{StockroomError, StockroomResult};
use stockroom_core::repository::KeyValueStore;
use stockroom_store::{MemoryKeyValueStore, StaticCredentialDirectory};

fn setup() -> (
    SessionStore<StaticCredentialDirectory, MemoryKeyValueStore>,
    StaticCredentialDirectory,
    MemoryKeyValueStore,
) {
    let directory = StaticCredentialDirectory::demo(None).unwrap();
    let kv = MemoryKeyValueStore::new();
    let store = SessionStore::new(directory.clone(), kv.clone(), AuthConfig::default());
    (store, directory, kv)
}

/// A fresh store over the same directory and storage, as after a
/// process restart.
fn restart(
    directory: &StaticCredentialDirectory,
    kv: &MemoryKeyValueStore,
) -> SessionStore<StaticCredentialDirectory, MemoryKeyValueStore> {
    SessionStore::new(directory.clone(), kv.clone(), AuthConfig::default())
}

#[tokio::test]
async fn manager_login_round_trips_through_persistence() {
    let (mut store, directory, kv) = setup();

    let session = store
        .login(LoginInput::new("manager@company.com", "manager123"))
        .await
        .unwrap();
    assert_eq!(session.role(), Role::Manager);
    assert_eq!(session.identity.name, "John Manager");
    assert!(session.token.starts_with("stk_"));
    assert!(store.is_authenticated());
    assert_eq!(store.current(), Some(&session));

    let mut reopened = restart(&directory, &kv);
    assert!(reopened.is_loading());
    let restored = reopened.restore().expect("session should restore");
    assert_eq!(restored, session);
    assert!(!reopened.is_loading());
    assert_eq!(reopened.state(), &SessionState::Authenticated(session));
}

#[tokio::test]
async fn persisted_identity_omits_password() {
    let (mut store, _directory, kv) = setup();
    store
        .login(LoginInput::new("keeper@company.com", "keeper123"))
        .await
        .unwrap();

    let user = kv.get("user").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&user).unwrap();
    assert_eq!(value["email"], "keeper@company.com");
    assert_eq!(value["role"], "Store Keeper");
    assert!(value.get("password").is_none());
    assert!(value.get("password_hash").is_none());
}

#[tokio::test]
async fn wrong_password_fails_and_keeps_prior_session() {
    let (mut store, directory, kv) = setup();
    let first = store
        .login(LoginInput::new("keeper@company.com", "keeper123"))
        .await
        .unwrap();
    let token_before = kv.get("token").unwrap();

    let err = store
        .login(LoginInput::new("manager@company.com", "wrongpass"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));

    assert_eq!(kv.get("token").unwrap(), token_before);
    assert_eq!(store.current(), Some(&first));
    assert_eq!(restart(&directory, &kv).restore(), Some(first));
}

#[tokio::test]
async fn unknown_email_is_invalid_credentials_and_writes_nothing() {
    let (mut store, _directory, kv) = setup();
    let err = store
        .login(LoginInput::new("ghost@company.com", "manager123"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert!(kv.is_empty());
    assert_eq!(store.state(), &SessionState::Anonymous);
}

#[tokio::test]
async fn malformed_input_is_rejected_before_lookup() {
    let (mut store, _directory, kv) = setup();
    let err = store
        .login(LoginInput::new("not-an-email", "x"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));
    assert!(kv.is_empty());
}

#[tokio::test]
async fn logout_then_restore_is_none() {
    let (mut store, directory, kv) = setup();
    store
        .login(LoginInput::new("manager@company.com", "manager123"))
        .await
        .unwrap();

    store.logout();
    assert!(!store.is_authenticated());
    assert!(kv.get("token").unwrap().is_none());
    assert!(kv.get("user").unwrap().is_none());

    assert_eq!(store.restore(), None);
    assert_eq!(restart(&directory, &kv).restore(), None);
}

#[test]
fn logout_is_idempotent() {
    let (mut store, _directory, _kv) = setup();
    store.logout();
    store.logout();
    assert_eq!(store.state(), &SessionState::Anonymous);
}

#[test]
fn restore_with_nothing_persisted_is_anonymous() {
    let (mut store, _directory, _kv) = setup();
    assert_eq!(store.restore(), None);
    assert_eq!(store.state(), &SessionState::Anonymous);
}

#[test]
fn restore_requires_both_keys() {
    let (mut store, _directory, kv) = setup();
    kv.set("token", "stk_orphan").unwrap();
    assert_eq!(store.restore(), None);

    kv.remove("token").unwrap();
    kv.set(
        "user",
        r#"{"id":1,"email":"manager@company.com","role":"Manager","name":"John Manager"}"#,
    )
    .unwrap();
    assert_eq!(store.restore(), None);
}

#[test]
fn malformed_persisted_identity_is_treated_as_no_session() {
    let (mut store, _directory, kv) = setup();
    kv.set("token", "stk_abc").unwrap();
    kv.set("user", "{not json").unwrap();
    assert_eq!(store.restore(), None);

    kv.set("user", r#"{"id":1,"email":"a@b.c","role":"Janitor","name":"X"}"#)
        .unwrap();
    assert_eq!(store.restore(), None);
    assert_eq!(store.state(), &SessionState::Anonymous);
}

#[test]
fn restored_session_from_handwritten_storage() {
    let (mut store, _directory, kv) = setup();
    kv.set("token", "stk_legacy").unwrap();
    kv.set(
        "user",
        r#"{"id":2,"email":"keeper@company.com","role":"Store Keeper","name":"Jane Keeper"}"#,
    )
    .unwrap();

    let session = store.restore().unwrap();
    assert_eq!(session.token, "stk_legacy");
    assert_eq!(session.role(), Role::StoreKeeper);
}

#[tokio::test]
async fn gate_follows_session_lifecycle() {
    let (mut store, _directory, _kv) = setup();
    assert_eq!(can_enter(store.current(), None), Decision::RedirectToLogin);

    store
        .login(LoginInput::new("keeper@company.com", "keeper123"))
        .await
        .unwrap();
    assert_eq!(can_enter(store.current(), None), Decision::Allow);
    assert_ne!(can_enter(store.current(), Some(Role::Manager)), Decision::Allow);

    store.logout();
    assert_eq!(
        can_enter(store.current(), Some(Role::Manager)),
        Decision::RedirectToLogin
    );
}

#[tokio::test]
async fn pepper_must_match_directory() {
    let directory = StaticCredentialDirectory::demo(Some("pepper!")).unwrap();
    let kv = MemoryKeyValueStore::new();

    let mut unpeppered = SessionStore::new(directory.clone(), kv.clone(), AuthConfig::default());
    assert!(matches!(
        unpeppered
            .login(LoginInput::new("manager@company.com", "manager123"))
            .await,
        Err(AuthError::InvalidCredentials)
    ));

    let config = AuthConfig {
        pepper: Some("pepper!".into()),
        ..AuthConfig::default()
    };
    let mut peppered = SessionStore::new(directory, kv, config);
    assert!(
        peppered
            .login(LoginInput::new("manager@company.com", "manager123"))
            .await
            .is_ok()
    );
}

/// Memory storage that refuses to write the token key, and optionally
/// refuses every removal.
struct TokenWriteFails {
    inner: MemoryKeyValueStore,
    removals_fail: bool,
}

impl KeyValueStore for TokenWriteFails {
    fn get(&self, key: &str) -> StockroomResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StockroomResult<()> {
        if key == "token" {
            return Err(StockroomError::Storage("disk full".into()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> StockroomResult<()> {
        if self.removals_fail {
            return Err(StockroomError::Storage("read-only".into()));
        }
        self.inner.remove(key)
    }
}

#[tokio::test]
async fn failed_token_write_rolls_back_identity() {
    let kv = MemoryKeyValueStore::new();
    let storage = TokenWriteFails {
        inner: kv.clone(),
        removals_fail: false,
    };
    let directory = StaticCredentialDirectory::demo(None).unwrap();
    let mut store = SessionStore::new(directory, storage, AuthConfig::default());

    let result = store
        .login(LoginInput::new("manager@company.com", "manager123"))
        .await;
    assert!(matches!(result, Err(AuthError::Storage(_))));
    assert!(!store.is_authenticated());
    assert!(kv.is_empty());
}

#[tokio::test]
async fn failed_rollback_still_reports_the_write_error() {
    let kv = MemoryKeyValueStore::new();
    let storage = TokenWriteFails {
        inner: kv.clone(),
        removals_fail: true,
    };
    let directory = StaticCredentialDirectory::demo(None).unwrap();
    let mut store = SessionStore::new(directory, storage, AuthConfig::default());

    let result = store
        .login(LoginInput::new("manager@company.com", "manager123"))
        .await;
    assert!(matches!(result, Err(AuthError::Storage(msg)) if msg.contains("disk full")));
    assert!(!store.is_authenticated());
    // The orphaned identity alone never restores a session.
    assert!(kv.get("user").unwrap().is_some());
    assert_eq!(store.restore(), None);
}
