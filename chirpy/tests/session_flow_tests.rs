mod common;

use std::sync::Arc;

use auth::AccessTokenCodec;
use chrono::Duration;

use chirpy::domain::errors::ServiceError;
use chirpy::domain::session::service::SessionService;
use chirpy::domain::user::models::CreateUserCommand;
use chirpy::domain::user::models::EmailAddress;
use chirpy::domain::user::ports::UserRepository;
use chirpy::domain::user::service::UserService;
use common::InMemoryRefreshTokenRepository;
use common::InMemoryUserRepository;

const SECRET: &[u8] = b"integration_secret_32_bytes_long!!";

struct TestHarness {
    users: Arc<InMemoryUserRepository>,
    user_service: UserService<InMemoryUserRepository>,
    sessions: SessionService<InMemoryUserRepository, InMemoryRefreshTokenRepository>,
}

impl TestHarness {
    fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::default());
        let refresh_tokens = Arc::new(InMemoryRefreshTokenRepository::default());

        Self {
            users: Arc::clone(&users),
            user_service: UserService::new(Arc::clone(&users)),
            sessions: SessionService::new(
                users,
                refresh_tokens,
                Arc::new(AccessTokenCodec::new(SECRET)),
                Duration::hours(1),
                Duration::days(60),
            ),
        }
    }

    async fn register(&self, email: &str, password: &str) -> chirpy::domain::user::models::User {
        let email = EmailAddress::new(email.to_string()).unwrap();
        self.user_service
            .create_user(CreateUserCommand::new(email, password.to_string()))
            .await
            .expect("Failed to create user")
    }
}

#[tokio::test]
async fn test_full_session_lifecycle() {
    let harness = TestHarness::new();

    let user = harness.register("a@b.com", "Secret123!").await;

    // Login opens a session with both token kinds.
    let session = harness.sessions.login("a@b.com", "Secret123!").await.unwrap();
    assert_eq!(session.user.id, user.id);

    // The access token authenticates its caller.
    let caller = harness
        .sessions
        .authenticate(&format!("Bearer {}", session.access_token))
        .unwrap();
    assert_eq!(caller, user.id);

    // Token timestamps have second granularity; step past the issuance
    // second so the refreshed token cannot collide with the first.
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    let refreshed = harness.sessions.refresh(&session.refresh_token).await.unwrap();
    assert_ne!(refreshed, session.access_token);

    let caller = harness
        .sessions
        .authenticate(&format!("Bearer {}", refreshed))
        .unwrap();
    assert_eq!(caller, user.id);

    // Revocation is permanent.
    harness.sessions.revoke(&session.refresh_token).await.unwrap();

    let result = harness.sessions.refresh(&session.refresh_token).await;
    assert!(matches!(result, Err(ServiceError::Unauthorized(_))));
}

#[tokio::test]
async fn test_login_failure_asymmetry() {
    let harness = TestHarness::new();

    harness.register("a@b.com", "Secret123!").await;

    // Unknown email is a generic client error; wrong password for a known
    // email is an authentication failure.
    let unknown = harness.sessions.login("nobody@b.com", "Secret123!").await;
    assert!(matches!(unknown, Err(ServiceError::BadRequest(_))));

    let wrong = harness.sessions.login("a@b.com", "WrongPassword!").await;
    assert!(matches!(wrong, Err(ServiceError::Unauthorized(_))));
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let harness = TestHarness::new();

    let user = harness.register("a@b.com", "Secret123!").await;

    let first = harness.sessions.login("a@b.com", "Secret123!").await.unwrap();
    let second = harness.sessions.login("a@b.com", "Secret123!").await.unwrap();
    assert_ne!(first.refresh_token, second.refresh_token);

    // Revoking one session leaves the other alive.
    harness.sessions.revoke(&first.refresh_token).await.unwrap();

    assert!(harness.sessions.refresh(&first.refresh_token).await.is_err());

    let refreshed = harness.sessions.refresh(&second.refresh_token).await.unwrap();
    let caller = harness
        .sessions
        .authenticate(&format!("Bearer {}", refreshed))
        .unwrap();
    assert_eq!(caller, user.id);
}

#[tokio::test]
async fn test_revoke_is_idempotent_in_effect() {
    let harness = TestHarness::new();

    harness.register("a@b.com", "Secret123!").await;
    let session = harness.sessions.login("a@b.com", "Secret123!").await.unwrap();

    harness.sessions.revoke(&session.refresh_token).await.unwrap();
    harness.sessions.revoke(&session.refresh_token).await.unwrap();

    let result = harness.sessions.refresh(&session.refresh_token).await;
    assert!(matches!(result, Err(ServiceError::Unauthorized(_))));
}

#[tokio::test]
async fn test_duplicate_registration_is_rejected() {
    let harness = TestHarness::new();

    harness.register("a@b.com", "Secret123!").await;

    let email = EmailAddress::new("a@b.com".to_string()).unwrap();
    let result = harness
        .user_service
        .create_user(CreateUserCommand::new(email, "Another456!".to_string()))
        .await;

    assert!(matches!(result, Err(ServiceError::BadRequest(_))));
}

#[tokio::test]
async fn test_updated_credentials_take_effect() {
    let harness = TestHarness::new();

    let user = harness.register("a@b.com", "Secret123!").await;

    let command = chirpy::domain::user::models::UpdateCredentialsCommand {
        email: EmailAddress::new("new@b.com".to_string()).unwrap(),
        password: "Rotated789!".to_string(),
    };
    harness
        .user_service
        .update_credentials(&user.id, command)
        .await
        .unwrap();

    // The old password no longer works; old email no longer resolves.
    assert!(harness.sessions.login("a@b.com", "Secret123!").await.is_err());
    assert!(harness.sessions.login("new@b.com", "Secret123!").await.is_err());

    let session = harness.sessions.login("new@b.com", "Rotated789!").await.unwrap();
    assert_eq!(session.user.id, user.id);
}

#[tokio::test]
async fn test_reset_drops_users() {
    let harness = TestHarness::new();

    harness.register("a@b.com", "Secret123!").await;
    harness.user_service.reset().await.unwrap();

    // A wiped user is an unknown principal again.
    let result = harness.sessions.login("a@b.com", "Secret123!").await;
    assert!(matches!(result, Err(ServiceError::BadRequest(_))));

    assert!(harness.users.find_by_email("a@b.com").await.unwrap().is_none());
}
