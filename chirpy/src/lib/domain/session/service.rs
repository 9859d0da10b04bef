use std::sync::Arc;

use auth::AccessTokenCodec;
use chrono::Duration;
use chrono::Utc;

use crate::domain::errors::ServiceError;
use crate::domain::session::models::RefreshToken;
use crate::domain::session::models::Session;
use crate::domain::session::ports::RefreshTokenRepository;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

const BEARER_SCHEME: &str = "Bearer ";

/// Session lifecycle orchestrator.
///
/// Composes the password hasher, access token codec, and refresh token
/// storage into the four operations route handlers consume: `login`,
/// `refresh`, `revoke`, and `authenticate`. Every failure is typed and
/// surfaced immediately; nothing here retries.
pub struct SessionService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    users: Arc<UR>,
    refresh_tokens: Arc<RR>,
    codec: Arc<AccessTokenCodec>,
    password_hasher: auth::PasswordHasher,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
}

impl<UR, RR> SessionService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    pub fn new(
        users: Arc<UR>,
        refresh_tokens: Arc<RR>,
        codec: Arc<AccessTokenCodec>,
        access_token_ttl: Duration,
        refresh_token_ttl: Duration,
    ) -> Self {
        Self {
            users,
            refresh_tokens,
            codec,
            password_hasher: auth::PasswordHasher::new(),
            access_token_ttl,
            refresh_token_ttl,
        }
    }

    /// Verify credentials and open a session.
    ///
    /// An unknown email is a `BadRequest`; a wrong password for a known
    /// email is `Unauthorized`. The two are deliberately distinct status
    /// codes, matching the product's observed behavior.
    ///
    /// # Errors
    /// * `BadRequest` - No user registered under this email
    /// * `Unauthorized` - Password does not match
    /// * `Internal` - Hash check, token signing, or storage failed
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ServiceError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::BadRequest("unknown email address".to_string()))?;

        // Argon2 verification is deliberately slow; keep it off the async
        // request path.
        let hasher = self.password_hasher;
        let candidate = password.to_owned();
        let stored_hash = user.password_hash.clone();
        let password_matches =
            tokio::task::spawn_blocking(move || hasher.verify(&candidate, &stored_hash))
                .await
                .map_err(|e| ServiceError::Internal(format!("verify task failed: {}", e)))??;

        if !password_matches {
            return Err(ServiceError::Unauthorized(
                "incorrect email or password".to_string(),
            ));
        }

        let access_token = self
            .codec
            .issue(&user.id.to_string(), self.access_token_ttl)?;
        let refresh_token = self.issue_refresh_token(&user.id).await?;

        Ok(Session {
            user,
            access_token,
            refresh_token,
        })
    }

    /// Mint a new access token for the session behind `token`.
    ///
    /// The refresh token itself stays valid; tokens are not rotated on use.
    ///
    /// # Errors
    /// * `Unauthorized` - Token is unknown, revoked, or expired
    pub async fn refresh(&self, token: &str) -> Result<String, ServiceError> {
        let user_id = self.validate_refresh_token(token).await?;

        Ok(self.codec.issue(&user_id.to_string(), self.access_token_ttl)?)
    }

    /// Permanently invalidate a refresh token.
    ///
    /// Revoking an already-revoked token is accepted; re-validation will
    /// keep failing either way.
    ///
    /// # Errors
    /// * `Unauthorized` - Token is unknown
    pub async fn revoke(&self, token: &str) -> Result<(), ServiceError> {
        self.refresh_tokens
            .find(token)
            .await?
            .ok_or_else(|| ServiceError::Unauthorized("unknown refresh token".to_string()))?;

        self.refresh_tokens.mark_revoked(token, Utc::now()).await?;

        Ok(())
    }

    /// Resolve the caller behind a `Bearer`-prefixed Authorization header.
    ///
    /// # Errors
    /// * `Unauthorized` - Header is not `Bearer`-prefixed, or the token does
    ///   not verify, or its subject is not a user id
    pub fn authenticate(&self, authorization: &str) -> Result<UserId, ServiceError> {
        let token = strip_bearer(authorization).ok_or_else(|| {
            ServiceError::Unauthorized("expected a Bearer authorization header".to_string())
        })?;

        let subject = self.codec.verify(token)?;

        UserId::from_string(&subject).map_err(|_| {
            ServiceError::Unauthorized("token subject is not a valid user id".to_string())
        })
    }

    async fn issue_refresh_token(&self, user_id: &UserId) -> Result<String, ServiceError> {
        let now = Utc::now();
        let record = RefreshToken {
            token: auth::refresh::generate_token(),
            user_id: *user_id,
            created_at: now,
            expires_at: now + self.refresh_token_ttl,
            revoked_at: None,
        };

        self.refresh_tokens.insert(&record).await?;

        Ok(record.token)
    }

    // Expiry and revocation are independent; either alone invalidates.
    async fn validate_refresh_token(&self, token: &str) -> Result<UserId, ServiceError> {
        let record = self
            .refresh_tokens
            .find(token)
            .await?
            .ok_or_else(|| ServiceError::Unauthorized("unknown refresh token".to_string()))?;

        let now = Utc::now();
        if record.is_revoked(now) {
            return Err(ServiceError::Unauthorized(
                "refresh token has been revoked".to_string(),
            ));
        }
        if record.is_expired(now) {
            return Err(ServiceError::Unauthorized(
                "refresh token has expired".to_string(),
            ));
        }

        Ok(record.user_id)
    }
}

/// Extract the token from a `Bearer <token>` header value.
fn strip_bearer(header: &str) -> Option<&str> {
    header
        .strip_prefix(BEARER_SCHEME)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
