//! Authentication primitives for the chirpy service.
//!
//! Provides the stateless building blocks the service composes into session
//! handling:
//! - Password hashing (Argon2id)
//! - Access token signing and verification (HS256)
//! - Opaque refresh token generation
//! - API key checks for trusted server-to-server callers
//!
//! None of these modules touch storage or hold session state; lifecycle and
//! persistence belong to the service that owns them.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("not_my_password", &hash).unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::AccessTokenCodec;
//! use chrono::Duration;
//!
//! let codec = AccessTokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.issue("user123", Duration::hours(1)).unwrap();
//! assert_eq!(codec.verify(&token).unwrap(), "user123");
//! ```
//!
//! ## Refresh Tokens
//! ```
//! let token = auth::refresh::generate_token();
//! assert_eq!(token.len(), 64);
//! ```

pub mod api_key;
pub mod password;
pub mod refresh;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::AccessTokenCodec;
pub use token::Claims;
pub use token::TokenError;
