//! Credential and token authentication primitives.
//!
//! Provides the building blocks a service composes into login, signup and
//! route protection:
//! - Password hashing (Argon2id)
//! - Signed, time-bounded JWT issuance (HS256)
//! - Bearer token verification with typed claims
//!
//! Secrets are passed to constructors; nothing here reads configuration or
//! keeps global state.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Issuing and Verifying Tokens
//! ```
//! use auth::{TokenIssuer, TokenSubject, TokenVerifier};
//! use chrono::Duration;
//!
//! struct User(String);
//!
//! impl TokenSubject for User {
//!     fn subject(&self) -> &str {
//!         &self.0
//!     }
//! }
//!
//! let secret = b"secret_key_at_least_32_bytes_long!";
//! let issuer = TokenIssuer::new(secret, Duration::hours(1));
//! let verifier = TokenVerifier::new(secret);
//!
//! let token = issuer.issue(&User("alice".to_string())).unwrap();
//! let claims = verifier
//!     .verify_header(Some(&format!("Bearer {token}")))
//!     .unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```

pub mod bearer;
pub mod clock;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use bearer::extract_bearer;
pub use clock::Clock;
pub use clock::ManualClock;
pub use clock::SystemClock;
pub use jwt::Claims;
pub use jwt::TokenError;
pub use jwt::TokenIssuer;
pub use jwt::TokenSubject;
pub use jwt::TokenVerifier;
pub use password::PasswordError;
pub use password::PasswordHasher;
