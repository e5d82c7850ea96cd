//! Authentication core for the Q&A service
//!
//! Provides the two credential primitives everything else builds on:
//! - Password hashing and verification (Argon2id)
//! - Signed, time-bound identity tokens carrying a role-tagged principal
//!
//! The service crate decides *who* may do *what*; this crate only answers
//! "is this password right" and "is this token genuine, and for whom".
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! assert!(!hasher.verify("wrong_password", &digest));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{Principal, TokenService};
//! use chrono::Duration;
//! use uuid::Uuid;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//! let principal = Principal::User(Uuid::new_v4());
//! let token = tokens.issue(principal).unwrap();
//! let claims = tokens.decode(&token).unwrap();
//! assert_eq!(claims.principal, principal);
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::Principal;
pub use token::TokenError;
pub use token::TokenService;
