//! Identity Backend Module
//!
//! Account and session lifecycle for the internal HR/approval platform.
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations, outbound email
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Registration with email verification (pending accounts)
//! - Admin-initiated account setup via signed token
//! - Login with password-aging enforcement (180 days)
//! - Password change with bounded reuse history (last 5)
//! - One active session per account (atomic upsert)
//! - Paginated active-session listing with account summaries
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (NIST SP 800-63B compliant)
//! - Stateless HMAC-signed tokens with embedded purpose and expiry
//! - Invalid and expired tokens are indistinguishable to callers
//! - Login failures never reveal whether an email is registered

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::IdentityConfig;
pub use error::{IdentityError, IdentityResult};
pub use infra::postgres::PgIdentityRepository;
pub use presentation::router::identity_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
