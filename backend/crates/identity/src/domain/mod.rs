//! Domain Layer
//!
//! Contains entities, value objects, repository traits, and outbound
//! collaborator contracts.

pub mod entity;
pub mod mailer;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::account::Account;
pub use mailer::VerificationMailer;
pub use repository::{AccountRepository, SessionRepository};
