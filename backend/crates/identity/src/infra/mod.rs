//! Infrastructure Layer
//!
//! Database implementations and external service integrations.

pub mod mailer;
pub mod postgres;

pub use mailer::LogMailer;
pub use postgres::PgIdentityRepository;
