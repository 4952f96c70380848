//! Outbound Email Contract
//!
//! Delivery is an external collaborator. It is best-effort from the
//! registration flow's point of view: a send failure is surfaced to the
//! caller for logging but never rolls back account creation.

use crate::domain::value_object::email::Email;
use thiserror::Error;

/// Outbound delivery failure
#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Email delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Verification email delivery contract
#[trait_variant::make(VerificationMailer: Send)]
pub trait LocalVerificationMailer {
    /// Deliver a verification token to the account's email address
    async fn send_verification(&self, email: &Email, token: &str) -> Result<(), MailerError>;
}
