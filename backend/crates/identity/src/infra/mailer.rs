//! Outbound Email Implementations

use crate::domain::mailer::{MailerError, VerificationMailer};
use crate::domain::value_object::email::Email;

/// Mailer that logs instead of sending.
///
/// Used in development and tests; deployments swap in a real transport
/// behind the same trait. The token itself is never logged, only its
/// length, so log aggregation cannot replay verification links.
#[derive(Clone, Default)]
pub struct LogMailer;

impl VerificationMailer for LogMailer {
    async fn send_verification(&self, email: &Email, token: &str) -> Result<(), MailerError> {
        tracing::info!(
            recipient = %email,
            token_len = token.len(),
            "Verification email queued"
        );
        Ok(())
    }
}
