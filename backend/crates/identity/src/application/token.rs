//! Token Codec
//!
//! Stateless, signed, time-bound tokens carrying a subject account id
//! and a purpose tag. Nothing is persisted: validity is established by
//! the HMAC signature and the embedded expiry alone.
//!
//! Wire form: `purpose.subject_uuid.expires_at_ms.signature` where the
//! signature is URL-safe base64 over the first three segments. The
//! signature is checked before anything else so a forged expiry cannot
//! be probed.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::Duration;
use thiserror::Error;

use crate::application::config::IdentityConfig;
use crate::domain::value_object::account_id::AccountId;

/// What a token proves. Verification rejects a purpose mismatch so a
/// session token can never activate an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPurpose {
    /// Email ownership verification after registration
    Verify,
    /// Admin-initiated account setup
    Setup,
    /// Authenticated session
    Session,
}

impl TokenPurpose {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Verify => "verify",
            Self::Setup => "setup",
            Self::Session => "session",
        }
    }
}

/// Token verification failure.
///
/// Flows collapse both variants into a single reported error so callers
/// cannot distinguish a forged token from a stale one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is malformed or has an invalid signature")]
    Invalid,
    #[error("token has expired")]
    Expired,
}

/// Signs and verifies purpose-tagged tokens
#[derive(Clone)]
pub struct TokenCodec {
    secret: [u8; 32],
}

impl TokenCodec {
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            secret: config.token_secret,
        }
    }

    /// Issue a signed token for `subject` that expires after `ttl`
    pub fn issue(&self, purpose: TokenPurpose, subject: &AccountId, ttl: Duration) -> String {
        let expires_at_ms = (Utc::now()
            + chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::zero()))
        .timestamp_millis();
        let payload = format!("{}.{}.{}", purpose.code(), subject.as_uuid(), expires_at_ms);

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        let signature = mac.finalize().into_bytes();

        format!("{}.{}", payload, URL_SAFE_NO_PAD.encode(signature))
    }

    /// Verify a token and return its subject account id
    pub fn verify(&self, purpose: TokenPurpose, token: &str) -> Result<AccountId, TokenError> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 4 {
            return Err(TokenError::Invalid);
        }

        let payload = format!("{}.{}.{}", parts[0], parts[1], parts[2]);

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());

        let signature = URL_SAFE_NO_PAD
            .decode(parts[3])
            .map_err(|_| TokenError::Invalid)?;

        // Constant-time comparison
        mac.verify_slice(&signature).map_err(|_| TokenError::Invalid)?;

        if parts[0] != purpose.code() {
            return Err(TokenError::Invalid);
        }

        let expires_at_ms: i64 = parts[2].parse().map_err(|_| TokenError::Invalid)?;
        if Utc::now().timestamp_millis() > expires_at_ms {
            return Err(TokenError::Expired);
        }

        let uuid: uuid::Uuid = parts[1].parse().map_err(|_| TokenError::Invalid)?;
        Ok(AccountId::from_uuid(uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TokenCodec {
        TokenCodec::new(&IdentityConfig::with_random_secret())
    }

    #[test]
    fn test_issue_and_verify() {
        let codec = codec();
        let subject = AccountId::new();

        let token = codec.issue(TokenPurpose::Verify, &subject, Duration::from_secs(60));
        let decoded = codec.verify(TokenPurpose::Verify, &token).unwrap();

        assert_eq!(decoded, subject);
    }

    #[test]
    fn test_purpose_mismatch_is_invalid() {
        let codec = codec();
        let subject = AccountId::new();

        let token = codec.issue(TokenPurpose::Session, &subject, Duration::from_secs(60));
        assert_eq!(
            codec.verify(TokenPurpose::Verify, &token),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_expired_token() {
        let codec = codec();
        let subject = AccountId::new();

        let token = codec.issue(TokenPurpose::Verify, &subject, Duration::from_secs(0));
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(
            codec.verify(TokenPurpose::Verify, &token),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_tampered_payload_is_invalid() {
        let codec = codec();
        let subject = AccountId::new();

        let token = codec.issue(TokenPurpose::Verify, &subject, Duration::from_secs(60));

        // Swap the subject for another account, keeping the signature
        let other = AccountId::new();
        let parts: Vec<&str> = token.split('.').collect();
        let forged = format!("{}.{}.{}.{}", parts[0], other.as_uuid(), parts[2], parts[3]);

        assert_eq!(
            codec.verify(TokenPurpose::Verify, &forged),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let codec_a = codec();
        let codec_b = codec();
        let subject = AccountId::new();

        let token = codec_a.issue(TokenPurpose::Verify, &subject, Duration::from_secs(60));
        assert_eq!(
            codec_b.verify(TokenPurpose::Verify, &token),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_garbage_is_invalid() {
        let codec = codec();
        assert_eq!(
            codec.verify(TokenPurpose::Verify, "not-a-token"),
            Err(TokenError::Invalid)
        );
        assert_eq!(
            codec.verify(TokenPurpose::Verify, "a.b.c.d"),
            Err(TokenError::Invalid)
        );
    }
}
