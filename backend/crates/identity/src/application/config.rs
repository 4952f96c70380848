//! Application Configuration
//!
//! Configuration for the identity application layer. The token secret
//! is injected here explicitly; nothing in the crate reads process-wide
//! globals.

use std::time::Duration;

/// Identity application configuration
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Secret key for HMAC token signing (32 bytes)
    pub token_secret: [u8; 32],
    /// Verification/setup token TTL (1 day)
    pub verification_token_ttl: Duration,
    /// Session token TTL (2 hours)
    pub session_token_ttl: Duration,
    /// Maximum password age before login is refused (180 days)
    pub password_max_age: Duration,
    /// Whether a password change soft-ends the account's session.
    /// Off by default: existing tokens stay valid until expiry.
    pub end_sessions_on_password_change: bool,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            verification_token_ttl: Duration::from_secs(24 * 3600), // 1 day
            session_token_ttl: Duration::from_secs(2 * 3600),       // 2 hours
            password_max_age: Duration::from_secs(180 * 24 * 3600), // 180 days
            end_sessions_on_password_change: false,
        }
    }
}

impl IdentityConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Maximum password age as a chrono duration
    pub fn password_max_age_chrono(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.password_max_age.as_secs() as i64)
    }

    /// Human-readable session TTL for login responses ("2h", "90m")
    pub fn session_expires_in(&self) -> String {
        let secs = self.session_token_ttl.as_secs();
        if secs % 3600 == 0 {
            format!("{}h", secs / 3600)
        } else {
            format!("{}m", secs / 60)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttls() {
        let config = IdentityConfig::default();
        assert_eq!(config.verification_token_ttl, Duration::from_secs(86400));
        assert_eq!(config.session_token_ttl, Duration::from_secs(7200));
        assert_eq!(config.password_max_age_chrono(), chrono::Duration::days(180));
        assert!(!config.end_sessions_on_password_change);
    }

    #[test]
    fn test_session_expires_in_label() {
        let config = IdentityConfig::default();
        assert_eq!(config.session_expires_in(), "2h");

        let config = IdentityConfig {
            session_token_ttl: Duration::from_secs(90 * 60),
            ..Default::default()
        };
        assert_eq!(config.session_expires_in(), "90m");
    }

    #[test]
    fn test_random_secret_is_not_zero() {
        let config = IdentityConfig::with_random_secret();
        assert!(config.token_secret.iter().any(|&b| b != 0));
    }
}
