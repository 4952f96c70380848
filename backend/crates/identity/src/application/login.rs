//! Login Use Case
//!
//! Authenticates an account and upserts its session. Each gate
//! short-circuits; nothing is written until every gate has passed.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::IdentityConfig;
use crate::application::token::{TokenCodec, TokenPurpose};
use crate::domain::repository::{AccountRepository, SessionRepository};
use crate::domain::value_object::email::Email;
use crate::error::{IdentityError, IdentityResult};
use platform::password::ClearTextPassword;

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Signed session token
    pub token: String,
    /// Human-readable TTL, e.g. "2h"
    pub expires_in: String,
}

/// Login use case
pub struct LoginUseCase<A, S>
where
    A: AccountRepository,
    S: SessionRepository,
{
    account_repo: Arc<A>,
    session_repo: Arc<S>,
    config: Arc<IdentityConfig>,
}

impl<A, S> LoginUseCase<A, S>
where
    A: AccountRepository,
    S: SessionRepository,
{
    pub fn new(account_repo: Arc<A>, session_repo: Arc<S>, config: Arc<IdentityConfig>) -> Self {
        Self {
            account_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> IdentityResult<LoginOutput> {
        // A malformed email cannot belong to any account; same generic
        // error as an unknown one.
        let email =
            Email::new(input.email).map_err(|_| IdentityError::InvalidCredentials)?;

        let account = self
            .account_repo
            .find_by_email(&email)
            .await?
            .ok_or(IdentityError::InvalidCredentials)?;

        if !account.can_login() {
            return Err(IdentityError::EmailNotVerified);
        }

        let password = ClearTextPassword::new(input.password)
            .map_err(|_| IdentityError::InvalidCredentials)?;
        if !account.password_hash.verify(&password) {
            return Err(IdentityError::InvalidCredentials);
        }

        // The credential was correct; aging is a separate, 403-class gate
        let now = Utc::now();
        if account.is_password_expired(self.config.password_max_age_chrono(), now) {
            return Err(IdentityError::PasswordExpired);
        }

        let token = TokenCodec::new(&self.config).issue(
            TokenPurpose::Session,
            &account.account_id,
            self.config.session_token_ttl,
        );

        // Atomic create-or-refresh; concurrent logins settle on one row
        self.session_repo
            .upsert_active(&account.account_id, now)
            .await?;

        tracing::info!(
            account_id = %account.account_id,
            role = %account.role,
            "Login succeeded"
        );

        Ok(LoginOutput {
            token,
            expires_in: self.config.session_expires_in(),
        })
    }
}
