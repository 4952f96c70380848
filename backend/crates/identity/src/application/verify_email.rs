//! Email Verification Use Case
//!
//! Consumes a verification token and activates the account. The token
//! itself is never revoked; the atomic Pending -> Active transition in
//! the store is the sole idempotency guard, so a replayed token fails
//! `AlreadyVerified` before expiry and `InvalidOrExpiredToken` after.

use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::application::token::{TokenCodec, TokenPurpose};
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::account_status::AccountStatus;
use crate::error::{IdentityError, IdentityResult};

/// Email verification use case
pub struct VerifyEmailUseCase<A>
where
    A: AccountRepository,
{
    account_repo: Arc<A>,
    config: Arc<IdentityConfig>,
}

impl<A> VerifyEmailUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(account_repo: Arc<A>, config: Arc<IdentityConfig>) -> Self {
        Self {
            account_repo,
            config,
        }
    }

    pub async fn execute(&self, token: &str) -> IdentityResult<String> {
        // Signature/expiry failures and unknown subjects all collapse
        // into one error kind toward the caller.
        let account_id = TokenCodec::new(&self.config)
            .verify(TokenPurpose::Verify, token)
            .map_err(|_| IdentityError::InvalidOrExpiredToken)?;

        let account = self
            .account_repo
            .find_by_id(&account_id)
            .await?
            .ok_or(IdentityError::InvalidOrExpiredToken)?;

        if account.status == AccountStatus::Active {
            return Err(IdentityError::AlreadyVerified);
        }

        // Conditional update: a concurrent verification of the same
        // token loses here instead of double-activating.
        let activated = self.account_repo.activate_if_pending(&account_id).await?;
        if !activated {
            return Err(IdentityError::AlreadyVerified);
        }

        tracing::info!(account_id = %account_id, "Email verified, account activated");

        Ok("Email verified successfully".to_string())
    }
}
