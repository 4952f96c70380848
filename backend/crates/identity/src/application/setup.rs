//! Account Setup Use Case
//!
//! Admin-initiated onboarding: the account already exists (created with
//! a placeholder credential) and the invited person proves ownership of
//! the emailed setup token, previews their prefill details, then chooses
//! a password. Completing setup activates the account.

use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::application::token::{TokenCodec, TokenPurpose};
use crate::domain::repository::AccountRepository;
use crate::error::{IdentityError, IdentityResult};
use platform::password::ClearTextPassword;

/// Prefill details for the setup form
#[derive(Debug)]
pub struct SetupDetails {
    pub email: String,
    pub name: String,
}

/// Account setup use case
pub struct SetupUseCase<A>
where
    A: AccountRepository,
{
    account_repo: Arc<A>,
    config: Arc<IdentityConfig>,
}

impl<A> SetupUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(account_repo: Arc<A>, config: Arc<IdentityConfig>) -> Self {
        Self {
            account_repo,
            config,
        }
    }

    /// Resolve a setup token to the invitee's prefill details
    pub async fn details(&self, token: &str) -> IdentityResult<SetupDetails> {
        let account = self.account_for_token(token).await?;

        Ok(SetupDetails {
            email: account.email.as_str().to_string(),
            name: account.name.clone(),
        })
    }

    /// Set the chosen password and activate the account
    pub async fn complete(&self, token: &str, password: String) -> IdentityResult<String> {
        let mut account = self.account_for_token(token).await?;

        let password = ClearTextPassword::new(password)
            .map_err(|e| IdentityError::PasswordValidation(e.to_string()))?;
        let hash = password.hash()?;

        account.set_initial_password(hash);
        account.activate();
        self.account_repo.save(&account).await?;

        tracing::info!(account_id = %account.account_id, "Account setup completed");

        Ok("Account setup completed".to_string())
    }

    async fn account_for_token(
        &self,
        token: &str,
    ) -> IdentityResult<crate::domain::entity::account::Account> {
        let account_id = TokenCodec::new(&self.config)
            .verify(TokenPurpose::Setup, token)
            .map_err(|_| IdentityError::InvalidOrExpiredToken)?;

        self.account_repo
            .find_by_id(&account_id)
            .await?
            .ok_or(IdentityError::InvalidOrExpiredToken)
    }
}
