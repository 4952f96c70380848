//! Password Change Use Case
//!
//! Rotates an account's credential with reuse enforcement over the last
//! 5 used hashes. Whether the active session survives the change is a
//! policy knob, not an assumption.

use std::sync::Arc;

use uuid::Uuid;

use crate::application::config::IdentityConfig;
use crate::domain::repository::{AccountRepository, SessionRepository};
use crate::domain::value_object::account_id::AccountId;
use crate::error::{IdentityError, IdentityResult};
use platform::password::ClearTextPassword;

/// Password change input
pub struct ChangePasswordInput {
    pub account_id: Uuid,
    pub current_password: String,
    pub new_password: String,
}

/// Password change use case
pub struct ChangePasswordUseCase<A, S>
where
    A: AccountRepository,
    S: SessionRepository,
{
    account_repo: Arc<A>,
    session_repo: Arc<S>,
    config: Arc<IdentityConfig>,
}

impl<A, S> ChangePasswordUseCase<A, S>
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

    pub async fn execute(&self, input: ChangePasswordInput) -> IdentityResult<String> {
        let account_id = AccountId::from_uuid(input.account_id);

        let mut account = self
            .account_repo
            .find_by_id(&account_id)
            .await?
            .ok_or(IdentityError::AccountNotFound)?;

        let current = ClearTextPassword::new(input.current_password)
            .map_err(|_| IdentityError::IncorrectPassword)?;
        if !account.password_hash.verify(&current) {
            return Err(IdentityError::IncorrectPassword);
        }

        let new_password = ClearTextPassword::new(input.new_password)
            .map_err(|e| IdentityError::PasswordValidation(e.to_string()))?;

        // The history window includes the current hash, so this also
        // rejects "changing" to the same password.
        if account.password_history.is_reused(&new_password) {
            return Err(IdentityError::PasswordReused);
        }

        let new_hash = new_password.hash()?;
        account.rotate_password(new_hash);
        self.account_repo.save(&account).await?;

        if self.config.end_sessions_on_password_change {
            self.session_repo.end_for_account(&account_id).await?;
            tracing::info!(account_id = %account_id, "Session ended after password change");
        }

        tracing::info!(account_id = %account_id, "Password changed");

        Ok("Password updated successfully".to_string())
    }
}
