//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer. The stores are assumed multi-client-safe with
//! atomic single-record read-modify-write semantics.

use crate::domain::entity::account::Account;
use crate::domain::entity::session::{ActiveSessionRecord, SessionFilter};
use crate::domain::value_object::{account_id::AccountId, email::Email};
use crate::error::IdentityResult;
use chrono::{DateTime, Utc};

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Create a new account. The store enforces uniqueness of email and
    /// employee id.
    async fn create(&self, account: &Account) -> IdentityResult<()>;

    /// Find account by ID
    async fn find_by_id(&self, account_id: &AccountId) -> IdentityResult<Option<Account>>;

    /// Find account by email
    async fn find_by_email(&self, email: &Email) -> IdentityResult<Option<Account>>;

    /// Check if an email is already registered
    async fn exists_by_email(&self, email: &Email) -> IdentityResult<bool>;

    /// Persist mutated fields
    async fn save(&self, account: &Account) -> IdentityResult<()>;

    /// Atomically transition Pending -> Active.
    ///
    /// Returns true when the transition happened, false when the account
    /// was not Pending. This conditional update is the sole idempotency
    /// guard of the verification flow.
    async fn activate_if_pending(&self, account_id: &AccountId) -> IdentityResult<bool>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create-or-refresh the session keyed by account id, in one atomic
    /// statement. Two concurrent logins must never produce two rows.
    async fn upsert_active(
        &self,
        account_id: &AccountId,
        last_accessed: DateTime<Utc>,
    ) -> IdentityResult<()>;

    /// Soft-end the account's session (is_active = false, row retained)
    async fn end_for_account(&self, account_id: &AccountId) -> IdentityResult<()>;

    /// Active sessions joined with account summaries, bounded by the
    /// filter, with skip/limit pagination
    async fn list_active(
        &self,
        filter: &SessionFilter,
        skip: i64,
        limit: i64,
    ) -> IdentityResult<Vec<ActiveSessionRecord>>;

    /// Count over the filtered set, before pagination
    async fn count_active(&self, filter: &SessionFilter) -> IdentityResult<i64>;
}
