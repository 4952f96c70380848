//! Account Entity
//!
//! One platform identity. The password credential is carried only as a
//! one-way PHC hash plus a bounded history of retired hashes; clear text
//! never reaches this type.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{
    account_id::AccountId, account_role::AccountRole, account_status::AccountStatus, email::Email,
    employee_id::EmployeeId, password_history::PasswordHistory,
};
use platform::password::HashedPassword;

/// Postal address captured at onboarding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// Job metadata captured at onboarding
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobProfile {
    pub job_title: String,
    pub department: String,
    pub applications_managed: Vec<String>,
    pub employment_type: String,
}

/// Validated inputs for creating a new account
pub struct NewAccount {
    pub email: Email,
    pub name: String,
    pub password_hash: HashedPassword,
    pub role: AccountRole,
    pub employee_id: EmployeeId,
    pub job: JobProfile,
    pub phone_number: String,
    pub address: Address,
    pub date_of_birth: Option<NaiveDate>,
}

/// Account entity
#[derive(Debug, Clone)]
pub struct Account {
    /// Internal UUID identifier
    pub account_id: AccountId,
    /// Unique email (case-sensitive identity key)
    pub email: Email,
    /// Display name
    pub name: String,
    /// Current credential, PHC string form
    pub password_hash: HashedPassword,
    /// Last 5 used hashes, newest (the current one) last
    pub password_history: PasswordHistory,
    /// Role derived at registration
    pub role: AccountRole,
    /// Lifecycle status (Pending until verified)
    pub status: AccountStatus,
    /// Generated human-readable identifier, unique
    pub employee_id: EmployeeId,
    /// Job metadata
    pub job: JobProfile,
    /// Contact phone number
    pub phone_number: String,
    /// Postal address
    pub address: Address,
    /// Date of birth, omitted when not supplied
    pub date_of_birth: Option<NaiveDate>,
    /// When the password was last rotated; None until first change
    pub password_changed_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new pending account
    pub fn new(fields: NewAccount) -> Self {
        let now = Utc::now();

        let mut password_history = PasswordHistory::new();
        password_history.push(&fields.password_hash);

        Self {
            account_id: AccountId::new(),
            email: fields.email,
            name: fields.name,
            password_hash: fields.password_hash,
            password_history,
            role: fields.role,
            status: AccountStatus::Pending,
            employee_id: fields.employee_id,
            job: fields.job,
            phone_number: fields.phone_number,
            address: fields.address,
            date_of_birth: fields.date_of_birth,
            password_changed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if login is allowed
    pub fn can_login(&self) -> bool {
        self.status.can_login()
    }

    /// The timestamp password aging is measured from.
    ///
    /// Falls back to account creation when the password has never been
    /// rotated.
    pub fn password_changed_or_created(&self) -> DateTime<Utc> {
        self.password_changed_at.unwrap_or(self.created_at)
    }

    /// Check whether the password is older than `max_age` at `now`
    pub fn is_password_expired(&self, max_age: chrono::Duration, now: DateTime<Utc>) -> bool {
        now - self.password_changed_or_created() >= max_age
    }

    /// Transition to Active
    pub fn activate(&mut self) {
        self.status = AccountStatus::Active;
        self.updated_at = Utc::now();
    }

    /// Rotate the credential: adopt the new hash and append it to the
    /// bounded history (evicting the oldest entry)
    pub fn rotate_password(&mut self, new_hash: HashedPassword) {
        let now = Utc::now();
        self.password_history.push(&new_hash);
        self.password_hash = new_hash;
        self.password_changed_at = Some(now);
        self.updated_at = now;
    }

    /// Replace the credential with a fresh history (setup flow, where
    /// the account never had a self-chosen password)
    pub fn set_initial_password(&mut self, new_hash: HashedPassword) {
        let now = Utc::now();
        let mut history = PasswordHistory::new();
        history.push(&new_hash);
        self.password_history = history;
        self.password_hash = new_hash;
        self.password_changed_at = Some(now);
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use platform::password::ClearTextPassword;

    fn test_account() -> Account {
        let hash = ClearTextPassword::new("initial password".to_string())
            .unwrap()
            .hash()
            .unwrap();
        Account::new(NewAccount {
            email: Email::new("jane@example.com").unwrap(),
            name: "Jane Doe".to_string(),
            password_hash: hash,
            role: AccountRole::User,
            employee_id: EmployeeId::generate(),
            job: JobProfile::default(),
            phone_number: String::new(),
            address: Address::default(),
            date_of_birth: None,
        })
    }

    #[test]
    fn test_new_account_starts_pending() {
        let account = test_account();
        assert_eq!(account.status, AccountStatus::Pending);
        assert!(!account.can_login());
        assert!(account.password_changed_at.is_none());
        // History starts with the initial hash as its only entry
        assert_eq!(account.password_history.len(), 1);
        assert_eq!(
            account.password_history.as_slice()[0],
            account.password_hash.as_phc_string()
        );
    }

    #[test]
    fn test_activate() {
        let mut account = test_account();
        account.activate();
        assert_eq!(account.status, AccountStatus::Active);
        assert!(account.can_login());
    }

    #[test]
    fn test_password_aging_falls_back_to_creation() {
        let mut account = test_account();
        assert_eq!(account.password_changed_or_created(), account.created_at);

        // Not expired when fresh
        assert!(!account.is_password_expired(Duration::days(180), Utc::now()));

        // Expired exactly at the limit
        let later = account.created_at + Duration::days(180);
        assert!(account.is_password_expired(Duration::days(180), later));

        // Rotation resets the clock
        let new_hash = ClearTextPassword::new("replacement password".to_string())
            .unwrap()
            .hash()
            .unwrap();
        account.rotate_password(new_hash);
        assert!(!account.is_password_expired(Duration::days(180), later));
    }

    #[test]
    fn test_rotate_password_appends_history() {
        let mut account = test_account();
        let old_hash = account.password_hash.clone();

        let new_hash = ClearTextPassword::new("replacement password".to_string())
            .unwrap()
            .hash()
            .unwrap();
        account.rotate_password(new_hash.clone());

        assert_eq!(account.password_hash, new_hash);
        // Both the retired and the adopted hash sit in the window
        assert_eq!(account.password_history.len(), 2);
        assert_eq!(
            account.password_history.as_slice()[0],
            old_hash.as_phc_string()
        );
        assert_eq!(
            account.password_history.as_slice()[1],
            new_hash.as_phc_string()
        );
        assert!(account.password_changed_at.is_some());
    }

    #[test]
    fn test_set_initial_password_resets_history() {
        let mut account = test_account();
        let new_hash = ClearTextPassword::new("chosen at setup".to_string())
            .unwrap()
            .hash()
            .unwrap();
        account.set_initial_password(new_hash.clone());
        assert_eq!(account.password_history.len(), 1);
        assert_eq!(
            account.password_history.as_slice()[0],
            new_hash.as_phc_string()
        );
        assert!(account.password_changed_at.is_some());
    }
}
