//! Session Types
//!
//! One active login per account. Creation and refresh are the same
//! operation (an upsert keyed by the account reference, performed
//! entirely in the store); ending a session only clears `is_active`,
//! the row is kept for audit listings. The domain never holds a full
//! session row, only the query types below.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    account_id::AccountId, account_role::AccountRole, account_status::AccountStatus, email::Email,
};

/// Date bounds for the session registry query, applied to `last_accessed`
#[derive(Debug, Clone, Default)]
pub struct SessionFilter {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// Active session joined with a restricted projection of its account
#[derive(Debug, Clone)]
pub struct ActiveSessionRecord {
    pub account_id: AccountId,
    pub name: String,
    pub email: Email,
    pub role: AccountRole,
    pub status: AccountStatus,
    pub last_accessed: DateTime<Utc>,
}

/// One page of the session registry plus the total matching count
#[derive(Debug, Clone)]
pub struct SessionPage {
    pub records: Vec<ActiveSessionRecord>,
    /// Count over the filtered set, before pagination
    pub total: i64,
}
