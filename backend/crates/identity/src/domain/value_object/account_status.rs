//! Account Status Value Object
//!
//! ## Design Decisions
//! - **3 statuses only**: Pending, Active, Suspended
//! - **Pending is the only entry state**: every registered account starts
//!   there and leaves only through verification or admin setup
//! - **No soft delete**: accounts are never hard-deleted by this core

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account lifecycle status
///
/// - **Pending**: registered, email not yet verified; cannot login
/// - **Active**: verified, fully functional
/// - **Suspended**: disabled by an administrator; cannot login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum AccountStatus {
    #[default]
    Pending = 0,
    Active = 1,
    Suspended = 2,
}

impl AccountStatus {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Suspended => "suspended",
        }
    }

    /// Check if login is allowed
    #[inline]
    pub const fn can_login(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Create from numeric ID
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Pending),
            1 => Some(Self::Active),
            2 => Some(Self::Suspended),
            _ => None,
        }
    }

    /// Create from string code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(Self::Pending),
            "active" => Some(Self::Active),
            "suspended" => Some(Self::Suspended),
            _ => None,
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
