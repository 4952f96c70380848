//! Account Role Value Object
//!
//! Role is never supplied by the caller at registration. It is derived
//! from onboarding attributes by [`AccountRole::resolve`], and the order
//! of the checks is significant: the admin check always wins.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum AccountRole {
    #[default]
    User = 0,
    Support = 1,
    Admin = 2,
}

impl AccountRole {
    /// Derive a role from onboarding attributes.
    ///
    /// A job title containing "admin" (case-insensitive) yields `Admin`;
    /// otherwise managing at least one application yields `Support`;
    /// otherwise `User`.
    pub fn resolve(job_title: &str, managed_applications: &[String]) -> Self {
        if job_title.to_lowercase().contains("admin") {
            return AccountRole::Admin;
        }
        if !managed_applications.is_empty() {
            return AccountRole::Support;
        }
        AccountRole::User
    }

    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use AccountRole::*;
        match self {
            User => "user",
            Support => "support",
            Admin => "admin",
        }
    }

    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        use AccountRole::*;
        match id {
            0 => Some(User),
            1 => Some(Support),
            2 => Some(Admin),
            _ => None,
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use AccountRole::*;
        match code {
            "user" => Some(User),
            "support" => Some(Support),
            "admin" => Some(Admin),
            _ => None,
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
