//! Employee ID Value Object
//!
//! Human-readable identifier in the form `EMP-NNNN`. A single random
//! draw can collide under concurrent registrations, so generation is
//! paired with the store's unique constraint and a bounded retry in the
//! registration use case.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed prefix for all employee identifiers
const EMPLOYEE_ID_PREFIX: &str = "EMP-";

/// Employee identifier value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Generate a candidate identifier with a 4-digit random suffix.
    ///
    /// Uniqueness is NOT guaranteed here; the accounts store enforces it
    /// and the caller retries on conflict.
    pub fn generate() -> Self {
        let suffix: u16 = rand::rng().random_range(1000..10000);
        Self(format!("{}{}", EMPLOYEE_ID_PREFIX, suffix))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_format() {
        let id = EmployeeId::generate();
        let s = id.as_str();
        assert!(s.starts_with("EMP-"));

        let suffix = &s[4..];
        assert_eq!(suffix.len(), 4);
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_suffix_range() {
        for _ in 0..100 {
            let id = EmployeeId::generate();
            let suffix: u16 = id.as_str()[4..].parse().unwrap();
            assert!((1000..10000).contains(&suffix));
        }
    }

    #[test]
    fn test_from_db_roundtrip() {
        let id = EmployeeId::from_db("EMP-4821");
        assert_eq!(id.as_str(), "EMP-4821");
        assert_eq!(id.to_string(), "EMP-4821");
    }
}
