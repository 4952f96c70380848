//! Password History Value Object
//!
//! Bounded list of the most recently used password hashes, including the
//! current one as its newest entry. The newest entry is last; once the
//! bound is reached the oldest entry is evicted, which makes the
//! 6th-oldest password eligible again after five rotations.

use platform::password::{ClearTextPassword, HashedPassword};

/// Reuse history retains at most this many prior hashes
pub const MAX_HISTORY: usize = 5;

/// Bounded history of prior password hashes (PHC strings, oldest first)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordHistory(Vec<String>);

impl PasswordHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Restore from stored PHC strings (oldest first)
    pub fn from_db(hashes: Vec<String>) -> Self {
        Self(hashes)
    }

    /// Hashes for storage, oldest first
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Push a newly adopted hash, evicting the oldest beyond
    /// [`MAX_HISTORY`]
    pub fn push(&mut self, hash: &HashedPassword) {
        self.0.push(hash.as_phc_string().to_string());
        while self.0.len() > MAX_HISTORY {
            self.0.remove(0);
        }
    }

    /// Check whether a candidate password matches any retained hash
    pub fn is_reused(&self, candidate: &ClearTextPassword) -> bool {
        self.0.iter().any(|phc| {
            HashedPassword::from_phc_string(phc)
                .map(|h| h.verify(candidate))
                .unwrap_or(false)
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
