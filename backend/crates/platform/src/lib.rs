//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the identity service:
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Zeroized clear-text handling

pub mod password;
