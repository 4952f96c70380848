//! Value Object Module

pub mod account_id;
pub mod account_role;
pub mod account_status;
pub mod email;
pub mod employee_id;
pub mod password_history;
