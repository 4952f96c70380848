//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::account::Address;
use crate::domain::entity::session::{ActiveSessionRecord, SessionPage};

// ============================================================================
// Register
// ============================================================================

/// Registration request (full onboarding profile)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub job_title: String,
    #[serde(default)]
    pub applications_managed: Vec<String>,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: AddressDto,
    /// ISO date (YYYY-MM-DD)
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub employment_type: String,
}

/// Postal address
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub country: String,
}

impl From<AddressDto> for Address {
    fn from(dto: AddressDto) -> Self {
        Address {
            street: dto.street,
            city: dto.city,
            state: dto.state,
            zip: dto.zip,
            country: dto.country,
        }
    }
}

/// Plain outcome message
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Email Verification
// ============================================================================

/// Query string for GET /verify
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyQuery {
    pub token: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    /// Human-readable token TTL, e.g. "2h"
    pub expires_in: String,
}

// ============================================================================
// Session Registry
// ============================================================================

/// Query string for GET /sessions
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionsQuery {
    /// Lower bound on last access (inclusive, RFC 3339)
    pub start_date: Option<DateTime<Utc>>,
    /// Upper bound on last access (inclusive, RFC 3339)
    pub end_date: Option<DateTime<Utc>>,
    /// 1-based page number
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Active session joined with its account summary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSessionDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub last_accessed: DateTime<Utc>,
}

impl From<ActiveSessionRecord> for ActiveSessionDto {
    fn from(record: ActiveSessionRecord) -> Self {
        ActiveSessionDto {
            id: record.account_id.into_uuid(),
            name: record.name,
            email: record.email.into_db(),
            role: record.role.code().to_string(),
            status: record.status.code().to_string(),
            last_accessed: record.last_accessed,
        }
    }
}

/// One page of the session registry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionsResponse {
    pub users: Vec<ActiveSessionDto>,
    /// Count over the filtered set, before pagination
    pub total_users: i64,
}

impl From<SessionPage> for SessionsResponse {
    fn from(page: SessionPage) -> Self {
        SessionsResponse {
            users: page.records.into_iter().map(Into::into).collect(),
            total_users: page.total,
        }
    }
}

// ============================================================================
// Password Change
// ============================================================================

/// Password change request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub account_id: Uuid,
    pub current_password: String,
    pub new_password: String,
}

// ============================================================================
// Account Setup
// ============================================================================

/// Query string for GET /setup
#[derive(Debug, Clone, Deserialize)]
pub struct SetupQuery {
    pub token: String,
}

/// Prefill details for the setup form
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupDetailsResponse {
    pub email: String,
    pub name: String,
}

/// Setup completion request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteSetupRequest {
    pub token: String,
    pub password: String,
}
