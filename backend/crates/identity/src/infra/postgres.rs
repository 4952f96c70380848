//! PostgreSQL Repository Implementations

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::account::{Account, Address, JobProfile};
use crate::domain::entity::session::{ActiveSessionRecord, SessionFilter};
use crate::domain::repository::{AccountRepository, SessionRepository};
use crate::domain::value_object::{
    account_id::AccountId, account_role::AccountRole, account_status::AccountStatus, email::Email,
    employee_id::EmployeeId, password_history::PasswordHistory,
};
use crate::error::{IdentityError, IdentityResult};
use platform::password::HashedPassword;

/// PostgreSQL-backed identity repository
#[derive(Clone)]
pub struct PgIdentityRepository {
    pool: PgPool,
}

impl PgIdentityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Account Repository Implementation
// ============================================================================

const ACCOUNT_COLUMNS: &str = r#"
    account_id,
    email,
    name,
    password_hash,
    password_history,
    role,
    status,
    employee_id,
    job_title,
    department,
    applications_managed,
    employment_type,
    phone_number,
    street,
    city,
    state,
    zip,
    country,
    date_of_birth,
    password_changed_at,
    created_at,
    updated_at
"#;

impl AccountRepository for PgIdentityRepository {
    async fn create(&self, account: &Account) -> IdentityResult<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                email,
                name,
                password_hash,
                password_history,
                role,
                status,
                employee_id,
                job_title,
                department,
                applications_managed,
                employment_type,
                phone_number,
                street,
                city,
                state,
                zip,
                country,
                date_of_birth,
                password_changed_at,
                created_at,
                updated_at
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                $12, $13, $14, $15, $16, $17, $18, $19, $20, $21, $22
            )
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.email.as_str())
        .bind(&account.name)
        .bind(account.password_hash.as_phc_string())
        .bind(account.password_history.as_slice())
        .bind(account.role.id())
        .bind(account.status.id())
        .bind(account.employee_id.as_str())
        .bind(&account.job.job_title)
        .bind(&account.job.department)
        .bind(&account.job.applications_managed)
        .bind(&account.job.employment_type)
        .bind(&account.phone_number)
        .bind(&account.address.street)
        .bind(&account.address.city)
        .bind(&account.address.state)
        .bind(&account.address.zip)
        .bind(&account.address.country)
        .bind(account.date_of_birth)
        .bind(account.password_changed_at)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> IdentityResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE account_id = $1"
        ))
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> IdentityResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> IdentityResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn save(&self, account: &Account) -> IdentityResult<()> {
        sqlx::query(
            r#"
            UPDATE accounts SET
                name = $2,
                password_hash = $3,
                password_history = $4,
                role = $5,
                status = $6,
                phone_number = $7,
                password_changed_at = $8,
                updated_at = $9
            WHERE account_id = $1
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(&account.name)
        .bind(account.password_hash.as_phc_string())
        .bind(account.password_history.as_slice())
        .bind(account.role.id())
        .bind(account.status.id())
        .bind(&account.phone_number)
        .bind(account.password_changed_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn activate_if_pending(&self, account_id: &AccountId) -> IdentityResult<bool> {
        // Single conditional update; concurrent verifications cannot
        // both observe Pending.
        let updated = sqlx::query(
            r#"
            UPDATE accounts
            SET status = $2, updated_at = $3
            WHERE account_id = $1 AND status = $4
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(AccountStatus::Active.id())
        .bind(Utc::now())
        .bind(AccountStatus::Pending.id())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated == 1)
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgIdentityRepository {
    async fn upsert_active(
        &self,
        account_id: &AccountId,
        last_accessed: DateTime<Utc>,
    ) -> IdentityResult<()> {
        // One atomic statement keyed by account_id. Two concurrent
        // logins settle on a single row with the later timestamp.
        sqlx::query(
            r#"
            INSERT INTO sessions (account_id, is_active, last_accessed, created_at)
            VALUES ($1, TRUE, $2, $2)
            ON CONFLICT (account_id) DO UPDATE
            SET is_active = TRUE,
                last_accessed = GREATEST(sessions.last_accessed, EXCLUDED.last_accessed)
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(last_accessed)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn end_for_account(&self, account_id: &AccountId) -> IdentityResult<()> {
        sqlx::query("UPDATE sessions SET is_active = FALSE WHERE account_id = $1")
            .bind(account_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list_active(
        &self,
        filter: &SessionFilter,
        skip: i64,
        limit: i64,
    ) -> IdentityResult<Vec<ActiveSessionRecord>> {
        let rows = sqlx::query_as::<_, ActiveSessionRow>(
            r#"
            SELECT
                a.account_id,
                a.name,
                a.email,
                a.role,
                a.status,
                s.last_accessed
            FROM sessions s
            JOIN accounts a ON a.account_id = s.account_id
            WHERE s.is_active
              AND ($1::timestamptz IS NULL OR s.last_accessed >= $1)
              AND ($2::timestamptz IS NULL OR s.last_accessed <= $2)
            ORDER BY s.last_accessed DESC
            OFFSET $3
            LIMIT $4
            "#,
        )
        .bind(filter.start)
        .bind(filter.end)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_record()).collect()
    }

    async fn count_active(&self, filter: &SessionFilter) -> IdentityResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM sessions s
            WHERE s.is_active
              AND ($1::timestamptz IS NULL OR s.last_accessed >= $1)
              AND ($2::timestamptz IS NULL OR s.last_accessed <= $2)
            "#,
        )
        .bind(filter.start)
        .bind(filter.end)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    email: String,
    name: String,
    password_hash: String,
    password_history: Vec<String>,
    role: i16,
    status: i16,
    employee_id: String,
    job_title: String,
    department: String,
    applications_managed: Vec<String>,
    employment_type: String,
    phone_number: String,
    street: String,
    city: String,
    state: String,
    zip: String,
    country: String,
    date_of_birth: Option<NaiveDate>,
    password_changed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> IdentityResult<Account> {
        let role = AccountRole::from_id(self.role)
            .ok_or_else(|| IdentityError::Internal(format!("Invalid role id: {}", self.role)))?;
        let status = AccountStatus::from_id(self.status).ok_or_else(|| {
            IdentityError::Internal(format!("Invalid status id: {}", self.status))
        })?;
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| IdentityError::Internal(e.to_string()))?;

        Ok(Account {
            account_id: AccountId::from_uuid(self.account_id),
            email: Email::from_db(self.email),
            name: self.name,
            password_hash,
            password_history: PasswordHistory::from_db(self.password_history),
            role,
            status,
            employee_id: EmployeeId::from_db(self.employee_id),
            job: JobProfile {
                job_title: self.job_title,
                department: self.department,
                applications_managed: self.applications_managed,
                employment_type: self.employment_type,
            },
            phone_number: self.phone_number,
            address: Address {
                street: self.street,
                city: self.city,
                state: self.state,
                zip: self.zip,
                country: self.country,
            },
            date_of_birth: self.date_of_birth,
            password_changed_at: self.password_changed_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ActiveSessionRow {
    account_id: Uuid,
    name: String,
    email: String,
    role: i16,
    status: i16,
    last_accessed: DateTime<Utc>,
}

impl ActiveSessionRow {
    fn into_record(self) -> IdentityResult<ActiveSessionRecord> {
        let role = AccountRole::from_id(self.role)
            .ok_or_else(|| IdentityError::Internal(format!("Invalid role id: {}", self.role)))?;
        let status = AccountStatus::from_id(self.status).ok_or_else(|| {
            IdentityError::Internal(format!("Invalid status id: {}", self.status))
        })?;

        Ok(ActiveSessionRecord {
            account_id: AccountId::from_uuid(self.account_id),
            name: self.name,
            email: Email::from_db(self.email),
            role,
            status,
            last_accessed: self.last_accessed,
        })
    }
}
