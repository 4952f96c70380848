//! Registration Use Case
//!
//! Creates a pending account and triggers verification email delivery.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::config::IdentityConfig;
use crate::application::token::{TokenCodec, TokenPurpose};
use crate::domain::entity::account::{Account, Address, JobProfile, NewAccount};
use crate::domain::mailer::VerificationMailer;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_role::AccountRole, email::Email, employee_id::EmployeeId,
};
use crate::error::{IdentityError, IdentityResult};
use platform::password::ClearTextPassword;

/// Attempts at generating a unique employee id before giving up. The
/// suffix space is only 9000 values, so conflicts are expected under
/// load and resolved by the store's unique constraint plus this retry.
const EMPLOYEE_ID_ATTEMPTS: u32 = 5;

/// Registration input (full onboarding profile)
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub job_title: String,
    pub applications_managed: Vec<String>,
    pub department: String,
    pub phone_number: String,
    pub address: Address,
    /// ISO date string; omitted when absent, rejected when unparseable
    pub date_of_birth: Option<String>,
    pub employment_type: String,
}

/// Registration use case
pub struct RegisterUseCase<A, M>
where
    A: AccountRepository,
    M: VerificationMailer,
{
    account_repo: Arc<A>,
    mailer: Arc<M>,
    config: Arc<IdentityConfig>,
}

impl<A, M> RegisterUseCase<A, M>
where
    A: AccountRepository,
    M: VerificationMailer,
{
    pub fn new(account_repo: Arc<A>, mailer: Arc<M>, config: Arc<IdentityConfig>) -> Self {
        Self {
            account_repo,
            mailer,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> IdentityResult<String> {
        let email = Email::new(input.email)?;

        if self.account_repo.exists_by_email(&email).await? {
            return Err(IdentityError::DuplicateEmail);
        }

        let role = AccountRole::resolve(&input.job_title, &input.applications_managed);

        let date_of_birth = match input.date_of_birth.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<NaiveDate>()
                    .map_err(|_| IdentityError::InvalidDate)?,
            ),
        };

        let password = ClearTextPassword::new(input.password)
            .map_err(|e| IdentityError::PasswordValidation(e.to_string()))?;
        let password_hash = password.hash()?;

        let mut account = Account::new(NewAccount {
            email,
            name: input.name,
            password_hash,
            role,
            employee_id: EmployeeId::generate(),
            job: JobProfile {
                job_title: input.job_title,
                department: input.department,
                applications_managed: input.applications_managed,
                employment_type: input.employment_type,
            },
            phone_number: input.phone_number,
            address: input.address,
            date_of_birth,
        });

        self.create_with_unique_employee_id(&mut account).await?;

        let token = self.token_codec().issue(
            TokenPurpose::Verify,
            &account.account_id,
            self.config.verification_token_ttl,
        );

        // Best-effort delivery. The account stays Pending on failure and
        // verification can be retried out of band.
        if let Err(e) = self.mailer.send_verification(&account.email, &token).await {
            tracing::warn!(
                account_id = %account.account_id,
                error = %e,
                "Verification email delivery failed"
            );
        }

        tracing::info!(
            account_id = %account.account_id,
            employee_id = %account.employee_id,
            role = %account.role,
            "Account registered"
        );

        Ok("Registration successful. Please verify your email.".to_string())
    }

    /// Create the account, regenerating the employee id on a uniqueness
    /// conflict. An email conflict here means a concurrent registration
    /// won the race after our existence check.
    async fn create_with_unique_employee_id(&self, account: &mut Account) -> IdentityResult<()> {
        for attempt in 1..=EMPLOYEE_ID_ATTEMPTS {
            match self.account_repo.create(account).await {
                Ok(()) => return Ok(()),
                Err(e) => match unique_violation(&e) {
                    Some(constraint) if constraint.contains("employee_id") => {
                        tracing::debug!(
                            attempt,
                            employee_id = %account.employee_id,
                            "Employee id collision, regenerating"
                        );
                        account.employee_id = EmployeeId::generate();
                    }
                    Some(constraint) if constraint.contains("email") => {
                        return Err(IdentityError::DuplicateEmail);
                    }
                    _ => return Err(e),
                },
            }
        }
        Err(IdentityError::Internal(
            "Could not generate a unique employee id".to_string(),
        ))
    }

    fn token_codec(&self) -> TokenCodec {
        TokenCodec::new(&self.config)
    }
}

/// Extract the violated constraint name from a unique-violation database
/// error (PostgreSQL error code 23505), if that is what `err` is
fn unique_violation(err: &IdentityError) -> Option<&str> {
    if let IdentityError::Database(sqlx::Error::Database(db_err)) = err {
        if db_err.code().as_deref() == Some("23505") {
            return db_err.constraint();
        }
    }
    None
}
