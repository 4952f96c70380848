//! HTTP Handlers

use axum::Json;
use axum::extract::{Query, State};
use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::application::{
    ChangePasswordInput, ChangePasswordUseCase, ListSessionsInput, ListSessionsUseCase, LoginInput,
    LoginUseCase, RegisterInput, RegisterUseCase, SetupUseCase, VerifyEmailUseCase,
};
use crate::domain::mailer::VerificationMailer;
use crate::domain::repository::{AccountRepository, SessionRepository};
use crate::error::IdentityResult;
use crate::presentation::dto::{
    ChangePasswordRequest, CompleteSetupRequest, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest, SessionsQuery, SessionsResponse, SetupDetailsResponse, SetupQuery,
    VerifyQuery,
};

/// Shared state for identity handlers
#[derive(Clone)]
pub struct IdentityAppState<R, M>
where
    R: AccountRepository + SessionRepository + Clone + Send + Sync + 'static,
    M: VerificationMailer + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub mailer: Arc<M>,
    pub config: Arc<IdentityConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/identity/register
pub async fn register<R, M>(
    State(state): State<IdentityAppState<R, M>>,
    Json(req): Json<RegisterRequest>,
) -> IdentityResult<Json<MessageResponse>>
where
    R: AccountRepository + SessionRepository + Clone + Send + Sync + 'static,
    M: VerificationMailer + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.mailer.clone(),
        state.config.clone(),
    );

    let input = RegisterInput {
        name: req.name,
        email: req.email,
        password: req.password,
        job_title: req.job_title,
        applications_managed: req.applications_managed,
        department: req.department,
        phone_number: req.phone_number,
        address: req.address.into(),
        date_of_birth: req.date_of_birth,
        employment_type: req.employment_type,
    };

    let message = use_case.execute(input).await?;

    Ok(Json(MessageResponse { message }))
}

// ============================================================================
// Email Verification
// ============================================================================

/// GET /api/identity/verify?token=...
pub async fn verify_email<R, M>(
    State(state): State<IdentityAppState<R, M>>,
    Query(query): Query<VerifyQuery>,
) -> IdentityResult<Json<MessageResponse>>
where
    R: AccountRepository + SessionRepository + Clone + Send + Sync + 'static,
    M: VerificationMailer + Clone + Send + Sync + 'static,
{
    let use_case = VerifyEmailUseCase::new(state.repo.clone(), state.config.clone());

    let message = use_case.execute(&query.token).await?;

    Ok(Json(MessageResponse { message }))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/identity/login
pub async fn login<R, M>(
    State(state): State<IdentityAppState<R, M>>,
    Json(req): Json<LoginRequest>,
) -> IdentityResult<Json<LoginResponse>>
where
    R: AccountRepository + SessionRepository + Clone + Send + Sync + 'static,
    M: VerificationMailer + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        token: output.token,
        expires_in: output.expires_in,
    }))
}

// ============================================================================
// Session Registry
// ============================================================================

/// GET /api/identity/sessions
pub async fn list_sessions<R, M>(
    State(state): State<IdentityAppState<R, M>>,
    Query(query): Query<SessionsQuery>,
) -> IdentityResult<Json<SessionsResponse>>
where
    R: AccountRepository + SessionRepository + Clone + Send + Sync + 'static,
    M: VerificationMailer + Clone + Send + Sync + 'static,
{
    let use_case = ListSessionsUseCase::new(state.repo.clone());

    let input = ListSessionsInput {
        start_date: query.start_date,
        end_date: query.end_date,
        page: query.page,
        limit: query.limit,
    };

    let page = use_case.execute(input).await?;

    Ok(Json(page.into()))
}

// ============================================================================
// Password Change
// ============================================================================

/// POST /api/identity/password
pub async fn change_password<R, M>(
    State(state): State<IdentityAppState<R, M>>,
    Json(req): Json<ChangePasswordRequest>,
) -> IdentityResult<Json<MessageResponse>>
where
    R: AccountRepository + SessionRepository + Clone + Send + Sync + 'static,
    M: VerificationMailer + Clone + Send + Sync + 'static,
{
    let use_case =
        ChangePasswordUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = ChangePasswordInput {
        account_id: req.account_id,
        current_password: req.current_password,
        new_password: req.new_password,
    };

    let message = use_case.execute(input).await?;

    Ok(Json(MessageResponse { message }))
}

// ============================================================================
// Account Setup
// ============================================================================

/// GET /api/identity/setup?token=...
pub async fn setup_details<R, M>(
    State(state): State<IdentityAppState<R, M>>,
    Query(query): Query<SetupQuery>,
) -> IdentityResult<Json<SetupDetailsResponse>>
where
    R: AccountRepository + SessionRepository + Clone + Send + Sync + 'static,
    M: VerificationMailer + Clone + Send + Sync + 'static,
{
    let use_case = SetupUseCase::new(state.repo.clone(), state.config.clone());

    let details = use_case.details(&query.token).await?;

    Ok(Json(SetupDetailsResponse {
        email: details.email,
        name: details.name,
    }))
}

/// POST /api/identity/setup
pub async fn complete_setup<R, M>(
    State(state): State<IdentityAppState<R, M>>,
    Json(req): Json<CompleteSetupRequest>,
) -> IdentityResult<Json<MessageResponse>>
where
    R: AccountRepository + SessionRepository + Clone + Send + Sync + 'static,
    M: VerificationMailer + Clone + Send + Sync + 'static,
{
    let use_case = SetupUseCase::new(state.repo.clone(), state.config.clone());

    let message = use_case.complete(&req.token, req.password).await?;

    Ok(Json(MessageResponse { message }))
}
