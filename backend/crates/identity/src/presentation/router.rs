//! Identity Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::domain::mailer::VerificationMailer;
use crate::domain::repository::{AccountRepository, SessionRepository};
use crate::infra::mailer::LogMailer;
use crate::infra::postgres::PgIdentityRepository;
use crate::presentation::handlers::{self, IdentityAppState};

/// Create the identity router with PostgreSQL repository and log-only mailer
pub fn identity_router(repo: PgIdentityRepository, config: IdentityConfig) -> Router {
    identity_router_generic(repo, LogMailer, config)
}

/// Create a generic identity router for any repository and mailer implementation
pub fn identity_router_generic<R, M>(repo: R, mailer: M, config: IdentityConfig) -> Router
where
    R: AccountRepository + SessionRepository + Clone + Send + Sync + 'static,
    M: VerificationMailer + Clone + Send + Sync + 'static,
{
    let state = IdentityAppState {
        repo: Arc::new(repo),
        mailer: Arc::new(mailer),
        config: Arc::new(config),
    };

    Router::new()
        .route("/register", post(handlers::register::<R, M>))
        .route("/verify", get(handlers::verify_email::<R, M>))
        .route("/login", post(handlers::login::<R, M>))
        .route("/sessions", get(handlers::list_sessions::<R, M>))
        .route("/password", post(handlers::change_password::<R, M>))
        .route(
            "/setup",
            get(handlers::setup_details::<R, M>).post(handlers::complete_setup::<R, M>),
        )
        .with_state(state)
}
