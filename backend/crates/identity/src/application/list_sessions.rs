//! Session Registry Query Use Case
//!
//! Paginated, time-filtered listing of active sessions joined with the
//! owning account summaries.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entity::session::{SessionFilter, SessionPage};
use crate::domain::repository::SessionRepository;
use crate::error::IdentityResult;

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 100;

/// Session registry query input
#[derive(Debug, Default)]
pub struct ListSessionsInput {
    /// Lower bound on last_accessed (inclusive)
    pub start_date: Option<DateTime<Utc>>,
    /// Upper bound on last_accessed (inclusive)
    pub end_date: Option<DateTime<Utc>>,
    /// 1-based page number
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Session registry query use case
pub struct ListSessionsUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> ListSessionsUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    pub async fn execute(&self, input: ListSessionsInput) -> IdentityResult<SessionPage> {
        let page = input.page.unwrap_or(1).max(1);
        let limit = input
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        // Saturate: an absurd page number is an empty page, not a panic
        let skip = (page - 1).saturating_mul(limit);

        let filter = SessionFilter {
            start: input.start_date,
            end: input.end_date,
        };

        // Total is computed over the filtered set, before pagination
        let records = self.session_repo.list_active(&filter, skip, limit).await?;
        let total = self.session_repo.count_active(&filter).await?;

        Ok(SessionPage { records, total })
    }
}
