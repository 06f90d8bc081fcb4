// ============================================================================
// Rango Core - Visitor Service
// File: crates/rango-core/src/services/visitor_service.rs
// ============================================================================
//! Mediates between the pure visit counter and the session store

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use rango_shared::constants::{SESSION_KEY_LAST_VISIT, SESSION_KEY_VISITS};

use crate::domain::{VisitPolicy, VisitState};
use crate::error::DomainError;
use crate::repositories::SessionStore;

/// Tracks distinct-day visits for one caller's session. Invoked by the
/// hosting layer on the counted entry points (home and about views).
pub struct VisitorService<S: SessionStore> {
    session: Arc<S>,
    policy: VisitPolicy,
}

impl<S: SessionStore> VisitorService<S> {
    pub fn new(session: Arc<S>, policy: VisitPolicy) -> Self {
        Self { session, policy }
    }

    /// Count a visit at `now`, persisting the updated state back into the
    /// session and returning it.
    pub async fn record_visit(&self, now: DateTime<Utc>) -> Result<VisitState, DomainError> {
        let prior = self.load_state().await?;
        let state = VisitState::advance(prior, now, self.policy);

        self.session
            .set(SESSION_KEY_VISITS, &state.visits.to_string())
            .await?;
        self.session
            .set(SESSION_KEY_LAST_VISIT, &state.last_visit.to_rfc3339())
            .await?;

        Ok(state)
    }

    /// Read back the stored state. Missing or malformed values count as no
    /// prior visit rather than an error.
    async fn load_state(&self) -> Result<Option<VisitState>, DomainError> {
        let visits = self.session.get(SESSION_KEY_VISITS).await?;
        let last_visit = self.session.get(SESSION_KEY_LAST_VISIT).await?;

        let (Some(visits), Some(last_visit)) = (visits, last_visit) else {
            return Ok(None);
        };

        let visits: i32 = match visits.parse() {
            Ok(n) => n,
            Err(_) => {
                warn!("Discarding malformed visits value: {}", visits);
                return Ok(None);
            }
        };

        let last_visit = match DateTime::parse_from_rfc3339(&last_visit) {
            Ok(t) => t.with_timezone(&Utc),
            Err(_) => {
                warn!("Discarding malformed last_visit value: {}", last_visit);
                return Ok(None);
            }
        };

        Ok(Some(VisitState { visits, last_visit }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::session_store::MockSessionStore;
    use chrono::{Duration, TimeZone};
    use mockall::predicate::eq;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2017, 1, 26, 8, 23, 12).unwrap()
    }

    #[tokio::test]
    async fn test_first_visit_writes_initial_state() {
        let now = t0();
        let mut session = MockSessionStore::new();
        session.expect_get().returning(|_| Ok(None));
        session
            .expect_set()
            .with(eq(SESSION_KEY_VISITS), eq("1"))
            .times(1)
            .returning(|_, _| Ok(()));
        let expected = now.to_rfc3339();
        session
            .expect_set()
            .withf(move |key, value| key == SESSION_KEY_LAST_VISIT && value == expected)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = VisitorService::new(Arc::new(session), VisitPolicy::Reset);
        let state = service.record_visit(now).await.unwrap();

        assert_eq!(state.visits, 1);
        assert_eq!(state.last_visit, now);
    }

    #[tokio::test]
    async fn test_visit_after_two_days_increments() {
        let now = t0() + Duration::days(2);
        let mut session = MockSessionStore::new();
        session
            .expect_get()
            .with(eq(SESSION_KEY_VISITS))
            .returning(|_| Ok(Some("1".to_string())));
        session
            .expect_get()
            .with(eq(SESSION_KEY_LAST_VISIT))
            .returning(|_| Ok(Some(t0().to_rfc3339())));
        session
            .expect_set()
            .with(eq(SESSION_KEY_VISITS), eq("2"))
            .times(1)
            .returning(|_, _| Ok(()));
        let expected = now.to_rfc3339();
        session
            .expect_set()
            .withf(move |key, value| key == SESSION_KEY_LAST_VISIT && value == expected)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = VisitorService::new(Arc::new(session), VisitPolicy::Reset);
        let state = service.record_visit(now).await.unwrap();

        assert_eq!(state.visits, 2);
        assert_eq!(state.last_visit, now);
    }

    #[tokio::test]
    async fn test_malformed_timestamp_counts_as_first_visit() {
        let now = t0();
        let mut session = MockSessionStore::new();
        session
            .expect_get()
            .with(eq(SESSION_KEY_VISITS))
            .returning(|_| Ok(Some("5".to_string())));
        session
            .expect_get()
            .with(eq(SESSION_KEY_LAST_VISIT))
            .returning(|_| Ok(Some("yesterday-ish".to_string())));
        session.expect_set().returning(|_, _| Ok(()));

        let service = VisitorService::new(Arc::new(session), VisitPolicy::Preserve);
        let state = service.record_visit(now).await.unwrap();

        assert_eq!(state.visits, 1);
        assert_eq!(state.last_visit, now);
    }
}
