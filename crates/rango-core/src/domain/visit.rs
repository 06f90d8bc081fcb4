// ============================================================================
// Rango Core - Visit Counting
// File: crates/rango-core/src/domain/visit.rs
// Description: Distinct-day visit counter over per-session state
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rango_shared::config::VisitorSettings;

use crate::error::DomainError;

/// How a repeat visit on the same calendar day is counted.
///
/// The source history carries two incompatible variants of this routine, so
/// the choice is configuration rather than a hard-coded rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitPolicy {
    /// A same-day visit forces the count back to 1.
    Reset,
    /// A same-day visit leaves the stored count untouched.
    Preserve,
}

impl VisitPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitPolicy::Reset => "reset",
            VisitPolicy::Preserve => "preserve",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "reset" => Some(VisitPolicy::Reset),
            "preserve" => Some(VisitPolicy::Preserve),
            _ => None,
        }
    }

    /// Resolve the configured policy, rejecting anything outside the known
    /// set so a typo in `visitor.policy` fails loudly instead of silently
    /// falling back.
    pub fn from_settings(settings: &VisitorSettings) -> Result<Self, DomainError> {
        Self::from_str(&settings.policy).ok_or_else(|| {
            DomainError::ValidationError(format!(
                "Unknown visitor policy: {:?} (expected \"reset\" or \"preserve\")",
                settings.policy
            ))
        })
    }
}

impl Default for VisitPolicy {
    fn default() -> Self {
        VisitPolicy::Reset
    }
}

/// Per-session visit state: how many distinct days the caller has visited
/// and when the last counted visit happened. Created on the first request,
/// mutated on each counted request, expires with the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitState {
    pub visits: i32,
    pub last_visit: DateTime<Utc>,
}

impl VisitState {
    /// Apply one visit at `now` on top of `prior` state.
    ///
    /// No prior state initializes the counter at 1. A gap of strictly more
    /// than zero whole days since the last visit increments the counter and
    /// moves `last_visit` forward; anything within the same day keeps
    /// `last_visit` where it was and handles the count per `policy`.
    ///
    /// Pure: the caller persists the returned state back into the session.
    pub fn advance(prior: Option<VisitState>, now: DateTime<Utc>, policy: VisitPolicy) -> Self {
        let Some(prior) = prior else {
            return VisitState {
                visits: 1,
                last_visit: now,
            };
        };

        // Whole-day difference, not a 24-hour rolling window.
        if (now - prior.last_visit).num_days() > 0 {
            VisitState {
                visits: prior.visits + 1,
                last_visit: now,
            }
        } else {
            VisitState {
                visits: match policy {
                    VisitPolicy::Reset => 1,
                    VisitPolicy::Preserve => prior.visits,
                },
                last_visit: prior.last_visit,
            }
        }
    }
}
