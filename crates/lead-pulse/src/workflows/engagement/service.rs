use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{EngagementEvent, LeadTemperature, ScoreSnapshot, SessionId};
use super::repository::{EngagementStore, SnapshotStore, StoreError};
use super::scoring::{ScoringConfig, ScoringEngine};

/// Batch runner composing the stores and the scoring engine. The only
/// component with side effects; everything below it is pure.
pub struct LeadScoringService<S, W> {
    engagement: Arc<S>,
    snapshots: Arc<W>,
    engine: ScoringEngine,
}

/// Which sessions a run covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreRunSelection {
    Session(SessionId),
    AllSessions,
}

/// Per-session tuple collected into the run summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionScore {
    pub session_id: SessionId,
    pub email: Option<String>,
    pub engagement_score: u8,
    pub lead_temperature: LeadTemperature,
}

/// Outcome of one batch invocation. Partial success is a valid terminal
/// state: failed sessions are skipped and visible only in the logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub processed: usize,
    pub results: Vec<SessionScore>,
}

/// Fatal batch-level failure; per-session errors never escape the loop.
#[derive(Debug, thiserror::Error)]
pub enum ScoringRunError {
    #[error("failed to enumerate candidate sessions: {0}")]
    Enumeration(#[source] StoreError),
}

impl<S, W> LeadScoringService<S, W>
where
    S: EngagementStore + 'static,
    W: SnapshotStore + 'static,
{
    pub fn new(engagement: Arc<S>, snapshots: Arc<W>, config: ScoringConfig) -> Self {
        Self {
            engagement,
            snapshots,
            engine: ScoringEngine::new(config),
        }
    }

    /// Score the selected sessions and persist a fresh snapshot for each.
    ///
    /// Sessions are independent; a store failure while processing one is
    /// logged and skipped so the rest of the batch still completes.
    pub fn run(&self, selection: ScoreRunSelection) -> Result<RunSummary, ScoringRunError> {
        let candidates = match selection {
            ScoreRunSelection::Session(id) => vec![id],
            ScoreRunSelection::AllSessions => self
                .engagement
                .session_ids()
                .map_err(ScoringRunError::Enumeration)?,
        };

        let mut results = Vec::new();
        for session_id in candidates {
            match self.score_session(&session_id) {
                Ok(Some(result)) => results.push(result),
                Ok(None) => {
                    warn!(%session_id, "session has no profile; skipping");
                }
                Err(error) => {
                    warn!(%session_id, %error, "session scoring failed; skipping");
                }
            }
        }

        Ok(RunSummary {
            processed: results.len(),
            results,
        })
    }

    /// Read, compute, write for one session, strictly in that order.
    fn score_session(&self, session_id: &SessionId) -> Result<Option<SessionScore>, StoreError> {
        let Some(profile) = self.engagement.fetch_profile(session_id)? else {
            return Ok(None);
        };
        let events = self.engagement.fetch_events(session_id)?;
        let total_chapters = self.total_chapters(&events)?;

        let outcome = self.engine.score(&events, &profile, total_chapters);

        self.snapshots.upsert(ScoreSnapshot {
            session_id: session_id.clone(),
            total_watch_time_seconds: outcome.metrics.total_watch_time_seconds,
            completed_chapters: outcome.metrics.completed_chapters,
            features_explored: outcome.metrics.feature_count,
            cta_clicks: outcome.metrics.cta_count,
            engagement_score: outcome.engagement_score,
            lead_temperature: outcome.lead_temperature,
            recommended_follow_up: outcome.recommended_follow_up.clone(),
            breakdown: outcome.breakdown,
            last_computed_at: Utc::now(),
        })?;

        Ok(Some(SessionScore {
            session_id: session_id.clone(),
            email: profile.email.clone(),
            engagement_score: outcome.engagement_score,
            lead_temperature: outcome.lead_temperature,
        }))
    }

    /// Sum the active chapter counts over the distinct experience ids the
    /// session's events reference. Chapters shared across experiences are
    /// not deduplicated; the observed denominator semantics are kept as-is.
    fn total_chapters(&self, events: &[EngagementEvent]) -> Result<u32, StoreError> {
        let experiences: BTreeSet<&str> = events
            .iter()
            .filter_map(|event| event.experience_id.as_deref())
            .collect();

        let mut total = 0u32;
        for experience_id in experiences {
            total = total.saturating_add(self.engagement.chapter_count(experience_id)?);
        }
        Ok(total)
    }
}
