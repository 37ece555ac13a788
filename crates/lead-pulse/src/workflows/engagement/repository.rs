use super::domain::{EngagementEvent, ScoreSnapshot, SessionId, SessionProfile};

/// Read-only access to the externally owned event and profile data.
///
/// Adapters own blocking and timeout concerns; a call that times out should
/// surface `StoreError::Timeout` so the batch runner can skip the session
/// like any other per-session failure.
pub trait EngagementStore: Send + Sync {
    /// Enumerate every session eligible for scoring.
    fn session_ids(&self) -> Result<Vec<SessionId>, StoreError>;
    fn fetch_profile(&self, id: &SessionId) -> Result<Option<SessionProfile>, StoreError>;
    fn fetch_events(&self, id: &SessionId) -> Result<Vec<EngagementEvent>, StoreError>;
    /// Active chapter count for one experience, the completion-ratio
    /// denominator contribution.
    fn chapter_count(&self, experience_id: &str) -> Result<u32, StoreError>;
}

/// Write side for computed snapshots. Upsert is a full replace keyed by
/// session id, never a merge.
pub trait SnapshotStore: Send + Sync {
    fn upsert(&self, snapshot: ScoreSnapshot) -> Result<(), StoreError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<ScoreSnapshot>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store call timed out: {0}")]
    Timeout(String),
}
