use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::workflows::engagement::domain::{
    EngagementEvent, EventKind, ScoreSnapshot, SessionId, SessionProfile,
};
use crate::workflows::engagement::repository::{EngagementStore, SnapshotStore, StoreError};
use crate::workflows::engagement::scoring::{ScoringConfig, ScoringEngine};
use crate::workflows::engagement::service::LeadScoringService;

pub(super) fn session(raw: &str) -> SessionId {
    SessionId(raw.to_string())
}

pub(super) fn anonymous_profile() -> SessionProfile {
    SessionProfile::default()
}

/// email + full name + industry: 25 + 15 + 15 = 55 profile points.
pub(super) fn identified_profile() -> SessionProfile {
    SessionProfile {
        email: Some("jordan@acme.test".to_string()),
        full_name: Some("Jordan Reyes".to_string()),
        industry: Some("Manufacturing".to_string()),
        ..SessionProfile::default()
    }
}

pub(super) fn complete_profile() -> SessionProfile {
    SessionProfile {
        email: Some("casey@globex.test".to_string()),
        full_name: Some("Casey Morgan".to_string()),
        company_name: Some("Globex".to_string()),
        industry: Some("Logistics".to_string()),
        company_size: Some("51-200".to_string()),
        job_title: Some("Operations Lead".to_string()),
    }
}

pub(super) fn event(session_id: &str, kind: EventKind) -> EngagementEvent {
    EngagementEvent {
        id: format!("evt-{}-{}", session_id, kind.label()),
        session_id: session(session_id),
        experience_id: None,
        chapter_id: None,
        kind,
        video_watch_percentage: None,
        time_spent_seconds: None,
        metadata: Value::Null,
        created_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap(),
    }
}

pub(super) fn video_event(session_id: &str, percentage: f32, seconds: u32) -> EngagementEvent {
    EngagementEvent {
        video_watch_percentage: Some(percentage),
        time_spent_seconds: Some(seconds),
        ..event(session_id, EventKind::VideoProgress)
    }
}

pub(super) fn chapter_event(
    session_id: &str,
    experience_id: &str,
    chapter_id: &str,
) -> EngagementEvent {
    EngagementEvent {
        experience_id: Some(experience_id.to_string()),
        chapter_id: Some(chapter_id.to_string()),
        ..event(session_id, EventKind::ChapterComplete)
    }
}

/// Worked example: avg video 80, 3 of 5 chapters, 2 CTA clicks, 450s total
/// watch time. With the 55-point profile this lands on a score of 67 (hot).
pub(super) fn worked_example_events(session_id: &str) -> Vec<EngagementEvent> {
    vec![
        video_event(session_id, 70.0, 200),
        video_event(session_id, 90.0, 250),
        chapter_event(session_id, "exp-onboarding", "ch-1"),
        chapter_event(session_id, "exp-onboarding", "ch-2"),
        chapter_event(session_id, "exp-onboarding", "ch-3"),
        event(session_id, EventKind::CtaClick),
        event(session_id, EventKind::BookDemo),
    ]
}

pub(super) fn scoring_engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default())
}

#[derive(Default)]
pub(super) struct MemoryEngagementStore {
    inner: Mutex<EngagementData>,
}

#[derive(Default)]
struct EngagementData {
    profiles: HashMap<SessionId, SessionProfile>,
    events: HashMap<SessionId, Vec<EngagementEvent>>,
    chapters: HashMap<String, u32>,
    failing_events: Option<SessionId>,
}

impl MemoryEngagementStore {
    pub(super) fn add_session(&self, id: &SessionId, profile: SessionProfile) {
        let mut guard = self.inner.lock().expect("store mutex poisoned");
        guard.profiles.insert(id.clone(), profile);
    }

    pub(super) fn add_events(&self, id: &SessionId, mut events: Vec<EngagementEvent>) {
        let mut guard = self.inner.lock().expect("store mutex poisoned");
        guard.events.entry(id.clone()).or_default().append(&mut events);
    }

    pub(super) fn set_chapter_count(&self, experience_id: &str, count: u32) {
        let mut guard = self.inner.lock().expect("store mutex poisoned");
        guard.chapters.insert(experience_id.to_string(), count);
    }

    /// Make event fetches fail for one session, simulating a flaky read.
    pub(super) fn fail_events_for(&self, id: &SessionId) {
        let mut guard = self.inner.lock().expect("store mutex poisoned");
        guard.failing_events = Some(id.clone());
    }
}

impl EngagementStore for MemoryEngagementStore {
    fn session_ids(&self) -> Result<Vec<SessionId>, StoreError> {
        let guard = self.inner.lock().expect("store mutex poisoned");
        let mut ids: Vec<SessionId> = guard.profiles.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    fn fetch_profile(&self, id: &SessionId) -> Result<Option<SessionProfile>, StoreError> {
        let guard = self.inner.lock().expect("store mutex poisoned");
        Ok(guard.profiles.get(id).cloned())
    }

    fn fetch_events(&self, id: &SessionId) -> Result<Vec<EngagementEvent>, StoreError> {
        let guard = self.inner.lock().expect("store mutex poisoned");
        if guard.failing_events.as_ref() == Some(id) {
            return Err(StoreError::Unavailable("event fetch failed".to_string()));
        }
        Ok(guard.events.get(id).cloned().unwrap_or_default())
    }

    fn chapter_count(&self, experience_id: &str) -> Result<u32, StoreError> {
        let guard = self.inner.lock().expect("store mutex poisoned");
        Ok(guard.chapters.get(experience_id).copied().unwrap_or(0))
    }
}

#[derive(Default)]
pub(super) struct MemorySnapshotStore {
    snapshots: Mutex<HashMap<SessionId, ScoreSnapshot>>,
}

impl SnapshotStore for MemorySnapshotStore {
    fn upsert(&self, snapshot: ScoreSnapshot) -> Result<(), StoreError> {
        let mut guard = self.snapshots.lock().expect("snapshot mutex poisoned");
        guard.insert(snapshot.session_id.clone(), snapshot);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<ScoreSnapshot>, StoreError> {
        let guard = self.snapshots.lock().expect("snapshot mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableStore;

impl EngagementStore for UnavailableStore {
    fn session_ids(&self) -> Result<Vec<SessionId>, StoreError> {
        Err(StoreError::Unavailable("backing store offline".to_string()))
    }

    fn fetch_profile(&self, _id: &SessionId) -> Result<Option<SessionProfile>, StoreError> {
        Err(StoreError::Unavailable("backing store offline".to_string()))
    }

    fn fetch_events(&self, _id: &SessionId) -> Result<Vec<EngagementEvent>, StoreError> {
        Err(StoreError::Unavailable("backing store offline".to_string()))
    }

    fn chapter_count(&self, _experience_id: &str) -> Result<u32, StoreError> {
        Err(StoreError::Unavailable("backing store offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    LeadScoringService<MemoryEngagementStore, MemorySnapshotStore>,
    Arc<MemoryEngagementStore>,
    Arc<MemorySnapshotStore>,
) {
    let engagement = Arc::new(MemoryEngagementStore::default());
    let snapshots = Arc::new(MemorySnapshotStore::default());
    let service = LeadScoringService::new(
        engagement.clone(),
        snapshots.clone(),
        ScoringConfig::default(),
    );
    (service, engagement, snapshots)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
