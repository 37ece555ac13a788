use chrono::{Duration, Utc};
use lead_pulse::workflows::engagement::{
    EngagementEvent, EngagementStore, EventKind, ScoreSnapshot, ScoringConfig, SessionId,
    SessionProfile, SnapshotStore, StoreError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Stand-in for the hosted event/profile store. Production deployments wire
/// an adapter over the real backend behind the same trait.
#[derive(Default, Clone)]
pub(crate) struct InMemoryEngagementStore {
    inner: Arc<Mutex<EngagementData>>,
}

#[derive(Default)]
struct EngagementData {
    profiles: HashMap<SessionId, SessionProfile>,
    events: HashMap<SessionId, Vec<EngagementEvent>>,
    chapters: HashMap<String, u32>,
}

impl InMemoryEngagementStore {
    pub(crate) fn add_session(&self, id: &SessionId, profile: SessionProfile) {
        let mut guard = self.inner.lock().expect("engagement mutex poisoned");
        guard.profiles.insert(id.clone(), profile);
    }

    pub(crate) fn record_event(&self, event: EngagementEvent) {
        let mut guard = self.inner.lock().expect("engagement mutex poisoned");
        guard
            .events
            .entry(event.session_id.clone())
            .or_default()
            .push(event);
    }

    pub(crate) fn set_chapter_count(&self, experience_id: &str, count: u32) {
        let mut guard = self.inner.lock().expect("engagement mutex poisoned");
        guard.chapters.insert(experience_id.to_string(), count);
    }
}

impl EngagementStore for InMemoryEngagementStore {
    fn session_ids(&self) -> Result<Vec<SessionId>, StoreError> {
        let guard = self.inner.lock().expect("engagement mutex poisoned");
        let mut ids: Vec<SessionId> = guard.profiles.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    fn fetch_profile(&self, id: &SessionId) -> Result<Option<SessionProfile>, StoreError> {
        let guard = self.inner.lock().expect("engagement mutex poisoned");
        Ok(guard.profiles.get(id).cloned())
    }

    fn fetch_events(&self, id: &SessionId) -> Result<Vec<EngagementEvent>, StoreError> {
        let guard = self.inner.lock().expect("engagement mutex poisoned");
        Ok(guard.events.get(id).cloned().unwrap_or_default())
    }

    fn chapter_count(&self, experience_id: &str) -> Result<u32, StoreError> {
        let guard = self.inner.lock().expect("engagement mutex poisoned");
        Ok(guard.chapters.get(experience_id).copied().unwrap_or(0))
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySnapshotStore {
    snapshots: Arc<Mutex<HashMap<SessionId, ScoreSnapshot>>>,
}

impl SnapshotStore for InMemorySnapshotStore {
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

pub(crate) fn default_scoring_config() -> ScoringConfig {
    ScoringConfig {
        video_weight: 0.30,
        chapter_weight: 0.25,
        cta_weight: 0.20,
        time_weight: 0.10,
        profile_weight: 0.15,
        cta_points_per_interaction: 25.0,
        time_saturation_seconds: 300,
    }
}

/// Load three representative sessions: one high-intent, one mildly engaged,
/// one anonymous drive-by.
pub(crate) fn seed_demo_sessions(store: &InMemoryEngagementStore) -> Vec<SessionId> {
    let aurora = SessionId("sess-aurora".to_string());
    let breeze = SessionId("sess-breeze".to_string());
    let cinder = SessionId("sess-cinder".to_string());

    store.set_chapter_count("product-tour", 5);
    store.set_chapter_count("pricing-deep-dive", 3);

    store.add_session(
        &aurora,
        SessionProfile {
            email: Some("dana.velasquez@northwind.test".to_string()),
            full_name: Some("Dana Velasquez".to_string()),
            company_name: Some("Northwind Traders".to_string()),
            industry: Some("Wholesale".to_string()),
            company_size: Some("201-500".to_string()),
            job_title: Some("VP Operations".to_string()),
        },
    );
    for (sequence, (chapter, percentage, seconds)) in [
        ("ch-welcome", 95.0, 140),
        ("ch-workflows", 88.0, 170),
        ("ch-reporting", 72.0, 110),
    ]
    .into_iter()
    .enumerate()
    {
        store.record_event(sample_event(
            &aurora,
            EventKind::VideoProgress,
            sequence,
            Some("product-tour"),
            None,
            Some(percentage),
            Some(seconds),
        ));
        store.record_event(sample_event(
            &aurora,
            EventKind::ChapterComplete,
            sequence + 10,
            Some("product-tour"),
            Some(chapter),
            None,
            None,
        ));
    }
    store.record_event(sample_event(
        &aurora,
        EventKind::BookDemo,
        20,
        Some("product-tour"),
        None,
        None,
        Some(15),
    ));
    store.record_event(sample_event(
        &aurora,
        EventKind::CtaClick,
        21,
        Some("pricing-deep-dive"),
        None,
        None,
        Some(10),
    ));

    store.add_session(
        &breeze,
        SessionProfile {
            email: Some("sam@fogline.test".to_string()),
            ..SessionProfile::default()
        },
    );
    store.record_event(sample_event(
        &breeze,
        EventKind::VideoProgress,
        0,
        Some("product-tour"),
        None,
        Some(45.0),
        Some(80),
    ));
    store.record_event(sample_event(
        &breeze,
        EventKind::FeatureExplore,
        1,
        Some("product-tour"),
        None,
        None,
        Some(25),
    ));

    store.add_session(&cinder, SessionProfile::default());

    vec![aurora, breeze, cinder]
}

fn sample_event(
    session_id: &SessionId,
    kind: EventKind,
    sequence: usize,
    experience_id: Option<&str>,
    chapter_id: Option<&str>,
    video_watch_percentage: Option<f32>,
    time_spent_seconds: Option<u32>,
) -> EngagementEvent {
    EngagementEvent {
        id: format!("evt-{}-{sequence}", session_id.0),
        session_id: session_id.clone(),
        experience_id: experience_id.map(str::to_string),
        chapter_id: chapter_id.map(str::to_string),
        kind,
        video_watch_percentage,
        time_spent_seconds,
        metadata: serde_json::Value::Null,
        created_at: Utc::now() - Duration::minutes(sequence as i64),
    }
}
