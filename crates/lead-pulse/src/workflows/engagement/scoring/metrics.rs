use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::super::domain::{EngagementEvent, EventKind, SessionProfile};

// Points per populated profile field; the six values sum to 100.
const EMAIL_POINTS: u8 = 25;
const FULL_NAME_POINTS: u8 = 15;
const COMPANY_NAME_POINTS: u8 = 20;
const INDUSTRY_POINTS: u8 = 15;
const COMPANY_SIZE_POINTS: u8 = 10;
const JOB_TITLE_POINTS: u8 = 15;

/// Intermediate metrics distilled from a session's raw event list and
/// profile. Order-independent over the events; no I/O.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngagementMetrics {
    pub total_watch_time_seconds: u64,
    pub completed_chapters: u32,
    pub cta_count: u32,
    pub feature_count: u32,
    pub avg_video_watch_percentage: f32,
    pub profile_score: u8,
}

pub(crate) fn extract_metrics(
    events: &[EngagementEvent],
    profile: &SessionProfile,
) -> EngagementMetrics {
    let total_watch_time_seconds = events
        .iter()
        .map(|event| u64::from(event.time_spent_seconds.unwrap_or(0)))
        .sum();

    let completed_chapters = events
        .iter()
        .filter(|event| event.kind == EventKind::ChapterComplete)
        .filter_map(|event| event.chapter_id.as_deref())
        .collect::<BTreeSet<_>>()
        .len() as u32;

    let cta_count = events
        .iter()
        .filter(|event| event.kind.is_call_to_action())
        .count() as u32;

    let feature_count = events
        .iter()
        .filter(|event| event.kind.is_feature_exploration())
        .count() as u32;

    let video_percentages: Vec<f32> = events
        .iter()
        .filter(|event| event.kind.is_video())
        .map(|event| event.video_watch_percentage.unwrap_or(0.0))
        .collect();
    let avg_video_watch_percentage = if video_percentages.is_empty() {
        0.0
    } else {
        video_percentages.iter().sum::<f32>() / video_percentages.len() as f32
    };

    EngagementMetrics {
        total_watch_time_seconds,
        completed_chapters,
        cta_count,
        feature_count,
        avg_video_watch_percentage,
        profile_score: profile_score(profile),
    }
}

fn profile_score(profile: &SessionProfile) -> u8 {
    let mut score = 0u8;
    if is_populated(&profile.email) {
        score += EMAIL_POINTS;
    }
    if is_populated(&profile.full_name) {
        score += FULL_NAME_POINTS;
    }
    if is_populated(&profile.company_name) {
        score += COMPANY_NAME_POINTS;
    }
    if is_populated(&profile.industry) {
        score += INDUSTRY_POINTS;
    }
    if is_populated(&profile.company_size) {
        score += COMPANY_SIZE_POINTS;
    }
    if is_populated(&profile.job_title) {
        score += JOB_TITLE_POINTS;
    }
    score
}

fn is_populated(field: &Option<String>) -> bool {
    field
        .as_deref()
        .is_some_and(|value| !value.trim().is_empty())
}
