use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for tracked prospect sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity and firmographic attributes revealed over the life of a session.
///
/// Every field is optional: a visitor may stay anonymous forever, or fill the
/// profile in progressively. Absent fields simply score zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProfile {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub company_name: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub job_title: Option<String>,
}

/// One observed interaction recorded against a session. Append-only upstream;
/// this service never mutates or deletes events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementEvent {
    pub id: String,
    pub session_id: SessionId,
    pub experience_id: Option<String>,
    pub chapter_id: Option<String>,
    #[serde(rename = "event_type")]
    pub kind: EventKind,
    /// Meaningful only for video events; 0-100.
    pub video_watch_percentage: Option<f32>,
    /// Missing is treated as zero seconds.
    pub time_spent_seconds: Option<u32>,
    #[serde(default)]
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Closed set of interaction kinds the scoring rules understand.
///
/// Rows arrive loosely typed from the backing store, so anything outside the
/// recognized set lands on `Unrecognized` and participates in no rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    VideoProgress,
    VideoComplete,
    ChapterComplete,
    CtaClick,
    BookDemo,
    RequestTrial,
    FeatureExplore,
    InteractiveAction,
    #[serde(other)]
    Unrecognized,
}

impl EventKind {
    pub const fn label(self) -> &'static str {
        match self {
            EventKind::VideoProgress => "video_progress",
            EventKind::VideoComplete => "video_complete",
            EventKind::ChapterComplete => "chapter_complete",
            EventKind::CtaClick => "cta_click",
            EventKind::BookDemo => "book_demo",
            EventKind::RequestTrial => "request_trial",
            EventKind::FeatureExplore => "feature_explore",
            EventKind::InteractiveAction => "interactive_action",
            EventKind::Unrecognized => "unrecognized",
        }
    }

    pub const fn is_video(self) -> bool {
        matches!(self, EventKind::VideoProgress | EventKind::VideoComplete)
    }

    pub const fn is_call_to_action(self) -> bool {
        matches!(
            self,
            EventKind::CtaClick | EventKind::BookDemo | EventKind::RequestTrial
        )
    }

    pub const fn is_feature_exploration(self) -> bool {
        matches!(
            self,
            EventKind::FeatureExplore | EventKind::InteractiveAction
        )
    }
}

/// Discrete classification derived from the numeric engagement score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadTemperature {
    Cold,
    Warm,
    Hot,
    Qualified,
}

impl LeadTemperature {
    /// Total over 0-100; boundary values belong to the higher bucket.
    pub const fn from_score(score: u8) -> Self {
        match score {
            76.. => LeadTemperature::Qualified,
            51..=75 => LeadTemperature::Hot,
            26..=50 => LeadTemperature::Warm,
            _ => LeadTemperature::Cold,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LeadTemperature::Cold => "cold",
            LeadTemperature::Warm => "warm",
            LeadTemperature::Hot => "hot",
            LeadTemperature::Qualified => "qualified",
        }
    }
}

/// Percentage sub-scores persisted for downstream display, not computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub video_engagement: u8,
    pub chapter_completion: u8,
    pub cta_interactions: u8,
    pub time_investment: u8,
    pub profile_completeness: u8,
    pub event_count: usize,
}

/// The single persisted scoring result for a session, keyed uniquely by
/// session id. Every batch run fully replaces the prior snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub session_id: SessionId,
    pub total_watch_time_seconds: u64,
    pub completed_chapters: u32,
    pub features_explored: u32,
    pub cta_clicks: u32,
    pub engagement_score: u8,
    pub lead_temperature: LeadTemperature,
    pub recommended_follow_up: String,
    pub breakdown: ScoreBreakdown,
    pub last_computed_at: DateTime<Utc>,
}
