mod config;
mod metrics;
mod recommendation;
mod rules;

pub use config::ScoringConfig;
pub use metrics::EngagementMetrics;

use super::domain::{EngagementEvent, LeadTemperature, ScoreBreakdown, SessionProfile};
use metrics::extract_metrics;
use recommendation::recommend_follow_up;
use serde::{Deserialize, Serialize};

/// Stateless engine applying the rubric configuration to a session's events
/// and profile.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score one session. Pure over its inputs; the denominator for chapter
    /// completion is supplied by the caller because chapter reference data
    /// lives outside the event stream.
    pub fn score(
        &self,
        events: &[EngagementEvent],
        profile: &SessionProfile,
        total_chapters: u32,
    ) -> ScoringOutcome {
        let metrics = extract_metrics(events, profile);
        let components = rules::sub_scores(&metrics, total_chapters, &self.config);
        let engagement_score = rules::weighted_total(&components, &self.config);
        let lead_temperature = LeadTemperature::from_score(engagement_score);
        let recommended_follow_up = recommend_follow_up(lead_temperature, profile);

        let breakdown = ScoreBreakdown {
            video_engagement: round_percentage(components.video),
            chapter_completion: round_percentage(components.chapter),
            cta_interactions: round_percentage(components.cta),
            time_investment: round_percentage(components.time),
            profile_completeness: metrics.profile_score,
            event_count: events.len(),
        };

        ScoringOutcome {
            metrics,
            engagement_score,
            lead_temperature,
            recommended_follow_up,
            breakdown,
        }
    }
}

fn round_percentage(value: f32) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Full scoring result for one session, ready to persist as a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringOutcome {
    pub metrics: EngagementMetrics,
    pub engagement_score: u8,
    pub lead_temperature: LeadTemperature,
    pub recommended_follow_up: String,
    pub breakdown: ScoreBreakdown,
}
