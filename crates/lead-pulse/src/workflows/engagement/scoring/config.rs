use serde::{Deserialize, Serialize};

/// Rubric configuration carrying the scoring weights and saturation dials.
///
/// Weights must sum to 1.0 so the weighted total stays inside 0-100; the
/// default rubric is the production one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub video_weight: f32,
    pub chapter_weight: f32,
    pub cta_weight: f32,
    pub time_weight: f32,
    pub profile_weight: f32,
    /// Points awarded per call-to-action interaction; four interactions
    /// saturate the sub-score at the default of 25.
    pub cta_points_per_interaction: f32,
    /// Cumulative watch time that saturates the time sub-score.
    pub time_saturation_seconds: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            video_weight: 0.30,
            chapter_weight: 0.25,
            cta_weight: 0.20,
            time_weight: 0.10,
            profile_weight: 0.15,
            cta_points_per_interaction: 25.0,
            time_saturation_seconds: 300,
        }
    }
}
