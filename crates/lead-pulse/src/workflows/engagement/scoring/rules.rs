use super::config::ScoringConfig;
use super::metrics::EngagementMetrics;

/// Normalized [0,100] components combined by the configured weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SubScores {
    pub video: f32,
    pub chapter: f32,
    pub cta: f32,
    pub time: f32,
    pub profile: f32,
}

pub(crate) fn sub_scores(
    metrics: &EngagementMetrics,
    total_chapters: u32,
    config: &ScoringConfig,
) -> SubScores {
    let video = metrics.avg_video_watch_percentage.clamp(0.0, 100.0);

    let chapter = if total_chapters > 0 {
        let ratio = metrics.completed_chapters as f32 / total_chapters as f32;
        (ratio * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    let cta = (metrics.cta_count as f32 * config.cta_points_per_interaction).min(100.0);

    let time = if config.time_saturation_seconds > 0 {
        let ratio =
            metrics.total_watch_time_seconds as f32 / config.time_saturation_seconds as f32;
        (ratio * 100.0).min(100.0)
    } else {
        100.0
    };

    SubScores {
        video,
        chapter,
        cta,
        time,
        profile: f32::from(metrics.profile_score).clamp(0.0, 100.0),
    }
}

/// Weighted sum rounded to the nearest integer. Every component is clamped
/// to [0,100] and the weights sum to 1.0, so the result stays in 0-100.
pub(crate) fn weighted_total(scores: &SubScores, config: &ScoringConfig) -> u8 {
    let total = scores.video * config.video_weight
        + scores.chapter * config.chapter_weight
        + scores.cta * config.cta_weight
        + scores.time * config.time_weight
        + scores.profile * config.profile_weight;

    total.round().clamp(0.0, 100.0) as u8
}
