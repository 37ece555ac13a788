use crate::infra::{
    default_scoring_config, seed_demo_sessions, InMemoryEngagementStore, InMemorySnapshotStore,
};
use clap::Args;
use lead_pulse::error::AppError;
use lead_pulse::workflows::engagement::{
    LeadScoringService, RunSummary, ScoreRunSelection, SessionId, SnapshotStore,
};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Score only this seeded session instead of the whole population
    #[arg(long)]
    pub(crate) session_id: Option<String>,
    /// Print the per-component sub-score breakdown for each session
    #[arg(long)]
    pub(crate) show_breakdown: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        session_id,
        show_breakdown,
    } = args;

    let engagement = Arc::new(InMemoryEngagementStore::default());
    let seeded = seed_demo_sessions(&engagement);
    let snapshots = Arc::new(InMemorySnapshotStore::default());
    let service = LeadScoringService::new(
        engagement,
        snapshots.clone(),
        default_scoring_config(),
    );

    let selection = match session_id {
        Some(raw) => ScoreRunSelection::Session(SessionId(raw)),
        None => ScoreRunSelection::AllSessions,
    };

    let summary = service.run(selection).map_err(AppError::from)?;
    render_summary(&summary, &seeded, snapshots.as_ref(), show_breakdown);

    Ok(())
}

fn render_summary(
    summary: &RunSummary,
    seeded: &[SessionId],
    snapshots: &InMemorySnapshotStore,
    show_breakdown: bool,
) {
    println!("Lead engagement scoring demo");
    println!(
        "Seeded sessions: {} | scored this run: {}",
        seeded.len(),
        summary.processed
    );

    for result in &summary.results {
        let contact = result.email.as_deref().unwrap_or("no email captured");
        println!(
            "\n{} [{}] score {} ({})",
            result.session_id,
            contact,
            result.engagement_score,
            result.lead_temperature.label()
        );

        let snapshot = match snapshots.fetch(&result.session_id) {
            Ok(Some(snapshot)) => snapshot,
            _ => continue,
        };

        println!("  follow-up: {}", snapshot.recommended_follow_up);
        println!(
            "  activity: {} events, {}s watched, {} chapters, {} CTA clicks, {} features",
            snapshot.breakdown.event_count,
            snapshot.total_watch_time_seconds,
            snapshot.completed_chapters,
            snapshot.cta_clicks,
            snapshot.features_explored,
        );

        if show_breakdown {
            println!(
                "  breakdown: video {} | chapters {} | cta {} | time {} | profile {}",
                snapshot.breakdown.video_engagement,
                snapshot.breakdown.chapter_completion,
                snapshot.breakdown.cta_interactions,
                snapshot.breakdown.time_investment,
                snapshot.breakdown.profile_completeness,
            );
        }
    }

    if summary.results.is_empty() {
        println!("\nNo sessions were scored; check the requested session id.");
    }
}
