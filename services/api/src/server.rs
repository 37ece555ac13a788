use crate::cli::ServeArgs;
use crate::infra::{
    default_scoring_config, seed_demo_sessions, AppState, InMemoryEngagementStore,
    InMemorySnapshotStore,
};
use crate::routes::with_engagement_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use lead_pulse::config::AppConfig;
use lead_pulse::error::AppError;
use lead_pulse::telemetry;
use lead_pulse::workflows::engagement::LeadScoringService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engagement = Arc::new(InMemoryEngagementStore::default());
    if args.seed_demo {
        let seeded = seed_demo_sessions(&engagement);
        info!(count = seeded.len(), "seeded demo sessions");
    }
    let snapshots = Arc::new(InMemorySnapshotStore::default());
    let scoring_service = Arc::new(LeadScoringService::new(
        engagement,
        snapshots,
        default_scoring_config(),
    ));

    let app = with_engagement_routes(scoring_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "lead engagement scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
