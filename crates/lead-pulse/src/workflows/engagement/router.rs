use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;

use super::domain::SessionId;
use super::repository::{EngagementStore, SnapshotStore};
use super::service::{LeadScoringService, ScoreRunSelection};

/// Router builder exposing the scoring endpoint. The dashboard calls this
/// cross-origin, so the routes carry a wildcard CORS layer that also
/// answers `OPTIONS` preflights.
pub fn engagement_router<S, W>(service: Arc<LeadScoringService<S, W>>) -> Router
where
    S: EngagementStore + 'static,
    W: SnapshotStore + 'static,
{
    Router::new()
        .route("/api/v1/leads/score", post(score_handler::<S, W>))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Scoring request: exactly one of the two selectors must be supplied.
#[derive(Debug, Default, Deserialize)]
pub struct ScoreRunRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub compute_all: bool,
}

pub(crate) async fn score_handler<S, W>(
    State(service): State<Arc<LeadScoringService<S, W>>>,
    axum::Json(request): axum::Json<ScoreRunRequest>,
) -> Response
where
    S: EngagementStore + 'static,
    W: SnapshotStore + 'static,
{
    let selection = if let Some(session_id) = request.session_id {
        ScoreRunSelection::Session(SessionId(session_id))
    } else if request.compute_all {
        ScoreRunSelection::AllSessions
    } else {
        return error_response("request must provide session_id or set compute_all");
    };

    match service.run(selection) {
        Ok(summary) => {
            let payload = json!({
                "success": true,
                "processed": summary.processed,
                "results": summary.results,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(&error.to_string()),
    }
}

fn error_response(message: &str) -> Response {
    let payload = json!({
        "error": message,
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
