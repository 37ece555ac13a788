//! Lead engagement scoring workflow.
//!
//! Events and profiles are read from an externally owned store, reduced to
//! intermediate metrics, combined into a weighted 0-100 score with a
//! temperature bucket and follow-up recommendation, and persisted as one
//! replaceable snapshot per session.

pub mod domain;
pub mod repository;
pub mod router;
pub(crate) mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    EngagementEvent, EventKind, LeadTemperature, ScoreBreakdown, ScoreSnapshot, SessionId,
    SessionProfile,
};
pub use repository::{EngagementStore, SnapshotStore, StoreError};
pub use router::{engagement_router, ScoreRunRequest};
pub use scoring::{EngagementMetrics, ScoringConfig, ScoringEngine, ScoringOutcome};
pub use service::{
    LeadScoringService, RunSummary, ScoreRunSelection, ScoringRunError, SessionScore,
};
