//! Batch engagement scoring for tracked prospect sessions.
//!
//! The crate exposes the scoring workflow (metric extraction, weighted
//! scoring, temperature classification, follow-up recommendations) behind
//! store traits so service shells can wire their own backing adapters.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
