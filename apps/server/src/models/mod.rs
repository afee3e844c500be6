//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from drill-core
pub use drill_core::{CheckOutcome, Evaluation, Progress, SegmentSet, Tolerance, WordMark};

// Grading types
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizeRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizeResponse {
    pub normalized: String,
    pub tokens: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompareRequest {
    pub expected: String,
    #[serde(default)]
    pub heard: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub score: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DiffResponse {
    pub words: Vec<WordMark>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluateRequest {
    pub expected: String,
    #[serde(default)]
    pub heard: String,
    pub tolerance: Option<Tolerance>,
}

// Segment types
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceParts {
    pub parts_target: Vec<String>,
    pub parts_reference: Vec<String>,
}

// Session types
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub parts_target: Vec<String>,
    pub parts_reference: Vec<String>,
    pub tolerance: Option<Tolerance>,
    /// Counters the caller persisted from an earlier session
    pub progress: Option<Progress>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub heard: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResponse {
    pub outcome: CheckOutcome,
    pub session: SessionView,
}

/// Snapshot of a session as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub id: Uuid,
    pub step: usize,
    pub total_steps: usize,
    pub target: String,
    pub reference: String,
    pub full_target: String,
    pub finished: bool,
    pub tolerance: Tolerance,
    pub progress: Progress,
    pub created_at: DateTime<Utc>,
    pub last_active_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteSessionResponse {
    pub deleted: bool,
}
