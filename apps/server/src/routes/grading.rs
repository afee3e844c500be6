//! Stateless grading and segmentation endpoints

use axum::{extract::State, Json};
use drill_core::{build_segments, diff, evaluate, normalize, score, tokenize};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/normalize
pub async fn normalize_text(Json(request): Json<NormalizeRequest>) -> Json<NormalizeResponse> {
    Json(NormalizeResponse {
        normalized: normalize(&request.text),
        tokens: tokenize(&request.text),
    })
}

/// POST /api/score
pub async fn score_text(Json(request): Json<CompareRequest>) -> Json<ScoreResponse> {
    Json(ScoreResponse {
        score: score(&request.expected, &request.heard),
    })
}

/// POST /api/diff
pub async fn diff_text(Json(request): Json<CompareRequest>) -> Json<DiffResponse> {
    Json(DiffResponse {
        words: diff(&request.expected, &request.heard),
    })
}

/// POST /api/evaluate
/// Falls back to the configured tolerance when none is given
pub async fn evaluate_text(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Json<Evaluation> {
    let tolerance = request.tolerance.unwrap_or(state.config.default_tolerance);
    Json(evaluate(&request.expected, &request.heard, tolerance))
}

/// POST /api/segments
pub async fn segments(Json(request): Json<SentenceParts>) -> Result<Json<SegmentSet>> {
    let set = build_segments(&request.parts_target, &request.parts_reference)?;
    Ok(Json(set))
}
