//! Drill session endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use drill_core::build_segments;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

fn sentence_segments(parts_target: &[String], parts_reference: &[String]) -> Result<SegmentSet> {
    if parts_target.is_empty() {
        return Err(ApiError::BadRequest("sentence has no parts".to_string()));
    }
    Ok(build_segments(parts_target, parts_reference)?)
}

/// POST /api/sessions
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<SessionView>> {
    let segments = sentence_segments(&request.parts_target, &request.parts_reference)?;
    let tolerance = request.tolerance.unwrap_or(state.config.default_tolerance);
    let progress = request.progress.unwrap_or_default();

    let view = state.sessions.create(segments, tolerance, progress).await;
    let active = state.sessions.count().await;
    tracing::info!(
        "Created session {} with {} steps ({} active)",
        view.id,
        view.total_steps,
        active
    );

    Ok(Json(view))
}

/// GET /api/sessions/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<SessionView>> {
    state
        .sessions
        .get(id)
        .await
        .map(Json)
        .ok_or(ApiError::SessionNotFound(id))
}

/// POST /api/sessions/:id/check
pub async fn check(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CheckRequest>,
) -> Result<Json<CheckResponse>> {
    let (outcome, session) = state
        .sessions
        .update(id, |s| {
            let tolerance = s.tolerance;
            s.drill.check(&request.heard, tolerance)
        })
        .await
        .ok_or(ApiError::SessionNotFound(id))?;

    tracing::debug!(
        "Session {} step {}: score {:.2}, passed {}",
        id,
        outcome.step,
        outcome.evaluation.score,
        outcome.evaluation.passed
    );
    if outcome.level_up {
        tracing::info!("Session {} reached level {}", id, session.progress.level);
    }

    Ok(Json(CheckResponse { outcome, session }))
}

/// POST /api/sessions/:id/exercise
/// Starts the next sentence, keeping the learner's counters
pub async fn next_exercise(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SentenceParts>,
) -> Result<Json<SessionView>> {
    let segments = sentence_segments(&request.parts_target, &request.parts_reference)?;

    let ((), view) = state
        .sessions
        .update(id, |s| s.drill.next_exercise(segments))
        .await
        .ok_or(ApiError::SessionNotFound(id))?;

    Ok(Json(view))
}

/// POST /api/sessions/:id/skip
pub async fn skip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>> {
    let ((), view) = state
        .sessions
        .update(id, |s| s.drill.skip())
        .await
        .ok_or(ApiError::SessionNotFound(id))?;

    Ok(Json(view))
}

/// POST /api/sessions/:id/unit
/// Resets the unit counters and drops the current sentence
pub async fn new_unit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>> {
    let ((), view) = state
        .sessions
        .update(id, |s| s.drill.new_unit())
        .await
        .ok_or(ApiError::SessionNotFound(id))?;

    Ok(Json(view))
}

/// DELETE /api/sessions/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<DeleteSessionResponse> {
    let deleted = state.sessions.remove(id).await;
    Json(DeleteSessionResponse { deleted })
}
