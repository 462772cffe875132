//! Viewer session endpoints

use axum::{extract::State, Json};
use trivia_core::{CardSource, Session};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/session
pub async fn current(State(state): State<AppState>) -> Json<SessionResponse> {
    let viewer = state.viewer.lock().await;
    Json(match viewer.session() {
        Some(session) => SessionResponse::active(session.view()),
        None => SessionResponse::no_session(),
    })
}

/// POST /api/session/load
/// Fetches and parses the requested date, replacing the current session
pub async fn load(
    State(state): State<AppState>,
    Json(payload): Json<LoadDateRequest>,
) -> Result<Json<SessionResponse>> {
    // The lock is released while fetching; the ticket decides who commits.
    let ticket = state.viewer.lock().await.begin_load(&payload.date);
    let fetched = state.source.fetch(ticket.date()).await;

    let mut viewer = state.viewer.lock().await;
    let session = viewer.finish_load(ticket, fetched)?;

    tracing::info!(
        "Session active for {} via {}",
        session.date(),
        state.source.name()
    );

    Ok(Json(SessionResponse::active(session.view())))
}

/// POST /api/session/reveal
/// Reveals the current answer or advances to the next question
pub async fn reveal(State(state): State<AppState>) -> Result<Json<RevealResponse>> {
    let mut viewer = state.viewer.lock().await;
    let step = viewer.reveal_next().ok_or(ApiError::NoSession)?;
    let session = active(viewer.session())?;

    Ok(Json(RevealResponse {
        step,
        session: session.view(),
    }))
}

/// POST /api/session/next
pub async fn next_card(State(state): State<AppState>) -> Result<Json<NavigateResponse>> {
    let mut viewer = state.viewer.lock().await;
    let moved = viewer.go_to_next_card();
    let session = active(viewer.session())?;

    Ok(Json(NavigateResponse {
        moved,
        session: session.view(),
    }))
}

/// POST /api/session/previous
pub async fn previous_card(State(state): State<AppState>) -> Result<Json<NavigateResponse>> {
    let mut viewer = state.viewer.lock().await;
    let moved = viewer.go_to_previous_card();
    let session = active(viewer.session())?;

    Ok(Json(NavigateResponse {
        moved,
        session: session.view(),
    }))
}

fn active(session: Option<&Session>) -> Result<&Session> {
    session.ok_or(ApiError::NoSession)
}
