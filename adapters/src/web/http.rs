use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::debug;
use uuid::Uuid;

use application::ports::in_::SessionView;
use domain::{PayoutAction, SessionId};

use super::error::ApiError;
use super::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/sessions", post(create_session))
        .route("/sessions/{session_id}", get(get_session).delete(close_session))
        .route("/sessions/{session_id}/actions", post(apply_action))
        .route("/sessions/{session_id}/reset", post(reset_session))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn create_session(State(state): State<Arc<AppState>>) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    let view = state.calculator_service.write().await.create_session().await?;
    Ok((StatusCode::CREATED, Json(view)))
}

async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    let view = state.calculator_service.read().await.snapshot(SessionId(session_id)).await?;
    Ok(Json(view))
}

async fn apply_action(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    body: Result<Json<PayoutAction>, JsonRejection>,
) -> Result<Json<SessionView>, ApiError> {
    let Json(action) = body?;
    debug!(session_id = %session_id, action = ?action, "<- Received");
    let view = state
        .calculator_service
        .write()
        .await
        .dispatch(SessionId(session_id), action)
        .await?;
    Ok(Json(view))
}

async fn reset_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    let view = state.calculator_service.write().await.reset(SessionId(session_id)).await?;
    Ok(Json(view))
}

async fn close_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.calculator_service.write().await.close_session(SessionId(session_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
