use super::AppState;
use super::response::ApiError;
use crate::models::event::{Event, EventFields, EventUpdate};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<EventFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let Json(fields) = payload.map_err(|r| ApiError::rejected("Error adding event", r))?;
    let ev = state
        .store
        .create(fields)
        .await
        .map_err(|e| ApiError::bad_request("Error adding event", e))?;
    Ok((StatusCode::CREATED, Json(ev)))
}

pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state
        .store
        .list()
        .await
        .map_err(|e| ApiError::internal("Error fetching events", e))?;
    Ok(Json(events))
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<EventUpdate>, JsonRejection>,
) -> Result<Json<Event>, ApiError> {
    let Json(update) = payload.map_err(|r| ApiError::rejected("Error updating event", r))?;
    let ev = state
        .store
        .update(id, update)
        .await
        .map_err(|e| ApiError::bad_request("Error updating event", e))?;
    Ok(Json(ev))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state
        .store
        .delete(id)
        .await
        .map_err(|e| ApiError::bad_request("Error deleting event", e))?;
    Ok(Json(json!({ "message": "Event deleted", "id": id })))
}
