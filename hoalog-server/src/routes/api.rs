//! JSON endpoints

use axum::{
    Json, Router,
    extract::{self, Path, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use hoalog_core::Event;
use hoalog_core::presentation::NOT_FOUND;
use hoalog_core::query::{self, Query, QueryParams};

use crate::routes::{AppError, ErrorResponse};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(list_events))
        .route("/api/events/{id}", get(get_event))
}

/// GET /api/events - Filtered, ordered events
async fn list_events(
    State(state): State<AppState>,
    params: Result<extract::Query<QueryParams>, QueryRejection>,
) -> Result<Json<Vec<Event>>, AppError> {
    let extract::Query(params) = params?;
    let query = Query::from_params(&params)?;

    let events: Vec<Event> = query::select(state.store().events(), &query)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(events))
}

/// GET /api/events/{id} - Single event
async fn get_event(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store().lookup(&id).found() {
        Some(event) => Json(event.clone()).into_response(),
        None => {
            let body = Json(ErrorResponse {
                error: format!("{NOT_FOUND}: {id}"),
            });
            (StatusCode::NOT_FOUND, body).into_response()
        }
    }
}
