pub mod api;
pub mod events;
pub mod timeline;

use axum::{
    Json, Router,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hoalog_core::error::TimelineError;
use serde::Serialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(timeline::router())
        .merge(events::router())
        .merge(api::router())
}

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Convert anyhow errors to HTTP responses
pub struct AppError(anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        if self.0.is::<QueryRejection>() {
            return StatusCode::BAD_REQUEST;
        }

        match self.0.downcast_ref::<TimelineError>() {
            Some(err) if err.is_query_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, "rejected request");
        }

        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use hoalog_core::site_config::SiteConfig;
    use hoalog_core::store::EventStore;
    use tower::ServiceExt;

    use crate::state::AppState;

    pub fn store() -> EventStore {
        EventStore::from_json(
            r#"{"events": [
                {"id": "meeting", "date": "01/01/2024", "title": "Meeting",
                 "description": "Agenda <script>alert(1)</script>",
                 "images": [], "type": "news"},
                {"id": "roof", "date": "15/06/2024", "title": "Roof repair", "description": "Done",
                 "images": ["https://example.com/0.jpg", "https://example.com/1.jpg", "https://example.com/2.jpg"],
                 "type": "maintenance"}
            ]}"#,
        )
        .unwrap()
    }

    pub fn app() -> axum::Router {
        super::router().with_state(AppState::from_parts(store(), SiteConfig::default()))
    }

    pub async fn get(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }
}
