//! Event detail page

use axum::{
    Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Html,
    routing::get,
};
use hoalog_core::detail::{DetailPage, EventDetail};
use hoalog_core::query::parse_image_index;
use hoalog_core::scroll_lock::ScrollLock;
use serde::Deserialize;

use crate::routes::AppError;
use crate::state::AppState;
use crate::views;

pub fn router() -> Router<AppState> {
    Router::new().route("/event/{id}", get(event))
}

/// Query parameters of the detail page
#[derive(Debug, Default, Deserialize)]
pub struct DetailParams {
    /// Open the image modal at this index
    pub image: Option<String>,
}

/// GET /event/{id} - Single event, optionally with the image modal open
async fn event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    params: Result<Query<DetailParams>, QueryRejection>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let Query(params) = params?;
    let image = parse_image_index(params.image.as_deref())?;

    Ok(render_event(&state, &id, image))
}

// The scroll lock is per-request view state and is not Send, so the page
// is built outside the async handler.
fn render_event(state: &AppState, id: &str, image: Option<usize>) -> (StatusCode, Html<String>) {
    let lock = ScrollLock::new();

    match EventDetail::open(state.store(), id, &lock) {
        DetailPage::Found(mut detail) => {
            if let Some(index) = image {
                detail.open_image(index);
            }

            let page = views::detail::page(state.config(), &detail, &lock);
            (StatusCode::OK, Html(page.into_string()))
        }
        DetailPage::NotFound { .. } => {
            let page = views::detail::not_found(state.config());
            (StatusCode::NOT_FOUND, Html(page.into_string()))
        }
    }
}
