//! Timeline list page

use axum::{
    Router,
    extract::{self, State, rejection::QueryRejection},
    response::Html,
    routing::get,
};
use hoalog_core::query::{Query, QueryParams};
use hoalog_core::timeline::TimelineLayout;

use crate::routes::AppError;
use crate::state::AppState;
use crate::views::{
    self,
    timeline::{CarouselFocus, FocusParams},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(timeline))
}

/// GET / - Filtered, ordered timeline
async fn timeline(
    State(state): State<AppState>,
    params: Result<extract::Query<QueryParams>, QueryRejection>,
    focus: Result<extract::Query<FocusParams>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let extract::Query(params) = params?;
    let extract::Query(focus) = focus?;

    let query = Query::from_params(&params)?;
    let focus = CarouselFocus::from_params(focus)?;
    let layout = TimelineLayout::for_query(state.store(), &query);

    tracing::debug!(shown = layout.len(), total = state.store().len(), "timeline");

    let page = views::timeline::page(state.config(), &query, &layout, &focus);
    Ok(Html(page.into_string()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::get;

    #[tokio::test]
    async fn newest_first_by_default() {
        let (status, body) = get("/").await;

        assert_eq!(status, StatusCode::OK);
        let roof = body.find("Roof repair").unwrap();
        let meeting = body.find("Meeting").unwrap();
        assert!(roof < meeting);
    }

    #[tokio::test]
    async fn ascending_sort_reverses_order() {
        let (_, body) = get("/?sort=asc").await;

        let roof = body.find("Roof repair").unwrap();
        let meeting = body.find("Meeting").unwrap();
        assert!(meeting < roof);
    }

    #[tokio::test]
    async fn type_filter_hides_other_categories() {
        let (status, body) = get("/?type=news").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Meeting"));
        assert!(!body.contains("Roof repair"));
    }

    #[tokio::test]
    async fn empty_selection_shows_message() {
        let (status, body) = get("/?from=2030-01-01").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(hoalog_core::presentation::EMPTY_TIMELINE));
        assert!(!body.contains(r#"class="guide-line""#));
    }

    #[tokio::test]
    async fn blank_params_are_ignored() {
        let (status, body) = get("/?from=&to=&type=").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Meeting"));
        assert!(body.contains("Roof repair"));
    }

    #[tokio::test]
    async fn malformed_date_is_rejected() {
        let (status, body) = get("/?from=01-01-2024").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Expected YYYY-MM-DD"));
    }

    #[tokio::test]
    async fn description_is_escaped_in_cards() {
        let (_, body) = get("/").await;

        assert!(body.contains("&lt;script&gt;"));
        assert!(!body.contains("<script>alert(1)"));
    }

    #[tokio::test]
    async fn malformed_image_index_is_a_json_bad_request() {
        let (status, body) = get("/?card=roof&image=abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(value["error"].as_str().unwrap().contains("abc"));
    }

    #[tokio::test]
    async fn empty_image_index_is_unset() {
        let (status, body) = get("/?card=roof&image=").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("translateX(-0%)"));
    }

    #[tokio::test]
    async fn focused_card_keeps_filters_in_links() {
        let (_, body) = get("/?type=maintenance&card=roof&image=2").await;

        assert!(body.contains("translateX(-200%)"));
        assert!(body.contains("/?type=maintenance&amp;card=roof&amp;image=0#event-roof"));
    }
}
