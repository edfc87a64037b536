// src/web/handlers/seminar_handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

use super::helpers::*;
use crate::views::listing::summary;
use crate::views::{ListingFilter, SessionStore, ToggleView};
use crate::web::session_guard::SessionKey;
use crate::web::types::*;

const NO_SEMINAR_REQUESTS: &str = "No seminar requests yet.";

pub async fn list_seminars_handler(
    search: Option<String>,
    category: Option<String>,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<ListingView<SeminarCard>>> {
    let filter = ListingFilter::from_selection(search, category.as_deref());

    let items: Vec<SeminarCard> = store.with_session(session.as_str(), |s| {
        s.seminar_listing(&filter)
            .into_iter()
            .map(|(seminar, toggle)| seminar_card(seminar, toggle))
            .collect()
    });

    let view = ListingView {
        summary: summary(items.len(), "seminars"),
        count: items.len(),
        search_term: filter.search_term,
        active_filters: filter.selected_filters,
        empty_state: items.is_empty().then(|| "No seminars found.".to_string()),
        items,
    };

    Json(DataResponse::success(view.summary.clone(), view))
}

pub async fn request_seminar_handler(
    id: String,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Result<Json<ActionResponse<ToggleView>>, ApiError> {
    let toggle = store
        .with_session(session.as_str(), |s| s.request_seminar(&id))
        .map_err(view_error_response)?;

    info!("Seminar {} requested", id);

    Ok(Json(
        ActionResponse::success(toggle.label().to_string(), "request".to_string())
            .with_data(toggle.view()),
    ))
}

pub async fn seminar_requests_handler(
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<SeminarRequestsView>> {
    let items: Vec<String> = store.with_session(session.as_str(), |s| {
        s.requested_seminars()
            .into_iter()
            .map(|seminar| seminar.title.clone())
            .collect()
    });

    let view = SeminarRequestsView {
        empty_state: items.is_empty().then_some(NO_SEMINAR_REQUESTS),
        items,
    };

    Json(DataResponse::success("My Requests".to_string(), view))
}
