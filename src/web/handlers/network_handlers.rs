// src/web/handlers/network_handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

use super::helpers::*;
use crate::mock_data;
use crate::types::ConnectionRequest;
use crate::utils::initials;
use crate::views::listing::summary;
use crate::views::{FilterCatalog, ListingFilter, QueueDecision, RequestQueue, SessionStore};
use crate::web::session_guard::SessionKey;
use crate::web::types::*;

pub async fn list_alumni_handler(
    search: Option<String>,
    filters: Vec<String>,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<ListingView<AlumniCard>>> {
    let filter = ListingFilter::from_query(search, filters);

    let items: Vec<AlumniCard> = store.with_session(session.as_str(), |s| {
        s.alumni_listing(&filter)
            .into_iter()
            .map(|alumni| alumni_card(alumni, true))
            .collect()
    });

    let view = ListingView {
        summary: summary(items.len(), "alumni"),
        count: items.len(),
        search_term: filter.search_term,
        active_filters: filter.selected_filters,
        empty_state: items
            .is_empty()
            .then(|| "No alumni match your search.".to_string()),
        items,
    };

    Json(DataResponse::success(view.summary.clone(), view))
}

pub async fn alumni_filters_handler() -> Json<DataResponse<FilterCatalog>> {
    Json(DataResponse::success(
        "Alumni filters".to_string(),
        mock_data::alumni_filter_catalog(),
    ))
}

pub async fn connections_handler(
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<Vec<AlumniCard>>> {
    let cards: Vec<AlumniCard> = store.with_session(session.as_str(), |s| {
        s.connections()
            .into_iter()
            .map(|alumni| alumni_card(alumni, false))
            .collect()
    });

    Json(DataResponse::success(
        format!("My Connections ({})", cards.len()),
        cards,
    ))
}

pub async fn connect_alumni_handler(
    id: String,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Result<Json<ActionResponse<ConnectionStatusView>>, ApiError> {
    let toggle = store
        .with_session(session.as_str(), |s| s.connect_alumni(&id))
        .map_err(view_error_response)?;

    Ok(Json(
        ActionResponse::success(toggle.label().to_string(), "connect".to_string()).with_data(
            ConnectionStatusView {
                id,
                status: toggle.status(),
                connection: toggle.view(),
            },
        ),
    ))
}

pub async fn alumni_profile_handler(
    id: String,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<AlumniProfileView>> {
    let (profile, toggle) = store.with_session(session.as_str(), |s| s.alumni_profile(&id));

    let view = AlumniProfileView {
        initials: initials(&profile.alumni.name),
        connection: toggle.view(),
        profile,
    };

    Json(DataResponse::success(view.profile.alumni.name.clone(), view))
}

pub async fn connect_profile_handler(
    id: String,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<ActionResponse<ConnectionStatusView>> {
    let toggle = store.with_session(session.as_str(), |s| s.connect_profile(&id));

    Json(
        ActionResponse::success(toggle.label().to_string(), "connect".to_string()).with_data(
            ConnectionStatusView {
                id,
                status: toggle.status(),
                connection: toggle.view(),
            },
        ),
    )
}

fn request_queue_view(queue: &RequestQueue<ConnectionRequest>) -> QueueView<ConnectionRequestCard> {
    let today = today();
    QueueView {
        count: queue.len(),
        tab_label: format!("Requests ({})", queue.len()),
        items: queue
            .items()
            .iter()
            .map(|request| connection_request_card(request, today))
            .collect(),
        empty_state: queue.empty_state(),
    }
}

pub async fn connection_requests_handler(
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<QueueView<ConnectionRequestCard>>> {
    let view = store.with_session(session.as_str(), |s| {
        request_queue_view(&s.connection_requests)
    });

    Json(DataResponse::success(view.tab_label.clone(), view))
}

pub async fn resolve_connection_request_handler(
    id: String,
    decision: QueueDecision,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Result<Json<ActionResponse<QueueView<ConnectionRequestCard>>>, ApiError> {
    let (request, view) = store
        .with_session(session.as_str(), |s| {
            s.resolve_connection_request(&id, decision)
                .map(|request| (request, request_queue_view(&s.connection_requests)))
        })
        .map_err(view_error_response)?;

    info!(
        "Connection request from {} {}",
        request.name,
        decision.as_str()
    );

    Ok(Json(
        ActionResponse::success(
            format!("Request from {} {}", request.name, decision.as_str()),
            decision.as_str().to_string(),
        )
        .with_data(view),
    ))
}
