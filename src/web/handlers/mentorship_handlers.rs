// src/web/handlers/mentorship_handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::{info, warn};

use super::helpers::*;
use crate::mock_data::MENTOR_INDUSTRIES;
use crate::types::MentorshipRequest;
use crate::utils::{capitalize, initials, skill_badges};
use crate::views::listing::summary;
use crate::views::{ListingFilter, QueueDecision, RequestQueue, SessionStore, ToggleView};
use crate::web::session_guard::SessionKey;
use crate::web::types::*;

/// `industry` is the dropdown value; `all` or nothing shows every mentor
pub async fn list_mentors_handler(
    search: Option<String>,
    industry: Option<String>,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<ListingView<MentorCard>>> {
    if let Some(value) = industry.as_deref() {
        if !MENTOR_INDUSTRIES.iter().any(|i| i.eq_ignore_ascii_case(value.trim())) {
            warn!("Industry '{}' is not in the dropdown", value);
        }
    }
    let filter = ListingFilter::from_selection(search, industry.as_deref());

    let items: Vec<MentorCard> = store.with_session(session.as_str(), |s| {
        s.mentor_listing(&filter)
            .into_iter()
            .map(|(mentor, toggle)| mentor_card(mentor, toggle))
            .collect()
    });

    let view = ListingView {
        summary: summary(items.len(), "mentors"),
        count: items.len(),
        search_term: filter.search_term,
        active_filters: filter.selected_filters,
        empty_state: items
            .is_empty()
            .then(|| "No mentors found for this search.".to_string()),
        items,
    };

    Json(DataResponse::success(view.summary.clone(), view))
}

pub async fn request_mentorship_handler(
    id: String,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Result<Json<ActionResponse<ToggleView>>, ApiError> {
    let toggle = store
        .with_session(session.as_str(), |s| s.request_mentorship(&id))
        .map_err(view_error_response)?;

    info!("Mentorship requested from mentor {}", id);

    Ok(Json(
        ActionResponse::success(toggle.label().to_string(), "request".to_string())
            .with_data(toggle.view()),
    ))
}

fn request_card(request: &MentorshipRequest) -> MentorshipRequestCard {
    MentorshipRequestCard {
        status_badge: capitalize(request.status.as_str()),
        request: request.clone(),
    }
}

pub async fn my_mentorship_requests_handler(
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<Vec<MentorshipRequestCard>>> {
    let cards: Vec<MentorshipRequestCard> = store.with_session(session.as_str(), |s| {
        s.mentorship_requests.iter().map(request_card).collect()
    });

    Json(DataResponse::success(
        format!("My Requests ({})", cards.len()),
        cards,
    ))
}

fn incoming_view(queue: &RequestQueue<MentorshipRequest>) -> QueueView<MentorshipRequestCard> {
    QueueView {
        count: queue.len(),
        tab_label: format!("Incoming ({})", queue.len()),
        items: queue.items().iter().map(request_card).collect(),
        empty_state: queue.empty_state(),
    }
}

pub async fn incoming_mentorship_handler(
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<QueueView<MentorshipRequestCard>>> {
    let view = store.with_session(session.as_str(), |s| incoming_view(&s.incoming_mentorship));
    Json(DataResponse::success(view.tab_label.clone(), view))
}

pub async fn resolve_incoming_mentorship_handler(
    id: String,
    decision: QueueDecision,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Result<Json<ActionResponse<QueueView<MentorshipRequestCard>>>, ApiError> {
    let (request, view) = store
        .with_session(session.as_str(), |s| {
            s.resolve_incoming_mentorship(&id, decision)
                .map(|request| (request, incoming_view(&s.incoming_mentorship)))
        })
        .map_err(view_error_response)?;

    info!(
        "Mentorship request from {} {}",
        request.student_name,
        decision.as_str()
    );

    Ok(Json(
        ActionResponse::success(
            format!("Request from {} {}", request.student_name, decision.as_str()),
            decision.as_str().to_string(),
        )
        .with_data(view),
    ))
}

pub async fn mentees_handler(
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<Vec<MenteeCard>>> {
    let cards: Vec<MenteeCard> = store.with_session(session.as_str(), |s| {
        s.mentees
            .iter()
            .map(|mentee| MenteeCard {
                initials: initials(&mentee.name),
                interest_badges: skill_badges(&mentee.interests, PERSON_CARD_SKILLS),
                mentee: mentee.clone(),
            })
            .collect()
    });

    Json(DataResponse::success(
        format!("My Mentees ({})", cards.len()),
        cards,
    ))
}
