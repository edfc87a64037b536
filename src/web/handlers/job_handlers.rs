// src/web/handlers/job_handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::{info, warn};

use super::helpers::*;
use crate::mock_data;
use crate::types::JobType;
use crate::utils::{format_long_date, initials};
use crate::views::listing::summary;
use crate::views::{
    FilterCatalog, JobPostForm, ListingFilter, SessionStore, SubmitOutcome, ToggleView,
};
use crate::web::session_guard::SessionKey;
use crate::web::types::*;

pub async fn list_jobs_handler(
    search: Option<String>,
    filters: Vec<String>,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<ListingView<JobCard>>> {
    let filter = ListingFilter::from_query(search, filters);
    let unknown = mock_data::job_filter_catalog().unknown_tags(&filter).len();
    if unknown > 0 {
        warn!("{} job filter tag(s) are not offered by the sidebar", unknown);
    }

    let today = today();
    let items: Vec<JobCard> = store.with_session(session.as_str(), |s| {
        s.job_listing(&filter)
            .into_iter()
            .map(|job| job_card(job, today))
            .collect()
    });

    info!(
        "Job listing for session {}: {} of {} shown",
        session.as_str(),
        items.len(),
        mock_data::jobs().len()
    );

    let view = ListingView {
        summary: summary(items.len(), "opportunities"),
        count: items.len(),
        search_term: filter.search_term,
        active_filters: filter.selected_filters,
        empty_state: items
            .is_empty()
            .then(|| "No jobs match your search. Try adjusting the filters.".to_string()),
        items,
    };

    Json(DataResponse::success(view.summary.clone(), view))
}

pub async fn job_filters_handler() -> Json<DataResponse<FilterCatalog>> {
    Json(DataResponse::success(
        "Job filters".to_string(),
        mock_data::job_filter_catalog(),
    ))
}

pub async fn job_detail_handler(
    id: String,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<JobDetailView>> {
    let (job, toggle) = store.with_session(session.as_str(), |s| s.job_detail(&id));

    let posted_on =
        format_long_date(&job.job.posted_date).unwrap_or_else(|_| job.job.posted_date.clone());
    let apply_by = format_long_date(&job.application_deadline)
        .unwrap_or_else(|_| job.application_deadline.clone());

    let view = JobDetailView {
        company_initials: initials(&job.job.company),
        posted: relative_date(&job.job.posted_date, today()),
        posted_on,
        apply_by,
        application: toggle.view(),
        job,
    };

    Json(DataResponse::success(
        format!("{} at {}", view.job.job.title, view.job.job.company),
        view,
    ))
}

pub async fn apply_job_handler(
    id: String,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<ActionResponse<ToggleView>> {
    let toggle = store.with_session(session.as_str(), |s| s.apply_to_job(&id));

    Json(
        ActionResponse::success(toggle.label().to_string(), "apply".to_string())
            .with_data(toggle.view()),
    )
}

pub async fn post_job_handler(
    request: Json<JobPostForm>,
    store: &State<SessionStore>,
    config: &State<ServerConfig>,
) -> Result<Json<ActionResponse<SubmitOutcome>>, ApiError> {
    let mut form = request.into_inner().with_default_contact(store.user());
    form.normalize_requirements();

    info!("Job post submitted: '{}' at '{}'", form.title, form.company);
    if !form.job_type.trim().is_empty() && JobType::parse(&form.job_type).is_none() {
        warn!("Job post uses a type outside the form's options: '{}'", form.job_type);
    }

    match form.submit(config.job_post_delay).await {
        Ok(outcome) => {
            let next_actions = match &outcome {
                SubmitOutcome::Redirect { to } => vec![to.clone()],
                SubmitOutcome::Saved => Vec::new(),
            };
            Ok(Json(
                ActionResponse::success("Job posted".to_string(), "redirect".to_string())
                    .with_data(outcome)
                    .with_next_actions(next_actions),
            ))
        }
        Err(e) => Err(form_error_response(e)),
    }
}
