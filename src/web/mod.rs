// src/web/mod.rs

pub mod handlers;
pub mod session_guard;
pub mod types;

pub use handlers::*;
pub use types::*;

use crate::core::ConfigManager;
use crate::views::forms::ExperienceUpdate;
use crate::views::{
    FilterCatalog, JobPostForm, ProfileForm, QueueDecision, SessionStore, SubmitOutcome,
};
use anyhow::{Context, Result};
use handlers::helpers::ApiError;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{
    catchers, delete, get, options, patch, post, put, routes, Build, Request, Response, Rocket,
    State,
};
use session_guard::SessionKey;
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, PUT, PATCH, DELETE, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

// System

#[get("/health")]
pub async fn health(store: &State<SessionStore>) -> Json<TextResponse> {
    handlers::health_handler(store).await
}

#[post("/session")]
pub async fn create_session(store: &State<SessionStore>) -> Json<ActionResponse<SessionInfo>> {
    handlers::create_session_handler(store).await
}

#[delete("/session")]
pub async fn reset_session(
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<ActionResponse> {
    handlers::reset_session_handler(session, store).await
}

#[get("/dashboard")]
pub async fn dashboard(store: &State<SessionStore>) -> Json<DataResponse<DashboardView>> {
    handlers::dashboard_handler(store).await
}

// Jobs

#[get("/jobs?<search>&<filter>")]
pub async fn list_jobs(
    search: Option<String>,
    filter: Vec<String>,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<ListingView<JobCard>>> {
    handlers::list_jobs_handler(search, filter, session, store).await
}

#[get("/jobs/filters")]
pub async fn job_filters() -> Json<DataResponse<FilterCatalog>> {
    handlers::job_filters_handler().await
}

#[get("/jobs/<id>")]
pub async fn job_detail(
    id: String,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<JobDetailView>> {
    handlers::job_detail_handler(id, session, store).await
}

#[post("/jobs/<id>/apply")]
pub async fn apply_job(
    id: String,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<ActionResponse<ToggleView>> {
    handlers::apply_job_handler(id, session, store).await
}

#[post("/jobs", data = "<request>")]
pub async fn post_job(
    request: Json<JobPostForm>,
    store: &State<SessionStore>,
    config: &State<ServerConfig>,
) -> Result<Json<ActionResponse<SubmitOutcome>>, ApiError> {
    handlers::post_job_handler(request, store, config).await
}

// Network

#[get("/network/alumni?<search>&<filter>")]
pub async fn list_alumni(
    search: Option<String>,
    filter: Vec<String>,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<ListingView<AlumniCard>>> {
    handlers::list_alumni_handler(search, filter, session, store).await
}

#[get("/network/filters")]
pub async fn alumni_filters() -> Json<DataResponse<FilterCatalog>> {
    handlers::alumni_filters_handler().await
}

#[get("/network/connections")]
pub async fn connections(
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<Vec<AlumniCard>>> {
    handlers::connections_handler(session, store).await
}

#[post("/network/alumni/<id>/connect")]
pub async fn connect_alumni(
    id: String,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Result<Json<ActionResponse<ConnectionStatusView>>, ApiError> {
    handlers::connect_alumni_handler(id, session, store).await
}

#[get("/network/<id>")]
pub async fn alumni_profile(
    id: String,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<AlumniProfileView>> {
    handlers::alumni_profile_handler(id, session, store).await
}

#[post("/network/<id>/connect")]
pub async fn connect_profile(
    id: String,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<ActionResponse<ConnectionStatusView>> {
    handlers::connect_profile_handler(id, session, store).await
}

#[get("/network/requests")]
pub async fn connection_requests(
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<QueueView<ConnectionRequestCard>>> {
    handlers::connection_requests_handler(session, store).await
}

#[post("/network/requests/<id>/accept")]
pub async fn accept_connection_request(
    id: String,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Result<Json<ActionResponse<QueueView<ConnectionRequestCard>>>, ApiError> {
    handlers::resolve_connection_request_handler(id, QueueDecision::Accept, session, store).await
}

#[post("/network/requests/<id>/decline")]
pub async fn decline_connection_request(
    id: String,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Result<Json<ActionResponse<QueueView<ConnectionRequestCard>>>, ApiError> {
    handlers::resolve_connection_request_handler(id, QueueDecision::Decline, session, store).await
}

// Mentorship

#[get("/mentorship/mentors?<search>&<industry>")]
pub async fn list_mentors(
    search: Option<String>,
    industry: Option<String>,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<ListingView<MentorCard>>> {
    handlers::list_mentors_handler(search, industry, session, store).await
}

#[post("/mentorship/mentors/<id>/request")]
pub async fn request_mentorship(
    id: String,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Result<Json<ActionResponse<ToggleView>>, ApiError> {
    handlers::request_mentorship_handler(id, session, store).await
}

#[get("/mentorship/requests")]
pub async fn my_mentorship_requests(
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<Vec<MentorshipRequestCard>>> {
    handlers::my_mentorship_requests_handler(session, store).await
}

#[get("/mentorship/incoming")]
pub async fn incoming_mentorship(
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<QueueView<MentorshipRequestCard>>> {
    handlers::incoming_mentorship_handler(session, store).await
}

#[post("/mentorship/incoming/<id>/accept")]
pub async fn accept_mentorship_request(
    id: String,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Result<Json<ActionResponse<QueueView<MentorshipRequestCard>>>, ApiError> {
    handlers::resolve_incoming_mentorship_handler(id, QueueDecision::Accept, session, store).await
}

#[post("/mentorship/incoming/<id>/decline")]
pub async fn decline_mentorship_request(
    id: String,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Result<Json<ActionResponse<QueueView<MentorshipRequestCard>>>, ApiError> {
    handlers::resolve_incoming_mentorship_handler(id, QueueDecision::Decline, session, store).await
}

#[get("/mentorship/mentees")]
pub async fn mentees(
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<Vec<MenteeCard>>> {
    handlers::mentees_handler(session, store).await
}

// Seminars

#[get("/seminars?<search>&<category>")]
pub async fn list_seminars(
    search: Option<String>,
    category: Option<String>,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<ListingView<SeminarCard>>> {
    handlers::list_seminars_handler(search, category, session, store).await
}

#[post("/seminars/<id>/request")]
pub async fn request_seminar(
    id: String,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Result<Json<ActionResponse<ToggleView>>, ApiError> {
    handlers::request_seminar_handler(id, session, store).await
}

#[get("/seminars/requests")]
pub async fn seminar_requests(
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<SeminarRequestsView>> {
    handlers::seminar_requests_handler(session, store).await
}

// Profile

#[get("/profile")]
pub async fn get_profile(
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<ProfileForm>> {
    handlers::get_profile_handler(session, store).await
}

#[put("/profile", data = "<request>")]
pub async fn save_profile(
    request: Json<ProfileForm>,
    session: SessionKey,
    store: &State<SessionStore>,
    config: &State<ServerConfig>,
) -> Json<ActionResponse<SubmitOutcome>> {
    handlers::save_profile_handler(request, session, store, config).await
}

#[post("/profile/skills", data = "<request>")]
pub async fn add_skill(
    request: Json<EntryRequest>,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<ActionResponse<ProfileForm>> {
    handlers::add_skill_handler(request, session, store).await
}

#[delete("/profile/skills/<skill>")]
pub async fn remove_skill(
    skill: String,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Result<Json<ActionResponse<ProfileForm>>, ApiError> {
    handlers::remove_skill_handler(skill, session, store).await
}

#[post("/profile/experience")]
pub async fn add_experience(
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<ActionResponse<ProfileForm>> {
    handlers::add_experience_handler(session, store).await
}

#[patch("/profile/experience/<index>", data = "<request>")]
pub async fn update_experience(
    index: usize,
    request: Json<ExperienceUpdate>,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Result<Json<ActionResponse<ProfileForm>>, ApiError> {
    handlers::update_experience_handler(index, request, session, store).await
}

#[delete("/profile/experience/<index>")]
pub async fn remove_experience(
    index: usize,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Result<Json<ActionResponse<ProfileForm>>, ApiError> {
    handlers::remove_experience_handler(index, session, store).await
}

// Career insights & admin

#[get("/career/recommendations")]
pub async fn career_insights() -> Json<DataResponse<CareerInsightsView>> {
    handlers::career_insights_handler().await
}

#[get("/admin/stats")]
pub async fn admin_stats() -> Json<DataResponse<AdminStatsView>> {
    handlers::admin_stats_handler().await
}

#[get("/admin/analytics")]
pub async fn admin_analytics() -> Json<DataResponse<AnalyticsView>> {
    handlers::admin_analytics_handler().await
}

#[get("/admin/activity")]
pub async fn admin_activity() -> Json<DataResponse<Vec<ActivityCard>>> {
    handlers::admin_activity_handler().await
}

#[get("/admin/users?<search>")]
pub async fn admin_users(search: Option<String>) -> Json<DataResponse<AdminUsersView>> {
    handlers::admin_users_handler(search).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            format!(
                "{}: {}",
                session_guard::SESSION_HEADER,
                session_guard::SessionError::InvalidSessionId.message()
            ),
        ],
    ))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Route not found".to_string(),
        "NOT_FOUND".to_string(),
        vec!["All routes are served under /api".to_string()],
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Request body could not be parsed".to_string(),
        "UNPROCESSABLE_ENTITY".to_string(),
        vec!["Verify field names and value types".to_string()],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    ))
}

/// Assemble the server without launching it
pub fn build_rocket(config: &ConfigManager) -> Rocket<Build> {
    let figment = rocket::Config::figment().merge(("port", config.port));

    let server_config = ServerConfig {
        job_post_delay: config.delays.job_post,
        profile_save_delay: config.delays.profile_save,
    };

    rocket::custom(figment)
        .attach(Cors)
        .manage(server_config)
        .manage(SessionStore::new(
            config.current_user.clone(),
            config.max_sessions,
        ))
        .register(
            "/api",
            catchers![bad_request, not_found, unprocessable, internal_error],
        )
        .mount(
            "/api",
            routes![
                health,
                create_session,
                reset_session,
                dashboard,
                list_jobs,
                job_filters,
                job_detail,
                apply_job,
                post_job,
                list_alumni,
                alumni_filters,
                connections,
                connect_alumni,
                alumni_profile,
                connect_profile,
                connection_requests,
                accept_connection_request,
                decline_connection_request,
                list_mentors,
                request_mentorship,
                my_mentorship_requests,
                incoming_mentorship,
                accept_mentorship_request,
                decline_mentorship_request,
                mentees,
                list_seminars,
                request_seminar,
                seminar_requests,
                get_profile,
                save_profile,
                add_skill,
                remove_skill,
                add_experience,
                update_experience,
                remove_experience,
                career_insights,
                admin_stats,
                admin_analytics,
                admin_activity,
                admin_users,
                options,
            ],
        )
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    info!("Starting Parsu API server");
    info!("Environment: {}", config.environment);
    info!("Server: http://0.0.0.0:{}", config.port);
    info!(
        "Signed in as {} ({})",
        config.current_user.name,
        config.current_user.user_type.as_str()
    );

    let _rocket = build_rocket(&config)
        .launch()
        .await
        .context("Rocket server failed")?;

    Ok(())
}
