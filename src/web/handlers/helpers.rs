// src/web/handlers/helpers.rs
use chrono::NaiveDate;
use rocket::http::Status;
use rocket::serde::json::Json;

use crate::types::{Alumni, ConnectionRequest, Job, Mentor, Seminar};
use crate::utils::{initials, skill_badges, time_ago};
use crate::views::{FormError, StatusToggle, ToggleKind, ViewError};
use crate::web::types::{
    AlumniCard, ConnectionRequestCard, JobCard, MentorCard, SeminarCard, StandardErrorResponse,
};

/// Error envelope with the HTTP status it is sent with
pub type ApiError = (Status, Json<StandardErrorResponse>);

pub const JOB_CARD_SKILLS: usize = 4;
pub const PERSON_CARD_SKILLS: usize = 3;

pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Relative age, or the raw date when it does not parse
pub fn relative_date(date: &str, today: NaiveDate) -> String {
    time_ago(date, today).unwrap_or_else(|_| date.to_string())
}

pub fn view_error_response(error: ViewError) -> ApiError {
    let suggestions = match error {
        ViewError::RecordNotFound => vec!["Reload the listing and pick a visible card".to_string()],
        ViewError::RequestNotFound => vec![
            "The request may already have been accepted or declined".to_string(),
            "Reload the requests tab".to_string(),
        ],
    };
    (
        Status::NotFound,
        Json(StandardErrorResponse::new(
            error.message().to_string(),
            error.error_code().to_string(),
            suggestions,
        )),
    )
}

pub fn form_error_response(error: FormError) -> ApiError {
    let (status, suggestions) = match error {
        FormError::MissingRequiredFields => (
            Status::UnprocessableEntity,
            vec!["Title, company, location, type and description are required".to_string()],
        ),
        FormError::SubmissionFailed => (
            Status::InternalServerError,
            vec!["Try again in a few moments".to_string()],
        ),
    };
    (
        status,
        Json(StandardErrorResponse::new(
            error.message().to_string(),
            error.error_code().to_string(),
            suggestions,
        )),
    )
}

pub fn job_card(job: &Job, today: NaiveDate) -> JobCard {
    JobCard {
        id: job.id.clone(),
        title: job.title.clone(),
        company: job.company.clone(),
        company_initials: initials(&job.company),
        job_type: job.job_type.label().to_string(),
        remote: job.remote,
        location: job.location.clone(),
        salary: job.salary.clone(),
        posted: relative_date(&job.posted_date, today),
        applicants: job.applicants,
        description: job.description.clone(),
        skill_badges: skill_badges(&job.requirements, JOB_CARD_SKILLS),
        posted_by: format!("{} • {}", job.posted_by.name, job.posted_by.title),
        poster_initials: initials(&job.posted_by.name),
        href: format!("/jobs/{}", job.id),
    }
}

/// Cards on the "My Connections" tab are rendered without the connect control
pub fn alumni_card(alumni: &Alumni, show_connection_actions: bool) -> AlumniCard {
    let toggle = StatusToggle::seeded(ToggleKind::Connection, alumni.connection_status);

    AlumniCard {
        id: alumni.id.clone(),
        name: alumni.name.clone(),
        initials: initials(&alumni.name),
        title: alumni.title.clone(),
        company: alumni.company.clone(),
        location: alumni.location.clone(),
        graduation_year: alumni.graduation_year.clone(),
        education: format!("{} • {}", alumni.major, alumni.university),
        connections: alumni.connections,
        mutual_connections: (alumni.mutual_connections > 0).then_some(alumni.mutual_connections),
        bio: alumni.bio.clone(),
        skill_badges: skill_badges(&alumni.skills, PERSON_CARD_SKILLS),
        connection: show_connection_actions.then(|| toggle.view()),
        href: format!("/network/{}", alumni.id),
    }
}

pub fn connection_request_card(
    request: &ConnectionRequest,
    today: NaiveDate,
) -> ConnectionRequestCard {
    ConnectionRequestCard {
        initials: initials(&request.name),
        received: relative_date(&request.request_date, today),
        request: request.clone(),
    }
}

pub fn mentor_card(mentor: &Mentor, toggle: StatusToggle) -> MentorCard {
    MentorCard {
        id: mentor.id.clone(),
        name: mentor.name.clone(),
        initials: initials(&mentor.name),
        title: mentor.title.clone(),
        company: mentor.company.clone(),
        industry: mentor.industry.clone(),
        experience: mentor.experience.clone(),
        availability: mentor.availability,
        rating: mentor.rating,
        sessions: mentor.sessions,
        bio: mentor.bio.clone(),
        skill_badges: skill_badges(&mentor.skills, PERSON_CARD_SKILLS),
        request: toggle.view(),
    }
}

pub fn seminar_card(seminar: &Seminar, toggle: StatusToggle) -> SeminarCard {
    SeminarCard {
        id: seminar.id.clone(),
        title: seminar.title.clone(),
        description: seminar.description.clone(),
        host: seminar.host.clone(),
        host_initial: seminar.host.chars().take(1).collect(),
        company: seminar.company.clone(),
        date: seminar.date.clone(),
        slots: format!("{} / {}", seminar.registered, seminar.slots),
        request: toggle.view(),
    }
}
