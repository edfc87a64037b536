// src/web/handlers/profile_handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

use super::helpers::*;
use crate::views::forms::ExperienceUpdate;
use crate::views::{ProfileForm, SessionStore, SubmitOutcome, ViewError};
use crate::web::session_guard::SessionKey;
use crate::web::types::*;

pub async fn get_profile_handler(
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<DataResponse<ProfileForm>> {
    let form = store.with_session(session.as_str(), |s| s.profile_form.clone());
    Json(DataResponse::success(
        format!("Edit profile for {}", store.user().name),
        form,
    ))
}

/// Store the submitted form, then wait out the save without holding the session
pub async fn save_profile_handler(
    request: Json<ProfileForm>,
    session: SessionKey,
    store: &State<SessionStore>,
    config: &State<ServerConfig>,
) -> Json<ActionResponse<SubmitOutcome>> {
    let form = request.into_inner();
    store.with_session(session.as_str(), |s| s.profile_form = form.clone());

    let outcome = form.submit(config.profile_save_delay).await;

    Json(
        ActionResponse::success("Profile saved".to_string(), "saved".to_string())
            .with_data(outcome),
    )
}

pub async fn add_skill_handler(
    request: Json<EntryRequest>,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<ActionResponse<ProfileForm>> {
    let (added, form) = store.with_session(session.as_str(), |s| {
        let added = s.profile_form.add_skill(&request.value);
        (added, s.profile_form.clone())
    });

    let message = if added {
        info!("Skill '{}' added to profile form", request.value.trim());
        "Skill added"
    } else {
        "Skill is blank or already listed"
    };

    Json(ActionResponse::success(message.to_string(), "update".to_string()).with_data(form))
}

pub async fn remove_skill_handler(
    skill: String,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Result<Json<ActionResponse<ProfileForm>>, ApiError> {
    let form = store
        .with_session(session.as_str(), |s| {
            s.profile_form
                .remove_skill(&skill)
                .then(|| s.profile_form.clone())
                .ok_or(ViewError::RecordNotFound)
        })
        .map_err(view_error_response)?;

    Ok(Json(
        ActionResponse::success(format!("Removed {}", skill), "update".to_string())
            .with_data(form),
    ))
}

pub async fn add_experience_handler(
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<ActionResponse<ProfileForm>> {
    let (index, form) = store.with_session(session.as_str(), |s| {
        let index = s.profile_form.add_experience();
        (index, s.profile_form.clone())
    });

    Json(
        ActionResponse::success(format!("Added experience #{}", index + 1), "update".to_string())
            .with_data(form),
    )
}

pub async fn update_experience_handler(
    index: usize,
    request: Json<ExperienceUpdate>,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Result<Json<ActionResponse<ProfileForm>>, ApiError> {
    let update = request.into_inner();
    let form = store
        .with_session(session.as_str(), |s| {
            s.profile_form
                .update_experience(index, update)
                .then(|| s.profile_form.clone())
                .ok_or(ViewError::RecordNotFound)
        })
        .map_err(view_error_response)?;

    Ok(Json(
        ActionResponse::success(format!("Updated experience #{}", index + 1), "update".to_string())
            .with_data(form),
    ))
}

pub async fn remove_experience_handler(
    index: usize,
    session: SessionKey,
    store: &State<SessionStore>,
) -> Result<Json<ActionResponse<ProfileForm>>, ApiError> {
    let form = store
        .with_session(session.as_str(), |s| {
            s.profile_form
                .remove_experience(index)
                .map(|_| s.profile_form.clone())
                .ok_or(ViewError::RecordNotFound)
        })
        .map_err(view_error_response)?;

    Ok(Json(
        ActionResponse::success(format!("Removed experience #{}", index + 1), "update".to_string())
            .with_data(form),
    ))
}
