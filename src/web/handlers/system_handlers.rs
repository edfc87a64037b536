// src/web/handlers/system_handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

use crate::views::SessionStore;
use crate::web::session_guard::{SessionKey, SESSION_HEADER};
use crate::web::types::*;

pub async fn health_handler(store: &State<SessionStore>) -> Json<TextResponse> {
    info!("Health check ({} view sessions)", store.len());
    Json(TextResponse::success("OK".to_string()))
}

pub async fn create_session_handler(
    store: &State<SessionStore>,
) -> Json<ActionResponse<SessionInfo>> {
    let session_id = store.create();

    Json(
        ActionResponse::success("Session started".to_string(), "session".to_string())
            .with_data(SessionInfo {
                session_id,
                header: SESSION_HEADER,
            }),
    )
}

/// Same as reloading the page: every toggle, queue and form goes back to the seed
pub async fn reset_session_handler(
    session: SessionKey,
    store: &State<SessionStore>,
) -> Json<ActionResponse> {
    store.reset(session.as_str());
    Json(ActionResponse::success(
        format!("Session {} reset", session.as_str()),
        "reset".to_string(),
    ))
}
