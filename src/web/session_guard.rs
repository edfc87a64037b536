// src/web/session_guard.rs
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;
use tracing::warn;

use crate::views::DEFAULT_SESSION;

pub const SESSION_HEADER: &str = "X-Session-Id";

const MAX_SESSION_ID_LEN: usize = 64;

/// Which view session a request reads and mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKey(pub String);

impl SessionKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug)]
pub enum SessionError {
    InvalidSessionId,
}

impl SessionError {
    pub fn message(&self) -> &'static str {
        match self {
            SessionError::InvalidSessionId => "Session id must be 1-64 letters, digits or dashes",
        }
    }
}

fn is_valid_session_id(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_SESSION_ID_LEN
        && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SessionKey {
    type Error = SessionError;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match req.headers().get_one(SESSION_HEADER).map(str::trim) {
            Some(value) if is_valid_session_id(value) => {
                Outcome::Success(SessionKey(value.to_string()))
            }
            Some(value) => {
                let error = SessionError::InvalidSessionId;
                warn!("Rejected {} {:?}: {}", SESSION_HEADER, value, error.message());
                Outcome::Error((Status::BadRequest, error))
            }
            None => Outcome::Success(SessionKey(DEFAULT_SESSION.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_validation() {
        assert!(is_valid_session_id("default"));
        assert!(is_valid_session_id("3f2b0c1e-8d4a-4b7e-9f00-1a2b3c4d5e6f"));
        assert!(!is_valid_session_id(""));
        assert!(!is_valid_session_id("../etc"));
        assert!(!is_valid_session_id(&"a".repeat(65)));
    }
}
