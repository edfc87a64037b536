// src/views/session.rs
//! One page load worth of view state, and the store that keeps sessions apart.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};

use lru::LruCache;
use tracing::{debug, info};
use uuid::Uuid;

use crate::mock_data;
use crate::types::*;
use crate::views::forms::ProfileForm;
use crate::views::listing::ListingFilter;
use crate::views::queue::{
    QueueDecision, RequestQueue, CONNECTIONS_CAUGHT_UP, MENTORSHIP_CAUGHT_UP,
};
use crate::views::toggle::{StatusToggle, ToggleKind};

pub const DEFAULT_SESSION: &str = "default";
pub const DEFAULT_MAX_SESSIONS: usize = 256;
/// Detail pages accept any route id, so toggles remembered per page are capped
pub const MAX_PAGE_TOGGLES: usize = 64;

fn page_toggles() -> LruCache<String, StatusToggle> {
    LruCache::new(NonZeroUsize::new(MAX_PAGE_TOGGLES).unwrap_or(NonZeroUsize::MIN))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    RecordNotFound,
    RequestNotFound,
}

impl ViewError {
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::RecordNotFound => "No record with this id on the page",
            ViewError::RequestNotFound => "Request not found or already handled",
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ViewError::RecordNotFound => "RECORD_NOT_FOUND",
            ViewError::RequestNotFound => "REQUEST_NOT_FOUND",
        }
    }
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ViewError {}

/// Every piece of mutable page state, seeded from the mock records.
///
/// Listing cards and detail pages keep separate toggles, so the alumni card
/// and the profile page for the "same" person can show different statuses.
#[derive(Debug)]
pub struct ViewSession {
    pub jobs: Vec<Job>,
    job_applications: LruCache<String, StatusToggle>,
    pub alumni: Vec<Alumni>,
    profile_connections: LruCache<String, StatusToggle>,
    pub connection_requests: RequestQueue<ConnectionRequest>,
    pub mentors: Vec<Mentor>,
    mentorship_toggles: HashMap<String, StatusToggle>,
    pub mentorship_requests: Vec<MentorshipRequest>,
    pub incoming_mentorship: RequestQueue<MentorshipRequest>,
    pub mentees: Vec<Mentee>,
    pub seminars: Vec<Seminar>,
    seminar_requests: Vec<String>,
    pub profile_form: ProfileForm,
}

impl ViewSession {
    pub fn seeded(user: &CurrentUser) -> Self {
        let mentorship_requests = mock_data::mentorship_requests();
        let incoming = mentorship_requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .cloned()
            .collect();

        Self {
            jobs: mock_data::jobs(),
            job_applications: page_toggles(),
            alumni: mock_data::alumni(),
            profile_connections: page_toggles(),
            connection_requests: RequestQueue::new(
                mock_data::connection_requests(),
                CONNECTIONS_CAUGHT_UP,
            ),
            mentors: mock_data::mentors(),
            mentorship_toggles: HashMap::new(),
            mentorship_requests,
            incoming_mentorship: RequestQueue::new(incoming, MENTORSHIP_CAUGHT_UP),
            mentees: mock_data::mentees(),
            seminars: mock_data::seminars(),
            seminar_requests: Vec::new(),
            profile_form: mock_data::profile_form(user),
        }
    }

    // Jobs

    pub fn job_listing(&self, filter: &ListingFilter) -> Vec<&Job> {
        filter.apply(&self.jobs)
    }

    /// The detail page ignores `id` beyond echoing it into the fixed record
    pub fn job_detail(&self, id: &str) -> (JobDetail, StatusToggle) {
        (mock_data::job_detail(id), self.application_toggle(id))
    }

    pub fn application_toggle(&self, id: &str) -> StatusToggle {
        self.job_applications
            .peek(id)
            .copied()
            .unwrap_or_else(|| StatusToggle::new(ToggleKind::Application))
    }

    pub fn apply_to_job(&mut self, id: &str) -> StatusToggle {
        let toggle = self
            .job_applications
            .get_or_insert_mut(id.to_string(), || StatusToggle::new(ToggleKind::Application));
        if toggle.activate() {
            info!("Application submitted for job page {}", id);
        }
        *toggle
    }

    // Network

    pub fn alumni_listing(&self, filter: &ListingFilter) -> Vec<&Alumni> {
        filter.apply(&self.alumni)
    }

    pub fn connections(&self) -> Vec<&Alumni> {
        self.alumni
            .iter()
            .filter(|a| a.connection_status == ConnectionStatus::Connected)
            .collect()
    }

    pub fn connect_alumni(&mut self, id: &str) -> Result<StatusToggle, ViewError> {
        let alumnus = self
            .alumni
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(ViewError::RecordNotFound)?;

        let mut toggle = StatusToggle::seeded(ToggleKind::Connection, alumnus.connection_status);
        if toggle.activate() {
            info!("Connection request sent to {}", alumnus.name);
        }
        alumnus.connection_status = toggle.status();
        Ok(toggle)
    }

    /// The profile page ignores `id` beyond echoing it into the fixed record
    pub fn alumni_profile(&self, id: &str) -> (AlumniProfile, StatusToggle) {
        let profile = mock_data::alumni_profile(id);
        let toggle = self.profile_toggle(id, profile.alumni.connection_status);
        (profile, toggle)
    }

    pub fn connect_profile(&mut self, id: &str) -> StatusToggle {
        let seeded = mock_data::alumni_profile(id).alumni.connection_status;
        let fresh = || StatusToggle::seeded(ToggleKind::Connection, seeded);
        let toggle = self.profile_connections.get_or_insert_mut(id.to_string(), fresh);
        toggle.activate();
        *toggle
    }

    fn profile_toggle(&self, id: &str, seeded: ConnectionStatus) -> StatusToggle {
        self.profile_connections
            .peek(id)
            .copied()
            .unwrap_or_else(|| StatusToggle::seeded(ToggleKind::Connection, seeded))
    }

    /// Detail-page toggles currently remembered, applications and profile connects together
    pub fn page_toggle_count(&self) -> usize {
        self.job_applications.len() + self.profile_connections.len()
    }

    pub fn resolve_connection_request(
        &mut self,
        id: &str,
        decision: QueueDecision,
    ) -> Result<ConnectionRequest, ViewError> {
        self.connection_requests
            .resolve(id, decision)
            .ok_or(ViewError::RequestNotFound)
    }

    // Mentorship

    pub fn mentor_listing(&self, filter: &ListingFilter) -> Vec<(&Mentor, StatusToggle)> {
        filter
            .apply(&self.mentors)
            .into_iter()
            .map(|m| (m, self.mentorship_toggle(&m.id)))
            .collect()
    }

    pub fn mentorship_toggle(&self, mentor_id: &str) -> StatusToggle {
        self.mentorship_toggles
            .get(mentor_id)
            .copied()
            .unwrap_or_else(|| StatusToggle::new(ToggleKind::Mentorship))
    }

    pub fn request_mentorship(&mut self, mentor_id: &str) -> Result<StatusToggle, ViewError> {
        if !self.mentors.iter().any(|m| m.id == mentor_id) {
            return Err(ViewError::RecordNotFound);
        }
        let toggle = self
            .mentorship_toggles
            .entry(mentor_id.to_string())
            .or_insert_with(|| StatusToggle::new(ToggleKind::Mentorship));
        toggle.activate();
        Ok(*toggle)
    }

    pub fn resolve_incoming_mentorship(
        &mut self,
        id: &str,
        decision: QueueDecision,
    ) -> Result<MentorshipRequest, ViewError> {
        self.incoming_mentorship
            .resolve(id, decision)
            .ok_or(ViewError::RequestNotFound)
    }

    // Seminars

    pub fn seminar_listing(&self, filter: &ListingFilter) -> Vec<(&Seminar, StatusToggle)> {
        filter
            .apply(&self.seminars)
            .into_iter()
            .map(|s| (s, self.seminar_toggle(&s.id)))
            .collect()
    }

    pub fn seminar_toggle(&self, seminar_id: &str) -> StatusToggle {
        let status = if self.seminar_requests.iter().any(|id| id == seminar_id) {
            ConnectionStatus::Pending
        } else {
            ConnectionStatus::None
        };
        StatusToggle::seeded(ToggleKind::Seminar, status)
    }

    pub fn request_seminar(&mut self, seminar_id: &str) -> Result<StatusToggle, ViewError> {
        if !self.seminars.iter().any(|s| s.id == seminar_id) {
            return Err(ViewError::RecordNotFound);
        }
        let mut toggle = self.seminar_toggle(seminar_id);
        if toggle.activate() {
            self.seminar_requests.push(seminar_id.to_string());
        }
        Ok(toggle)
    }

    /// Requested seminars, in the order they were requested
    pub fn requested_seminars(&self) -> Vec<&Seminar> {
        self.seminar_requests
            .iter()
            .filter_map(|id| self.seminars.iter().find(|s| &s.id == id))
            .collect()
    }
}

/// View sessions keyed by the client's session id.
///
/// Sessions are created on first use from the seed records; resetting one is
/// the equivalent of reloading the page. The store holds at most `capacity`
/// sessions and drops the least recently used one to make room, which for
/// that client is the same as a reload.
pub struct SessionStore {
    user: CurrentUser,
    sessions: Mutex<LruCache<String, ViewSession>>,
}

impl SessionStore {
    pub fn new(user: CurrentUser, max_sessions: usize) -> Self {
        let capacity = NonZeroUsize::new(max_sessions).unwrap_or(NonZeroUsize::MIN);
        Self {
            user,
            sessions: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn user(&self) -> &CurrentUser {
        &self.user
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<String, ViewSession>> {
        // A panic mid-update only loses mock state, so keep serving.
        self.sessions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Start a fresh session and return its id
    pub fn create(&self) -> String {
        let id = Uuid::new_v4().to_string();
        let seeded = ViewSession::seeded(&self.user);
        if let Some((evicted, _)) = self.lock().push(id.clone(), seeded) {
            info!("Evicted view session {}", evicted);
        }
        info!("Started view session {}", id);
        id
    }

    /// Put a session back to the seed records
    pub fn reset(&self, id: &str) {
        self.lock().put(id.to_string(), ViewSession::seeded(&self.user));
        info!("Reset view session {}", id);
    }

    /// Run `f` against the session, seeding it first if it does not exist yet
    pub fn with_session<R>(&self, id: &str, f: impl FnOnce(&mut ViewSession) -> R) -> R {
        let mut sessions = self.lock();
        if !sessions.contains(id) && sessions.len() == sessions.cap().get() {
            if let Some((evicted, _)) = sessions.pop_lru() {
                info!("Evicted view session {}", evicted);
            }
        }
        let session = sessions.get_or_insert_mut(id.to_string(), || {
            debug!("Seeding view session {}", id);
            ViewSession::seeded(&self.user)
        });
        f(session)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }
}
