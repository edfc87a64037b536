// src/web/types.rs
use rocket::serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::types::{
    ActivityEvent, AlumniProfile, Availability, CareerPath, CareerRecommendation,
    ConnectionRequest, ConnectionStatus, GrowthPoint, IndustryTrend, JobDetail, Mentee,
    MentorshipRequest, PlatformUser, SkillGap, StatCard,
};
pub use crate::views::{EmptyState, ToggleView};

pub struct ServerConfig {
    pub job_post_delay: Duration,
    pub profile_save_delay: Duration,
}

// Response envelopes

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ResponseType {
    Text,
    Data,
    Action,
    Error,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TextResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub data: T,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ActionResponse<T = ()> {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_actions: Option<Vec<String>>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

impl TextResponse {
    pub fn success(message: String) -> Self {
        Self {
            response_type: ResponseType::Text,
            success: true,
            message,
        }
    }
}

impl<T> DataResponse<T> {
    pub fn success(message: String, data: T) -> Self {
        Self {
            response_type: ResponseType::Data,
            success: true,
            message,
            data,
        }
    }
}

impl<T> ActionResponse<T> {
    pub fn success(message: String, action: String) -> Self {
        Self {
            response_type: ResponseType::Action,
            success: true,
            message,
            action,
            data: None,
            next_actions: None,
        }
    }

    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_next_actions(mut self, next_actions: Vec<String>) -> Self {
        self.next_actions = Some(next_actions);
        self
    }
}

impl StandardErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            response_type: ResponseType::Error,
            success: false,
            error,
            error_code,
            suggestions,
        }
    }
}

// Session

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct SessionInfo {
    pub session_id: String,
    pub header: &'static str,
}

// Dashboard

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct QuickAction {
    pub title: String,
    pub description: String,
    pub href: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DashboardView {
    pub greeting: String,
    pub subtitle: String,
    pub quick_actions: Vec<QuickAction>,
    pub recommended_actions: Vec<String>,
}

// Jobs

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct JobCard {
    pub id: String,
    pub title: String,
    pub company: String,
    pub company_initials: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub remote: bool,
    pub location: String,
    pub salary: String,
    pub posted: String,
    pub applicants: u32,
    pub description: String,
    pub skill_badges: Vec<String>,
    pub posted_by: String,
    pub poster_initials: String,
    pub href: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ListingView<T> {
    pub summary: String,
    pub count: usize,
    pub search_term: String,
    pub active_filters: Vec<String>,
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct JobDetailView {
    pub job: JobDetail,
    pub company_initials: String,
    pub posted: String,
    pub posted_on: String,
    pub apply_by: String,
    pub application: ToggleView,
}

// Network

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct AlumniCard {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub graduation_year: String,
    pub education: String,
    pub connections: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutual_connections: Option<u32>,
    pub bio: String,
    pub skill_badges: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<ToggleView>,
    pub href: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct AlumniProfileView {
    pub profile: AlumniProfile,
    pub initials: String,
    pub connection: ToggleView,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ConnectionRequestCard {
    #[serde(flatten)]
    pub request: ConnectionRequest,
    pub initials: String,
    pub received: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct QueueView<T> {
    pub count: usize,
    pub tab_label: String,
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ConnectionStatusView {
    pub id: String,
    pub status: ConnectionStatus,
    pub connection: ToggleView,
}

// Mentorship

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct MentorCard {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub title: String,
    pub company: String,
    pub industry: String,
    pub experience: String,
    pub availability: Availability,
    pub rating: f32,
    pub sessions: u32,
    pub bio: String,
    pub skill_badges: Vec<String>,
    pub request: ToggleView,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct MentorshipRequestCard {
    #[serde(flatten)]
    pub request: MentorshipRequest,
    pub status_badge: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct MenteeCard {
    #[serde(flatten)]
    pub mentee: Mentee,
    pub initials: String,
    pub interest_badges: Vec<String>,
}

// Seminars

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct SeminarCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub host: String,
    pub host_initial: String,
    pub company: String,
    pub date: String,
    pub slots: String,
    pub request: ToggleView,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct SeminarRequestsView {
    pub items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<&'static str>,
}

// Profile form

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct EntryRequest {
    pub value: String,
}

// Career insights & admin

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CareerInsightsView {
    pub recommendations: Vec<CareerRecommendation>,
    pub skill_gaps: Vec<SkillGap>,
    pub career_paths: Vec<CareerPath>,
    pub industry_trends: Vec<IndustryTrend>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct AdminStatsView {
    pub stats: Vec<StatCard>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct AdminUsersView {
    pub count: usize,
    pub users: Vec<PlatformUser>,
}

/// Change from the first to the last month of the chart, e.g. "+137.3%"
#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct GrowthSummary {
    pub users: String,
    pub jobs: String,
    pub connections: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct AnalyticsView {
    pub title: String,
    pub description: String,
    pub series: Vec<GrowthPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth: Option<GrowthSummary>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ActivityCard {
    #[serde(flatten)]
    pub event: ActivityEvent,
    pub initials: String,
    /// Shown next to the actor's name; anonymous actors get none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}
