// src/types/records.rs
//! Plain view records. They only live as long as the view session holding them.

use serde::{Deserialize, Serialize};

/// Anything that can be looked up by the identifier used in routes.
pub trait Identified {
    fn id(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    #[default]
    None,
    Pending,
    Connected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Internship,
    Contract,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Internship,
        JobType::Contract,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Internship => "Internship",
            JobType::Contract => "Contract",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poster {
    pub name: String,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub remote: bool,
    pub salary: String,
    pub posted_date: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub applicants: u32,
    pub posted_by: Poster,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDetail {
    #[serde(flatten)]
    pub job: Job,
    pub application_deadline: String,
    pub responsibilities: Vec<String>,
    pub qualifications: Vec<String>,
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alumni {
    pub id: String,
    pub name: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub university: String,
    pub graduation_year: String,
    pub major: String,
    pub skills: Vec<String>,
    pub bio: String,
    pub connections: u32,
    pub mutual_connections: u32,
    pub profile_image: Option<String>,
    pub connection_status: ConnectionStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub year: String,
    pub details: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlumniProfile {
    #[serde(flatten)]
    pub alumni: Alumni,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub achievements: Vec<String>,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionRequest {
    pub id: String,
    pub name: String,
    pub title: String,
    pub company: String,
    pub university: String,
    pub graduation_year: String,
    pub message: String,
    pub request_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Declined,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Declined => "declined",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorshipRequest {
    pub id: String,
    pub mentor_name: String,
    pub student_name: String,
    pub topic: String,
    pub status: RequestStatus,
    pub request_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Available,
    Limited,
    Unavailable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mentor {
    pub id: String,
    pub name: String,
    pub title: String,
    pub company: String,
    pub industry: String,
    pub experience: String,
    pub skills: Vec<String>,
    pub rating: f32,
    pub sessions: u32,
    pub bio: String,
    pub availability: Availability,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mentee {
    pub id: String,
    pub name: String,
    pub university: String,
    pub major: String,
    pub year: String,
    pub interests: Vec<String>,
    pub sessions: u32,
    pub next_session: String,
    pub progress: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seminar {
    pub id: String,
    pub title: String,
    pub host: String,
    pub company: String,
    pub date: String,
    pub description: String,
    pub slots: u32,
    pub registered: u32,
}

impl Seminar {
    /// The browse filter only knows two categories and derives them from the host.
    pub fn category(&self) -> &'static str {
        if self.company == "Google" {
            "Technology"
        } else {
            "Finance"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Alumni,
    Employer,
    Admin,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Alumni => "alumni",
            UserType::Employer => "employer",
            UserType::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Suspended,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Suspended => "suspended",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub user_type: UserType,
    pub university: String,
    pub join_date: String,
    pub status: AccountStatus,
    pub connections: u32,
}

/// The signed-in user every page renders for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub user_type: UserType,
    pub university: String,
}

impl Default for CurrentUser {
    fn default() -> Self {
        Self {
            id: "1".to_string(),
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@university.edu".to_string(),
            user_type: UserType::Student,
            university: "Stanford University".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub match_score: u8,
    pub salary: String,
    pub skills: Vec<String>,
    pub description: String,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub current: u8,
    pub target: u8,
    pub priority: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPath {
    pub role: String,
    pub years: String,
    pub skills: Vec<String>,
    pub salary: String,
    pub next: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryTrend {
    pub industry: String,
    pub growth: String,
    pub demand: String,
    pub avg_salary: String,
    pub top_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change: String,
    pub description: String,
}

/// One month of the admin growth chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub month: String,
    pub users: u32,
    pub jobs: u32,
    pub connections: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    UserRegistered,
    JobPosted,
    ReportSubmitted,
    JobApproved,
}

/// An entry in the admin activity feed. `user_type` is `None` for anonymous actors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub user: String,
    pub user_type: Option<UserType>,
    pub action: String,
    pub time: String,
}

macro_rules! impl_identified {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identified for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

impl_identified!(
    Job,
    Alumni,
    ConnectionRequest,
    MentorshipRequest,
    Mentor,
    Mentee,
    Seminar,
    PlatformUser,
);

impl Identified for JobDetail {
    fn id(&self) -> &str {
        &self.job.id
    }
}

impl Identified for AlumniProfile {
    fn id(&self) -> &str {
        &self.alumni.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_type_labels_round_trip_through_parse() {
        for job_type in JobType::ALL {
            assert_eq!(JobType::parse(job_type.label()), Some(job_type));
        }
        assert_eq!(JobType::parse(" internship "), Some(JobType::Internship));
        assert_eq!(JobType::parse("Volunteer"), None);
    }

    #[test]
    fn test_job_type_serializes_with_display_label() {
        let json = serde_json::to_string(&JobType::FullTime).unwrap();
        assert_eq!(json, "\"Full-time\"");
    }

    #[test]
    fn test_seminar_category_is_derived_from_host_company() {
        let mut seminar = Seminar {
            id: "1".to_string(),
            title: "Tech Careers 2025".to_string(),
            host: "Sarah Chen".to_string(),
            company: "Google".to_string(),
            date: "2025-09-10".to_string(),
            description: String::new(),
            slots: 50,
            registered: 32,
        };
        assert_eq!(seminar.category(), "Technology");

        seminar.company = "Goldman Sachs".to_string();
        assert_eq!(seminar.category(), "Finance");
    }
}
