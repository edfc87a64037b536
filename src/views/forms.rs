// src/views/forms.rs
//! Job posting and profile editing forms.
//!
//! Neither form persists anything. Submitting waits out a simulated network
//! delay and reports what the page would do next.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::types::CurrentUser;
use crate::utils::normalize_entry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingRequiredFields,
    SubmissionFailed,
}

impl FormError {
    pub fn message(&self) -> &'static str {
        match self {
            FormError::MissingRequiredFields => "Please fill in all required fields",
            FormError::SubmissionFailed => "Failed to post job. Please try again.",
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            FormError::MissingRequiredFields => "MISSING_REQUIRED_FIELDS",
            FormError::SubmissionFailed => "SUBMISSION_FAILED",
        }
    }
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FormError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Redirect { to: String },
    Saved,
}

pub const JOBS_ROUTE: &str = "/jobs";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryType {
    #[default]
    Hourly,
    Annual,
}

/// Stand-in for the API call a real backend would make.
pub async fn simulate_latency(delay: Duration) -> anyhow::Result<()> {
    tokio::time::sleep(delay).await;
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPostForm {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub remote: bool,
    pub salary_min: String,
    pub salary_max: String,
    pub salary_type: SalaryType,
    pub description: String,
    pub responsibilities: String,
    pub qualifications: String,
    pub requirements: Vec<String>,
    pub application_deadline: String,
    pub contact_email: String,
    pub benefits: String,
}

impl JobPostForm {
    pub fn for_user(user: &CurrentUser) -> Self {
        Self {
            contact_email: user.email.clone(),
            ..Self::default()
        }
    }

    /// Fill the contact email from the user when the form left it blank
    pub fn with_default_contact(mut self, user: &CurrentUser) -> Self {
        if self.contact_email.trim().is_empty() {
            self.contact_email = user.email.clone();
        }
        self
    }

    /// Returns false when the entry was blank or already listed
    pub fn add_requirement(&mut self, requirement: &str) -> bool {
        push_unique(&mut self.requirements, requirement)
    }

    pub fn remove_requirement(&mut self, requirement: &str) -> bool {
        remove_entry(&mut self.requirements, requirement)
    }

    /// Re-apply the add rules to a requirement list that arrived in one piece
    pub fn normalize_requirements(&mut self) {
        let raw = std::mem::take(&mut self.requirements);
        for requirement in raw {
            self.add_requirement(&requirement);
        }
    }

    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("company", &self.company),
            ("location", &self.location),
            ("type", &self.job_type),
            ("description", &self.description),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let missing = self.missing_required_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            warn!("Job post rejected, missing: {}", missing.join(", "));
            Err(FormError::MissingRequiredFields)
        }
    }

    pub async fn submit(&self, delay: Duration) -> Result<SubmitOutcome, FormError> {
        self.submit_with(|| simulate_latency(delay)).await
    }

    /// Validate, run the simulated API step, then redirect to the job board.
    /// Nothing is added to the listing.
    pub async fn submit_with<F, Fut>(&self, step: F) -> Result<SubmitOutcome, FormError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<()>>,
    {
        self.validate()?;

        if let Err(e) = step().await {
            warn!("Simulated job post failed for '{}': {}", self.title, e);
            return Err(FormError::SubmissionFailed);
        }

        info!("Job post '{}' at {} accepted", self.title, self.company);
        Ok(SubmitOutcome::Redirect {
            to: JOBS_ROUTE.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceForm {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

/// Partial update for one experience entry; absent fields are left alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExperienceUpdate {
    pub title: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationForm {
    pub degree: String,
    pub school: String,
    pub start_year: String,
    pub end_year: String,
    pub current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub bio: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceForm>,
    pub education: Vec<EducationForm>,
}

impl ProfileForm {
    pub fn add_skill(&mut self, skill: &str) -> bool {
        push_unique(&mut self.skills, skill)
    }

    pub fn remove_skill(&mut self, skill: &str) -> bool {
        remove_entry(&mut self.skills, skill)
    }

    /// Appends a blank entry and returns its index
    pub fn add_experience(&mut self) -> usize {
        self.experience.push(ExperienceForm::default());
        self.experience.len() - 1
    }

    /// Returns false for an index past the end
    pub fn update_experience(&mut self, index: usize, update: ExperienceUpdate) -> bool {
        let Some(entry) = self.experience.get_mut(index) else {
            return false;
        };

        if let Some(title) = update.title {
            entry.title = title;
        }
        if let Some(company) = update.company {
            entry.company = company;
        }
        if let Some(start_date) = update.start_date {
            entry.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            entry.end_date = end_date;
        }
        if let Some(current) = update.current {
            entry.current = current;
        }
        if let Some(description) = update.description {
            entry.description = description;
        }
        true
    }

    pub fn remove_experience(&mut self, index: usize) -> Option<ExperienceForm> {
        (index < self.experience.len()).then(|| self.experience.remove(index))
    }

    /// Waits out the simulated save; there is nothing to validate
    pub async fn submit(&self, delay: Duration) -> SubmitOutcome {
        if let Err(e) = simulate_latency(delay).await {
            warn!("Simulated profile save failed: {}", e);
        }
        info!("Profile saved with {} skills", self.skills.len());
        SubmitOutcome::Saved
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) -> bool {
    match normalize_entry(value) {
        Some(entry) if !list.contains(&entry) => {
            list.push(entry);
            true
        }
        _ => false,
    }
}

fn remove_entry(list: &mut Vec<String>, value: &str) -> bool {
    let before = list.len();
    list.retain(|entry| entry != value);
    list.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn filled_form() -> JobPostForm {
        JobPostForm {
            title: "Backend Intern".to_string(),
            company: "InnovateLab".to_string(),
            location: "Seattle, WA".to_string(),
            job_type: "Internship".to_string(),
            description: "Build services.".to_string(),
            ..JobPostForm::for_user(&CurrentUser::default())
        }
    }

    #[test]
    fn test_new_form_defaults() {
        let form = JobPostForm::for_user(&CurrentUser::default());
        assert_eq!(form.contact_email, "alex.johnson@university.edu");
        assert_eq!(form.salary_type, SalaryType::Hourly);
        assert_eq!(form.missing_required_fields().len(), 5);
    }

    #[test]
    fn test_requirements_are_trimmed_and_unique() {
        let mut form = JobPostForm::default();
        assert!(form.add_requirement(" Rust "));
        assert!(!form.add_requirement("Rust"));
        assert!(!form.add_requirement("   "));
        assert!(form.add_requirement("SQL"));
        assert!(form.remove_requirement("Rust"));
        assert_eq!(form.requirements, vec!["SQL"]);

        form.requirements = vec!["Go".into(), " Go".into(), "".into(), "K8s".into()];
        form.normalize_requirements();
        assert_eq!(form.requirements, vec!["Go", "K8s"]);
    }

    #[tokio::test]
    async fn test_blank_required_field_blocks_submission() {
        let mut form = filled_form();
        form.location = "  ".to_string();

        let calls = AtomicUsize::new(0);
        let result = form
            .submit_with(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .await;

        assert_eq!(result, Err(FormError::MissingRequiredFields));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            result.unwrap_err().message(),
            "Please fill in all required fields"
        );
    }

    #[tokio::test]
    async fn test_complete_form_redirects_once() {
        let calls = AtomicUsize::new(0);
        let result = filled_form()
            .submit_with(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .await;

        assert_eq!(
            result,
            Ok(SubmitOutcome::Redirect {
                to: "/jobs".to_string()
            })
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_step_reports_generic_error() {
        let result = filled_form()
            .submit_with(|| async { Err(anyhow::anyhow!("network down")) })
            .await;
        assert_eq!(result, Err(FormError::SubmissionFailed));
        assert_eq!(
            FormError::SubmissionFailed.to_string(),
            "Failed to post job. Please try again."
        );
    }

    #[tokio::test]
    async fn test_submit_waits_for_delay() {
        let started = std::time::Instant::now();
        let outcome = filled_form().submit(Duration::from_millis(20)).await;
        assert!(outcome.is_ok());
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_profile_experience_editing() {
        let mut profile = ProfileForm::default();
        let index = profile.add_experience();
        assert_eq!(index, 0);

        let updated = profile.update_experience(
            0,
            ExperienceUpdate {
                title: Some("Research Assistant".to_string()),
                current: Some(true),
                ..ExperienceUpdate::default()
            },
        );
        assert!(updated);
        assert_eq!(profile.experience[0].title, "Research Assistant");
        assert!(profile.experience[0].current);
        assert!(profile.experience[0].company.is_empty());

        assert!(!profile.update_experience(3, ExperienceUpdate::default()));
        assert!(profile.remove_experience(3).is_none());
        assert!(profile.remove_experience(0).is_some());
        assert!(profile.experience.is_empty());
    }

    #[tokio::test]
    async fn test_profile_submit_resolves_silently() {
        let mut profile = ProfileForm::default();
        profile.add_skill("Rust");
        assert!(!profile.add_skill("Rust"));
        assert_eq!(profile.submit(Duration::from_millis(1)).await, SubmitOutcome::Saved);
    }
}
