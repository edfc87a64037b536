// src/web/handlers/dashboard_handlers.rs
use rocket::serde::json::Json;
use rocket::State;

use crate::mock_data;
use crate::types::{CurrentUser, UserType};
use crate::views::SessionStore;
use crate::web::types::*;

fn quick_action(title: &str, description: &str, href: &str) -> QuickAction {
    QuickAction {
        title: title.to_string(),
        description: description.to_string(),
        href: href.to_string(),
    }
}

/// Welcome text and cards; copy varies with the user type
pub fn dashboard_view(user: &CurrentUser) -> DashboardView {
    let first_name = user.name.split_whitespace().next().unwrap_or(&user.name);

    let subtitle = match user.user_type {
        UserType::Student => {
            "Continue building your professional network and exploring career opportunities."
        }
        UserType::Alumni => "Share your experience and help the next generation of professionals.",
        UserType::Employer => "Find talented candidates and post new opportunities.",
        UserType::Admin => "Keep an eye on platform activity and user accounts.",
    };

    let jobs_action = match user.user_type {
        UserType::Employer => quick_action(
            "Post Jobs",
            "Post new opportunities for students and alumni",
            "/jobs/post",
        ),
        _ => quick_action(
            "Find Jobs",
            "Discover internships and job opportunities",
            "/jobs",
        ),
    };

    let mentorship_description = match user.user_type {
        UserType::Student => "Find mentors to guide your career journey",
        _ => "Mentor the next generation of professionals",
    };

    let recommended_actions = match user.user_type {
        UserType::Student => vec!["Explore Alumni", "Update Profile"],
        UserType::Alumni => vec!["Become a Mentor", "Post Job"],
        UserType::Employer => vec!["Search Talent", "Create Posting"],
        UserType::Admin => vec!["Review Users"],
    };

    DashboardView {
        greeting: format!("Welcome back, {}!", first_name),
        subtitle: subtitle.to_string(),
        quick_actions: vec![
            quick_action(
                "My Profile",
                "Update your profile and showcase your experience",
                "/profile",
            ),
            quick_action(
                "Find Alumni",
                "Connect with alumni in your field of interest",
                "/network",
            ),
            jobs_action,
            quick_action("Mentorship", mentorship_description, "/mentorship"),
        ],
        recommended_actions: recommended_actions.into_iter().map(String::from).collect(),
    }
}

pub async fn dashboard_handler(store: &State<SessionStore>) -> Json<DataResponse<DashboardView>> {
    let view = dashboard_view(store.user());
    Json(DataResponse::success(view.greeting.clone(), view))
}

pub async fn career_insights_handler() -> Json<DataResponse<CareerInsightsView>> {
    Json(DataResponse::success(
        "Career insights".to_string(),
        CareerInsightsView {
            recommendations: mock_data::career_recommendations(),
            skill_gaps: mock_data::skill_gaps(),
            career_paths: mock_data::career_paths(),
            industry_trends: mock_data::industry_trends(),
        },
    ))
}
