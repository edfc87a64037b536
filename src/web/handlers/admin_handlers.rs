// src/web/handlers/admin_handlers.rs
use rocket::serde::json::Json;

use crate::mock_data;
use crate::types::GrowthPoint;
use crate::utils::initials;
use crate::views::ListingFilter;
use crate::web::types::*;

pub async fn admin_stats_handler() -> Json<DataResponse<AdminStatsView>> {
    Json(DataResponse::success(
        "Platform overview".to_string(),
        AdminStatsView {
            stats: mock_data::stat_cards(),
        },
    ))
}

/// Search covers name, email and user type
pub async fn admin_users_handler(search: Option<String>) -> Json<DataResponse<AdminUsersView>> {
    let filter = ListingFilter::from_query(search, Vec::new());
    let all = mock_data::platform_users();
    let users: Vec<_> = filter.apply(&all).into_iter().cloned().collect();

    Json(DataResponse::success(
        format!("Users ({})", users.len()),
        AdminUsersView {
            count: users.len(),
            users,
        },
    ))
}

fn percent_change(from: u32, to: u32) -> String {
    if from == 0 {
        return "n/a".to_string();
    }
    let change = (f64::from(to) - f64::from(from)) / f64::from(from) * 100.0;
    format!("{:+.1}%", change)
}

fn growth_summary(series: &[GrowthPoint]) -> Option<GrowthSummary> {
    let (first, last) = (series.first()?, series.last()?);
    Some(GrowthSummary {
        users: percent_change(first.users, last.users),
        jobs: percent_change(first.jobs, last.jobs),
        connections: percent_change(first.connections, last.connections),
    })
}

pub async fn admin_analytics_handler() -> Json<DataResponse<AnalyticsView>> {
    let series = mock_data::platform_growth();

    let view = AnalyticsView {
        title: "Platform Growth".to_string(),
        description: "User registration, job postings, and network connections over time"
            .to_string(),
        growth: growth_summary(&series),
        series,
    };

    Json(DataResponse::success(view.title.clone(), view))
}

pub async fn admin_activity_handler() -> Json<DataResponse<Vec<ActivityCard>>> {
    let cards: Vec<ActivityCard> = mock_data::recent_activity()
        .into_iter()
        .map(|event| ActivityCard {
            initials: initials(&event.user),
            badge: event.user_type.map(|t| t.as_str().to_string()),
            event,
        })
        .collect();

    Json(DataResponse::success("Recent Activity".to_string(), cards))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(100, 150), "+50.0%");
        assert_eq!(percent_change(100, 50), "-50.0%");
        assert_eq!(percent_change(0, 10), "n/a");
    }

    #[test]
    fn test_growth_summary_spans_whole_series() {
        let summary = growth_summary(&mock_data::platform_growth()).unwrap();
        assert_eq!(summary.jobs, "+246.7%");
        assert_eq!(summary.connections, "+408.0%");
        assert!(summary.users.starts_with("+137."));
        assert!(growth_summary(&[]).is_none());
    }
}
