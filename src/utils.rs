// src/utils.rs
use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Up to two uppercase initials, one per space-separated word
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .take(2)
        .collect()
}

/// Capitalize the first letter, e.g. a request status for its badge
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parse a `YYYY-MM-DD` record date
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date: {}", value))
}

/// Relative posting age as shown on cards ("3 days ago", "2 weeks ago")
pub fn time_ago(date: &str, today: NaiveDate) -> Result<String> {
    let date = parse_date(date)?;
    let days = (today - date).num_days().unsigned_abs().max(1);

    let label = if days == 1 {
        "1 day ago".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days.div_ceil(7))
    } else {
        format!("{} months ago", days.div_ceil(30))
    };

    Ok(label)
}

/// Long US date, e.g. "January 15, 2024"
pub fn format_long_date(date: &str) -> Result<String> {
    Ok(parse_date(date)?.format("%B %-d, %Y").to_string())
}

/// First `limit` skills, plus a "+N more" badge when the list is truncated
pub fn skill_badges(skills: &[String], limit: usize) -> Vec<String> {
    let mut badges: Vec<String> = skills.iter().take(limit).cloned().collect();
    if skills.len() > limit {
        badges.push(format!("+{} more", skills.len() - limit));
    }
    badges
}

/// Trim a list entry, returning None when nothing is left
pub fn normalize_entry(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("Dr. Emily Chen"), "DE");
        assert_eq!(initials("TechCorp"), "T");
        assert_eq!(initials("startup xyz"), "SX");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("pending"), "Pending");
        assert_eq!(capitalize("accepted"), "Accepted");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_time_ago() {
        let today = day(2024, 1, 16);
        assert_eq!(time_ago("2024-01-15", today).unwrap(), "1 day ago");
        assert_eq!(time_ago("2024-01-16", today).unwrap(), "1 day ago");
        assert_eq!(time_ago("2024-01-12", today).unwrap(), "4 days ago");
        assert_eq!(time_ago("2024-01-06", today).unwrap(), "2 weeks ago");
        assert_eq!(time_ago("2023-11-16", today).unwrap(), "3 months ago");
        assert!(time_ago("yesterday", today).is_err());
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date("2024-01-15").unwrap(), "January 15, 2024");
        assert_eq!(format_long_date("2024-02-05").unwrap(), "February 5, 2024");
        assert!(format_long_date("15/01/2024").is_err());
    }

    #[test]
    fn test_skill_badges() {
        let skills: Vec<String> = ["JavaScript", "React", "Node.js", "Git", "HTML/CSS"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(
            skill_badges(&skills, 4),
            vec!["JavaScript", "React", "Node.js", "Git", "+1 more"]
        );
        assert_eq!(skill_badges(&skills[..3], 3), vec!["JavaScript", "React", "Node.js"]);
    }

    #[test]
    fn test_normalize_entry() {
        assert_eq!(normalize_entry("  Rust "), Some("Rust".to_string()));
        assert_eq!(normalize_entry("   "), None);
    }
}
