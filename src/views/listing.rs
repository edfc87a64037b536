// src/views/listing.rs
//! Search and tag filtering shared by every listing page.
//!
//! Tags from all filter categories are kept in a single set. A record passes
//! when it matches the search term and, if any tag is selected, at least one
//! selected tag (union match across categories).

use serde::{Deserialize, Serialize};

use crate::types::{Alumni, Job, Mentor, PlatformUser, Seminar};

/// A record that can be narrowed by a listing filter.
pub trait Searchable {
    /// Free-text fields the search box looks at
    fn search_fields(&self) -> Vec<&str>;

    /// Values a selected filter tag can match
    fn tags(&self) -> Vec<&str>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFilter {
    pub search_term: String,
    pub selected_filters: Vec<String>,
}

impl ListingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from query parameters, dropping blank and repeated tags
    pub fn from_query(search: Option<String>, filters: Vec<String>) -> Self {
        let mut filter = Self::new();
        if let Some(term) = search {
            filter.set_search(&term);
        }
        for tag in filters {
            filter.add_filter(&tag);
        }
        filter
    }

    /// Build a filter for pages with one dropdown instead of tag checkboxes.
    /// The dropdown value `all` (or nothing) selects no tag.
    pub fn from_selection(search: Option<String>, selection: Option<&str>) -> Self {
        let tags = selection
            .map(str::trim)
            .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("all"))
            .map(|value| vec![value.to_string()])
            .unwrap_or_default();
        Self::from_query(search, tags)
    }

    pub fn set_search(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    /// Returns false when the tag was blank or already selected
    pub fn add_filter(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.selected_filters.iter().any(|t| t == tag) {
            return false;
        }
        self.selected_filters.push(tag.to_string());
        true
    }

    pub fn remove_filter(&mut self, tag: &str) -> bool {
        let before = self.selected_filters.len();
        self.selected_filters.retain(|t| t != tag);
        self.selected_filters.len() != before
    }

    /// Drops every tag and the search term
    pub fn clear_all(&mut self) {
        self.selected_filters.clear();
        self.search_term.clear();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.selected_filters.is_empty()
    }

    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        self.matches_search(record) && self.matches_tags(record)
    }

    /// Filtered view of `records`, in their original order
    pub fn apply<'a, T: Searchable>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }

    fn matches_search<T: Searchable>(&self, record: &T) -> bool {
        let term = self.search_term.to_lowercase();
        if term.is_empty() {
            return true;
        }
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    fn matches_tags<T: Searchable>(&self, record: &T) -> bool {
        if self.selected_filters.is_empty() {
            return true;
        }
        let tags = record.tags();
        self.selected_filters.iter().any(|selected| {
            let selected = selected.to_lowercase();
            tags.iter().any(|tag| tag.to_lowercase() == selected)
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterCategory {
    pub name: String,
    pub values: Vec<String>,
}

/// The checkbox groups of a filter sidebar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCatalog {
    pub categories: Vec<FilterCategory>,
}

impl FilterCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, name: &str, values: &[&str]) -> Self {
        self.categories.push(FilterCategory {
            name: name.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        });
        self
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.values.iter().any(|v| v.eq_ignore_ascii_case(tag)))
    }

    /// Selected tags that no sidebar group offers
    pub fn unknown_tags<'a>(&self, filter: &'a ListingFilter) -> Vec<&'a str> {
        filter
            .selected_filters
            .iter()
            .map(String::as_str)
            .filter(|tag| !self.contains(tag))
            .collect()
    }
}

/// "Showing 4 opportunities"
pub fn summary(count: usize, noun: &str) -> String {
    format!("Showing {} {}", count, noun)
}

impl Searchable for Job {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.company.as_str()];
        fields.extend(self.requirements.iter().map(String::as_str));
        fields
    }

    fn tags(&self) -> Vec<&str> {
        let mut tags = vec![
            self.job_type.label(),
            self.location.as_str(),
            self.company.as_str(),
        ];
        if self.remote {
            tags.push("Remote");
        }
        tags.extend(self.requirements.iter().map(String::as_str));
        tags
    }
}

impl Searchable for Alumni {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.title.as_str(),
            self.company.as_str(),
        ];
        fields.extend(self.skills.iter().map(String::as_str));
        fields
    }

    fn tags(&self) -> Vec<&str> {
        let mut tags = vec![
            self.university.as_str(),
            self.company.as_str(),
            self.location.as_str(),
            self.major.as_str(),
        ];
        tags.extend(self.skills.iter().map(String::as_str));
        tags
    }
}

impl Searchable for Mentor {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.company.as_str()];
        fields.extend(self.skills.iter().map(String::as_str));
        fields
    }

    fn tags(&self) -> Vec<&str> {
        vec![self.industry.as_str()]
    }
}

impl Searchable for Seminar {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }

    fn tags(&self) -> Vec<&str> {
        vec![self.category()]
    }
}

impl Searchable for PlatformUser {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.user_type.as_str(),
        ]
    }

    fn tags(&self) -> Vec<&str> {
        vec![self.user_type.as_str(), self.status.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;

    fn titles<'a>(jobs: &[&'a Job]) -> Vec<&'a str> {
        jobs.iter().map(|j| j.title.as_str()).collect()
    }

    #[test]
    fn test_no_search_and_no_tags_keeps_everything() {
        let jobs = mock_data::jobs();
        let shown = ListingFilter::new().apply(&jobs);
        assert_eq!(shown.len(), 4);
        assert_eq!(summary(shown.len(), "opportunities"), "Showing 4 opportunities");
    }

    #[test]
    fn test_internship_tag_narrows_to_internships() {
        let jobs = mock_data::jobs();
        let mut filter = ListingFilter::new();
        filter.add_filter("Internship");

        let shown = filter.apply(&jobs);
        assert_eq!(
            titles(&shown),
            vec!["Software Engineering Intern", "Data Science Intern"]
        );
    }

    #[test]
    fn test_tags_from_different_categories_are_unioned() {
        let jobs = mock_data::jobs();
        let mut filter = ListingFilter::new();
        filter.add_filter("Internship");
        filter.add_filter("DesignStudio");

        let shown = filter.apply(&jobs);
        assert_eq!(
            titles(&shown),
            vec![
                "Software Engineering Intern",
                "Data Science Intern",
                "UX Designer"
            ]
        );
    }

    #[test]
    fn test_remote_tag_matches_remote_flag() {
        let jobs = mock_data::jobs();
        let filter = ListingFilter::from_query(None, vec!["Remote".to_string()]);
        assert_eq!(titles(&filter.apply(&jobs)), vec!["Product Manager", "UX Designer"]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_company_and_skills() {
        let jobs = mock_data::jobs();

        let by_skill = ListingFilter::from_query(Some("PYTHON".to_string()), vec![]);
        assert_eq!(titles(&by_skill.apply(&jobs)), vec!["Data Science Intern"]);

        let by_company = ListingFilter::from_query(Some("startup".to_string()), vec![]);
        assert_eq!(titles(&by_company.apply(&jobs)), vec!["Product Manager"]);

        let nothing = ListingFilter::from_query(Some("blockchain".to_string()), vec![]);
        assert!(nothing.apply(&jobs).is_empty());
    }

    #[test]
    fn test_search_and_tags_must_both_match() {
        let jobs = mock_data::jobs();
        let filter = ListingFilter::from_query(
            Some("intern".to_string()),
            vec!["Full-time".to_string()],
        );
        assert!(filter.apply(&jobs).is_empty());
    }

    #[test]
    fn test_filter_matches_property_over_all_subsets() {
        let jobs = mock_data::jobs();
        let tags = ["Internship", "Remote", "React", "Seattle, WA"];
        let terms = ["", "an", "corp", "zzz"];

        for mask in 0..(1u32 << tags.len()) {
            let selected: Vec<String> = tags
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, t)| t.to_string())
                .collect();

            for term in terms {
                let filter = ListingFilter::from_query(Some(term.to_string()), selected.clone());
                let expected: Vec<&Job> = jobs
                    .iter()
                    .filter(|job| {
                        let term_ok = term.is_empty()
                            || job
                                .search_fields()
                                .iter()
                                .any(|f| f.to_lowercase().contains(term));
                        let tags_ok = selected.is_empty()
                            || selected.iter().any(|s| job.tags().contains(&s.as_str()));
                        term_ok && tags_ok
                    })
                    .collect();
                assert_eq!(titles(&filter.apply(&jobs)), titles(&expected));
            }
        }
    }

    #[test]
    fn test_add_remove_and_clear() {
        let mut filter = ListingFilter::new();
        assert!(filter.add_filter("React"));
        assert!(!filter.add_filter("React"));
        assert!(!filter.add_filter("  "));
        assert!(filter.add_filter("Python"));
        assert_eq!(filter.selected_filters, vec!["React", "Python"]);

        assert!(filter.remove_filter("React"));
        assert!(!filter.remove_filter("React"));

        filter.set_search("google");
        filter.clear_all();
        assert!(!filter.has_active_filters());
        assert!(filter.search_term.is_empty());
    }

    #[test]
    fn test_whitespace_search_is_matched_literally() {
        let seminars = mock_data::seminars();
        let filter = ListingFilter::from_query(Some("   ".to_string()), Vec::new());
        assert!(filter.apply(&seminars).is_empty());
    }

    #[test]
    fn test_seminar_category_comes_from_host() {
        let seminars = mock_data::seminars();
        assert_eq!(seminars[0].category(), "Technology");
        assert_eq!(seminars[1].category(), "Finance");

        let technology = ListingFilter::from_selection(None, Some("Technology"));
        let shown = technology.apply(&seminars);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].company, "Google");

        let finance = ListingFilter::from_selection(None, Some("Finance"));
        assert!(finance.apply(&seminars).iter().all(|s| s.company != "Google"));
        let all = ListingFilter::from_selection(None, Some("all"));
        assert_eq!(all.apply(&seminars).len(), seminars.len());
    }

    #[test]
    fn test_selection_all_means_no_tag() {
        let mentors = mock_data::mentors();
        let all = ListingFilter::from_selection(None, Some("all"));
        assert_eq!(all.apply(&mentors).len(), 3);

        let finance = ListingFilter::from_selection(None, Some("finance"));
        let shown = finance.apply(&mentors);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name, "Dr. Emily Watson");
    }

    #[test]
    fn test_alumni_filters_cover_university_and_major() {
        let alumni = mock_data::alumni();
        let filter = ListingFilter::from_query(None, vec!["MIT".to_string(), "Design".to_string()]);
        let names: Vec<&str> = filter.apply(&alumni).iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Emily Rodriguez", "David Kim"]);
    }

    #[test]
    fn test_catalog_reports_unknown_tags() {
        let catalog = mock_data::job_filter_catalog();
        let filter = ListingFilter::from_query(
            None,
            vec!["Internship".to_string(), "Mars Base".to_string()],
        );
        assert!(catalog.contains("internship"));
        assert_eq!(catalog.unknown_tags(&filter), vec!["Mars Base"]);
    }
}
