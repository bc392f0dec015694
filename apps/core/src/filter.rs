use std::fmt;

use crate::domain::Project;

/// Category value of the tab that shows everything.
pub const ALL_CATEGORY: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Category(String),
    Tag(String),
}

impl Filter {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::Category(category) => project.category == *category,
            Self::Tag(tag) => project.has_tag(tag),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category(category) => write!(f, "category:{category}"),
            Self::Tag(tag) => write!(f, "tag:{tag}"),
        }
    }
}

/// Single-select filter over categories and tags together.
///
/// Selecting the active value again, or the `all` category, returns to the
/// unfiltered view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    active: Option<Filter>,
}

impl FilterState {
    pub const fn new() -> Self {
        Self { active: None }
    }

    pub const fn active(&self) -> Option<&Filter> {
        self.active.as_ref()
    }

    pub fn select(&mut self, filter: Filter) -> Option<&Filter> {
        let next = match filter {
            Filter::Category(ref category) if category == ALL_CATEGORY => None,
            _ if self.active.as_ref() == Some(&filter) => None,
            _ => Some(filter),
        };

        match &next {
            Some(filter) => log::debug!("filter set to {filter}"),
            None => log::debug!("filter cleared"),
        }

        self.active = next;
        self.active.as_ref()
    }

    pub fn select_category(&mut self, category: &str) -> Option<&Filter> {
        self.select(Filter::Category(category.to_string()))
    }

    pub fn select_tag(&mut self, tag: &str) -> Option<&Filter> {
        self.select(Filter::Tag(tag.to_string()))
    }

    pub fn apply<'a>(&self, projects: impl IntoIterator<Item = &'a Project>) -> Vec<&'a Project> {
        projects
            .into_iter()
            .filter(|project| self.active.as_ref().map_or(true, |f| f.matches(project)))
            .collect()
    }

    /// Category of the tab that should carry the `active` class.
    pub fn active_tab(&self) -> &str {
        match &self.active {
            Some(Filter::Category(category)) => category,
            Some(Filter::Tag(_)) | None => ALL_CATEGORY,
        }
    }

    pub fn is_tag_active(&self, tag: &str) -> bool {
        matches!(&self.active, Some(Filter::Tag(active)) if active == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::{Filter, FilterState, ALL_CATEGORY};
    use crate::domain::Project;

    fn catalog() -> Vec<Project> {
        vec![
            Project {
                title: "A".to_string(),
                category: "web".to_string(),
                tags: Some(vec!["rust".to_string(), "wasm".to_string()]),
                ..Project::default()
            },
            Project {
                title: "B".to_string(),
                category: "games".to_string(),
                tags: Some(vec!["unity".to_string()]),
                ..Project::default()
            },
            Project {
                title: "C".to_string(),
                category: "web".to_string(),
                tags: Some(vec!["rust".to_string()]),
                ..Project::default()
            },
        ]
    }

    fn titles(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn starts_unfiltered() {
        let state = FilterState::new();
        let projects = catalog();
        assert!(state.active().is_none());
        assert_eq!(titles(&state.apply(&projects)), ["A", "B", "C"]);
        assert_eq!(state.active_tab(), ALL_CATEGORY);
    }

    #[test]
    fn category_filter_keeps_exact_matches() {
        let mut state = FilterState::new();
        let projects = catalog();
        state.select_category("web");
        assert_eq!(titles(&state.apply(&projects)), ["A", "C"]);
        assert_eq!(state.active_tab(), "web");
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let mut state = FilterState::new();
        let projects = catalog();
        state.select_category("Web");
        assert!(state.apply(&projects).is_empty());
    }

    #[test]
    fn tag_filter_checks_membership() {
        let mut state = FilterState::new();
        let projects = catalog();
        state.select_tag("rust");
        assert_eq!(titles(&state.apply(&projects)), ["A", "C"]);
        assert!(state.is_tag_active("rust"));
        assert!(!state.is_tag_active("wasm"));
        assert_eq!(state.active_tab(), ALL_CATEGORY);
    }

    #[test]
    fn reselecting_active_value_toggles_off() {
        let mut state = FilterState::new();
        let projects = catalog();

        state.select_category("games");
        assert_eq!(titles(&state.apply(&projects)), ["B"]);

        assert!(state.select_category("games").is_none());
        assert_eq!(titles(&state.apply(&projects)), ["A", "B", "C"]);
    }

    #[test]
    fn all_category_always_clears() {
        let mut state = FilterState::new();
        state.select_tag("rust");
        assert!(state.select_category(ALL_CATEGORY).is_none());
        assert!(state.select_category(ALL_CATEGORY).is_none());
    }

    #[test]
    fn new_value_replaces_previous_selection() {
        let mut state = FilterState::new();
        state.select_category("web");
        state.select_tag("unity");
        assert_eq!(state.active(), Some(&Filter::Tag("unity".to_string())));

        // a tag and a category sharing a name are distinct selections
        state.select_category("unity");
        assert_eq!(state.active(), Some(&Filter::Category("unity".to_string())));
    }
}
