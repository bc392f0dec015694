use thiserror::Error;

use crate::domain::Project;

/// Everything that can go wrong while turning a catalog URL into records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("catalog is not a list of projects: {0}")]
    Parse(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("missing element: {0}")]
    MissingElement(String),
}

impl LoadError {
    /// Text written into the page's error region.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { status, .. } => {
                format!("Projects could not be loaded (HTTP {status}). Please try again later.")
            }
            Self::Parse(_) => "Projects could not be read. Please try again later.".to_string(),
            Self::Network(_) => {
                "Projects could not be loaded. Check your connection and reload.".to_string()
            }
            Self::MissingElement(id) => format!("Page is missing #{id}."),
        }
    }
}

/// Rejects non-success responses, keeping the body text for diagnostics.
pub fn check_status(status: u16, body: impl FnOnce() -> String) -> Result<(), LoadError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(LoadError::Status {
        status,
        body: body(),
    })
}

pub fn parse_projects(body: &str) -> Result<Vec<Project>, LoadError> {
    let projects: Vec<Project> =
        serde_json::from_str(body).map_err(|error| LoadError::Parse(error.to_string()))?;
    log::debug!("parsed {} project records", projects.len());
    Ok(projects)
}

/// Immutable snapshot of the loaded catalog for one page view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
    featured_override: Option<Vec<Project>>,
}

impl Catalog {
    pub const fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            featured_override: None,
        }
    }

    /// Uses a separately loaded `featured.json` instead of the `featured` flag.
    #[must_use]
    pub fn with_featured(mut self, featured: Vec<Project>) -> Self {
        self.featured_override = Some(featured);
        self
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn featured(&self) -> Vec<&Project> {
        self.featured_override.as_ref().map_or_else(
            || self.projects.iter().filter(|p| p.is_featured()).collect(),
            |featured| featured.iter().collect(),
        )
    }

    /// Gallery set: every record of the main document that is not flagged featured.
    pub fn standard(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| !p.is_featured()).collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for project in &self.projects {
            let category = project.category.as_str();
            if !category.is_empty() && !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// Distinct tags in first-seen order.
    pub fn tags(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for tag in self.projects.iter().flat_map(Project::tags) {
            if !seen.contains(&tag.as_str()) {
                seen.push(tag);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::{check_status, parse_projects, Catalog, LoadError};
    use crate::domain::Project;

    fn project(title: &str, category: &str, featured: bool) -> Project {
        Project {
            title: title.to_string(),
            category: category.to_string(),
            featured: Some(featured),
            ..Project::default()
        }
    }

    #[test]
    fn success_status_passes_without_reading_body() {
        let result = check_status(200, || panic!("body should not be read"));
        assert!(result.is_ok());
    }

    #[test]
    fn not_found_carries_body_text() {
        let error = check_status(404, || "Not Found".to_string()).unwrap_err();
        assert_eq!(
            error,
            LoadError::Status {
                status: 404,
                body: "Not Found".to_string()
            }
        );
        assert!(error.user_message().contains("404"));
    }

    #[test]
    fn parses_array_of_records() {
        let projects =
            parse_projects(r#"[{"title":"A","category":"web"},{"title":"B","category":"games"}]"#)
                .unwrap();
        let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
    }

    #[test]
    fn object_document_is_a_parse_error() {
        let error = parse_projects(r#"{"title":"A"}"#).unwrap_err();
        assert!(matches!(error, LoadError::Parse(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(parse_projects("[{"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn splits_featured_from_standard() {
        let catalog = Catalog::new(vec![
            project("A", "web", true),
            project("B", "games", false),
            project("C", "web", false),
        ]);

        let featured: Vec<_> = catalog.featured().iter().map(|p| p.title.clone()).collect();
        let standard: Vec<_> = catalog.standard().iter().map(|p| p.title.clone()).collect();
        assert_eq!(featured, ["A"]);
        assert_eq!(standard, ["B", "C"]);
    }

    #[test]
    fn featured_document_overrides_flag() {
        let catalog = Catalog::new(vec![project("A", "web", true), project("B", "web", false)])
            .with_featured(vec![project("F", "tools", false)]);

        let featured: Vec<_> = catalog.featured().iter().map(|p| p.title.clone()).collect();
        assert_eq!(featured, ["F"]);
        assert_eq!(catalog.standard().len(), 1);
    }

    #[test]
    fn categories_and_tags_are_distinct_in_order() {
        let mut a = project("A", "web", false);
        a.tags = Some(vec!["rust".to_string(), "wasm".to_string()]);
        let mut b = project("B", "games", false);
        b.tags = Some(vec!["unity".to_string(), "rust".to_string()]);
        let catalog = Catalog::new(vec![a, b, project("C", "web", false)]);

        assert_eq!(catalog.categories(), ["web", "games"]);
        assert_eq!(catalog.tags(), ["rust", "wasm", "unity"]);
    }
}
