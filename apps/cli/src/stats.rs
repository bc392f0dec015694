use portfolio_core::{Catalog, FilterState, Project};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CatalogStats {
    pub total_projects: usize,
    pub featured: usize,
    pub standard: usize,
    pub by_category: Vec<(String, usize)>,
    pub by_tag: Vec<(String, usize)>,
}

impl CatalogStats {
    pub fn build(catalog: &Catalog) -> Self {
        let projects = catalog.projects();

        let by_category = catalog
            .categories()
            .into_iter()
            .map(|category| {
                let count = projects.iter().filter(|p| p.category == category).count();
                (category.to_string(), count)
            })
            .collect();

        let by_tag = catalog
            .tags()
            .into_iter()
            .map(|tag| {
                let count = projects.iter().filter(|p| p.has_tag(tag)).count();
                (tag.to_string(), count)
            })
            .collect();

        Self {
            total_projects: catalog.len(),
            featured: catalog.featured().len(),
            standard: catalog.standard().len(),
            by_category,
            by_tag,
        }
    }

    pub fn print(&self) {
        println!("\nPortfolio Catalog Stats");
        println!("=======================");
        println!("Total projects: {}", self.total_projects);
        println!("Featured: {}", self.featured);
        println!("Gallery: {}", self.standard);

        println!("\nProjects by Category:");
        for (category, count) in &self.by_category {
            println!("- {category}: {count}");
        }

        println!("\nProjects by Tag:");
        if self.by_tag.is_empty() {
            println!("- (none)");
        }
        for (tag, count) in &self.by_tag {
            println!("- {tag}: {count}");
        }
    }
}

/// Fields a card needs but a record leaves blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub index: usize,
    pub title: String,
    pub field: &'static str,
}

pub fn issues(catalog: &Catalog) -> Vec<Issue> {
    let mut found = Vec::new();
    for (index, project) in catalog.projects().iter().enumerate() {
        let checks: [(&'static str, &str); 4] = [
            ("title", &project.title),
            ("description", &project.description),
            ("category", &project.category),
            ("image", &project.image),
        ];
        for (field, value) in checks {
            if value.trim().is_empty() {
                found.push(Issue {
                    index,
                    title: project.title.clone(),
                    field,
                });
            }
        }
    }
    found
}

pub enum Selection<'a> {
    Category(&'a str),
    Tag(&'a str),
}

/// Gallery records the site shows right after the given tab or tag is picked.
pub fn filtered<'a>(catalog: &'a Catalog, selection: &Selection<'_>) -> Vec<&'a Project> {
    let mut filter = FilterState::new();
    match selection {
        Selection::Category(category) => filter.select_category(category),
        Selection::Tag(tag) => filter.select_tag(tag),
    };
    filter.apply(catalog.standard())
}

#[cfg(test)]
mod tests {
    use super::{filtered, issues, CatalogStats, Selection};
    use portfolio_core::catalog::parse_projects;
    use portfolio_core::Catalog;

    fn catalog() -> Catalog {
        Catalog::new(
            parse_projects(
                r#"[
                    {"title":"Engine","description":"d","category":"games","image":"e.png","featured":true,"tags":["rust","wasm"]},
                    {"title":"Site","description":"d","category":"web","image":"s.png","tags":["wasm"]},
                    {"title":"Jam","description":"d","category":"games","image":"j.png","tags":["unity"]},
                    {"title":"","description":"d","category":"web","image":""}
                ]"#,
            )
            .unwrap(),
        )
    }

    #[test]
    fn counts_by_category_and_tag_in_first_seen_order() {
        let stats = CatalogStats::build(&catalog());

        assert_eq!(stats.total_projects, 4);
        assert_eq!(stats.featured, 1);
        assert_eq!(stats.standard, 3);
        assert_eq!(
            stats.by_category,
            [("games".to_string(), 2), ("web".to_string(), 2)]
        );
        assert_eq!(
            stats.by_tag,
            [
                ("rust".to_string(), 1),
                ("wasm".to_string(), 2),
                ("unity".to_string(), 1)
            ]
        );
    }

    #[test]
    fn json_output_uses_field_names() {
        let json = serde_json::to_value(CatalogStats::build(&catalog())).unwrap();
        assert_eq!(json["total_projects"], 4);
        assert_eq!(json["by_category"][0][0], "games");
    }

    #[test]
    fn blank_card_fields_are_reported() {
        let found = issues(&catalog());
        let fields: Vec<_> = found.iter().map(|issue| (issue.index, issue.field)).collect();
        assert_eq!(fields, [(3, "title"), (3, "image")]);
    }

    #[test]
    fn filter_matches_gallery_only() {
        let catalog = catalog();
        let titles = |selection| {
            filtered(&catalog, &selection)
                .iter()
                .map(|p| p.title.clone())
                .collect::<Vec<_>>()
        };

        assert_eq!(titles(Selection::Category("games")), ["Jam"]);
        assert_eq!(titles(Selection::Tag("wasm")), ["Site"]);
        assert_eq!(titles(Selection::Category("all")).len(), 3);
    }
}
