//! Browser-independent description of what the page shows for a project.
//!
//! The web crate turns these views into elements one-to-one, so everything
//! that decides card structure (field order, link precedence, classes) is
//! settled here.

use crate::domain::{DisplayMode, Project};
use crate::filter::FilterState;

pub const NO_PROJECTS_MESSAGE: &str = "No projects found in this category.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub href: String,
    pub label: String,
    pub class: &'static str,
    pub new_tab: bool,
    pub icon: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub classes: &'static [&'static str],
    pub image: String,
    pub alt: String,
    pub preview: Option<String>,
    pub title: String,
    pub category: String,
    pub description: String,
    pub details: Vec<DetailLine>,
    pub tags: Vec<TagChip>,
    pub links: Vec<LinkView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Cards(Vec<CardView>),
    Empty { message: &'static str },
    /// No catalog to show: the container is cleared and left empty.
    Blank,
}

impl Rendered {
    pub fn card_count(&self) -> usize {
        match self {
            Self::Cards(cards) => cards.len(),
            Self::Empty { .. } | Self::Blank => 0,
        }
    }
}

/// Projects records into cards, one per record in input order.
pub fn render_cards(projects: &[&Project], mode: DisplayMode, filter: &FilterState) -> Rendered {
    if projects.is_empty() {
        return Rendered::Empty {
            message: NO_PROJECTS_MESSAGE,
        };
    }

    Rendered::Cards(
        projects
            .iter()
            .map(|project| card_view(project, mode, filter))
            .collect(),
    )
}

pub fn card_view(project: &Project, mode: DisplayMode, filter: &FilterState) -> CardView {
    CardView {
        classes: mode.card_classes(),
        image: project.image.clone(),
        alt: project.title.clone(),
        preview: project.preview().map(str::to_string),
        title: project.title.clone(),
        category: project.category.clone(),
        description: project.description.clone(),
        details: detail_lines(project),
        tags: project
            .tags()
            .iter()
            .map(|tag| TagChip {
                label: tag.clone(),
                active: filter.is_tag_active(tag),
            })
            .collect(),
        links: project_links(project),
    }
}

pub fn detail_lines(project: &Project) -> Vec<DetailLine> {
    project
        .details()
        .into_iter()
        .map(|(label, value)| DetailLine { label, value })
        .collect()
}

/// Links in fixed order: project page, live demo, extra links, source code.
pub fn project_links(project: &Project) -> Vec<LinkView> {
    let mut links = Vec::new();

    if let Some(href) = project.link() {
        links.push(LinkView {
            href: href.to_string(),
            label: "View Project".to_string(),
            class: "btn-primary",
            new_tab: href.starts_with("http"),
            icon: None,
        });
    }

    if let Some(href) = project.live_link() {
        links.push(LinkView {
            href: href.to_string(),
            label: "Live Demo".to_string(),
            class: "btn-secondary",
            new_tab: true,
            icon: None,
        });
    }

    for (label, href) in project.more_links() {
        links.push(LinkView {
            new_tab: href.starts_with("http"),
            href,
            label: label.to_string(),
            class: "btn-secondary",
            icon: None,
        });
    }

    if let Some(href) = project.source_code() {
        links.push(LinkView {
            href: href.to_string(),
            label: "Code".to_string(),
            class: "btn-secondary",
            new_tab: true,
            icon: Some("fab fa-github"),
        });
    }

    links
}

/// Fields shown in the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    pub image: String,
    pub image_alt: String,
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
    pub details: Vec<DetailLine>,
    pub links: Vec<LinkView>,
}

impl ModalView {
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            image: project.image.clone(),
            image_alt: project.title.clone(),
            category: project.category.clone(),
            description: project.description.clone(),
            tags: project.tags().to_vec(),
            details: detail_lines(project),
            links: project_links(project),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{project_links, render_cards, ModalView, Rendered, NO_PROJECTS_MESSAGE};
    use crate::domain::{DisplayMode, Project};
    use crate::filter::FilterState;
    use serde_json::json;

    fn project(title: &str) -> Project {
        Project {
            title: title.to_string(),
            category: "web".to_string(),
            image: format!("img/{title}.png"),
            ..Project::default()
        }
    }

    #[test]
    fn one_card_per_record_in_order() {
        let projects = [project("A"), project("B"), project("C")];
        let refs: Vec<&Project> = projects.iter().collect();

        let Rendered::Cards(cards) =
            render_cards(&refs, DisplayMode::Standard, &FilterState::new())
        else {
            panic!("expected cards");
        };

        let titles: Vec<_> = cards.iter().map(|card| card.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
        assert_eq!(cards[1].image, "img/B.png");
        assert_eq!(cards[1].alt, "B");
    }

    #[test]
    fn empty_input_renders_placeholder() {
        let rendered = render_cards(&[], DisplayMode::Featured, &FilterState::new());
        assert_eq!(
            rendered,
            Rendered::Empty {
                message: NO_PROJECTS_MESSAGE
            }
        );
        assert_eq!(rendered.card_count(), 0);
    }

    #[test]
    fn featured_cards_carry_featured_class() {
        let projects = [project("A")];
        let refs: Vec<&Project> = projects.iter().collect();
        let Rendered::Cards(cards) =
            render_cards(&refs, DisplayMode::Featured, &FilterState::new())
        else {
            panic!("expected cards");
        };
        assert!(cards[0].classes.contains(&"featured-card"));
    }

    #[test]
    fn links_follow_fixed_precedence() {
        let record: Project = serde_json::from_value(json!({
            "title": "Full",
            "sourceCode": "https://github.com/me/full",
            "moreLinks": { "Paper": "https://example.com/paper.pdf", "Notes": "notes.html" },
            "liveLink": "https://full.example.com",
            "link": "projects/full.html"
        }))
        .unwrap();

        let links = project_links(&record);
        let labels: Vec<_> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["View Project", "Live Demo", "Paper", "Notes", "Code"]);

        assert!(!links[0].new_tab, "relative project page stays in tab");
        assert!(links[1].new_tab);
        assert!(links[2].new_tab);
        assert!(!links[3].new_tab);
        assert_eq!(links[4].icon, Some("fab fa-github"));
        assert_eq!(links[0].class, "btn-primary");
    }

    #[test]
    fn external_project_link_opens_new_tab() {
        let record = Project {
            link: Some("https://itch.io/game".to_string()),
            ..Project::default()
        };
        assert!(project_links(&record)[0].new_tab);
    }

    #[test]
    fn active_tag_is_marked_on_chips() {
        let mut record = project("A");
        record.tags = Some(vec!["rust".to_string(), "wasm".to_string()]);
        let refs = [&record];
        let mut filter = FilterState::new();
        filter.select_tag("wasm");

        let Rendered::Cards(cards) = render_cards(&refs, DisplayMode::Standard, &filter) else {
            panic!("expected cards");
        };
        let active: Vec<_> = cards[0].tags.iter().map(|tag| tag.active).collect();
        assert_eq!(active, [false, true]);
    }

    #[test]
    fn modal_view_mirrors_project() {
        let record: Project = serde_json::from_value(json!({
            "title": "Radar",
            "description": "Tech radar",
            "category": "tools",
            "image": "radar.png",
            "tags": ["rust", "tui"],
            "liveLink": "https://radar.example.com",
            "details": { "role": "Author" }
        }))
        .unwrap();

        let view = ModalView::from_project(&record);
        assert_eq!(view.title, "Radar");
        assert_eq!(view.description, "Tech radar");
        assert_eq!(view.image, "radar.png");
        assert_eq!(view.image_alt, "Radar");
        assert_eq!(view.tags, ["rust", "tui"]);
        assert_eq!(view.links.len(), 1);
        assert_eq!(view.links[0].href, "https://radar.example.com");
        assert_eq!(view.details[0].label, "Role");
    }
}
