use serde::{Deserialize, Serialize};

use crate::effects::{HEADER_OFFSET, RIPPLE_LIFETIME_MS};
use crate::hero::{DEFAULT_CONNECTION_DISTANCE, DEFAULT_PARTICLE_COUNT, MOBILE_BREAKPOINT};

/// Element id of the inline JSON block that may override [`SiteConfig`].
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Page-level settings. Every field falls back to the value the stock page
/// markup expects, so a partial override only names what differs.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub projects_url: String,
    pub featured_url: Option<String>,
    pub elements: ElementIds,
    pub header_offset: f64,
    pub mobile_breakpoint: f64,
    pub particle_count: usize,
    pub connection_distance: f32,
    pub ripple_lifetime_ms: i32,
    /// Raises console logging to debug level.
    pub debug: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            projects_url: "projects.json".to_string(),
            featured_url: None,
            elements: ElementIds::default(),
            header_offset: HEADER_OFFSET,
            mobile_breakpoint: MOBILE_BREAKPOINT,
            particle_count: DEFAULT_PARTICLE_COUNT,
            connection_distance: DEFAULT_CONNECTION_DISTANCE,
            ripple_lifetime_ms: RIPPLE_LIFETIME_MS,
            debug: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub hero_button: String,
    pub featured_section: String,
    pub tabs: String,
    pub featured_cards: String,
    pub project_cards: String,
    pub error_region: String,
    pub modal: String,
    pub modal_content: String,
    pub modal_close: String,
    pub modal_title: String,
    pub modal_image: String,
    pub modal_category: String,
    pub modal_description: String,
    pub modal_tags: String,
    pub modal_details: String,
    pub modal_links: String,
    pub hero_canvas: String,
    pub hero_content: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            hero_button: "hero-button".to_string(),
            featured_section: "featured".to_string(),
            tabs: "tabs".to_string(),
            featured_cards: "featured-cards".to_string(),
            project_cards: "project-cards".to_string(),
            error_region: "project-error".to_string(),
            modal: "project-modal".to_string(),
            modal_content: "modal-content".to_string(),
            modal_close: "modal-close".to_string(),
            modal_title: "modal-title".to_string(),
            modal_image: "modal-image".to_string(),
            modal_category: "modal-category".to_string(),
            modal_description: "modal-description".to_string(),
            modal_tags: "modal-tags".to_string(),
            modal_details: "modal-details".to_string(),
            modal_links: "modal-links".to_string(),
            hero_canvas: "hero-canvas".to_string(),
            hero_content: "hero-content".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Reads an optional override block, keeping the defaults when it is
    /// absent or unreadable.
    pub fn from_optional_json(text: Option<&str>) -> Self {
        let Some(text) = text.filter(|text| !text.trim().is_empty()) else {
            return Self::default();
        };

        match Self::from_json(text) {
            Ok(config) => config,
            Err(error) => {
                log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {error}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SiteConfig;

    #[test]
    fn defaults_match_page_markup() {
        let config = SiteConfig::default();
        assert_eq!(config.projects_url, "projects.json");
        assert!(config.featured_url.is_none());
        assert_eq!(config.elements.project_cards, "project-cards");
        assert_eq!(config.elements.hero_canvas, "hero-canvas");
        assert_eq!(config.header_offset, 80.0);
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert_eq!(config.particle_count, 800);
        assert_eq!(config.ripple_lifetime_ms, 600);
        assert!(!config.debug);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "featuredUrl": "featured.json", "particleCount": 300, "elements": { "tabs": "filters" } }"#,
        )
        .unwrap();

        assert_eq!(config.featured_url.as_deref(), Some("featured.json"));
        assert_eq!(config.particle_count, 300);
        assert_eq!(config.elements.tabs, "filters");
        assert_eq!(config.elements.modal, "project-modal");
        assert_eq!(config.projects_url, "projects.json");
    }

    #[test]
    fn unreadable_override_falls_back_to_defaults() {
        assert_eq!(SiteConfig::from_optional_json(Some("{ nope")), SiteConfig::default());
        assert_eq!(SiteConfig::from_optional_json(Some("   ")), SiteConfig::default());
        assert_eq!(SiteConfig::from_optional_json(None), SiteConfig::default());
    }
}
