use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One portfolio entry as it appears in `projects.json`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_links: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

impl Project {
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|candidate| candidate == tag)
    }

    pub fn link(&self) -> Option<&str> {
        non_empty(self.link.as_deref())
    }

    pub fn live_link(&self) -> Option<&str> {
        non_empty(self.live_link.as_deref())
    }

    pub fn source_code(&self) -> Option<&str> {
        non_empty(self.source_code.as_deref())
    }

    pub fn preview(&self) -> Option<&str> {
        non_empty(self.preview.as_deref())
    }

    /// Extra links in document order, skipping entries without a usable URL.
    pub fn more_links(&self) -> Vec<(&str, String)> {
        self.more_links
            .iter()
            .flatten()
            .filter_map(|(label, url)| {
                let url = display_value(url);
                (!url.is_empty()).then_some((label.as_str(), url))
            })
            .collect()
    }

    /// Detail entries in document order as `(label, value)` pairs.
    pub fn details(&self) -> Vec<(String, String)> {
        self.details
            .iter()
            .flatten()
            .map(|(key, value)| (humanize_key(key), display_value(value)))
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

/// Card density used when rendering a set of projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Featured,
    Standard,
}

impl DisplayMode {
    pub const fn card_classes(self) -> &'static [&'static str] {
        match self {
            Self::Featured => &["project-card", "featured-card"],
            Self::Standard => &["project-card"],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Standard => "standard",
        }
    }
}

/// Renders a JSON value the way it reads on a card.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .filter(|item| !item.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// Turns `teamSize` or `team_size` into `Team Size`.
pub fn humanize_key(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in key.chars() {
        if ch == '_' || ch == '-' || ch == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if ch.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
