use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Movie card data handed over by the host's detail view.
///
/// Films carry `title`, series carry `name`; everything else the host sends is
/// kept untouched in `extra` so it can be passed back on navigation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Movie {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Movie {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Title for films, name for series, empty when neither is set
    pub fn display_title(&self) -> &str {
        [self.title.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or("")
    }
}

/// Object the host passes to a component constructor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ComponentContext {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub movie: Option<Movie>,
}

/// Descriptor pushed onto the host's activity stack
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ActivityDescriptor {
    pub title: String,
    pub component: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie: Option<Movie>,
}

/// Field mapping fed to a named host template
pub type TemplateFields = BTreeMap<String, String>;

/// Options for the host's scroll widget
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScrollOptions {
    pub mask: bool,
    pub over: bool,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            mask: true,
            over: true,
        }
    }
}

/// Selectable control injected into a host screen.
///
/// The host renders it and pushes `action` when the user activates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ButtonSpec {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_svg: Option<String>,
    pub action: ActivityDescriptor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_prefers_title_over_name() {
        let movie = Movie {
            title: Some("Dune".to_string()),
            name: Some("Dune: Prophecy".to_string()),
            ..Default::default()
        };
        assert_eq!(movie.display_title(), "Dune");
    }

    #[test]
    fn test_display_title_falls_back_to_name() {
        let movie = Movie {
            title: Some(String::new()),
            name: Some("Shōgun".to_string()),
            ..Default::default()
        };
        assert_eq!(movie.display_title(), "Shōgun");
        assert_eq!(Movie::default().display_title(), "");
    }

    #[test]
    fn test_movie_keeps_unknown_fields() {
        let json = r#"{"title": "Heat", "id": 949, "original_language": "en"}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.title.as_deref(), Some("Heat"));
        assert_eq!(movie.extra["id"], 949);

        let back = serde_json::to_value(&movie).unwrap();
        assert_eq!(back["original_language"], "en");
        assert!(back.get("name").is_none());
    }

    #[test]
    fn test_activity_descriptor_omits_unset_fields() {
        let descriptor = ActivityDescriptor {
            title: "Rezka".to_string(),
            component: "RezkaBalancer".to_string(),
            query: Some(String::new()),
            ..Default::default()
        };
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["query"], "");
        assert!(json.get("url").is_none());
        assert!(json.get("movie").is_none());
    }
}
