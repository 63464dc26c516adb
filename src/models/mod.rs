use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod host;

pub use host::{
    ActivityDescriptor, ButtonSpec, ComponentContext, Movie, ScrollOptions, TemplateFields,
};

/// One entry scraped from the site's search results page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SearchResult {
    /// Visible text of the item link, trimmed
    pub title: String,
    /// Link target as found in the markup; may be relative to the site root
    pub url: String,
    /// Poster image source, empty when the item has no image
    pub poster: String,
    /// Year/genre caption under the link, empty when absent
    pub year: String,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = poster.into();
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }
}

/// Results of a single search together with the moment they were scraped
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchPage {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub fetched_at: DateTime<Utc>,
}

impl SearchPage {
    /// Page for a query that never reached the network
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            results: Vec::new(),
            fetched_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
