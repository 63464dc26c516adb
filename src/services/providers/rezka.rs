/// HDRezka mirror provider
///
/// Search goes through the site's DLE search page and the result items are
/// scraped from the returned HTML; the site has no JSON API.
use chrono::Utc;
use std::sync::Arc;

use crate::{
    error::AppResult,
    host::{HttpChannel, RequestDescriptor},
    models::SearchPage,
    services::{
        parser::parse_search_results,
        providers::{is_blank, SearchProvider},
        urls::{build_search_url, resolve_url},
    },
};

#[derive(Clone)]
pub struct RezkaProvider {
    channel: Arc<dyn HttpChannel>,
    base_url: String,
}

impl RezkaProvider {
    pub fn new(channel: Arc<dyn HttpChannel>, base_url: impl Into<String>) -> Self {
        Self {
            channel,
            base_url: base_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl SearchProvider for RezkaProvider {
    async fn search(&self, query: &str) -> AppResult<SearchPage> {
        if is_blank(query) {
            tracing::debug!("Blank query, skipping request");
            return Ok(SearchPage::empty(query));
        }

        let url = build_search_url(&self.base_url, query);
        tracing::debug!(url = %url, "Requesting search page");

        let html = self.channel.get(&RequestDescriptor::text(url)).await?;
        let results = parse_search_results(&html);

        tracing::info!(
            query = %query,
            results = results.len(),
            provider = self.name(),
            "Title search completed"
        );

        Ok(SearchPage {
            query: query.to_string(),
            results,
            fetched_at: Utc::now(),
        })
    }

    fn resolve_url(&self, path: &str) -> String {
        resolve_url(&self.base_url, path)
    }

    fn name(&self) -> &'static str {
        "rezka"
    }
}
