/// Search provider abstraction
///
/// A provider turns a free-text query into the list of items one streaming
/// site knows about. The component only talks to this trait, so the site
/// specific scraping rules live entirely in the provider module.
use crate::{error::AppResult, models::SearchPage};

pub mod rezka;

pub use rezka::RezkaProvider;

/// Trait for site search providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    /// Search the site by title
    ///
    /// A blank query yields an empty page without touching the network.
    async fn search(&self, query: &str) -> AppResult<SearchPage>;

    /// Absolute address of an item link found in the results
    fn resolve_url(&self, path: &str) -> String;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Queries that never reach the network
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}
