use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    host::{Component, Container, HostServices, HttpChannel, Node, ScrollSurface},
    models::{ActivityDescriptor, ComponentContext, ScrollOptions, SearchPage, SearchResult, TemplateFields},
    services::{
        initial_query,
        providers::{is_blank, SearchProvider},
        RezkaProvider,
    },
};

const CONTAINER_CLASS: &str = "rezka-balancer";
const CARD_TEMPLATE: &str = "card";
const EMPTY_TEMPLATE: &str = "list_empty";
const BROWSER_COMPONENT: &str = "iframe";
const CONTENT_CONTROLLER: &str = "content";
const ERROR_PREFIX: &str = "Помилка завантаження: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Empty,
    ListShown,
    ErrorShown,
    Destroyed,
}

/// Identifies one search started by a view.
///
/// Only the ticket of the most recent search is accepted on completion, so a
/// slow response can never overwrite a newer one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    pub search_id: Uuid,
    pub query: String,
}

/// Search results screen.
///
/// Owns the container, the scroll list and one card per result; all drawing
/// and navigation is delegated to the host services.
pub struct SearchView {
    services: HostServices,
    network: Arc<dyn HttpChannel>,
    provider: Arc<dyn SearchProvider>,
    scroll: Box<dyn ScrollSurface>,
    container: Container,
    query: String,
    state: ViewState,
    generation: u64,
    results: Vec<SearchResult>,
    cards: Vec<Box<dyn Node>>,
    placeholder: Option<Box<dyn Node>>,
    scroll_attached: bool,
}

impl SearchView {
    /// View searching the site at `base_url` through a fresh host channel
    pub fn new(context: ComponentContext, services: HostServices, base_url: &str) -> Self {
        let network = services.http.channel();
        let provider = Arc::new(RezkaProvider::new(network.clone(), base_url));
        Self::with_provider(context, services, network, provider)
    }

    pub fn with_provider(
        context: ComponentContext,
        services: HostServices,
        network: Arc<dyn HttpChannel>,
        provider: Arc<dyn SearchProvider>,
    ) -> Self {
        let scroll = services.scrolls.create(ScrollOptions::default());

        Self {
            services,
            network,
            provider,
            scroll,
            container: Container::new(CONTAINER_CLASS),
            query: initial_query(&context),
            state: ViewState::Loading,
            generation: 0,
            results: Vec::new(),
            cards: Vec::new(),
            placeholder: None,
            scroll_attached: false,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Runs a search to completion
    pub async fn search(&mut self, query: impl Into<String>) {
        let Some(ticket) = self.begin_search(query) else {
            return;
        };

        let span = tracing::info_span!(
            "search",
            search_id = %ticket.search_id,
            query = %ticket.query,
            provider = self.provider.name(),
        );
        let outcome = self.provider.search(&ticket.query).instrument(span).await;

        self.complete_search(&ticket, outcome);
    }

    /// Enters `Loading` for a new search.
    ///
    /// Returns `None` when there is nothing to fetch: a blank query settles
    /// immediately into `Empty`, and a destroyed view does not search at all.
    pub fn begin_search(&mut self, query: impl Into<String>) -> Option<SearchTicket> {
        if self.state == ViewState::Destroyed {
            tracing::debug!("Search requested on destroyed view, ignoring");
            return None;
        }

        self.query = query.into();
        self.generation += 1;
        self.state = ViewState::Loading;
        self.services.activity.loader(true);

        if is_blank(&self.query) {
            self.services.activity.loader(false);
            self.clear_rendered();
            self.show_empty();
            return None;
        }

        Some(SearchTicket {
            generation: self.generation,
            search_id: Uuid::new_v4(),
            query: self.query.clone(),
        })
    }

    /// Applies the outcome of a search started with [`Self::begin_search`].
    ///
    /// Returns `false` when the outcome was discarded because the ticket is
    /// stale or the view is already destroyed.
    pub fn complete_search(&mut self, ticket: &SearchTicket, outcome: AppResult<SearchPage>) -> bool {
        if self.state == ViewState::Destroyed {
            tracing::debug!(search_id = %ticket.search_id, "Search finished after teardown, ignoring");
            return false;
        }

        if ticket.generation != self.generation {
            tracing::debug!(
                search_id = %ticket.search_id,
                query = %ticket.query,
                "Stale search result, ignoring"
            );
            return false;
        }

        self.services.activity.loader(false);
        self.clear_rendered();

        match outcome {
            Ok(page) if page.is_empty() => self.show_empty(),
            Ok(page) => self.build_list(page.results),
            Err(AppError::Cancelled) => {
                tracing::debug!(search_id = %ticket.search_id, "Search cancelled");
                self.show_empty();
            }
            Err(e) => {
                tracing::warn!(
                    search_id = %ticket.search_id,
                    query = %ticket.query,
                    error = %e,
                    "Search failed"
                );
                self.services
                    .notifier
                    .show(&format!("{}{}", ERROR_PREFIX, e.user_message()));
                self.render_placeholder();
                self.state = ViewState::ErrorShown;
            }
        }

        true
    }

    fn build_list(&mut self, results: Vec<SearchResult>) {
        for item in &results {
            let card = self.services.templates.render(CARD_TEMPLATE, &card_fields(item));
            self.scroll.append(card.id());
            self.cards.push(card);
        }

        if !self.scroll_attached {
            self.container.append(self.scroll.id());
            self.scroll_attached = true;
        }
        self.scroll.update();
        self.services.controller.enable(CONTENT_CONTROLLER);

        tracing::debug!(cards = self.cards.len(), "Result list rendered");
        self.results = results;
        self.state = ViewState::ListShown;
    }

    fn show_empty(&mut self) {
        self.render_placeholder();
        self.state = ViewState::Empty;
    }

    fn render_placeholder(&mut self) {
        let empty = self
            .services
            .templates
            .render(EMPTY_TEMPLATE, &TemplateFields::new());
        self.container.append(empty.id());
        self.placeholder = Some(empty);
    }

    /// Disposes cards and placeholder left over from a previous search
    fn clear_rendered(&mut self) {
        for mut card in self.cards.drain(..) {
            card.destroy();
        }
        if let Some(mut placeholder) = self.placeholder.take() {
            let placeholder_id = placeholder.id();
            self.container.children.retain(|id| *id != placeholder_id);
            placeholder.destroy();
        }
        self.results.clear();
    }

    fn open_movie(&self, item: &SearchResult) {
        let url = self.provider.resolve_url(&item.url);
        tracing::info!(url = %url, title = %item.title, "Opening item");

        self.services.activity.push(ActivityDescriptor {
            url: Some(url),
            title: item.title.clone(),
            component: BROWSER_COMPONENT.to_string(),
            poster: Some(item.poster.clone()),
            ..Default::default()
        });
    }
}

fn card_fields(item: &SearchResult) -> TemplateFields {
    TemplateFields::from([
        ("title".to_string(), item.title.clone()),
        ("release_date".to_string(), item.year.clone()),
        ("poster_path".to_string(), item.poster.clone()),
    ])
}

#[async_trait::async_trait]
impl Component for SearchView {
    async fn create(&mut self) {
        tracing::info!(query = %self.query, "Creating search view");
        let query = self.query.clone();
        self.search(query).await;
    }

    fn render(&mut self) -> &Container {
        &self.container
    }

    fn select(&mut self, index: usize) {
        if self.state != ViewState::ListShown {
            return;
        }
        match self.results.get(index) {
            Some(item) => self.open_movie(item),
            None => tracing::warn!(index, results = self.results.len(), "Selected card out of range"),
        }
    }

    fn pause(&mut self) {}

    fn resume(&mut self) {}

    fn back(&mut self) {
        self.services.activity.backward();
    }

    fn destroy(&mut self) {
        if self.state == ViewState::Destroyed {
            return;
        }

        // A search may still be pending; its outcome is dropped once Destroyed.
        if self.state == ViewState::Loading {
            self.services.activity.loader(false);
        }

        self.network.clear();
        self.scroll.destroy();
        self.clear_rendered();
        self.container.children.clear();
        self.state = ViewState::Destroyed;

        tracing::debug!("Search view destroyed");
    }
}
