//! Plugin entry point: registers the search component with the host and
//! hooks the detail view and settings panel.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::{
    config::Config,
    error::AppResult,
    host::{Component, ComponentFactory, HostApi, HostEvent, HostEventKind, Subscription},
};

pub mod buttons;
pub mod view;

pub use view::{SearchTicket, SearchView, ViewState};

/// Component name the plugin registers under
pub const PLUGIN_NAME: &str = "RezkaBalancer";

/// Init-once token.
///
/// The host may load the plugin script more than once; only the first
/// [`InitGuard::acquire`] succeeds.
#[derive(Debug, Default)]
pub struct InitGuard(AtomicBool);

impl InitGuard {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn acquire(&self) -> bool {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    fn release(&self) {
        self.0.store(false, Ordering::Release);
    }
}

static PLUGIN_GUARD: InitGuard = InitGuard::new();

/// Event subscriptions made at init.
///
/// They live as long as the host process; dropping the handle does not
/// unsubscribe anything.
#[derive(Debug)]
pub struct PluginHandle {
    pub subscriptions: Vec<Subscription>,
}

pub struct Plugin;

impl Plugin {
    /// Registers the plugin with the host, once per process.
    ///
    /// Returns `Ok(None)` when the plugin was already initialised.
    pub fn init(host: &HostApi, config: Config) -> AppResult<Option<PluginHandle>> {
        Self::init_with_guard(&PLUGIN_GUARD, host, config)
    }

    pub fn init_with_guard(
        guard: &InitGuard,
        host: &HostApi,
        config: Config,
    ) -> AppResult<Option<PluginHandle>> {
        if !guard.acquire() {
            tracing::debug!(plugin = PLUGIN_NAME, "Already initialised, skipping");
            return Ok(None);
        }

        tracing::info!(plugin = PLUGIN_NAME, base_url = %config.base_url, "init");

        let services = host.services.clone();
        let base_url = config.base_url;
        let factory: ComponentFactory = Arc::new(move |context| {
            Box::new(SearchView::new(context, services.clone(), &base_url)) as Box<dyn Component>
        });

        if let Err(e) = host.registry.register(PLUGIN_NAME, factory) {
            tracing::error!(plugin = PLUGIN_NAME, error = %e, "Component registration failed");
            guard.release();
            return Err(e);
        }

        let subscriptions = vec![
            host.events.follow(
                HostEventKind::Full,
                Box::new(|event: &HostEvent| {
                    if let HostEvent::Full(full) = event {
                        buttons::on_detail_view(full);
                    }
                }),
            ),
            host.events.follow(
                HostEventKind::SettingsOpen,
                Box::new(|event: &HostEvent| {
                    if let HostEvent::SettingsOpen(settings) = event {
                        buttons::on_settings_open(settings);
                    }
                }),
            ),
        ];

        tracing::info!(plugin = PLUGIN_NAME, "registered OK");

        Ok(Some(PluginHandle { subscriptions }))
    }
}
