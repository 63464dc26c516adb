//! Capabilities the media-browser host provides to the plugin.
//!
//! The plugin never renders or navigates on its own; every side effect goes
//! through one of these traits. Hosts implement them over their own UI
//! runtime, tests implement them with mocks.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    error::AppResult,
    models::{ActivityDescriptor, ButtonSpec, ComponentContext, Movie, ScrollOptions, TemplateFields},
};

pub mod channel;

pub use channel::{ReqwestChannel, ReqwestChannelFactory};

/// Host-assigned identifier of a rendered node
pub type NodeId = u64;

/// A node produced by the host's template engine (a card, a placeholder, ...)
#[cfg_attr(test, mockall::automock)]
pub trait Node: Send {
    fn id(&self) -> NodeId;

    /// Detaches the node and releases its handlers
    fn destroy(&mut self);
}

#[cfg_attr(test, mockall::automock)]
pub trait Templates: Send + Sync {
    /// Builds a node from the named template and field mapping
    fn render(&self, template: &str, fields: &TemplateFields) -> Box<dyn Node>;
}

/// Scrollable list widget
#[cfg_attr(test, mockall::automock)]
pub trait ScrollSurface: Send {
    fn id(&self) -> NodeId;
    fn append(&mut self, node: NodeId);
    fn update(&mut self);
    fn destroy(&mut self);
}

#[cfg_attr(test, mockall::automock)]
pub trait ScrollFactory: Send + Sync {
    fn create(&self, options: ScrollOptions) -> Box<dyn ScrollSurface>;
}

/// Navigation stack of full-screen activities
#[cfg_attr(test, mockall::automock)]
pub trait ActivityStack: Send + Sync {
    fn push(&self, descriptor: ActivityDescriptor);
    fn backward(&self);
    /// Shows or hides the loading indicator of the current activity
    fn loader(&self, visible: bool);
}

/// Remote-control focus controller
#[cfg_attr(test, mockall::automock)]
pub trait Controller: Send + Sync {
    fn enable(&self, name: &str);
}

/// Transient toast notifications
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn show(&self, message: &str);
}

/// Response body type expected from a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Text,
}

/// Request handed to an [`HttpChannel`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    pub url: String,
    #[serde(rename = "dataType")]
    pub data_type: DataType,
}

impl RequestDescriptor {
    pub fn text(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            data_type: DataType::Text,
        }
    }
}

/// Outbound request channel owned by one component.
///
/// The host's own helper also works around cross-origin restrictions, which
/// is why requests go through it rather than straight to an HTTP client.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait HttpChannel: Send + Sync {
    /// Performs a single GET and returns the body.
    ///
    /// Non-2xx statuses and transport failures are errors; nothing is retried.
    async fn get(&self, request: &RequestDescriptor) -> AppResult<String>;

    /// Abandons every request in flight on this channel
    fn clear(&self);
}

#[cfg_attr(test, mockall::automock)]
pub trait HttpChannelFactory: Send + Sync {
    fn channel(&self) -> Arc<dyn HttpChannel>;
}

/// Visible surface of a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub class_name: &'static str,
    pub children: Vec<NodeId>,
}

impl Container {
    pub fn new(class_name: &'static str) -> Self {
        Self {
            class_name,
            children: Vec::new(),
        }
    }

    pub fn append(&mut self, node: NodeId) {
        self.children.push(node);
    }
}

/// Lifecycle the host drives for every registered component
#[async_trait::async_trait]
pub trait Component: Send {
    async fn create(&mut self);
    fn render(&mut self) -> &Container;
    /// Called when the card at `index` is activated
    fn select(&mut self, index: usize);
    fn pause(&mut self);
    fn resume(&mut self);
    fn back(&mut self);
    fn destroy(&mut self);
}

pub type ComponentFactory = Arc<dyn Fn(ComponentContext) -> Box<dyn Component> + Send + Sync>;

pub trait ComponentRegistry: Send + Sync {
    fn register(&self, name: &str, factory: ComponentFactory) -> AppResult<()>;
}

/// Host screens whose controls the plugin can extend
pub trait ButtonContainer: Send + Sync {
    fn append(&self, button: ButtonSpec);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEventKind {
    /// Detail view lifecycle (`full`)
    Full,
    /// Settings panel opened
    SettingsOpen,
}

/// Detail view lifecycle event; `kind` is `"complite"` once the view is built
#[derive(Clone)]
pub struct FullEvent {
    pub kind: String,
    pub movie: Option<Movie>,
    pub buttons: Arc<dyn ButtonContainer>,
}

#[derive(Clone)]
pub struct SettingsEvent {
    /// Name of the opened panel
    pub name: String,
    pub body: Arc<dyn ButtonContainer>,
}

#[derive(Clone)]
pub enum HostEvent {
    Full(FullEvent),
    SettingsOpen(SettingsEvent),
}

pub type EventHandler = Box<dyn Fn(&HostEvent) + Send + Sync>;

/// Handle for a handler registered with [`EventBus::follow`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub id: u64,
    pub event: HostEventKind,
}

pub trait EventBus: Send + Sync {
    fn follow(&self, event: HostEventKind, handler: EventHandler) -> Subscription;
}

/// Capabilities a search component needs for its whole lifetime
#[derive(Clone)]
pub struct HostServices {
    pub activity: Arc<dyn ActivityStack>,
    pub controller: Arc<dyn Controller>,
    pub notifier: Arc<dyn Notifier>,
    pub templates: Arc<dyn Templates>,
    pub scrolls: Arc<dyn ScrollFactory>,
    pub http: Arc<dyn HttpChannelFactory>,
}

/// Everything the host exposes to the plugin at init time
#[derive(Clone)]
pub struct HostApi {
    pub registry: Arc<dyn ComponentRegistry>,
    pub events: Arc<dyn EventBus>,
    pub services: HostServices,
}
