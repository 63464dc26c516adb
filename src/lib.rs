//! Search integration for the rezka-ua.pub streaming site, packaged as a
//! media-browser host plugin.

pub mod config;
pub mod error;
pub mod host;
pub mod models;
pub mod plugin;
pub mod services;
pub mod telemetry;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use plugin::{InitGuard, Plugin, PluginHandle, SearchView, ViewState, PLUGIN_NAME};
