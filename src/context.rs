//! Application Context
//!
//! Shared state provided via Leptos Context API.
//! Holds the config resource, loaded once for the whole app.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, QuotesError};
use crate::models::ConfigObject;

/// Lifecycle of the config resource
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfigState {
    #[default]
    Unloaded,
    Loading,
    Loaded(ConfigObject),
    Failed(QuotesError),
}

impl ConfigState {
    /// Quotes service base URL, empty until the config has loaded
    pub fn quotes_url(&self) -> &str {
        match self {
            ConfigState::Loaded(config) => &config.quotes_url,
            _ => "",
        }
    }

    pub fn show_author_and_tags(&self) -> Option<bool> {
        match self {
            ConfigState::Loaded(config) => config.show_author_and_tags,
            _ => None,
        }
    }

    pub fn from_result(result: Result<ConfigObject, QuotesError>) -> Self {
        match result {
            Ok(config) => ConfigState::Loaded(config),
            Err(e) => ConfigState::Failed(e),
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Config resource - read
    pub config: ReadSignal<ConfigState>,
    /// Config resource - write, only `init` touches it
    set_config: WriteSignal<ConfigState>,
}

impl AppContext {
    pub fn new(config: (ReadSignal<ConfigState>, WriteSignal<ConfigState>)) -> Self {
        Self {
            config: config.0,
            set_config: config.1,
        }
    }

    /// Start loading the config resource. Later calls are no-ops.
    ///
    /// A failed read is logged and leaves the base URL empty.
    pub fn init(&self) {
        if self.config.get_untracked() != ConfigState::Unloaded {
            return;
        }
        self.set_config.set(ConfigState::Loading);

        let set_config = self.set_config;
        spawn_local(async move {
            let result = api::load_config().await;
            match &result {
                Ok(config) => log::info!("[CONFIG] Quotes service at {}", config.quotes_url),
                Err(e) => log::warn!("[CONFIG] Load failed: {}", e),
            }
            set_config.set(ConfigState::from_result(result));
        });
    }

    /// Current quotes service base URL (untracked)
    pub fn quotes_url(&self) -> String {
        self.config.with_untracked(|c| c.quotes_url().to_string())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
