//! Quotes View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! One store per Quotes View instance, provided to its children via context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::QuotesError;
use crate::models::{Quote, SearchParams, DEFAULT_CATEGORY, DEFAULT_QUANTITY};

/// Quotes view state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct QuotesState {
    /// Tag filter sent as `tags`
    pub category: String,
    /// Requested result count sent as `limit`
    pub quantity: i32,
    /// Results of the last successful search
    pub quotes: Vec<Quote>,
    /// Text of the last search failure, empty when none
    pub error_message: String,
    pub show_author_and_tags: bool,
}

impl Default for QuotesState {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            quantity: DEFAULT_QUANTITY,
            quotes: Vec::new(),
            error_message: String::new(),
            show_author_and_tags: true,
        }
    }
}

impl QuotesState {
    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            category: self.category.clone(),
            quantity: self.quantity,
        }
    }

    /// Replace the list on success; on failure keep it and record the error
    pub fn apply_search_result(&mut self, result: Result<Vec<Quote>, QuotesError>) {
        match result {
            Ok(quotes) => {
                self.quotes = quotes;
                self.error_message.clear();
            }
            Err(e) => self.error_message = e.to_string(),
        }
    }
}

/// Type alias for the store
pub type QuotesStore = Store<QuotesState>;

/// Get the quotes store from context
pub fn use_quotes_store() -> QuotesStore {
    expect_context::<QuotesStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Snapshot of the current search inputs
pub fn store_search_params(store: &QuotesStore) -> SearchParams {
    store.with_untracked(|state| state.search_params())
}

/// Apply a finished search to the store
pub fn store_apply_search_result(store: &QuotesStore, result: Result<Vec<Quote>, QuotesError>) {
    store.update(|state| state.apply_search_result(result));
}
