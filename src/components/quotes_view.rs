//! Quotes View Component
//!
//! Searches the remote quotes service and lists the results.

use leptos::prelude::*;
use leptos_task_scope::use_task_scope;
use reactive_stores::Store;

use crate::api;
use crate::components::{QuoteList, SearchForm};
use crate::context::use_app_context;
use crate::store::{store_apply_search_result, store_search_params, QuotesState, QuotesStateStoreFields};

/// Quote search, routed at `/quotes`
#[component]
pub fn QuotesView() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(QuotesState::default());
    provide_context(store);

    // In-flight searches are aborted when the view is torn down
    let scope = use_task_scope();

    // Seed the author/tags toggle once the config arrives
    Effect::new(move |_| {
        if let Some(show) = ctx.config.with(|c| c.show_author_and_tags()) {
            store.show_author_and_tags().set(show);
        }
    });

    // A search issued before the config loads targets an empty base URL
    let on_search = Callback::new(move |_: ()| {
        let base = ctx.quotes_url();
        let params = store_search_params(&store);
        scope.spawn(async move {
            let result = api::search_quotes(&base, &params).await;
            match &result {
                Ok(quotes) => log::info!("[QUOTES] {} results for '{}'", quotes.len(), params.category),
                Err(e) => log::warn!("[QUOTES] Search failed: {}", e),
            }
            store_apply_search_result(&store, result);
        });
    });

    view! {
        <section class="quotes-view">
            <h2>"Quotes"</h2>
            <SearchForm on_search=on_search />
            <Show when=move || !store.error_message().get().is_empty()>
                <p class="error-message">{move || store.error_message().get()}</p>
            </Show>
            <QuoteList />
        </section>
    }
}
