//! Quote List Component
//!
//! Renders the results of the last successful search.

use leptos::prelude::*;

use crate::models::Quote;
use crate::store::{use_quotes_store, QuotesStateStoreFields};

#[component]
pub fn QuoteList() -> impl IntoView {
    let store = use_quotes_store();

    view! {
        <ul class="quote-list">
            <For
                each=move || store.quotes().get().into_iter().enumerate()
                key=|(index, quote)| (*index, quote.content.clone())
                children=move |(_, quote)| view! { <QuoteCard quote=quote /> }
            />
        </ul>
    }
}

/// Single quote, with author and tags when enabled
#[component]
fn QuoteCard(quote: Quote) -> impl IntoView {
    let store = use_quotes_store();
    let Quote { author, content, tags, .. } = quote;

    view! {
        <li class="quote-card">
            <blockquote class="quote-content">{content}</blockquote>
            <Show when=move || store.show_author_and_tags().get()>
                <p class="quote-author">{author.clone()}</p>
                <ul class="quote-tags">
                    {tags.iter().map(|tag| view! { <li class="quote-tag">{tag.clone()}</li> }).collect_view()}
                </ul>
            </Show>
        </li>
    }
}
