//! Search Form Component
//!
//! Category and quantity inputs plus the author/tags toggle.

use leptos::prelude::*;

use crate::store::{use_quotes_store, QuotesStateStoreFields};

/// Form bound to the quotes store. Inputs are not validated.
#[component]
pub fn SearchForm(#[prop(into)] on_search: Callback<()>) -> impl IntoView {
    let store = use_quotes_store();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(());
    };

    view! {
        <form class="search-form" on:submit=submit>
            <label class="search-field">
                "Category"
                <input
                    type="text"
                    prop:value=move || store.category().get()
                    on:input=move |ev| store.category().set(event_target_value(&ev))
                />
            </label>
            <label class="search-field">
                "Quantity"
                <input
                    type="number"
                    prop:value=move || store.quantity().get().to_string()
                    on:input=move |ev| {
                        // keep the last number while the field is mid-edit
                        if let Ok(quantity) = event_target_value(&ev).trim().parse::<i32>() {
                            store.quantity().set(quantity);
                        }
                    }
                />
            </label>
            <label class="search-toggle">
                <input
                    type="checkbox"
                    prop:checked=move || store.show_author_and_tags().get()
                    on:change=move |ev| store.show_author_and_tags().set(event_target_checked(&ev))
                />
                "Show author and tags"
            </label>
            <button type="submit">"Search"</button>
        </form>
    }
}
