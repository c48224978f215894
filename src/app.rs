//! Quote Board App
//!
//! Root component: config context, navigation and the two routes.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{CounterView, NavBar, QuotesView};
use crate::context::{AppContext, ConfigState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (config, set_config) = signal(ConfigState::default());

    // Provide context to all children
    let ctx = AppContext::new((config, set_config));
    provide_context(ctx);

    // Load config once on mount
    Effect::new(move |_| ctx.init());

    view! {
        <Router>
            <NavBar />
            <main class="main-content">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=CounterView />
                    <Route path=path!("/quotes") view=QuotesView />
                </Routes>
            </main>
        </Router>
    }
}
