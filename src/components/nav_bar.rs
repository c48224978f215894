//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

/// Links to the two routes
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <A href="/">"Counter"</A>
            <A href="/quotes">"Quotes"</A>
        </nav>
    }
}
