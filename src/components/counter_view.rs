//! Counter View Component
//!
//! Self-incrementing counter whose label fades in as it grows.

use futures::StreamExt;
use gloo_timers::future::{IntervalStream, TimeoutFuture};
use leptos::prelude::*;
use leptos_task_scope::use_task_scope;

use crate::counter::{CounterState, MathRandom, START_DELAY_MS, TICK_PERIOD_MS};

/// Animated counter, routed at `/`
#[component]
pub fn CounterView() -> impl IntoView {
    let (state, set_state) = signal(CounterState::new());

    // Ticker lives as long as the view; teardown aborts it
    let scope = use_task_scope();
    scope.spawn(async move {
        TimeoutFuture::new(START_DELAY_MS).await;
        let mut ticks = IntervalStream::new(TICK_PERIOD_MS);
        let mut source = MathRandom;
        while ticks.next().await.is_some() {
            let Some(value) = set_state.try_update(|s| s.tick(&mut source)) else {
                break;
            };
            log::info!("[COUNTER] {}", value);
        }
    });

    view! {
        <section class="counter-view">
            <h2>"Counter"</h2>
            <span
                class="counter-label"
                style:color=move || state.with(|s| s.label_color())
            >
                {move || state.with(|s| s.value())}
            </span>
        </section>
    }
}
