use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::analytics::Event;

use super::nav::scroll_to_top;
use super::use_analytics;

const VISIBLE_AFTER_PX: f64 = 300.0;

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let analytics = use_analytics();
    let (_, scroll_y) = use_window_scroll();
    let visible = move || scroll_y.get() > VISIBLE_AFTER_PX;

    view! {
        <button
            class="scroll-top fixed bottom-8 right-8 w-12 h-12 rounded-full z-50 transition-all duration-300"
            class:scroll-top-visible=visible
            aria-label="Scroll to top"
            title="Scroll to top"
            on:click=move |_| {
                analytics.record(Event::ScrollToTopClick);
                scroll_to_top();
            }
        >
            "↑"
        </button>
    }
}
