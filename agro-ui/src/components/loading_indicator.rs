//! "Analyzing..." indicator shown while a request is in flight.

use crate::state::AppState;
use agro_advice::dots::ANALYZING_LABEL;
use dioxus::prelude::*;

/// Loading text with animated trailing dots.
#[component]
pub fn LoadingIndicator() -> Element {
    let state = use_context::<AppState>();
    let loading = (state.loading)();
    let dots = (state.dots)();
    let (class, style) = if loading {
        ("loading", "padding: 16px; text-align: center; color: #666;")
    } else {
        ("loading hidden", "display: none;")
    };

    rsx! {
        div {
            id: "loading",
            class: "{class}",
            style: "{style}",
            "{ANALYZING_LABEL}"
            span { class: "dots", "{dots}" }
        }
    }
}
