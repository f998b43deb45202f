//! Preview of the selected image.

use super::section_attrs;
use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the selected image from its object URL. Hidden until a file is chosen.
#[component]
pub fn PreviewCard() -> Element {
    let state = use_context::<AppState>();
    let url = state.selection.read().preview_url().map(str::to_string);
    let (class, style) = section_attrs(url.is_some());

    rsx! {
        div {
            id: "preview-card",
            class: "{class}",
            style: "{style}",
            img {
                id: "preview",
                alt: "Selected leaf",
                src: url.unwrap_or_default(),
                style: "max-width: 100%; max-height: 280px; border-radius: 4px;",
            }
        }
    }
}
