//! Drag-and-drop zone wrapping the hidden file input.

use crate::browser::{self, WebImage};
use crate::state::AppState;
use dioxus::prelude::*;

/// DOM id of the file input.
pub const IMAGE_INPUT_ID: &str = "image";

#[derive(Props, Clone, PartialEq)]
pub struct DropZoneProps {
    /// Called with the first dropped file, or `None` for an empty drop
    pub on_drop: EventHandler<Option<WebImage>>,
    /// Called when a file is chosen through the picker
    pub on_pick: EventHandler<WebImage>,
}

/// Clicking opens the picker; dragging over highlights the zone.
#[component]
pub fn DropZone(props: DropZoneProps) -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.drag_over)();
    let dropped = props.on_drop;
    let picked = props.on_pick;

    let on_drag_enter = move |evt: Event<DragData>| {
        evt.prevent_default();
        evt.stop_propagation();
        state.drag_over.set(true);
    };
    let on_drag_over = move |evt: Event<DragData>| {
        evt.prevent_default();
        evt.stop_propagation();
        state.drag_over.set(true);
    };
    let on_drag_leave = move |evt: Event<DragData>| {
        evt.prevent_default();
        evt.stop_propagation();
        state.drag_over.set(false);
    };
    let on_drop = move |evt: Event<DragData>| {
        evt.prevent_default();
        evt.stop_propagation();
        state.drag_over.set(false);
        dropped.call(browser::dropped_file(&evt));
    };
    let on_change = move |_evt: Event<FormData>| {
        if let Some(image) = browser::selected_file(IMAGE_INPUT_ID) {
            picked.call(image);
        }
        browser::reset_file_input(IMAGE_INPUT_ID);
    };

    let class = if active { "drop-zone drag-over" } else { "drop-zone" };
    let style = format!(
        "padding: 32px; text-align: center; cursor: pointer; border: 2px dashed {}; border-radius: 8px; background: {};",
        if active { "#2e7d32" } else { "#9e9e9e" },
        if active { "#e8f5e9" } else { "#fafafa" },
    );

    rsx! {
        div {
            id: "drop-zone",
            class: "{class}",
            style: "{style}",
            onclick: move |_| browser::open_file_picker(IMAGE_INPUT_ID),
            ondragenter: on_drag_enter,
            ondragover: on_drag_over,
            ondragleave: on_drag_leave,
            ondrop: on_drop,
            p {
                style: "margin: 0; color: #555;",
                "Drag & drop a leaf image here, or click to choose one"
            }
            input {
                id: IMAGE_INPUT_ID,
                r#type: "file",
                accept: "image/*",
                style: "display: none;",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                onchange: on_change,
            }
        }
    }
}
