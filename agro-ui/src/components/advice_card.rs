//! Advisory text section.

use super::section_attrs;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct AdviceCardProps {
    pub advice: Option<String>,
}

/// Recommendations returned by the backend, one per line.
#[component]
pub fn AdviceCard(props: AdviceCardProps) -> Element {
    let (class, style) = section_attrs(props.advice.is_some());
    let text = props.advice.unwrap_or_default();

    rsx! {
        div {
            id: "advice-card",
            class: "{class}",
            style: "{style}",
            h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Advice" }
            p {
                id: "advice-text",
                style: "margin: 0; white-space: pre-line;",
                "{text}"
            }
        }
    }
}
