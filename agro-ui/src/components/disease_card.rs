//! Disease diagnosis section with probability bars.

use super::section_attrs;
use agro_advice::view::{DiseaseView, ProbabilityBar};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DiseaseCardProps {
    pub disease: Option<DiseaseView>,
}

/// Predicted crop and disease, confidence, and one bar per class.
#[component]
pub fn DiseaseCard(props: DiseaseCardProps) -> Element {
    let (class, style) = section_attrs(props.disease.is_some());
    let disease = props.disease.unwrap_or_else(|| DiseaseView {
        crop: String::new(),
        label: String::new(),
        confidence: String::new(),
        bars: Vec::new(),
    });

    rsx! {
        div {
            id: "disease-card",
            class: "{class}",
            style: "{style}",
            h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Diagnosis" }
            p {
                style: "margin: 4px 0;",
                b { "Crop: " }
                span { id: "predicted_crop", "{disease.crop}" }
            }
            p {
                style: "margin: 4px 0;",
                b { "Disease: " }
                span { id: "predicted_label", "{disease.label}" }
            }
            p {
                style: "margin: 4px 0;",
                b { "Confidence: " }
                span { id: "confidence", "{disease.confidence}" }
            }
            div {
                id: "probabilities",
                for bar in disease.bars.iter() {
                    ProbabilityBarRow { key: "{bar.label}", bar: bar.clone() }
                }
            }
        }
    }
}

/// One proportional bar, captioned with its percentage and labelled below.
#[component]
fn ProbabilityBarRow(bar: ProbabilityBar) -> Element {
    rsx! {
        div {
            class: "prob-bar",
            style: "margin: 6px 0; background: #eee; border-radius: 4px;",
            div {
                class: "prob-fill",
                style: "width:{bar.width}; background: #66bb6a; color: #fff; font-size: 12px; padding: 2px 4px; border-radius: 4px; white-space: nowrap;",
                "{bar.width}"
            }
            small { "{bar.label}" }
        }
    }
}
