//! Reusable Dioxus RSX components for the upload page.

mod advice_card;
mod disease_card;
mod drop_zone;
mod loading_indicator;
mod preview_card;
mod weather_card;

pub use advice_card::AdviceCard;
pub use disease_card::DiseaseCard;
pub use drop_zone::DropZone;
pub use loading_indicator::LoadingIndicator;
pub use preview_card::PreviewCard;
pub use weather_card::WeatherCard;

/// Inline style shared by the result cards.
pub(crate) const CARD_STYLE: &str = "padding: 12px 16px; margin: 12px 0; background: #fff; border: 1px solid #e0e0e0; border-radius: 6px;";

/// `class` and `style` for a section that is shown or hidden.
pub(crate) fn section_attrs(visible: bool) -> (&'static str, String) {
    if visible {
        ("card", CARD_STYLE.to_string())
    } else {
        ("card hidden", format!("{} display: none;", CARD_STYLE))
    }
}
