//! Weather section of the results.

use super::section_attrs;
use agro_advice::view::WeatherView;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct WeatherCardProps {
    pub weather: Option<WeatherView>,
}

/// Current conditions in the submitted city. Hidden when the response had no weather.
#[component]
pub fn WeatherCard(props: WeatherCardProps) -> Element {
    let (class, style) = section_attrs(props.weather.is_some());

    rsx! {
        div {
            id: "weather-card",
            class: "{class}",
            style: "{style}",
            h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Weather" }
            div {
                id: "weather-content",
                if let Some(weather) = props.weather {
                    b { "City:" }
                    " {weather.city}"
                    br {}
                    b { "Temperature:" }
                    " {weather.temperature}"
                    br {}
                    b { "Condition:" }
                    " {weather.condition}"
                    br {}
                    b { "Humidity:" }
                    " {weather.humidity}"
                }
            }
        }
    }
}
