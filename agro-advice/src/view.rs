//! Per-render view state built from one advice response.
//!
//! `ViewState` is the only input to rendering: a section is visible exactly
//! when its field is `Some`. Building it needs no document, so the render
//! rules are tested here rather than in the browser.

use crate::response::{AdviceResponse, DiseaseReport, WeatherReport};
use agro_utils::format::{self, NOT_AVAILABLE};

/// Fallback for a missing crop or disease label.
pub const UNKNOWN: &str = "Unknown";

/// Everything the result sections show for one response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub weather: Option<WeatherView>,
    pub disease: Option<DiseaseView>,
    pub advice: Option<String>,
    /// Non-fatal notices, surfaced after the sections are shown
    pub alerts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub city: String,
    /// e.g. `"28 °C"`
    pub temperature: String,
    pub condition: String,
    /// e.g. `"60%"`
    pub humidity: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiseaseView {
    pub crop: String,
    pub label: String,
    /// e.g. `"87.00%"`
    pub confidence: String,
    pub bars: Vec<ProbabilityBar>,
}

/// One label's share of the classification, drawn as a proportional bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityBar {
    pub label: String,
    /// Share of the classification, 0-1
    pub fraction: f64,
    /// Bar width and caption, e.g. `"87.0%"`
    pub width: String,
}

impl ViewState {
    /// Build the view for `response`, submitted for `city`.
    pub fn from_response(response: &AdviceResponse, city: &str) -> Self {
        let mut alerts = Vec::new();

        let weather = response.weather.as_ref().and_then(|report| {
            if report.is_error_only() {
                if let Some(err) = &report.error {
                    alerts.push(format!("Weather unavailable: {}", err));
                }
                return None;
            }
            Some(WeatherView::new(report, city))
        });

        let disease = response.disease.as_ref().map(|report| {
            if let Some(err) = &report.error {
                alerts.push(format!("Disease prediction failed: {}", err));
            }
            DiseaseView::new(report, response.crop.as_deref())
        });

        let advice = response.advice.as_ref().and_then(|a| a.to_text());

        if let Some(err) = &response.error {
            alerts.push(format!("Request rejected: {}", err));
        }
        if let Some(warning) = &response.warning {
            alerts.push(format!("Some modules failed: {}", warning));
        }

        Self {
            weather,
            disease,
            advice,
            alerts,
        }
    }

    /// True when no result section is visible.
    pub fn is_empty(&self) -> bool {
        self.weather.is_none() && self.disease.is_none() && self.advice.is_none()
    }
}

impl WeatherView {
    fn new(report: &WeatherReport, city: &str) -> Self {
        Self {
            city: city.to_string(),
            temperature: format::with_unit(report.temperature(), " °C"),
            condition: report.description().unwrap_or(NOT_AVAILABLE).to_string(),
            humidity: format::with_unit(report.humidity(), "%"),
        }
    }
}

impl DiseaseView {
    fn new(report: &DiseaseReport, crop: Option<&str>) -> Self {
        let bars = report
            .probabilities
            .iter()
            .flat_map(|p| p.iter())
            .map(|(label, p)| ProbabilityBar {
                label: label.to_string(),
                fraction: p,
                width: format::percent(p, 1),
            })
            .collect();
        Self {
            crop: non_empty(crop).unwrap_or(UNKNOWN).to_string(),
            label: non_empty(report.predicted_label.as_deref())
                .unwrap_or(UNKNOWN)
                .to_string(),
            confidence: report
                .confidence
                .filter(|c| c.is_finite())
                .map(|c| format::percent(c, 2))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            bars,
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}
