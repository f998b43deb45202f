//! JSON shapes returned by `POST /api/advice/`.
//!
//! Every top-level field is optional; an absent field means the matching
//! section is not rendered. Unknown fields are ignored.

use crate::error::TransportError;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Response body of the advice endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AdviceResponse {
    #[serde(default)]
    pub weather: Option<WeatherReport>,
    #[serde(default)]
    pub disease: Option<DiseaseReport>,
    #[serde(default)]
    pub crop: Option<String>,
    #[serde(default)]
    pub advice: Option<AdviceText>,
    /// Non-fatal partial-failure notice
    #[serde(default)]
    pub warning: Option<String>,
    /// Set by the backend when the whole request was rejected
    #[serde(default)]
    pub error: Option<String>,
}

impl AdviceResponse {
    /// Parse a response body. Anything that is not a JSON object of the
    /// expected shape is a parse error.
    pub fn from_json(body: &str) -> Result<Self, TransportError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Weather block, passed through from the weather provider.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WeatherReport {
    #[serde(default)]
    pub main: Option<WeatherMain>,
    #[serde(default)]
    pub weather: Option<Vec<WeatherCondition>>,
    #[serde(default)]
    pub wind: Option<Wind>,
    /// Provider failure reported in place of data
    #[serde(default)]
    pub error: Option<String>,
}

impl WeatherReport {
    /// True when the block carries nothing but an error.
    pub fn is_error_only(&self) -> bool {
        self.error.is_some() && self.main.is_none() && self.conditions().is_empty()
    }

    pub fn temperature(&self) -> Option<f64> {
        self.main.as_ref().and_then(|m| m.temp)
    }

    pub fn humidity(&self) -> Option<f64> {
        self.main.as_ref().and_then(|m| m.humidity)
    }

    pub fn pressure(&self) -> Option<f64> {
        self.main.as_ref().and_then(|m| m.pressure)
    }

    pub fn wind_speed(&self) -> Option<f64> {
        self.wind.as_ref().and_then(|w| w.speed)
    }

    pub fn conditions(&self) -> &[WeatherCondition] {
        self.weather.as_deref().unwrap_or(&[])
    }

    /// Description of the first reported condition.
    pub fn description(&self) -> Option<&str> {
        self.conditions()
            .first()
            .and_then(|c| c.description.as_deref())
            .filter(|d| !d.is_empty())
    }

    /// Short condition name ("Rain", "Clear") of the first reported condition.
    pub fn condition(&self) -> Option<&str> {
        self.conditions()
            .first()
            .and_then(|c| c.main.as_deref().or(c.description.as_deref()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WeatherMain {
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub pressure: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WeatherCondition {
    #[serde(default)]
    pub main: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Wind {
    #[serde(default)]
    pub speed: Option<f64>,
}

/// Disease classification block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DiseaseReport {
    #[serde(default)]
    pub predicted_label: Option<String>,
    /// Confidence of `predicted_label`, 0-1
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub probabilities: Option<Probabilities>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Label to probability mapping, kept in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Probabilities(pub Vec<(String, f64)>);

impl Probabilities {
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(label, p)| (label.as_str(), *p))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Probabilities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ProbabilitiesVisitor;

        impl<'de> Visitor<'de> for ProbabilitiesVisitor {
            type Value = Probabilities;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of label to probability")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((label, value)) = map.next_entry::<String, serde_json::Value>()? {
                    // Non-numeric entries cannot be drawn as a bar
                    if let Some(p) = value.as_f64() {
                        entries.push((label, p));
                    }
                }
                Ok(Probabilities(entries))
            }
        }

        deserializer.deserialize_map(ProbabilitiesVisitor)
    }
}

/// Advisory text: a single string or a list of recommendations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdviceText {
    Single(String),
    Lines(Vec<String>),
}

impl AdviceText {
    /// The text to display, or `None` when there is nothing to show.
    pub fn to_text(&self) -> Option<String> {
        let text = match self {
            AdviceText::Single(s) => s.clone(),
            AdviceText::Lines(lines) => lines
                .iter()
                .map(|l| l.trim())
                .filter(|l| !l.is_empty())
                .collect::<Vec<_>>()
                .join("\n"),
        };
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
