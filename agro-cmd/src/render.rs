//! Plain-text rendering of a `ViewState` for the terminal.

use agro_advice::view::{DiseaseView, ViewState, WeatherView};
use std::fmt::Write;

/// Width of a full probability bar, in characters.
pub const BAR_WIDTH: usize = 30;

/// Render every visible section, in page order. Hidden sections print
/// nothing; a response with no sections prints a single notice line.
pub fn render_text(view: &ViewState) -> String {
    let mut sections = Vec::new();
    if let Some(weather) = &view.weather {
        sections.push(weather_section(weather));
    }
    if let Some(disease) = &view.disease {
        sections.push(disease_section(disease));
    }
    if let Some(advice) = &view.advice {
        sections.push(format!("Advice\n{}\n", indent(advice)));
    }
    if sections.is_empty() {
        return "No results returned.\n".to_string();
    }
    sections.join("\n")
}

fn weather_section(weather: &WeatherView) -> String {
    let mut out = String::from("Weather\n");
    let _ = writeln!(out, "  City:        {}", weather.city);
    let _ = writeln!(out, "  Temperature: {}", weather.temperature);
    let _ = writeln!(out, "  Condition:   {}", weather.condition);
    let _ = writeln!(out, "  Humidity:    {}", weather.humidity);
    out
}

fn disease_section(disease: &DiseaseView) -> String {
    let mut out = String::from("Diagnosis\n");
    let _ = writeln!(out, "  Crop:        {}", disease.crop);
    let _ = writeln!(out, "  Disease:     {}", disease.label);
    let _ = writeln!(out, "  Confidence:  {}", disease.confidence);

    let label_width = disease
        .bars
        .iter()
        .map(|bar| bar.label.chars().count())
        .max()
        .unwrap_or(0);
    for bar in &disease.bars {
        let _ = writeln!(
            out,
            "  {:<width$}  {:>6}  {}",
            bar.label,
            bar.width,
            "#".repeat(bar_cells(bar.fraction)),
            width = label_width
        );
    }
    out
}

fn bar_cells(fraction: f64) -> usize {
    if !fraction.is_finite() {
        return 0;
    }
    (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
