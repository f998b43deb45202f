//! Local history of weather readings returned by the advice endpoint.
//!
//! Each successful submission that carries weather can be appended to a CSV
//! file, one row per reading, so readings for a field accumulate over time.

use agro_advice::response::WeatherReport;
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Timestamp format of the `date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the weather history CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub date: String,
    pub city: String,
    pub temp: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    pub wind_speed: Option<f64>,
    pub condition: Option<String>,
}

impl WeatherRecord {
    /// Build a record from a weather block. Returns `None` for a block that
    /// only carries a provider error.
    pub fn from_report(report: &WeatherReport, city: &str, at: DateTime<Utc>) -> Option<Self> {
        if report.is_error_only() {
            return None;
        }
        Some(Self {
            date: at.format(DATE_FORMAT).to_string(),
            city: city.to_string(),
            temp: report.temperature(),
            humidity: report.humidity(),
            pressure: report.pressure(),
            wind_speed: report.wind_speed(),
            condition: report.condition().map(str::to_string),
        })
    }
}

/// Append `record` to the CSV at `path`, writing the header first when the
/// file is new or empty. Parent directories are created as needed.
pub fn append_record(path: &Path, record: &WeatherRecord) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let is_new = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(is_new)
        .from_writer(file);
    writer.serialize(record)?;
    writer.flush()?;

    info!("Logged weather for {} to {}", record.city, path.display());
    Ok(())
}

/// Read every record back from the CSV at `path`.
pub fn read_records(path: &Path) -> anyhow::Result<Vec<WeatherRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use agro_advice::AdviceResponse;
    use chrono::TimeZone;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "agro-data-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir.join("history").join("weather_data.csv")
    }

    fn report(body: &str) -> WeatherReport {
        AdviceResponse::from_json(body).unwrap().weather.unwrap()
    }

    #[test]
    fn test_record_from_report() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 6, 30, 0).unwrap();
        let weather = report(
            r#"{"weather":{"main":{"temp":21.5,"humidity":80,"pressure":1012},
                "wind":{"speed":3.1},"weather":[{"main":"Rain","description":"light rain"}]}}"#,
        );
        let record = WeatherRecord::from_report(&weather, "Bamenda", at).unwrap();
        assert_eq!(record.date, "2024-03-01 06:30:00");
        assert_eq!(record.temp, Some(21.5));
        assert_eq!(record.pressure, Some(1012.0));
        assert_eq!(record.wind_speed, Some(3.1));
        assert_eq!(record.condition.as_deref(), Some("Rain"));
    }

    #[test]
    fn test_error_only_report_not_logged() {
        let weather = report(r#"{"weather":{"error":"Weather API returned 500"}}"#);
        assert!(WeatherRecord::from_report(&weather, "Pune", Utc::now()).is_none());
    }

    #[test]
    fn test_append_writes_header_once() {
        let path = scratch_path("append");
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 6, 30, 0).unwrap();
        let weather = report(r#"{"weather":{"main":{"temp":28,"humidity":60}}}"#);
        let record = WeatherRecord::from_report(&weather, "Pune", at).unwrap();

        append_record(&path, &record).unwrap();
        append_record(&path, &record).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("date,city").count(), 1);
        assert_eq!(text.lines().count(), 3);

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].city, "Pune");
        assert_eq!(records[1].wind_speed, None);

        let _ = fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
    }
}
