//! The `submit` command.

use crate::render::render_text;
use crate::store::FileCityStore;
use agro_advice::client::{HttpAdviceClient, LocalImage};
use agro_advice::{
    AdviceResponse, AdviceTransport, CityStore, ClientConfig, Submission, TransportError,
    ValidationError, ViewState,
};
use agro_data::WeatherRecord;
use anyhow::{anyhow, bail};
use chrono::Utc;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub struct SubmitOptions {
    pub image: PathBuf,
    /// Falls back to the remembered city when `None`
    pub city: Option<String>,
    pub endpoint: String,
    pub state_dir: PathBuf,
    pub timeout: Duration,
    pub weather_log: Option<PathBuf>,
}

pub async fn run_submit(options: SubmitOptions) -> anyhow::Result<()> {
    let mut store = FileCityStore::in_dir(&options.state_dir);
    let city = match options.city.or_else(|| store.load()) {
        Some(city) => city,
        None => return Err(ValidationError::EmptyCity.into()),
    };

    let image = LocalImage::open(&options.image).await?;
    let submission = Submission::new(Some(image), &city)?;
    if let Err(e) = submission.persist_city(&mut store) {
        warn!("Failed to store city in {}: {}", store.path().display(), e);
    }

    let mut config = ClientConfig::with_base_url(options.endpoint);
    config.request_timeout = options.timeout;
    let client = HttpAdviceClient::new(&config)?;
    info!("Posting {} to {}", options.image.display(), client.url());

    let response = tokio::select! {
        result = client.submit(&submission) => result,
        _ = tokio::signal::ctrl_c() => Err(TransportError::Aborted),
    };
    let response = match response {
        Ok(response) => response,
        Err(TransportError::Aborted) => bail!("request cancelled"),
        Err(e) => {
            warn!("Advice request failed: {}", e);
            return Err(match e.user_message() {
                Some(message) => anyhow!("{} ({})", message, e),
                None => anyhow!(e),
            });
        }
    };

    present(&response, submission.city(), options.weather_log.as_deref());
    Ok(())
}

/// Print the response and append its weather reading to the log. A failed
/// append only warns, since the advice has already been printed.
fn present(response: &AdviceResponse, city: &str, weather_log: Option<&Path>) -> ViewState {
    let view = ViewState::from_response(response, city);
    print!("{}", render_text(&view));
    for alert in &view.alerts {
        eprintln!("warning: {}", alert);
    }

    if let Some(path) = weather_log {
        if let Err(e) = log_weather(path, response, city) {
            warn!("Failed to log weather to {}: {:#}", path.display(), e);
        }
    }
    view
}

fn log_weather(path: &Path, response: &AdviceResponse, city: &str) -> anyhow::Result<()> {
    let record = response
        .weather
        .as_ref()
        .and_then(|report| WeatherRecord::from_report(report, city, Utc::now()));
    match record {
        Some(record) => agro_data::append_record(path, &record),
        None => {
            info!("No weather reading to log for {}", city);
            Ok(())
        }
    }
}
