//! Crop advisory upload page
//!
//! The user drops (or picks) a leaf image and enters a city; the page posts
//! both to `/api/advice/` and shows the weather, the disease diagnosis and
//! the advisory text that come back.
//!
//! Submission flow:
//! 1. Validate the selection and the trimmed city (alert and stop on failure).
//! 2. Store the city in localStorage under `userCity`.
//! 3. Cancel the previous submission's request and animation, then hide the
//!    result cards and start "Analyzing...".
//! 4. `POST` the multipart form.
//! 5. Stop the indicator and render the `ViewState`; surface its alerts.

use agro_advice::{request_advice, CityStore, ClientConfig, Submission};
use agro_ui::browser::{self, LocalStorageCityStore, WebImage};
use agro_ui::components::{
    AdviceCard, DiseaseCard, DropZone, LoadingIndicator, PreviewCard, WeatherCard,
};
use agro_ui::fetch::FetchTransport;
use agro_ui::state::AppState;
use dioxus::prelude::*;
use std::time::Duration;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("main"))
        .launch(App);
}

/// Run one submission. Validation failures alert and return before anything
/// is stored or sent.
fn submit(mut state: AppState, config: ClientConfig) {
    let image = state.selection.read().image().cloned();
    let city = state.city.read().clone();
    let submission = match Submission::new(image, &city) {
        Ok(submission) => submission,
        Err(e) => {
            browser::alert(&e.to_string());
            return;
        }
    };

    let mut store = LocalStorageCityStore::new(config.storage_key.clone());
    if let Err(e) = submission.persist_city(&mut store) {
        log::warn!("Failed to store city: {}", e);
    }

    let ticket = state.begin_submission(config.dots_interval);

    let transport = FetchTransport::new(config.endpoint_url());
    let abort = transport.abort_handle();
    let task = spawn(async move {
        let result = request_advice(&transport, &submission).await;
        if !state.is_current(ticket) {
            return;
        }
        state.stop_loading();

        match result {
            Ok(view) => {
                let alerts = view.alerts.clone();
                state.view.set(view);
                if !alerts.is_empty() {
                    // Let the cards paint before the blocking alerts
                    gloo_timers::future::sleep(Duration::ZERO).await;
                    for alert in alerts {
                        browser::alert(&alert);
                    }
                }
            }
            Err(e) => {
                log::error!("Advice request failed: {}", e);
                if let Some(message) = e.user_message() {
                    browser::alert(message);
                }
            }
        }
        state.finish_request(ticket);
    });
    state.track_request(ticket, task, abort);
}

#[component]
fn App() -> Element {
    let config = use_hook(ClientConfig::default);
    let storage_key = config.storage_key.clone();
    let mut state = use_context_provider(move || {
        let stored = LocalStorageCityStore::new(storage_key).load();
        AppState::new(stored.unwrap_or_default())
    });
    let city = (state.city)();
    let view = state.view.read().clone();

    let on_city_input = move |evt: Event<FormData>| {
        state.city.set(evt.value());
    };

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        submit(state, config.clone());
    };

    rsx! {
        div {
            style: "max-width: 720px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "text-align: center; color: #2e7d32; margin-bottom: 4px;",
                "Smart Agro Advisor"
            }
            p {
                style: "text-align: center; color: #666; margin-top: 0;",
                "Upload a leaf photo to get a diagnosis, local weather and advice."
            }

            form {
                id: "upload-form",
                onsubmit: on_submit,

                DropZone {
                    on_drop: move |image: Option<WebImage>| state.accept_image(image),
                    on_pick: move |image: WebImage| state.accept_image(Some(image)),
                }

                div {
                    style: "margin: 12px 0; display: flex; gap: 8px; align-items: center;",
                    label {
                        r#for: "city",
                        style: "font-weight: bold;",
                        "City: "
                    }
                    input {
                        id: "city",
                        r#type: "text",
                        placeholder: "e.g. Bamenda",
                        value: "{city}",
                        oninput: on_city_input,
                    }
                    button {
                        r#type: "submit",
                        style: "padding: 6px 16px;",
                        "Get Advice"
                    }
                }
            }

            PreviewCard {}
            LoadingIndicator {}

            WeatherCard { weather: view.weather.clone() }
            DiseaseCard { disease: view.disease.clone() }
            AdviceCard { advice: view.advice.clone() }
        }
    }
}
