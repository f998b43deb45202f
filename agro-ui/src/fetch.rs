//! `fetch`-based transport for the advice endpoint.

use crate::browser::WebImage;
use agro_advice::{AdviceResponse, AdviceTransport, Submission, TransportError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, FormData, RequestInit, Response};

/// Sends one multipart `POST` per submission. Each transport owns an
/// `AbortController`; aborting it rejects the pending fetch.
pub struct FetchTransport {
    url: String,
    controller: Option<AbortController>,
}

impl FetchTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            controller: AbortController::new().ok(),
        }
    }

    /// Handle that aborts this transport's request.
    pub fn abort_handle(&self) -> Option<AbortController> {
        self.controller.clone()
    }
}

fn network(e: JsValue) -> TransportError {
    if is_abort(&e) {
        TransportError::Aborted
    } else {
        TransportError::Network(format!("{:?}", e))
    }
}

fn is_abort(e: &JsValue) -> bool {
    js_sys::Reflect::get(e, &JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string())
        .is_some_and(|name| name == "AbortError")
}

impl AdviceTransport<WebImage> for FetchTransport {
    async fn submit(
        &self,
        submission: &Submission<WebImage>,
    ) -> Result<AdviceResponse, TransportError> {
        let window = web_sys::window()
            .ok_or_else(|| TransportError::Network("no window".to_string()))?;

        let form = FormData::new().map_err(network)?;
        let image = submission.image();
        form.append_with_blob_and_filename("image", &image.0, &image.0.name())
            .map_err(network)?;
        form.append_with_str("city", submission.city())
            .map_err(network)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&JsValue::from(form));
        if let Some(controller) = &self.controller {
            init.set_signal(Some(&controller.signal()));
        }

        let response = JsFuture::from(window.fetch_with_str_and_init(&self.url, &init))
            .await
            .map_err(network)?;
        let response: Response = response.dyn_into().map_err(network)?;
        log::debug!("POST {} -> {}", self.url, response.status());

        let text = JsFuture::from(response.text().map_err(network)?)
            .await
            .map_err(network)?;
        let body = text
            .as_string()
            .ok_or_else(|| TransportError::Parse("response body is not text".to_string()))?;
        AdviceResponse::from_json(&body)
    }
}
