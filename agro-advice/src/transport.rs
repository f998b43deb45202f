//! The request/response seam between the submission flow and the network.

use crate::error::TransportError;
use crate::response::AdviceResponse;
use crate::submission::{ImageSource, Submission};
use crate::view::ViewState;
use log::{debug, info, warn};

/// Sends one submission to the advice endpoint and returns the parsed body.
///
/// Implementations send a multipart body with an `image` part (file name and
/// content type preserved) and a `city` text part.
#[allow(async_fn_in_trait)]
pub trait AdviceTransport<F: ImageSource> {
    async fn submit(&self, submission: &Submission<F>) -> Result<AdviceResponse, TransportError>;
}

/// Send `submission` and build the view for the response.
pub async fn request_advice<F, T>(
    transport: &T,
    submission: &Submission<F>,
) -> Result<ViewState, TransportError>
where
    F: ImageSource,
    T: AdviceTransport<F> + ?Sized,
{
    info!(
        "Requesting advice for {} ({}) in {}",
        submission.image().file_name(),
        submission.image().mime_type(),
        submission.city()
    );
    let response = match transport.submit(submission).await {
        Ok(response) => response,
        Err(TransportError::Aborted) => {
            debug!("Advice request aborted");
            return Err(TransportError::Aborted);
        }
        Err(e) => {
            warn!("Advice request failed: {}", e);
            return Err(e);
        }
    };
    debug!("Advice response: {:?}", response);
    Ok(ViewState::from_response(&response, submission.city()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CityStore, MemoryCityStore};
    use crate::submission::tests::{jpeg, FakeImage};
    use std::cell::{Cell, RefCell};

    /// Records calls and replays a canned body.
    struct CannedTransport {
        body: Result<String, TransportError>,
        calls: Cell<usize>,
        cities: RefCell<Vec<String>>,
    }

    impl CannedTransport {
        fn new(body: &str) -> Self {
            Self {
                body: Ok(body.to_string()),
                calls: Cell::new(0),
                cities: RefCell::new(Vec::new()),
            }
        }

        fn failing(err: TransportError) -> Self {
            Self {
                body: Err(err),
                calls: Cell::new(0),
                cities: RefCell::new(Vec::new()),
            }
        }
    }

    impl AdviceTransport<FakeImage> for CannedTransport {
        async fn submit(
            &self,
            submission: &Submission<FakeImage>,
        ) -> Result<AdviceResponse, TransportError> {
            self.calls.set(self.calls.get() + 1);
            self.cities.borrow_mut().push(submission.city().to_string());
            let body = self.body.clone()?;
            AdviceResponse::from_json(&body)
        }
    }

    /// Mirrors what both front ends do: validate, persist, then send.
    async fn submit_form<T: AdviceTransport<FakeImage>>(
        transport: &T,
        store: &mut MemoryCityStore,
        image: Option<FakeImage>,
        city: &str,
    ) -> Result<ViewState, String> {
        let submission = Submission::new(image, city).map_err(|e| e.to_string())?;
        submission.persist_city(store).map_err(|e| e.to_string())?;
        request_advice(transport, &submission)
            .await
            .map_err(|e| e.to_string())
    }

    #[tokio::test]
    async fn invalid_submission_sends_nothing() {
        let transport = CannedTransport::new("{}");
        let mut store = MemoryCityStore::new();

        assert!(submit_form(&transport, &mut store, None, "Pune").await.is_err());
        assert!(submit_form(&transport, &mut store, Some(jpeg()), "  ").await.is_err());

        assert_eq!(transport.calls.get(), 0);
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn pune_scenario_renders_weather_and_advice() {
        let transport = CannedTransport::new(
            r#"{"weather":{"main":{"temp":28,"humidity":60},"weather":[{"description":"Clear"}]},
                "advice":"Water crops in the evening."}"#,
        );
        let mut store = MemoryCityStore::new();

        let state = submit_form(&transport, &mut store, Some(jpeg()), " Pune ")
            .await
            .unwrap();

        assert_eq!(*transport.cities.borrow(), vec!["Pune"]);
        assert_eq!(store.load().as_deref(), Some("Pune"));
        let weather = state.weather.unwrap();
        assert_eq!(weather.temperature, "28 °C");
        assert_eq!(weather.condition, "Clear");
        assert_eq!(weather.humidity, "60%");
        assert_eq!(state.advice.as_deref(), Some("Water crops in the evening."));
        assert!(state.disease.is_none());
    }

    #[tokio::test]
    async fn repeated_submission_issues_independent_requests() {
        let transport = CannedTransport::new(r#"{"advice":"Irrigate."}"#);
        let mut store = MemoryCityStore::new();

        let first = submit_form(&transport, &mut store, Some(jpeg()), "Pune")
            .await
            .unwrap();
        let second = submit_form(&transport, &mut store, Some(jpeg()), "Pune")
            .await
            .unwrap();

        assert_eq!(transport.calls.get(), 2);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn transport_failure_is_reported() {
        let transport = CannedTransport::failing(TransportError::Network("refused".into()));
        let submission = Submission::new(Some(jpeg()), "Pune").unwrap();
        let err = request_advice(&transport, &submission).await.unwrap_err();
        assert!(err.user_message().is_some());
    }

    #[tokio::test]
    async fn malformed_body_is_parse_error() {
        let transport = CannedTransport::new("<html>oops</html>");
        let submission = Submission::new(Some(jpeg()), "Pune").unwrap();
        let err = request_advice(&transport, &submission).await.unwrap_err();
        assert!(matches!(err, TransportError::Parse(_)));
    }
}
