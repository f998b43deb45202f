//! Native multipart client for the advice endpoint.

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::response::AdviceResponse;
use crate::submission::{ImageSource, Submission};
use crate::transport::AdviceTransport;
use agro_utils::mime;
use anyhow::Context;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::path::{Path, PathBuf};

/// An image file read from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalImage {
    pub path: PathBuf,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl LocalImage {
    /// Read `path` and guess its type from the extension.
    pub async fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read image {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            mime_type: mime::from_path(path).to_string(),
            bytes,
        })
    }
}

impl ImageSource for LocalImage {
    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string())
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }
}

/// Posts submissions to `{base_url}/api/advice/`.
#[derive(Debug, Clone)]
pub struct HttpAdviceClient {
    client: Client,
    url: String,
}

impl HttpAdviceClient {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self {
            client,
            url: config.endpoint_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl AdviceTransport<LocalImage> for HttpAdviceClient {
    async fn submit(
        &self,
        submission: &Submission<LocalImage>,
    ) -> Result<AdviceResponse, TransportError> {
        let image = submission.image();
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name())
            .mime_str(&image.mime_type)
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let form = Form::new()
            .part("image", part)
            .text("city", submission.city().to_string());

        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        debug!("POST {} -> {} ({} bytes)", self.url, status, body.len());

        AdviceResponse::from_json(&body)
    }
}
