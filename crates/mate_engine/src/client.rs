use std::time::Duration;

use futures_util::StreamExt;
use mate_logging::mate_debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use crate::decode::decode_response;
use crate::{ConversionError, FailureKind, VideoInfo};

/// Where the conversion backend listens unless configured otherwise.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5001/api/getVideoInfo";

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_response_bytes: u64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            // Metadata extraction on the backend can take a while for long videos.
            request_timeout: Duration::from_secs(60),
            max_response_bytes: 1024 * 1024,
        }
    }
}

#[derive(Debug, Serialize)]
struct ConversionRequest<'a> {
    url: &'a str,
}

/// One call per submission: send a link, get metadata and per-format links back.
#[async_trait::async_trait]
pub trait ConversionService: Send + Sync {
    async fn convert(&self, url: &str) -> Result<VideoInfo, ConversionError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestConversionService {
    settings: ServiceSettings,
}

impl ReqwestConversionService {
    pub fn new(settings: ServiceSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ConversionError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ConversionError::new(FailureKind::Network, err.to_string()))
    }

    fn too_large(&self, actual: u64) -> ConversionError {
        ConversionError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_response_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl ConversionService for ReqwestConversionService {
    async fn convert(&self, url: &str) -> Result<VideoInfo, ConversionError> {
        let endpoint = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| ConversionError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        let body = serde_json::to_vec(&ConversionRequest { url })
            .map_err(|err| ConversionError::new(FailureKind::Network, err.to_string()))?;
        let client = self.build_client()?;

        let response = client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_response_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_response_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        mate_debug!("Service answered status={} body_len={}", status, bytes.len());

        decode_response(status, &bytes)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ConversionError {
    if err.is_timeout() {
        return ConversionError::new(FailureKind::Timeout, err.to_string());
    }
    ConversionError::new(FailureKind::Network, err.to_string())
}
