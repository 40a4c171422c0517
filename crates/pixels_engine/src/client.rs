use std::time::Duration;

use grid_logging::grid_debug;
use serde::Deserialize;

use pixels_core::{build_request, BaselineConfig, Query, ResultItem, ResultPage};

use crate::{ApiError, FailureKind};

/// HTTP-level knobs. Both timeouts default to `None`: a hung request is left
/// to the caller's patience, matching the aggregator's no-retry contract.
#[derive(Debug, Clone, Default)]
pub struct ClientSettings {
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

/// The remote search boundary.
#[async_trait::async_trait]
pub trait SearchApi: Send + Sync {
    async fn search(&self, query: &Query) -> Result<ResultPage, ApiError>;
}

#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    hits: Vec<ResultItem>,
}

/// `SearchApi` implementation against the Pixabay-style GET endpoint.
#[derive(Debug, Clone)]
pub struct PixabayClient {
    baseline: BaselineConfig,
    client: reqwest::Client,
}

impl PixabayClient {
    pub fn new(baseline: BaselineConfig, settings: ClientSettings) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { baseline, client })
    }
}

#[async_trait::async_trait]
impl SearchApi for PixabayClient {
    async fn search(&self, query: &Query) -> Result<ResultPage, ApiError> {
        let request = build_request(&self.baseline, query);
        let url = url::Url::parse(&request)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        grid_debug!("search page={} request={}", query.page, url.path());

        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let payload: SearchPayload = serde_json::from_slice(&body)
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))?;

        Ok(ResultPage {
            items: payload.hits,
            requested_page: query.page,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
