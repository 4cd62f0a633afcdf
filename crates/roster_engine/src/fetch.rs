use std::time::Duration;

use url::Url;

use crate::wire::ApiPage;
use crate::{CharacterPage, FailureKind, FetchError};

/// Connection settings for the upstream character API.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://rickandmortyapi.com").expect("static url"),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    /// Requests one page of characters. Page bounds are not validated
    /// locally; whatever status the API answers is forwarded.
    async fn fetch_page(&self, page: u32) -> Result<CharacterPage, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client, settings })
    }

    fn page_url(&self, page: u32) -> Result<Url, FetchError> {
        let mut url = self
            .settings
            .base_url
            .join("api/character")
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        Ok(url)
    }
}

#[async_trait::async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch_page(&self, page: u32) -> Result<CharacterPage, FetchError> {
        let url = self.page_url(page)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let decoded: ApiPage = serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
        Ok(decoded.into_page())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
