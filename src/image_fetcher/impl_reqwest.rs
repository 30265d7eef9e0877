use crate::image_fetcher::interface::{FetchError, ImageFetcher};
use crate::library::logger::interface::Logger;
use reqwest::blocking::Client;
use reqwest::Url;
use std::sync::Arc;
use std::time::Duration;

pub struct ImageFetcherReqwest {
    client: Client,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageFetcherReqwest {
    pub fn new(
        timeout: Duration,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            logger: logger.with_namespace("image_fetcher").with_namespace("reqwest"),
        })
    }
}

pub fn parse_image_url(url: &str) -> Result<Url, FetchError> {
    let trimmed = url.trim();
    let parsed = Url::parse(trimmed).map_err(|e| FetchError::InvalidUrl {
        url: trimmed.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(FetchError::UnsupportedScheme {
            scheme: scheme.to_string(),
        }),
    }
}

impl ImageFetcher for ImageFetcherReqwest {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let parsed = parse_image_url(url)?;
        let url = parsed.to_string();

        let _ = self.logger.info(&format!("GET {}", url));

        let response = self
            .client
            .get(parsed)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().map_err(|source| FetchError::Request {
            url: url.clone(),
            source,
        })?;

        if bytes.is_empty() {
            return Err(FetchError::EmptyBody { url });
        }

        let _ = self
            .logger
            .info(&format!("Fetched {} bytes from {}", bytes.len(), url));

        Ok(bytes.to_vec())
    }
}
