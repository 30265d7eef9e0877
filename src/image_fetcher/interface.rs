use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid image URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unsupported URL scheme {scheme:?}, expected http or https")]
    UnsupportedScheme { scheme: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("{url} returned an empty body")]
    EmptyBody { url: String },
}

/// Single best-effort GET of a user supplied image URL. No retries.
pub trait ImageFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
