use crate::image_fetcher::interface::{FetchError, ImageFetcher};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Serves canned bodies by URL; anything unknown answers 404.
pub struct ImageFetcherFake {
    responses: HashMap<String, Vec<u8>>,
    calls: AtomicUsize,
}

impl ImageFetcherFake {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_response(mut self, url: &str, body: Vec<u8>) -> Self {
        self.responses.insert(url.to_string(), body);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ImageFetcher for ImageFetcherFake {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.responses.get(url.trim()) {
            Some(body) => Ok(body.clone()),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
