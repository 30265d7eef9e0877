use crate::image_classifier::interface::{ClassifyError, ImageClassifier, Prediction};
use crate::image_normalizer::interface::NormalizedImage;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns the same distribution for every image and counts invocations.
pub struct ImageClassifierFake {
    probabilities: Vec<f32>,
    calls: AtomicUsize,
}

impl ImageClassifierFake {
    pub fn new(probabilities: Vec<f32>) -> Self {
        Self {
            probabilities,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn num_classes(&self) -> usize {
        self.probabilities.len()
    }

    fn classify(&self, _image: &NormalizedImage) -> Result<Prediction, ClassifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Prediction::new(self.probabilities.clone()))
    }
}
