use crate::image_normalizer::interface::NormalizedImage;
use std::path::PathBuf;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

/// Probability distribution over the label set for one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub probabilities: Vec<f32>,
}

impl Prediction {
    pub fn new(probabilities: Vec<f32>) -> Self {
        Self { probabilities }
    }

    /// Arg-max and its probability. Ties go to the lowest index.
    pub fn top(&self) -> Option<(usize, f32)> {
        let mut best: Option<(usize, f32)> = None;
        for (index, &score) in self.probabilities.iter().enumerate() {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ if score.is_nan() => {}
                _ => best = Some((index, score)),
            }
        }
        best
    }
}

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("model inference failed: {0}")]
    Inference(#[source] BoxError),

    #[error("model returned {actual} scores, expected {expected}")]
    OutputLength { expected: usize, actual: usize },
}

#[derive(Error, Debug)]
pub enum ModelLoadError {
    #[error("failed to load model {path}: {source}")]
    Model {
        path: String,
        #[source]
        source: BoxError,
    },

    #[error("model {path} has unsupported output shape {shape}, expected [1, N]")]
    OutputShape { path: String, shape: String },

    #[error("failed to read labels from {path}: {source}")]
    Labels {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("label file {path} contains no labels")]
    EmptyLabels { path: PathBuf },

    #[error("label file has {labels} labels but the model outputs {outputs} classes")]
    LabelCountMismatch { labels: usize, outputs: usize },
}

pub trait ImageClassifier: Send + Sync {
    /// Output dimensionality, fixed once the model is loaded.
    fn num_classes(&self) -> usize;

    fn classify(&self, image: &NormalizedImage) -> Result<Prediction, ClassifyError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_picks_highest() {
        let prediction = Prediction::new(vec![0.1, 0.7, 0.2]);
        assert_eq!(prediction.top(), Some((1, 0.7)));
    }

    #[test]
    fn test_top_ties_resolve_to_first() {
        let prediction = Prediction::new(vec![0.4, 0.4, 0.2]);
        assert_eq!(prediction.top(), Some((0, 0.4)));
    }

    #[test]
    fn test_top_skips_nan_and_empty() {
        assert_eq!(Prediction::new(vec![]).top(), None);
        assert_eq!(Prediction::new(vec![f32::NAN, 0.3]).top(), Some((1, 0.3)));
        assert_eq!(Prediction::new(vec![f32::NAN]).top(), None);
    }
}
