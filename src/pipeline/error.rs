use crate::image_classifier::interface::ClassifyError;
use crate::image_fetcher::interface::FetchError;
use crate::image_normalizer::interface::DecodeError;
use crate::result_presenter::present::PresentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error("internal error: {0}")]
    Present(#[from] PresentError),
}

/// Coarse error category shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Upload,
    Camera,
    Fetch,
    Decode,
    Inference,
    Internal,
}

impl PipelineError {
    pub fn kind(&self) -> FailureKind {
        match self {
            PipelineError::Fetch(_) => FailureKind::Fetch,
            PipelineError::Decode(_) => FailureKind::Decode,
            PipelineError::Classify(_) => FailureKind::Inference,
            PipelineError::Present(_) => FailureKind::Internal,
        }
    }
}
