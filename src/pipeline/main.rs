use crate::config::Config;
use crate::image_classifier::model::LoadedModel;
use crate::image_fetcher::interface::ImageFetcher;
use crate::image_normalizer::image::{decode_image, preview_image, resize_image_to_tensor};
use crate::image_normalizer::interface::PreviewImage;
use crate::image_source::interface::{ImageSource, InputMethod};
use crate::library::logger::interface::Logger;
use crate::pipeline::error::PipelineError;
use crate::result_presenter::present::{present, PresentError, PresentedResult};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationReport {
    pub input_method: InputMethod,
    pub preview: PreviewImage,
    pub result: PresentedResult,
}

impl ClassificationReport {
    pub fn to_display_string(&self) -> String {
        format!(
            "ClassificationReport {{ input_method: {:?}, preview: {}x{}, label: {:?}, confidence: {}, tier: {} }}",
            self.input_method,
            self.preview.width,
            self.preview.height,
            self.result.classification.label,
            self.result.confidence_text,
            self.result.tier.name()
        )
    }
}

/// Acquisition, normalization, classification and presentation for one
/// interaction. Holds no per-request state.
#[derive(Clone)]
pub struct Pipeline {
    model: LoadedModel,
    fetcher: Arc<dyn ImageFetcher + Send + Sync>,
    logger: Arc<dyn Logger + Send + Sync>,
    input_shape: (u32, u32),
    preview_max_side: u32,
}

impl Pipeline {
    pub fn new(
        config: &Config,
        model: LoadedModel,
        fetcher: Arc<dyn ImageFetcher + Send + Sync>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            model,
            fetcher,
            logger: logger.with_namespace("pipeline"),
            input_shape: config.model.input_shape,
            preview_max_side: config.preview_max_side,
        }
    }

    pub fn acquire(&self, source: ImageSource) -> Result<Vec<u8>, PipelineError> {
        match source {
            ImageSource::Upload(bytes) | ImageSource::Camera(bytes) => Ok(bytes),
            ImageSource::Url(url) => Ok(self.fetcher.fetch(&url)?),
        }
    }

    pub fn run(&self, source: ImageSource) -> Result<ClassificationReport, PipelineError> {
        let input_method = source.input_method();
        let _ = self
            .logger
            .info(&format!("Processing {}", source.to_display_string()));

        let bytes = self.acquire(source)?;

        let image = decode_image(&bytes)?;
        let preview = preview_image(&image, self.preview_max_side);

        let (height, width) = self.input_shape;
        let input = resize_image_to_tensor(&image, width, height);

        let prediction = self.model.classify(&input)?;

        let result = match present(&prediction, self.model.labels()) {
            Ok(result) => result,
            Err(e @ PresentError::LabelIndexOutOfRange { .. }) => {
                let _ = self
                    .logger
                    .error(&format!("Label set and model output disagree: {}", e));
                return Err(e.into());
            }
            Err(e) => return Err(e.into()),
        };

        let report = ClassificationReport {
            input_method,
            preview,
            result,
        };

        let _ = self.logger.info(&report.to_display_string());

        Ok(report)
    }
}
