use crate::config::Config;
use crate::image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use crate::image_classifier::interface::{
    ClassifyError, ImageClassifier, ModelLoadError, Prediction,
};
use crate::image_classifier::labels::LabelSet;
use crate::image_normalizer::interface::NormalizedImage;
use std::sync::Arc;

/// Classifier and labels, loaded once and read-only afterwards.
#[derive(Clone)]
pub struct LoadedModel {
    classifier: Arc<dyn ImageClassifier + Send + Sync>,
    labels: Arc<LabelSet>,
}

impl LoadedModel {
    pub fn new(
        classifier: Arc<dyn ImageClassifier + Send + Sync>,
        labels: LabelSet,
    ) -> Result<Self, ModelLoadError> {
        let outputs = classifier.num_classes();
        if labels.len() != outputs {
            return Err(ModelLoadError::LabelCountMismatch {
                labels: labels.len(),
                outputs,
            });
        }

        Ok(Self {
            classifier,
            labels: Arc::new(labels),
        })
    }

    pub fn load(config: &Config) -> Result<Self, ModelLoadError> {
        let labels = LabelSet::from_path(&config.labels_path)?;
        let classifier = ImageClassifierTractOnnx::new(config.model.clone())?;
        Self::new(Arc::new(classifier), labels)
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn classify(&self, image: &NormalizedImage) -> Result<Prediction, ClassifyError> {
        self.classifier.classify(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_classifier::impl_fake::ImageClassifierFake;
    use crate::image_classifier::models::model_config::ModelConfig;

    const TWO_CLASS_MODEL: &str = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/src/image_classifier/models/tiny_two_class.onnx"
    );

    #[test]
    fn test_label_count_must_match_outputs() {
        let classifier = Arc::new(ImageClassifierFake::new(vec![0.5, 0.5]));
        let result = LoadedModel::new(classifier, LabelSet::from(vec!["A", "B", "C"]));

        assert!(matches!(
            result,
            Err(ModelLoadError::LabelCountMismatch {
                labels: 3,
                outputs: 2
            })
        ));
    }

    #[test]
    fn test_matching_label_count() {
        let classifier = Arc::new(ImageClassifierFake::new(vec![0.1, 0.7, 0.2]));
        let model = LoadedModel::new(classifier, LabelSet::from(vec!["A", "B", "C"])).unwrap();
        assert_eq!(model.labels().len(), 3);
    }

    #[test]
    fn test_load_fails_without_artifacts() {
        let mut config = Config::default();
        config.labels_path = std::env::temp_dir().join("leaf-gecko-classifier-absent-labels.txt");
        let _ = std::fs::remove_file(&config.labels_path);

        assert!(LoadedModel::load(&config).is_err());
    }

    #[test]
    fn test_label_count_checked_against_real_model() {
        let classifier = ImageClassifierTractOnnx::new(ModelConfig {
            onnx_model_path: TWO_CLASS_MODEL.to_string(),
            input_shape: (224, 224),
        })
        .unwrap();

        let result = LoadedModel::new(Arc::new(classifier), LabelSet::from(vec!["A", "B", "C"]));

        assert!(matches!(
            result,
            Err(ModelLoadError::LabelCountMismatch {
                labels: 3,
                outputs: 2
            })
        ));
    }
}
