use crate::image_classifier::interface::{
    ClassifyError, ImageClassifier, ModelLoadError, Prediction,
};
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_normalizer::interface::NormalizedImage;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: TypedRunnableModel<TypedModel>,
    config: ModelConfig,
    num_classes: usize,
}

impl ImageClassifierTractOnnx {
    pub fn new(config: ModelConfig) -> Result<Self, ModelLoadError> {
        let load_error = |e: TractError| ModelLoadError::Model {
            path: config.onnx_model_path.clone(),
            source: e.into(),
        };

        let (height, width) = config.input_shape;
        let input_fact = f32::fact([1, height as usize, width as usize, 3]);

        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)
            .and_then(|model| model.with_input_fact(0, input_fact.into()))
            .and_then(|model| model.into_optimized())
            .map_err(load_error)?;

        let output_fact = model.output_fact(0).map_err(load_error)?;
        let num_classes = match output_fact.shape.as_concrete() {
            Some(&[1, classes]) if classes > 0 => classes,
            _ => {
                return Err(ModelLoadError::OutputShape {
                    path: config.onnx_model_path.clone(),
                    shape: format!("{:?}", output_fact.shape),
                })
            }
        };

        let model = model.into_runnable().map_err(load_error)?;

        Ok(Self {
            model,
            config,
            num_classes,
        })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn num_classes(&self) -> usize {
        self.num_classes
    }

    fn classify(&self, image: &NormalizedImage) -> Result<Prediction, ClassifyError> {
        let (height, width) = self.config.input_shape;
        let expected = [1, height as usize, width as usize, 3];
        if image.shape() != expected {
            return Err(ClassifyError::Inference(
                format!(
                    "input shape {:?} does not match model input {:?}",
                    image.shape(),
                    expected
                )
                .into(),
            ));
        }

        let outputs = self
            .model
            .run(tvec!(image.to_tensor().into_tvalue()))
            .map_err(|e| ClassifyError::Inference(e.into()))?;

        let output = outputs
            .first()
            .ok_or_else(|| ClassifyError::Inference("model produced no outputs".into()))?
            .to_array_view::<f32>()
            .map_err(|e| ClassifyError::Inference(e.into()))?;

        let probabilities: Vec<f32> = output.iter().copied().collect();
        if probabilities.len() != self.num_classes {
            return Err(ClassifyError::OutputLength {
                expected: self.num_classes,
                actual: probabilities.len(),
            });
        }

        Ok(Prediction::new(probabilities))
    }
}
