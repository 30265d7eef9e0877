use crate::image_classifier::interface::{Classification, Prediction};
use crate::image_classifier::labels::LabelSet;
use crate::result_presenter::chart::ConfidenceChart;
use crate::result_presenter::tier::ConfidenceTier;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresentError {
    #[error("prediction contains no scores")]
    EmptyPrediction,

    #[error("predicted class {index} is outside the label set of {len} labels")]
    LabelIndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresentedResult {
    pub classification: Classification,
    pub tier: ConfidenceTier,
    pub confidence_text: String,
    pub chart: ConfidenceChart,
}

pub fn format_percentage(confidence: f32) -> String {
    format!("{:.2}%", confidence * 100.0)
}

pub fn present(prediction: &Prediction, labels: &LabelSet) -> Result<PresentedResult, PresentError> {
    let (index, confidence) = prediction.top().ok_or(PresentError::EmptyPrediction)?;

    let label = labels
        .get(index)
        .ok_or(PresentError::LabelIndexOutOfRange {
            index,
            len: labels.len(),
        })?;

    Ok(PresentedResult {
        classification: Classification {
            label: label.to_string(),
            confidence,
        },
        tier: ConfidenceTier::from_score(confidence),
        confidence_text: format_percentage(confidence),
        chart: ConfidenceChart::new(confidence),
    })
}
