pub const CHART_TICKS: [f32; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// A single horizontal bar on a fixed `[0, 1]` axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceChart {
    pub title: String,
    pub bar_label: String,
    pub axis_label: String,
    pub value: f32,
    pub x_range: (f32, f32),
    pub ticks: Vec<f32>,
}

impl ConfidenceChart {
    pub fn new(confidence: f32) -> Self {
        let value = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };

        Self {
            title: "Confidence graph".to_string(),
            bar_label: "Confidence".to_string(),
            axis_label: "Confidence score".to_string(),
            value,
            x_range: (0.0, 1.0),
            ticks: CHART_TICKS.to_vec(),
        }
    }

    /// Position of `x` along the axis as a fraction of its width.
    pub fn fraction(&self, x: f32) -> f32 {
        let (min, max) = self.x_range;
        ((x - min) / (max - min)).clamp(0.0, 1.0)
    }
}
