pub const HIGH_CONFIDENCE_THRESHOLD: f32 = 0.8;
pub const MEDIUM_CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Presentation bucket for a confidence score. Both boundaries are exclusive
/// on the upper tier, so 0.8 is medium and 0.5 is low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn from_score(score: f32) -> Self {
        if score > HIGH_CONFIDENCE_THRESHOLD {
            ConfidenceTier::High
        } else if score > MEDIUM_CONFIDENCE_THRESHOLD {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(ConfidenceTier::from_score(0.81), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_score(0.80), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_score(0.51), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_score(0.50), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_score(0.0), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_score(1.0), ConfidenceTier::High);
    }

    #[test]
    fn test_names() {
        assert_eq!(ConfidenceTier::High.name(), "high");
        assert_eq!(ConfidenceTier::Medium.name(), "medium");
        assert_eq!(ConfidenceTier::Low.name(), "low");
    }
}
