use crate::image_classifier::interface::ModelLoadError;
use std::path::Path;

/// Class names in classifier output order.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    /// One label per line; lines are trimmed and trailing blank lines dropped.
    /// Blank lines in the middle keep their index.
    pub fn parse(text: &str) -> Self {
        let mut labels: Vec<String> = text.lines().map(|line| line.trim().to_string()).collect();
        while labels.last().is_some_and(|label| label.is_empty()) {
            labels.pop();
        }
        Self { labels }
    }

    pub fn from_path(path: &Path) -> Result<Self, ModelLoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| ModelLoadError::Labels {
            path: path.to_path_buf(),
            source,
        })?;

        let labels = Self::parse(&text);
        if labels.is_empty() {
            return Err(ModelLoadError::EmptyLabels {
                path: path.to_path_buf(),
            });
        }

        Ok(labels)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }
}

impl From<Vec<&str>> for LabelSet {
    fn from(labels: Vec<&str>) -> Self {
        Self {
            labels: labels.into_iter().map(str::to_string).collect(),
        }
    }
}
