use crate::image_classifier::models::model_config::ModelConfig;
use chrono::{FixedOffset, Offset, Utc};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub window_title: String,
    pub model: ModelConfig,
    pub labels_path: PathBuf,
    pub fetch_timeout: Duration,
    pub accepted_upload_extensions: Vec<String>,
    pub camera_command: Vec<String>,
    pub camera_timeout: Duration,
    pub preview_max_side: u32,
    pub font_path: Option<PathBuf>,
    pub logger_timezone: FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "AI Image Classifier".to_string(),
            model: ModelConfig {
                onnx_model_path: "keras_model.onnx".to_string(),
                input_shape: (224, 224),
            },
            labels_path: PathBuf::from("labels.txt"),
            fetch_timeout: Duration::from_secs(10),
            accepted_upload_extensions: vec![
                "png".to_string(),
                "jpg".to_string(),
                "jpeg".to_string(),
            ],
            camera_command: vec![
                "fswebcam".to_string(),
                "--no-banner".to_string(),
                "-".to_string(),
            ],
            camera_timeout: Duration::from_secs(15),
            preview_max_side: 512,
            font_path: None,
            logger_timezone: korea_standard_time(),
        }
    }
}

fn korea_standard_time() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).unwrap_or_else(|| Utc.fix())
}
