use std::path::PathBuf;
use thiserror::Error;

/// Which of the mutually exclusive input affordances is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMethod {
    #[default]
    Upload,
    Camera,
    Url,
}

impl InputMethod {
    pub const ALL: [InputMethod; 3] = [InputMethod::Upload, InputMethod::Camera, InputMethod::Url];

    pub fn label(&self) -> &'static str {
        match self {
            InputMethod::Upload => "File upload",
            InputMethod::Camera => "Use camera",
            InputMethod::Url => "Image URL",
        }
    }
}

/// One acquired image, resolved once per interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    Upload(Vec<u8>),
    Camera(Vec<u8>),
    Url(String),
}

impl ImageSource {
    pub fn input_method(&self) -> InputMethod {
        match self {
            ImageSource::Upload(_) => InputMethod::Upload,
            ImageSource::Camera(_) => InputMethod::Camera,
            ImageSource::Url(_) => InputMethod::Url,
        }
    }

    pub fn to_display_string(&self) -> String {
        match self {
            ImageSource::Upload(bytes) => format!("Upload({} bytes)", bytes.len()),
            ImageSource::Camera(bytes) => format!("Camera({} bytes)", bytes.len()),
            ImageSource::Url(url) => format!("Url({})", url),
        }
    }
}

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("unsupported file type {name:?}, expected one of: {accepted}")]
    UnsupportedType { name: String, accepted: String },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("uploaded file {name:?} is empty")]
    Empty { name: String },
}
