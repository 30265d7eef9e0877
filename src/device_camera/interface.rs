use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CameraError {
    #[error("no camera capture command configured")]
    NotConfigured,

    #[error("failed to run camera command {program:?}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("camera command {program:?} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("camera command {program:?} gave no frame within {timeout:?}")]
    Timeout { program: String, timeout: Duration },

    #[error("camera returned an empty frame")]
    EmptyFrame,
}

pub trait DeviceCamera: Send + Sync {
    /// Captures a single encoded frame (JPEG/PNG bytes).
    fn capture_frame(&self) -> Result<Vec<u8>, CameraError>;
}
