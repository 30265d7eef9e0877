use crate::device_camera::interface::{CameraError, DeviceCamera};
use crate::library::logger::interface::Logger;
use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Grabs a frame by running an external capture tool that writes the encoded
/// image to stdout, e.g. `fswebcam --no-banner -` or `libcamera-jpeg -o -`.
///
/// The tool is killed once `timeout` elapses so a stalled device cannot keep
/// the app in the capturing state.
pub struct DeviceCameraCommand {
    program: String,
    args: Vec<String>,
    timeout: Duration,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraCommand {
    pub fn new(
        command: &[String],
        timeout: Duration,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        let (program, args) = match command.split_first() {
            Some((program, args)) => (program.clone(), args.to_vec()),
            None => (String::new(), Vec::new()),
        };

        Self {
            program,
            args,
            timeout,
            logger: logger.with_namespace("camera").with_namespace("command"),
        }
    }

    fn spawn_error(&self, source: std::io::Error) -> CameraError {
        CameraError::Spawn {
            program: self.program.clone(),
            source,
        }
    }

    /// `None` when the deadline passed and the child was killed.
    fn wait_with_deadline(&self, child: &mut Child) -> Result<Option<ExitStatus>, CameraError> {
        let deadline = Instant::now() + self.timeout;
        loop {
            if let Some(status) = child.try_wait().map_err(|e| self.spawn_error(e))? {
                return Ok(Some(status));
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Ok(None);
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }
}

// Pipes are drained off-thread so a chatty tool cannot block on a full pipe.
fn read_in_background<R: Read + Send + 'static>(reader: Option<R>) -> JoinHandle<Vec<u8>> {
    std::thread::spawn(move || {
        let mut bytes = Vec::new();
        if let Some(mut reader) = reader {
            let _ = reader.read_to_end(&mut bytes);
        }
        bytes
    })
}

impl DeviceCamera for DeviceCameraCommand {
    fn capture_frame(&self) -> Result<Vec<u8>, CameraError> {
        if self.program.is_empty() {
            return Err(CameraError::NotConfigured);
        }

        let _ = self.logger.info(&format!(
            "Capturing frame with {} {}",
            self.program,
            self.args.join(" ")
        ));

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        let stdout = read_in_background(child.stdout.take());
        let stderr = read_in_background(child.stderr.take());

        let Some(status) = self.wait_with_deadline(&mut child)? else {
            let _ = self.logger.error(&format!(
                "{} gave no frame within {:?}, killed",
                self.program, self.timeout
            ));
            return Err(CameraError::Timeout {
                program: self.program.clone(),
                timeout: self.timeout,
            });
        };

        let frame = stdout.join().unwrap_or_default();
        let stderr = stderr.join().unwrap_or_default();

        if !status.success() {
            return Err(CameraError::Failed {
                program: self.program.clone(),
                status: status.to_string(),
                stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            });
        }

        if frame.is_empty() {
            return Err(CameraError::EmptyFrame);
        }

        let _ = self
            .logger
            .info(&format!("Frame captured ({} bytes)", frame.len()));

        Ok(frame)
    }
}
