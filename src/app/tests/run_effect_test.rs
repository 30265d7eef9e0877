use super::fixture::{jpeg_bytes, Fixture, IMAGE_URL};
use crate::app::core::{Effect, Event};
use crate::device_camera::interface::{CameraError, DeviceCamera};
use crate::image_source::interface::{ImageSource, UploadError};
use crate::result_presenter::tier::ConfidenceTier;
use std::sync::Arc;

struct DeviceCameraBroken;

impl DeviceCamera for DeviceCameraBroken {
    fn capture_frame(&self) -> Result<Vec<u8>, CameraError> {
        panic!("camera driver crashed")
    }
}

#[test]
fn test_process_effect_reports_result() {
    let f = Fixture::new();

    f.run_effect.run_effect(Effect::Process {
        source: ImageSource::Url(IMAGE_URL.to_string()),
    });

    match f.event_receiver.recv().unwrap() {
        Event::ProcessDone(Ok(report)) => {
            assert_eq!(report.result.classification.label, "Gecko");
            assert_eq!(report.result.tier, ConfidenceTier::High);
            assert_eq!(report.result.confidence_text, "90.00%");
        }
        event => panic!("Unexpected event {}", event.to_display_string()),
    }
}

#[test]
fn test_capture_effect_returns_frame() {
    let f = Fixture::new();

    f.run_effect.run_effect(Effect::CaptureFrame);

    match f.event_receiver.recv().unwrap() {
        Event::CaptureDone(Ok(frame)) => assert!(!frame.is_empty()),
        event => panic!("Unexpected event {}", event.to_display_string()),
    }
}

#[test]
fn test_read_upload_effect() {
    let f = Fixture::new();
    let path = std::env::temp_dir().join("leaf-gecko-classifier-run-effect.jpg");
    std::fs::write(&path, jpeg_bytes(10, 10)).unwrap();

    f.run_effect.run_effect(Effect::ReadUpload { path: path.clone() });

    match f.event_receiver.recv().unwrap() {
        Event::UploadReadDone(Ok(bytes)) => assert_eq!(bytes, jpeg_bytes(10, 10)),
        event => panic!("Unexpected event {}", event.to_display_string()),
    }

    let _ = std::fs::remove_file(&path);

    f.run_effect.run_effect(Effect::ReadUpload { path });
    assert!(matches!(
        f.event_receiver.recv().unwrap(),
        Event::UploadReadDone(Err(UploadError::Read { .. }))
    ));
}

#[test]
fn test_panicking_effect_still_reports_back() {
    let f = Fixture::with_device_camera(Arc::new(DeviceCameraBroken));

    f.run_effect.run_effect(Effect::CaptureFrame);

    match f.event_receiver.recv().unwrap() {
        Event::EffectPanicked(message) => assert_eq!(message, "camera driver crashed"),
        event => panic!("Unexpected event {}", event.to_display_string()),
    }
}
