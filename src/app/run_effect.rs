use crate::app::core::{Effect, Event};
use crate::device_camera::interface::DeviceCamera;
use crate::image_source::upload::read_upload;
use crate::library::logger::interface::Logger;
use crate::pipeline::main::Pipeline;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    pipeline: Pipeline,
    device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    event_sender: Sender<Event>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        pipeline: Pipeline,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        event_sender: Sender<Event>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("run_effect"),
            pipeline,
            device_camera,
            event_sender,
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        // A panicking worker must still report back or the window stays busy.
        let event = match catch_unwind(AssertUnwindSafe(|| self.effect_to_event(effect))) {
            Ok(event) => event,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                let _ = self
                    .logger
                    .error(&format!("Effect panicked: {}", message));
                Event::EffectPanicked(message)
            }
        };

        if self.event_sender.send(event).is_err() {
            let _ = self.logger.error("Event receiver dropped, result discarded");
        }
    }

    fn effect_to_event(&self, effect: Effect) -> Event {
        match effect {
            Effect::ReadUpload { path } => Event::UploadReadDone(read_upload(&path)),
            Effect::CaptureFrame => Event::CaptureDone(self.device_camera.capture_frame()),
            Effect::Process { source } => Event::ProcessDone(self.pipeline.run(source)),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}
