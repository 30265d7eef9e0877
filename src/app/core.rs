use crate::config::Config;
use crate::device_camera::interface::CameraError;
use crate::image_source::interface::{ImageSource, InputMethod, UploadError};
use crate::image_source::upload::{check_extension, UploadedFile};
use crate::pipeline::error::{FailureKind, PipelineError};
use crate::pipeline::main::ClassificationReport;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Status {
    #[default]
    Idle,
    ReadingUpload,
    Capturing,
    Processing {
        input_method: InputMethod,
    },
    Done {
        report: Arc<ClassificationReport>,
    },
    Failed {
        kind: FailureKind,
        message: String,
    },
}

impl Status {
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            Status::ReadingUpload | Status::Capturing | Status::Processing { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct State {
    pub input_method: InputMethod,
    pub url_draft: String,
    pub upload_path_draft: String,
    pub status: Status,
}

#[derive(Debug)]
pub enum Event {
    InputMethodSelected(InputMethod),
    UrlEdited(String),
    UrlSubmitted,
    UploadPathEdited(String),
    UploadPathSubmitted,
    FileDropped(UploadedFile),
    UploadReadDone(Result<Vec<u8>, UploadError>),
    CaptureRequested,
    CaptureDone(Result<Vec<u8>, CameraError>),
    ProcessDone(Result<ClassificationReport, PipelineError>),
    EffectPanicked(String),
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::FileDropped(file) => format!("FileDropped({})", file.to_display_string()),
            Event::UploadReadDone(Ok(bytes)) => format!("UploadReadDone(Ok({} bytes))", bytes.len()),
            Event::CaptureDone(Ok(bytes)) => format!("CaptureDone(Ok({} bytes))", bytes.len()),
            Event::ProcessDone(Ok(report)) => {
                format!("ProcessDone(Ok({}))", report.to_display_string())
            }
            event => format!("{:?}", event),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ReadUpload { path: PathBuf },
    CaptureFrame,
    Process { source: ImageSource },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::Process { source } => {
                format!("Process {{ source: {} }}", source.to_display_string())
            }
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init() -> (State, Vec<Effect>) {
    (State::default(), vec![])
}

pub fn transition(config: &Config, state: State, event: Event) -> (State, Vec<Effect>) {
    match event {
        Event::UrlEdited(url_draft) => (State { url_draft, ..state }, vec![]),
        Event::UploadPathEdited(upload_path_draft) => (
            State {
                upload_path_draft,
                ..state
            },
            vec![],
        ),

        // Switching source drops whatever result was on screen.
        Event::InputMethodSelected(input_method) if !state.status.is_busy() => (
            State {
                input_method,
                status: Status::Idle,
                ..state
            },
            vec![],
        ),

        // Upload
        Event::UploadPathSubmitted if can_start(&state, InputMethod::Upload) => {
            let path = state.upload_path_draft.trim().to_string();
            if path.is_empty() {
                (state, vec![])
            } else {
                start_upload(config, state, UploadedFile::from_path(Path::new(&path)))
            }
        }
        Event::FileDropped(file) if can_start(&state, InputMethod::Upload) => {
            start_upload(config, state, file)
        }
        Event::UploadReadDone(result) if matches!(state.status, Status::ReadingUpload) => {
            match result {
                Ok(bytes) => process(state, ImageSource::Upload(bytes)),
                Err(e) => fail(state, FailureKind::Upload, e.to_string()),
            }
        }

        // Camera
        Event::CaptureRequested if can_start(&state, InputMethod::Camera) => {
            (with_status(state, Status::Capturing), vec![Effect::CaptureFrame])
        }
        Event::CaptureDone(result) if matches!(state.status, Status::Capturing) => match result {
            Ok(bytes) => process(state, ImageSource::Camera(bytes)),
            Err(e) => fail(state, FailureKind::Camera, e.to_string()),
        },

        // URL
        Event::UrlSubmitted if can_start(&state, InputMethod::Url) => {
            let url = state.url_draft.trim().to_string();
            if url.is_empty() {
                (state, vec![])
            } else {
                process(state, ImageSource::Url(url))
            }
        }

        Event::ProcessDone(result) if matches!(state.status, Status::Processing { .. }) => {
            match result {
                Ok(report) => (
                    with_status(
                        state,
                        Status::Done {
                            report: Arc::new(report),
                        },
                    ),
                    vec![],
                ),
                Err(e) => fail(state, e.kind(), e.to_string()),
            }
        }

        Event::EffectPanicked(message) if state.status.is_busy() => {
            fail(state, FailureKind::Internal, message)
        }

        _ => (state, vec![]),
    }
}

fn can_start(state: &State, input_method: InputMethod) -> bool {
    state.input_method == input_method && !state.status.is_busy()
}

fn with_status(state: State, status: Status) -> State {
    State { status, ..state }
}

fn process(state: State, source: ImageSource) -> (State, Vec<Effect>) {
    (
        with_status(
            state,
            Status::Processing {
                input_method: source.input_method(),
            },
        ),
        vec![Effect::Process { source }],
    )
}

fn fail(state: State, kind: FailureKind, message: String) -> (State, Vec<Effect>) {
    (with_status(state, Status::Failed { kind, message }), vec![])
}

fn start_upload(config: &Config, state: State, file: UploadedFile) -> (State, Vec<Effect>) {
    if let Err(e) = check_extension(&file.name, &config.accepted_upload_extensions) {
        return fail(state, FailureKind::Upload, e.to_string());
    }

    match (file.bytes, file.path) {
        (Some(bytes), _) if !bytes.is_empty() => process(state, ImageSource::Upload(bytes)),
        (_, Some(path)) => (
            with_status(state, Status::ReadingUpload),
            vec![Effect::ReadUpload { path }],
        ),
        // Nothing usable was chosen.
        _ => (state, vec![]),
    }
}
