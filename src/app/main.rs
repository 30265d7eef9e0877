use crate::app::core::{init, transition, Effect, Event, State, Status};
use crate::app::fonts::install_font;
use crate::app::render::render;
use crate::app::run_effect::RunEffect;
use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::image_source::upload::UploadedFile;
use crate::library::logger::interface::Logger;
use crate::pipeline::main::{ClassificationReport, Pipeline};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

pub struct App {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    state: State,
    run_effect: RunEffect,
    event_receiver: Receiver<Event>,
    preview: Option<(Arc<ClassificationReport>, egui::TextureHandle)>,
}

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        pipeline: Pipeline,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    ) -> Self {
        let logger = logger.with_namespace("app");
        install_font(&cc.egui_ctx, config.font_path.as_deref(), &logger);

        let (event_sender, event_receiver) = channel();
        let run_effect = RunEffect::new(logger.clone(), pipeline, device_camera, event_sender);
        let (state, effects) = init();

        let app = Self {
            config,
            logger,
            state,
            run_effect,
            event_receiver,
            preview: None,
        };
        app.spawn_effects(&cc.egui_ctx, effects);
        app
    }

    fn spawn_effects(&self, ctx: &egui::Context, effects: Vec<Effect>) {
        for effect in effects {
            let run_effect = self.run_effect.clone();
            let ctx = ctx.clone();
            std::thread::spawn(move || {
                run_effect.run_effect(effect);
                ctx.request_repaint();
            });
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, event: Event) {
        let _ = self
            .logger
            .info(&format!("event: {}", event.to_display_string()));

        let state = std::mem::take(&mut self.state);
        let (new_state, effects) = transition(&self.config, state, event);

        let _ = self.logger.info(&format!(
            "status: {}, effects: {:?}",
            status_name(&new_state.status),
            effects
                .iter()
                .map(Effect::to_display_string)
                .collect::<Vec<_>>()
        ));

        self.state = new_state;
        self.spawn_effects(ctx, effects);
    }

    fn preview_texture(&mut self, ctx: &egui::Context) -> Option<egui::TextureHandle> {
        let Status::Done { report } = &self.state.status else {
            self.preview = None;
            return None;
        };

        if let Some((cached, texture)) = &self.preview {
            if Arc::ptr_eq(cached, report) {
                return Some(texture.clone());
            }
        }

        let preview = &report.preview;
        let image = egui::ColorImage::from_rgb(
            [preview.width as usize, preview.height as usize],
            &preview.rgb,
        );
        let texture = ctx.load_texture("preview", image, egui::TextureOptions::LINEAR);
        self.preview = Some((report.clone(), texture.clone()));
        Some(texture)
    }
}

fn status_name(status: &Status) -> &'static str {
    match status {
        Status::Idle => "Idle",
        Status::ReadingUpload => "ReadingUpload",
        Status::Capturing => "Capturing",
        Status::Processing { .. } => "Processing",
        Status::Done { .. } => "Done",
        Status::Failed { .. } => "Failed",
    }
}

fn uploaded_file(dropped: egui::DroppedFile) -> UploadedFile {
    let name = match (&dropped.path, dropped.name.is_empty()) {
        (Some(path), true) => UploadedFile::from_path(path).name,
        _ => dropped.name.clone(),
    };

    UploadedFile {
        name,
        bytes: dropped.bytes.map(|bytes| bytes.to_vec()),
        path: dropped.path,
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let finished: Vec<Event> = self.event_receiver.try_iter().collect();
        for event in finished {
            self.dispatch(ctx, event);
        }

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            self.dispatch(ctx, Event::FileDropped(uploaded_file(file)));
        }

        let preview = self.preview_texture(ctx);
        let events = render(ctx, &self.config, &self.state, preview.as_ref());
        for event in events {
            self.dispatch(ctx, event);
        }
    }
}
