use app::main::App;
use config::Config;
use device_camera::impl_command::DeviceCameraCommand;
use image_classifier::model::LoadedModel;
use image_fetcher::impl_reqwest::ImageFetcherReqwest;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use pipeline::main::Pipeline;
use std::sync::Arc;

mod app;
mod config;
mod device_camera;
mod image_classifier;
mod image_fetcher;
mod image_normalizer;
mod image_source;
mod library;
mod pipeline;
mod result_presenter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    // Never serve requests with a partially loaded classifier.
    let model = match LoadedModel::load(&config) {
        Ok(model) => model,
        Err(e) => {
            let _ = logger.error(&format!("Refusing to start: {}", e));
            return Err(e.into());
        }
    };
    let _ = logger.info(&format!(
        "Loaded {} with {} labels",
        config.model.onnx_model_path,
        model.labels().len()
    ));

    let image_fetcher = Arc::new(ImageFetcherReqwest::new(
        config.fetch_timeout,
        logger.clone(),
    )?);

    let device_camera = Arc::new(DeviceCameraCommand::new(
        &config.camera_command,
        config.camera_timeout,
        logger.clone(),
    ));

    let pipeline = Pipeline::new(&config, model, image_fetcher, logger.clone());

    let title = config.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([960.0, 780.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Box::new(App::new(cc, config, logger, pipeline, device_camera))),
    )?;

    Ok(())
}
