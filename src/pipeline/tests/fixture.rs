use crate::config::Config;
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_classifier::labels::LabelSet;
use crate::image_classifier::model::LoadedModel;
use crate::image_fetcher::impl_fake::ImageFetcherFake;
use crate::library::logger::{impl_console::LoggerConsole, interface::Logger};
use crate::pipeline::main::Pipeline;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use std::io::Cursor;
use std::sync::Arc;

pub const IMAGE_URL: &str = "https://example.com/leaf.png";
pub const TEXT_URL: &str = "https://example.com/notes.txt";

#[allow(dead_code)]
pub struct Fixture {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub image_classifier: Arc<ImageClassifierFake>,
    pub image_fetcher: Arc<ImageFetcherFake>,
    pub pipeline: Pipeline,
}

impl Fixture {
    pub fn new() -> Self {
        let config = Config::default();
        let logger: Arc<dyn Logger + Send + Sync> =
            Arc::new(LoggerConsole::new(config.logger_timezone));
        let image_classifier = Arc::new(ImageClassifierFake::new(vec![0.1, 0.7, 0.2]));
        let image_fetcher = Arc::new(
            ImageFetcherFake::new()
                .with_response(IMAGE_URL, png_bytes(640, 480))
                .with_response(TEXT_URL, b"just some text".to_vec()),
        );
        let model = LoadedModel::new(image_classifier.clone(), LabelSet::from(vec!["A", "B", "C"]))
            .unwrap();
        let pipeline = Pipeline::new(&config, model, image_fetcher.clone(), logger.clone());

        Self {
            config,
            logger,
            image_classifier,
            image_fetcher,
            pipeline,
        }
    }
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8])
    });

    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}
