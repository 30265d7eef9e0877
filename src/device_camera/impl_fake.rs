use crate::device_camera::interface::{CameraError, DeviceCamera};
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use std::io::Cursor;

/// Produces a synthetic PNG frame of the given size.
pub struct DeviceCameraFake {
    width: u32,
    height: u32,
}

impl DeviceCameraFake {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn capture_frame(&self) -> Result<Vec<u8>, CameraError> {
        let frame = ImageBuffer::from_fn(self.width, self.height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });

        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(frame)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|_| CameraError::EmptyFrame)?;

        Ok(bytes)
    }
}
