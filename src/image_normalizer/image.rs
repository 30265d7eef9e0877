use crate::image_normalizer::interface::{DecodeError, NormalizedImage, PreviewImage};
use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    let decoded = image::load_from_memory(bytes).map_err(DecodeError)?;

    // Drops alpha and expands grayscale.
    Ok(DynamicImage::ImageRgb8(decoded.to_rgb8()))
}

/// Center-crops to the target aspect ratio, then resizes with Lanczos3, so
/// the box is always filled and never letterboxed.
///
/// The crop box is rounded to whole pixels before resampling. PIL's
/// `ImageOps.fit` resamples from a fractional box instead, so for some aspect
/// ratios the two differ by up to half a source pixel at the edges.
pub fn resize_image(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let (src_w, src_h) = (image.width().max(1), image.height().max(1));
    let target_ratio = width as f64 / height as f64;
    let src_ratio = src_w as f64 / src_h as f64;

    let (crop_w, crop_h) = if src_ratio > target_ratio {
        let w = (src_h as f64 * target_ratio).round().max(1.0) as u32;
        (w.min(src_w), src_h)
    } else {
        let h = (src_w as f64 / target_ratio).round().max(1.0) as u32;
        (src_w, h.min(src_h))
    };

    let x_offset = (src_w - crop_w) / 2;
    let y_offset = (src_h - crop_h) / 2;

    image
        .crop_imm(x_offset, y_offset, crop_w, crop_h)
        .resize_exact(width, height, imageops::FilterType::Lanczos3)
}

fn image_to_tensor(image: &DynamicImage) -> NormalizedImage {
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    let tensor = tract_ndarray::Array4::from_shape_fn((1, height, width, 3), |(_, y, x, c)| {
        let pixel = rgb.get_pixel(x as u32, y as u32);
        f32::from(pixel[c]) / 127.5 - 1.0
    });

    NormalizedImage::new(tensor)
}

pub fn resize_image_to_tensor(image: &DynamicImage, width: u32, height: u32) -> NormalizedImage {
    let resized = resize_image(image, width, height);
    image_to_tensor(&resized)
}

pub fn preview_image(image: &DynamicImage, max_side: u32) -> PreviewImage {
    let rgb = if image.width() > max_side || image.height() > max_side {
        image.thumbnail(max_side, max_side).to_rgb8()
    } else {
        image.to_rgb8()
    };

    PreviewImage {
        width: rgb.width(),
        height: rgb.height(),
        rgb: rgb.into_raw(),
    }
}
