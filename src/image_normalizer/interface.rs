use thiserror::Error;
use tract_onnx::prelude::*;

#[derive(Error, Debug)]
#[error("could not decode image: {0}")]
pub struct DecodeError(#[source] pub ::image::ImageError);

/// Model input: a batch of one NHWC image, every value in `[-1, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedImage {
    tensor: tract_ndarray::Array4<f32>,
}

impl NormalizedImage {
    pub fn new(tensor: tract_ndarray::Array4<f32>) -> Self {
        Self { tensor }
    }

    pub fn shape(&self) -> &[usize] {
        self.tensor.shape()
    }

    pub fn as_array(&self) -> &tract_ndarray::Array4<f32> {
        &self.tensor
    }

    pub fn to_tensor(&self) -> Tensor {
        self.as_array().clone().into_tensor()
    }
}

/// Display-sized RGB8 copy of the acquired image.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}
