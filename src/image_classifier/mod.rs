#[cfg(test)]
pub mod impl_fake;
pub mod impl_tract_onnx;
pub mod interface;
pub mod labels;
pub mod model;
pub mod models;
