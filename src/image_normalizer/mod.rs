pub mod image;
pub mod interface;
