pub mod interface;
pub mod upload;
