#[cfg(test)]
pub mod impl_fake;
pub mod impl_reqwest;
pub mod interface;
