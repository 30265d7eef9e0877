pub mod error;
pub mod main;
#[cfg(test)]
mod tests;
