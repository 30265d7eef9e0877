#[cfg(test)]
pub mod impl_fake;
pub mod impl_command;
pub mod interface;
