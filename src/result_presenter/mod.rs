pub mod chart;
pub mod present;
pub mod tier;
