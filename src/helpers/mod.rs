pub mod breakdown;
pub mod config_helper;
pub mod formatting;
