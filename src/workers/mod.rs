pub mod command_runner;
pub mod smoke_runner;
