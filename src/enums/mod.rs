pub mod commands;
pub mod request_stage;
pub mod vehicle_outcome;
