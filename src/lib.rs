//! Smoke test for the CarCheck vehicle API: search each registration
//! number, fetch its analysis and print the scored breakdown.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
