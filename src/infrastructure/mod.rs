//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod database;
pub mod logging;

pub use config::Config;
pub use database::{ChirpRepository, JsonFileDatabase};
