//! Application layer - Use cases and orchestration

pub mod chirps;
pub mod init;

pub use chirps::ChirpService;
pub use init::{init, InitOutcome};
