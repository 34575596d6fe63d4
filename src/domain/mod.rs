//! Domain layer - Records and persisted layout

pub mod chirp;

pub use chirp::{Chirp, DbStructure};
