//! chirpy - Short text records in a single JSON file
//!
//! A small persistent store that appends chirps with sequential ids to a
//! pretty-printed JSON file and lists them back in id order.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ChirpyError;
