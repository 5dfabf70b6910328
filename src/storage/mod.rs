//! Data persistence and file operations

pub mod preferences;

pub use preferences::*;
