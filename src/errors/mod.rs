//! Error handling

pub mod bot_error;

pub use bot_error::*;
