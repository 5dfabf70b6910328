//! Core data types and structures

pub mod addresses;
pub mod swap;

pub use addresses::*;
pub use swap::*;
