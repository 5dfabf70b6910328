//! The swap pipeline: amount generation, approvals, single swaps, and the
//! two-hop chain

pub mod amount;
pub mod approval;
pub mod orchestrator;
pub mod step;

pub use amount::*;
pub use approval::*;
pub use orchestrator::*;
pub use step::*;
