#![forbid(unsafe_code)]

/// Milestone 0 — the composition algebra is frozen at this milestone.
/// Behavioral changes to `seq` or the kit contract require milestone 1.
pub const MILESTONE: u32 = 0;

pub mod trace;
pub mod kernel;
pub mod kit;
pub mod seq;
pub mod contract;
pub mod cseq;
pub mod theory;
