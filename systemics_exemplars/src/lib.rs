#![forbid(unsafe_code)]

//! Systemics — Exemplar Surface
//!
//! Instantiates concrete theories over the frozen algebra core, runs
//! their kernels, and renders LaTeX + JSON law reports.
//!
//! No algebra logic lives here — composition and contract semantics
//! are delegated to `systemics_core`.

pub mod minimal_algebra;
pub mod report;
pub mod law;
pub mod registry;
