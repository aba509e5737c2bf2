//! Exemplar registry — maps exemplar ids to build functions.
//!
//! Contract: every build function writes `report.tex` and
//! `law_report.json` into the given directory and returns the law
//! report it wrote.

use std::io;
use std::path::Path;

use crate::law::LawReport;
use crate::minimal_algebra;

pub type BuildFn = fn(&Path) -> io::Result<LawReport>;

/// All registered exemplars, in build order.
pub fn all() -> Vec<(&'static str, BuildFn)> {
    vec![(minimal_algebra::EXEMPLAR_ID, minimal_algebra::build as BuildFn)]
}

/// Look up one exemplar by id.
pub fn lookup(id: &str) -> Option<BuildFn> {
    all().into_iter()
        .find(|(name, _)| *name == id)
        .map(|(_, build)| build)
}
