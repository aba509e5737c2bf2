/// Systemics — Theory Record
///
/// A theory instance packaged as a single value: the universe carriers
/// are implicit in the type parameters, and all composition operators
/// are induced from the provided kit plus optional enrichments.

use std::any::Any;
use std::sync::Arc;

use crate::kit::CompositionKit;

/// One theory: a kit plus enrichment slots.
///
/// The enrichment slots are intentionally untyped in milestone 0; they
/// reserve room for stability, capacity, and evidence structure without
/// committing to a shape yet.
pub struct SystemicsTheory<T, U, G, V, D, R, C> {
    pub kit: CompositionKit<T, U, G, V, D, R, C>,

    pub stability: Option<Arc<dyn Any + Send + Sync>>,
    pub capacity: Option<Arc<dyn Any + Send + Sync>>,
    pub evidence: Option<Arc<dyn Any + Send + Sync>>,
}

// Manual Clone for the same reason as the kit: only Arcs are cloned,
// so no carrier bounds are needed.
impl<T, U, G, V, D, R, C> Clone for SystemicsTheory<T, U, G, V, D, R, C> {
    fn clone(&self) -> Self {
        Self {
            kit: self.kit.clone(),
            stability: self.stability.clone(),
            capacity: self.capacity.clone(),
            evidence: self.evidence.clone(),
        }
    }
}

impl<T, U, G, V, D, R, C> SystemicsTheory<T, U, G, V, D, R, C> {
    /// Package a kit with every enrichment slot empty.
    pub fn new(kit: CompositionKit<T, U, G, V, D, R, C>) -> Self {
        Self {
            kit,
            stability: None,
            capacity: None,
            evidence: None,
        }
    }
}
