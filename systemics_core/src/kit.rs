/// Systemics — Composition Kit
///
/// The composition alignment principle made concrete: one bundle of
/// pure functions defines how two trace witnesses merge into one. A
/// theory builds exactly one kit and shares it, read-only, across every
/// kernel composed against it.
///
/// Laws the theory author must uphold (checked by test suites, not here):
///   - `canon_r` is idempotent: canon(canon(r)) == canon(r)
///   - `merge_r` takes (second, first) — composition reads right-to-left

use std::sync::Arc;

use crate::trace::Trace;

/// Compatibility predicate over an ordered pair of traces.
pub type CompatFn<T, U, G, V, D, R, C> = Arc<
    dyn Fn(&Trace<T, U, G, V, D, R, C>, &Trace<T, U, G, V, D, R, C>) -> bool + Send + Sync,
>;

/// Receipt canonicalizer.
pub type CanonFn<R> = Arc<dyn Fn(R) -> R + Send + Sync>;

/// Binary merge operator, (second, first) argument order.
pub type MergeFn<X> = Arc<dyn Fn(X, X) -> X + Send + Sync>;

/// Merged-trace constructor, (second, first) argument order.
pub type ComposeFn<T, U, G, V, D, R, C> = Arc<
    dyn Fn(Trace<T, U, G, V, D, R, C>, Trace<T, U, G, V, D, R, C>) -> Trace<T, U, G, V, D, R, C>
        + Send
        + Sync,
>;

/// The six-slot function bundle driving composition.
///
/// Owns no mutable state; cloning is cheap (Arc clones) and every clone
/// shares the same functions.
pub struct CompositionKit<T, U, G, V, D, R, C> {
    // compatibility predicates
    pub compat_seq: CompatFn<T, U, G, V, D, R, C>,
    pub compat_par: Option<CompatFn<T, U, G, V, D, R, C>>,

    // receipt canonicalization / merge
    pub canon_r: CanonFn<R>,
    pub merge_r: MergeFn<R>,

    // capacity merge (optional)
    pub merge_c: Option<MergeFn<C>>,

    // trace constructors
    pub compose_seq: ComposeFn<T, U, G, V, D, R, C>,
    pub compose_par: Option<ComposeFn<T, U, G, V, D, R, C>>,
}

impl<T, U, G, V, D, R, C> CompositionKit<T, U, G, V, D, R, C>
where
    T: 'static,
    U: 'static,
    G: 'static,
    V: 'static,
    D: 'static,
    R: 'static,
    C: 'static,
{
    /// Build a kit from its one required slot.
    ///
    /// Defaults for the remaining slots:
    ///   - `canon_r`: identity
    ///   - `merge_r`: keep the second receipt
    ///   - `compose_seq`: keep the second trace unchanged
    ///   - `compat_par`, `merge_c`, `compose_par`: absent
    pub fn new<F>(compat_seq: F) -> Self
    where
        F: Fn(&Trace<T, U, G, V, D, R, C>, &Trace<T, U, G, V, D, R, C>) -> bool
            + Send
            + Sync
            + 'static,
    {
        Self {
            compat_seq: Arc::new(compat_seq),
            compat_par: None,
            canon_r: Arc::new(|r| r),
            merge_r: Arc::new(|r2, _r1| r2),
            merge_c: None,
            compose_seq: Arc::new(|tau2, _tau1| tau2),
            compose_par: None,
        }
    }

    /// Replace the receipt canonicalizer. Must be idempotent.
    pub fn with_canon_r<F>(mut self, canon_r: F) -> Self
    where
        F: Fn(R) -> R + Send + Sync + 'static,
    {
        self.canon_r = Arc::new(canon_r);
        self
    }

    /// Replace the receipt merge operator, (second, first) order.
    pub fn with_merge_r<F>(mut self, merge_r: F) -> Self
    where
        F: Fn(R, R) -> R + Send + Sync + 'static,
    {
        self.merge_r = Arc::new(merge_r);
        self
    }

    /// Replace the sequential merged-trace constructor.
    pub fn with_compose_seq<F>(mut self, compose_seq: F) -> Self
    where
        F: Fn(Trace<T, U, G, V, D, R, C>, Trace<T, U, G, V, D, R, C>) -> Trace<T, U, G, V, D, R, C>
            + Send
            + Sync
            + 'static,
    {
        self.compose_seq = Arc::new(compose_seq);
        self
    }

    /// Supply the parallel compatibility predicate (extension slot).
    pub fn with_compat_par<F>(mut self, compat_par: F) -> Self
    where
        F: Fn(&Trace<T, U, G, V, D, R, C>, &Trace<T, U, G, V, D, R, C>) -> bool
            + Send
            + Sync
            + 'static,
    {
        self.compat_par = Some(Arc::new(compat_par));
        self
    }

    /// Supply the capacity merge operator (extension slot).
    pub fn with_merge_c<F>(mut self, merge_c: F) -> Self
    where
        F: Fn(C, C) -> C + Send + Sync + 'static,
    {
        self.merge_c = Some(Arc::new(merge_c));
        self
    }

    /// Supply the parallel merged-trace constructor (extension slot).
    pub fn with_compose_par<F>(mut self, compose_par: F) -> Self
    where
        F: Fn(Trace<T, U, G, V, D, R, C>, Trace<T, U, G, V, D, R, C>) -> Trace<T, U, G, V, D, R, C>
            + Send
            + Sync
            + 'static,
    {
        self.compose_par = Some(Arc::new(compose_par));
        self
    }
}

// Derived Clone would demand Clone on every carrier; the kit only holds
// Arcs, so clone by hand.
impl<T, U, G, V, D, R, C> Clone for CompositionKit<T, U, G, V, D, R, C> {
    fn clone(&self) -> Self {
        Self {
            compat_seq: Arc::clone(&self.compat_seq),
            compat_par: self.compat_par.clone(),
            canon_r: Arc::clone(&self.canon_r),
            merge_r: Arc::clone(&self.merge_r),
            merge_c: self.merge_c.clone(),
            compose_seq: Arc::clone(&self.compose_seq),
            compose_par: self.compose_par.clone(),
        }
    }
}
