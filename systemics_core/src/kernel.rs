/// Systemics — Kernel Capability
///
/// A kernel is anything that, given a run index, an input artifact, and
/// an enclosing envelope tag, produces a lazy sequence of trace
/// witnesses. Deterministic kernels are the special case that emit 0 or
/// 1 traces per call.

use crate::trace::Trace;

/// Lazy trace sequence produced by one `exec` call.
///
/// Finite in every shipped theory; a kernel that never stops emitting is
/// the caller's responsibility to bound.
pub type Traces<'a, T, U, G, V, D, R, C> =
    Box<dyn Iterator<Item = Trace<T, U, G, V, D, R, C>> + 'a>;

/// Relational kernel semantics.
///
/// Rules:
///   - An empty sequence means "not applicable for this (u, gamma)".
///     That is the normal expression of partiality, never an error.
///   - No side effects: `exec` must be a pure function of its arguments,
///     safe to invoke again with the same inputs.
///   - No ordering guarantee on the emitted traces beyond "as yielded".
pub trait Kernel<T, U, G, V, D, R, C> {
    fn exec(&self, t: T, u: U, gamma: G) -> Traces<'_, T, U, G, V, D, R, C>;
}
