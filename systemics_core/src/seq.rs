/// Systemics — Sequential Composition
///
/// `seq(second, first, kit)` is the composed kernel "second after
/// first". Its trace set is exactly the kit-compatible pairings of a
/// first-kernel trace followed by a second-kernel trace, merged by the
/// kit's constructor. A full bipartite join, not a first-match: every
/// compatible pair contributes one merged trace, with no deduplication.
///
/// Neither kernel emitting traces is not an error — the composed kernel
/// simply emits nothing. No failure path exists here.

use crate::kernel::{Kernel, Traces};
use crate::kit::CompositionKit;

/// Kernel formed by running `first`, feeding each output artifact and
/// envelope into `second`, and merging compatible pairs via the kit.
pub struct SeqKernel<K2, K1, T, U, G, V, D, R, C> {
    second: K2,
    first: K1,
    kit: CompositionKit<T, U, G, V, D, R, C>,
}

/// Sequential kernel composition induced by a `CompositionKit`.
pub fn seq<K2, K1, T, U, G, V, D, R, C>(
    second: K2,
    first: K1,
    kit: CompositionKit<T, U, G, V, D, R, C>,
) -> SeqKernel<K2, K1, T, U, G, V, D, R, C>
where
    K2: Kernel<T, U, G, V, D, R, C>,
    K1: Kernel<T, U, G, V, D, R, C>,
{
    SeqKernel { second, first, kit }
}

impl<K2, K1, T, U, G, V, D, R, C> Kernel<T, U, G, V, D, R, C>
    for SeqKernel<K2, K1, T, U, G, V, D, R, C>
where
    K2: Kernel<T, U, G, V, D, R, C>,
    K1: Kernel<T, U, G, V, D, R, C>,
    T: Clone,
    U: Clone,
    G: Clone,
    V: Clone,
    D: Clone,
    R: Clone,
    C: Clone,
{
    fn exec(&self, t: T, u: U, gamma: G) -> Traces<'_, T, U, G, V, D, R, C> {
        let second = &self.second;
        let kit = &self.kit;

        // Lazy nested join: candidates from `second` are only produced
        // while the caller keeps pulling. Emission order (all matches
        // for one tau1 before the next tau1) is implementation detail,
        // not a law — theories must not depend on it.
        Box::new(self.first.exec(t.clone(), u, gamma).flat_map(move |tau1| {
            let candidates = second.exec(t.clone(), tau1.u_out.clone(), tau1.gamma_out.clone());
            candidates.filter_map(move |tau2| {
                if (kit.compat_seq)(&tau1, &tau2) {
                    Some((kit.compose_seq)(tau2, tau1.clone()))
                } else {
                    None
                }
            })
        }))
    }
}
