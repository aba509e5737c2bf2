/// Systemics — Sequential Contract Composition (open stub)
///
/// "A composed trace satisfies cseq(C2, C1) iff it can be exhibited as
/// a kit-composition of some compatible tau1 satisfying C1 and some
/// tau2 satisfying C2."
///
/// From an opaque merged trace alone that existential witness is not
/// recoverable in general, so evaluation refuses with an explicit
/// signal every time. This is a deliberate placeholder: do not replace
/// the refusal with a guessed boolean. Theories that need the operator
/// supply their own decomposition (explicitly structured traces, or an
/// injective `compose_seq`).

use crate::contract::{Contract, ContractError};
use crate::kit::CompositionKit;
use crate::trace::Trace;

/// The composed contract "second after first" under a kit.
///
/// Holding the operands and the kit keeps the intended semantics in
/// the value even though evaluation is unsupported at this milestone.
pub struct SeqContract<C2, C1, T, U, G, V, D, R, C> {
    second: C2,
    first: C1,
    kit: CompositionKit<T, U, G, V, D, R, C>,
}

/// Sequential contract composition induced by the same kit as `seq`.
pub fn cseq<C2, C1, T, U, G, V, D, R, C>(
    second: C2,
    first: C1,
    kit: CompositionKit<T, U, G, V, D, R, C>,
) -> SeqContract<C2, C1, T, U, G, V, D, R, C>
where
    C2: Contract<T, U, G, V, D, R, C>,
    C1: Contract<T, U, G, V, D, R, C>,
{
    SeqContract { second, first, kit }
}

impl<C2, C1, T, U, G, V, D, R, C> Contract<T, U, G, V, D, R, C>
    for SeqContract<C2, C1, T, U, G, V, D, R, C>
where
    C2: Contract<T, U, G, V, D, R, C>,
    C1: Contract<T, U, G, V, D, R, C>,
{
    fn holds(&self, _tau: &Trace<T, U, G, V, D, R, C>) -> Result<bool, ContractError> {
        // Operands and kit are intentionally unused until a
        // decomposition strategy exists.
        let _ = (&self.second, &self.first, &self.kit);
        Err(ContractError::UnsupportedDecomposition)
    }
}
