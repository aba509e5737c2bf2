/// Systemics — Contracts
///
/// A contract classifies whether a trace satisfies a theory's
/// obligation. Stateless, pure, no identity beyond its logic.

use thiserror::Error;

use crate::trace::Trace;

/// Failures of contract evaluation.
///
/// Deliberately minimal: the only expected failure in milestone 0 is
/// the open sequential-decomposition problem. Callers decide what the
/// signal means for their theory; the core never retries or logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// Sequential contract composition was asked to decompose an opaque
    /// composed trace. No general strategy exists; theories must bring
    /// their own (structured traces, or an injective `compose_seq`).
    #[error(
        "cseq requires a decomposition strategy or structured traces; \
         provide a theory-specific implementation"
    )]
    UnsupportedDecomposition,
}

/// Predicate over traces, with an explicit error channel so composed
/// contracts can refuse rather than guess.
pub trait Contract<T, U, G, V, D, R, C> {
    fn holds(&self, tau: &Trace<T, U, G, V, D, R, C>) -> Result<bool, ContractError>;
}

// Any plain predicate is a contract; it never fails.
impl<F, T, U, G, V, D, R, C> Contract<T, U, G, V, D, R, C> for F
where
    F: Fn(&Trace<T, U, G, V, D, R, C>) -> bool,
{
    fn holds(&self, tau: &Trace<T, U, G, V, D, R, C>) -> Result<bool, ContractError> {
        Ok(self(tau))
    }
}
