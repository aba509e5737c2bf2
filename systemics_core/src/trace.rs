/// Systemics — Trace Witnesses
///
/// Pure data. No behaviour, no composition logic.
/// The library treats kernel semantics relationally: a kernel defines a
/// set of traces, and a trace is the first-class witness of one step.

use serde::{Deserialize, Serialize};

/// One witnessed execution step.
///
/// Carrier parameters (all theory-defined, opaque to the core):
///   - `T` — execution index / time / run id
///   - `U` — artifact
///   - `G` — envelope / regime tag
///   - `V` — valuation
///   - `D` — decision
///   - `R` — receipt (canonicalizable, mergeable)
///   - `C` — capacity witness (optional per trace)
///
/// Immutable once constructed: composition always builds a *new* trace
/// from two existing ones, never mutates a field in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Trace<T, U, G, V, D, R, C> {
    pub t: T,
    pub u_in: U,
    pub gamma_in: G,

    pub u_out: U,
    pub v_out: V,
    pub d_out: D,

    pub r_out: R,
    pub c_out: Option<C>,

    pub gamma_out: G,
}

impl<T, U, G, V, D, R, C> Trace<T, U, G, V, D, R, C> {
    /// Positional constructor, field order matching the struct.
    ///
    /// Construction is total — carrier-specific validation, if any,
    /// is the theory's responsibility.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        t: T,
        u_in: U,
        gamma_in: G,
        u_out: U,
        v_out: V,
        d_out: D,
        r_out: R,
        c_out: Option<C>,
        gamma_out: G,
    ) -> Self {
        Self {
            t,
            u_in,
            gamma_in,
            u_out,
            v_out,
            d_out,
            r_out,
            c_out,
            gamma_out,
        }
    }
}
