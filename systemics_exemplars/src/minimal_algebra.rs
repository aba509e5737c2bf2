//! EX1: Minimal Algebra (finite toy).
//!
//! Small but fully executable:
//!   - finite carriers
//!   - 2 relational kernels
//!   - sequential composition induced by the composition kit
//!   - exhaustive enumeration, no randomness
//!
//! `build` writes a LaTeX report and a JSON law report.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use systemics_core::kernel::{Kernel, Traces};
use systemics_core::kit::CompositionKit;
use systemics_core::seq::seq;
use systemics_core::trace::Trace;

use crate::law::{self, LawReport, Obligation};
use crate::report;

pub const EXEMPLAR_ID: &str = "EX1_minimal_algebra";

// ── Concrete carriers ──────────────────────────────────────────────

/// Finite artifact universe U = {A, B, C}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Artifact {
    A,
    B,
    C,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::A => write!(f, "A"),
            Artifact::B => write!(f, "B"),
            Artifact::C => write!(f, "C"),
        }
    }
}

/// Finite envelope universe Γ = {g0, g1}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Envelope {
    G0,
    G1,
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Envelope::G0 => write!(f, "g0"),
            Envelope::G1 => write!(f, "g1"),
        }
    }
}

/// This exemplar tracks no capacity semantics; the carrier is
/// uninhabited so `c_out` is `None` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoCapacity {}

/// Receipts are strings: canon = lowercase+trim, merge = "second+first".
pub type ToyTrace = Trace<i64, Artifact, Envelope, i64, u8, String, NoCapacity>;
pub type ToyKit = CompositionKit<i64, Artifact, Envelope, i64, u8, String, NoCapacity>;

// ── Receipt algebra ────────────────────────────────────────────────

pub fn canon_receipt(r: String) -> String {
    r.trim().to_lowercase()
}

/// Merge in composition order (second, first); empty sides drop out.
pub fn merge_receipts(r2: String, r1: String) -> String {
    let (r2c, r1c) = (canon_receipt(r2), canon_receipt(r1));
    if r1c.is_empty() {
        return r2c;
    }
    if r2c.is_empty() {
        return r1c;
    }
    format!("{}+{}", r2c, r1c)
}

/// The kit: boundary-matching compatibility, receipt merge as above,
/// merged trace spanning first-step inputs to second-step outputs.
pub fn kit() -> ToyKit {
    CompositionKit::new(|tau1: &ToyTrace, tau2: &ToyTrace| {
        tau1.u_out == tau2.u_in && tau1.gamma_out == tau2.gamma_in
    })
    .with_canon_r(canon_receipt)
    .with_merge_r(merge_receipts)
    .with_compose_seq(|tau2, tau1| {
        Trace::new(
            tau2.t,
            tau1.u_in,
            tau1.gamma_in,
            tau2.u_out,
            tau2.v_out,
            tau2.d_out,
            merge_receipts(tau2.r_out, tau1.r_out),
            None,
            tau2.gamma_out,
        )
    })
}

// ── Kernels ────────────────────────────────────────────────────────

/// Toy kernel K1: A->B and A->C under g0, distinct receipts.
pub struct ForkKernel;

impl Kernel<i64, Artifact, Envelope, i64, u8, String, NoCapacity> for ForkKernel {
    fn exec(
        &self,
        t: i64,
        u: Artifact,
        gamma: Envelope,
    ) -> Traces<'_, i64, Artifact, Envelope, i64, u8, String, NoCapacity> {
        if gamma != Envelope::G0 || u != Artifact::A {
            return Box::new(std::iter::empty());
        }
        Box::new(
            vec![
                Trace::new(
                    t,
                    Artifact::A,
                    Envelope::G0,
                    Artifact::B,
                    1,
                    1,
                    "R1".to_string(),
                    None,
                    Envelope::G0,
                ),
                Trace::new(
                    t,
                    Artifact::A,
                    Envelope::G0,
                    Artifact::C,
                    2,
                    1,
                    "R2".to_string(),
                    None,
                    Envelope::G0,
                ),
            ]
            .into_iter(),
        )
    }
}

/// Toy kernel K2: B->C and C->B under g0.
pub struct SwapKernel;

impl Kernel<i64, Artifact, Envelope, i64, u8, String, NoCapacity> for SwapKernel {
    fn exec(
        &self,
        t: i64,
        u: Artifact,
        gamma: Envelope,
    ) -> Traces<'_, i64, Artifact, Envelope, i64, u8, String, NoCapacity> {
        if gamma != Envelope::G0 {
            return Box::new(std::iter::empty());
        }
        match u {
            Artifact::B => Box::new(std::iter::once(Trace::new(
                t,
                Artifact::B,
                Envelope::G0,
                Artifact::C,
                10,
                1,
                "S1".to_string(),
                None,
                Envelope::G0,
            ))),
            Artifact::C => Box::new(std::iter::once(Trace::new(
                t,
                Artifact::C,
                Envelope::G0,
                Artifact::B,
                20,
                0,
                "S2".to_string(),
                None,
                Envelope::G0,
            ))),
            Artifact::A => Box::new(std::iter::empty()),
        }
    }
}

// ── Build ──────────────────────────────────────────────────────────

fn trace_rows(traces: &[ToyTrace]) -> Vec<Vec<String>> {
    traces
        .iter()
        .map(|tau| {
            vec![
                tau.u_in.to_string(),
                tau.gamma_in.to_string(),
                tau.u_out.to_string(),
                tau.v_out.to_string(),
                tau.d_out.to_string(),
                tau.r_out.clone(),
                tau.gamma_out.to_string(),
            ]
        })
        .collect()
}

/// R0: canon idempotence over the base receipts and every receipt this
/// run actually produced.
fn canon_is_idempotent(traces: &[ToyTrace]) -> bool {
    let mut receipts: Vec<String> = vec!["R1", "R2", "S1", "S2"]
        .into_iter()
        .map(String::from)
        .collect();
    receipts.extend(traces.iter().map(|tau| tau.r_out.clone()));

    receipts.into_iter().all(|r| {
        let once = canon_receipt(r);
        canon_receipt(once.clone()) == once
    })
}

fn render_report(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push_str("% Auto-generated exemplar report: EX1_minimal_algebra\n");
    out.push_str("\\subsubsection*{Instance Declaration}\n");
    out.push_str("\\noindent\n");
    out.push_str("Finite carriers:\n");
    out.push_str("\\begin{itemize}[leftmargin=*]\n");
    out.push_str("  \\item $U=\\{A,B,C\\}$\n");
    out.push_str("  \\item $\\Gamma=\\{g0,g1\\}$\n");
    out.push_str(
        "  \\item receipts $R$ are strings with $\\canon$ = lowercase+trim \
         and merge = concatenation with \\texttt{+}\n",
    );
    out.push_str("\\end{itemize}\n");
    out.push('\n');
    out.push_str("\\subsubsection*{Core Demonstrations}\n");
    out.push_str("\\paragraph{Sequential composition.}\n");
    out.push_str(
        "Let $K_1$ and $K_2$ be the two toy kernels. We form $K_2\\seqc K_1$ \
         using the composition kit.\n",
    );
    out.push_str(
        "The composed kernel has (exhaustively enumerated) traces below for \
         input $A$ under envelope $g0$.\n",
    );
    out.push('\n');
    out.push_str("\\begin{center}\n");
    out.push_str(&report::render_trace_table(
        &[
            "$u_{in}$",
            "$\\gamma_{in}$",
            "$u_{out}$",
            "$v$",
            "$d$",
            "receipt",
            "$\\gamma_{out}$",
        ],
        rows,
    ));
    out.push_str("\\end{center}\n");
    out
}

/// Build the exemplar: run the composed kernel, write `report.tex` and
/// `law_report.json` into `out_dir`, and return the law report.
pub fn build(out_dir: &Path) -> io::Result<LawReport> {
    fs::create_dir_all(out_dir)?;

    let composed = seq(SwapKernel, ForkKernel, kit());
    let traces: Vec<ToyTrace> = composed.exec(0, Artifact::A, Envelope::G0).collect();

    let rows = trace_rows(&traces);
    let r0_holds = canon_is_idempotent(&traces);

    let mut report_tex = render_report(&rows);
    report_tex.push('\n');
    report_tex.push_str("\\subsubsection*{Law Obligations}\n");
    report_tex.push_str("\\begin{tabular}{lll}\n");
    report_tex.push_str("Obligation & Status & Notes\\\\\n");
    report_tex.push_str("\\hline\n");
    report_tex.push_str(&format!(
        "R0 canon idempotence & {} & checked over base and produced receipts\\\\\n",
        if r0_holds { "CHECKED" } else { "FAILED" }
    ));
    report_tex.push_str("\\end{tabular}\n");
    fs::write(out_dir.join("report.tex"), &report_tex)?;

    let law_report = LawReport {
        id: EXEMPLAR_ID.to_string(),
        obligations: vec![Obligation {
            id: "R0_CANON_IDEMPOTENT".to_string(),
            status: if r0_holds { "CHECKED" } else { "FAILED" }.to_string(),
            notes: "canon_r is lowercase+trim; idempotent on all strings".to_string(),
        }],
        trace_count: traces.len(),
        trace_table_hash: law::table_hash(&rows),
    };
    fs::write(
        out_dir.join("law_report.json"),
        serde_json::to_string_pretty(&law_report)?,
    )?;

    Ok(law_report)
}
