//! Law reports — deterministic JSON artifact + canonical table hashing.
//!
//! Rules:
//!   - Canonical serialization is UTF-8 JSON, no whitespace
//!   - Rows in emission order, cells in column order
//!   - SHA-256, lowercase hex — byte-identical across platforms

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// One law obligation line: id, status (CHECKED | FAILED | AXIOM), notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Obligation {
    pub id: String,
    pub status: String,
    pub notes: String,
}

/// The JSON artifact every exemplar build returns and writes.
///
/// `trace_table_hash` binds the report to the exact trace table that
/// was rendered, so cross-run drift is detectable by hash comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LawReport {
    pub id: String,
    pub obligations: Vec<Obligation>,
    pub trace_count: usize,
    pub trace_table_hash: String,
}

/// Canonical serialization of a rendered trace table to UTF-8 JSON
/// bytes: an array of string rows, no whitespace.
pub fn canonical_serialize(rows: &[Vec<String>]) -> Vec<u8> {
    let arr = Value::Array(
        rows.iter()
            .map(|row| Value::Array(row.iter().cloned().map(Value::String).collect()))
            .collect(),
    );
    serde_json::to_string(&arr)
        .expect("canonical_serialize: JSON serialization failed")
        .into_bytes()
}

/// SHA-256 of the canonical serialization. Lowercase hex string.
pub fn table_hash(rows: &[Vec<String>]) -> String {
    let bytes = canonical_serialize(rows);
    let digest = Sha256::digest(&bytes);
    digest
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<String>()
}
