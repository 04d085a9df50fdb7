//! Loading test cases from JSON
//!
//! A test case is a JSON object with a `keys` entry holding `n` and `k`, and
//! one entry per present share keyed by its 1-based index:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "6": { "base": 4, "value": "213" }
//! }
//! ```
//!
//! `n`, `k` and `base` may be JSON numbers or numeric strings.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{CaseParams, Share, ShareIndex, TestCase};
use crate::error::SolveError;

#[derive(Debug, Deserialize)]
struct RawTestCase {
    keys: RawKeys,
    #[serde(flatten)]
    shares: BTreeMap<String, RawShare>,
}

#[derive(Debug, Deserialize)]
struct RawKeys {
    n: RawNumber,
    k: RawNumber,
}

#[derive(Debug, Deserialize)]
struct RawShare {
    base: RawNumber,
    value: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(u64),
    Text(String),
}

impl RawNumber {
    fn parse(&self, field: &str) -> Result<u64, SolveError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => text.trim().parse().map_err(|_| {
                SolveError::malformed(format!("{field} is not a valid number: '{text}'"))
            }),
        }
    }
}

/// Share keys are plain decimal digits; signs, padding and the like are rejected
fn parse_index_key(key: &str) -> Result<u64, SolveError> {
    let unexpected =
        || SolveError::malformed(format!("unexpected key '{key}', expected a share index"));
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(unexpected());
    }
    key.parse().map_err(|_| unexpected())
}

impl RawTestCase {
    fn into_test_case(self) -> Result<TestCase, SolveError> {
        let n = self.keys.n.parse("n")?;
        let k = usize::try_from(self.keys.k.parse("k")?)
            .map_err(|_| SolveError::malformed("k does not fit in memory"))?;
        let params = CaseParams::from_raw(n, k)?;

        let shares = self
            .shares
            .into_iter()
            .map(|(key, raw)| {
                let index = parse_index_key(&key)?;
                let index = ShareIndex::new(index)?;
                let base = raw.base.parse(&format!("base of share {index}"))?;
                let base = u32::try_from(base).map_err(|_| SolveError::InvalidBase {
                    index: Some(*index),
                    base: u32::MAX,
                })?;
                Ok(Share::new(index, base, raw.value))
            })
            .collect::<Result<Vec<_>, SolveError>>()?;

        TestCase::new(params, shares)
    }
}

impl TestCase {
    /// Parses a test case from a JSON document
    ///
    /// # Errors
    /// Returns [`SolveError::MalformedTestCase`] if the document is not valid
    /// JSON, is missing `keys`, `n`, `k` or a share field, or uses a key that
    /// is not a positive share index
    pub fn from_json(json: &str) -> Result<Self, SolveError> {
        let raw: RawTestCase = serde_json::from_str(json)
            .map_err(|e| SolveError::malformed(format!("invalid test case JSON: {e}")))?;
        raw.into_test_case()
    }
}

/// Reads and parses a test case file (one case per file)
///
/// # Errors
/// Returns [`SolveError::MalformedTestCase`] naming the path if the file cannot
/// be read, and otherwise the errors of [`TestCase::from_json`]
pub fn load_test_case(path: &Path) -> Result<TestCase, SolveError> {
    let json = fs::read_to_string(path)
        .map_err(|e| SolveError::malformed(format!("cannot read {}: {e}", path.display())))?;
    TestCase::from_json(&json)
}
