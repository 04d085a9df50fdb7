//! Error taxonomy for secret reconstruction

use num_bigint::BigInt;

/// Everything that can go wrong while solving a single test case
///
/// Errors are local to one case; a batch keeps going after any of them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error(
        "invalid digit '{digit}' at position {position} for base {base}{}",
        share_suffix(.index)
    )]
    InvalidDigit {
        index: Option<u64>,
        digit: char,
        position: usize,
        base: u32,
    },

    #[error("base {base} is outside the supported range 2..=36{}", share_suffix(.index))]
    InvalidBase { index: Option<u64>, base: u32 },

    #[error("share value is empty{}", share_suffix(.index))]
    EmptyDigits { index: Option<u64> },

    #[error("insufficient points: need {required}, but only {available} available")]
    InsufficientPoints { required: usize, available: usize },

    #[error("degenerate input: x = {x} appears more than once")]
    DegenerateInput { x: u64 },

    #[error("interpolated value {numerator}/{denominator} is not an integer")]
    NonIntegerResult {
        numerator: BigInt,
        denominator: BigInt,
    },

    #[error("inconsistent shares: points at x = {window:?} give {found}, expected {expected}")]
    InconsistentShares {
        expected: BigInt,
        found: BigInt,
        window: Vec<u64>,
    },

    #[error("malformed test case: {0}")]
    MalformedTestCase(String),
}

fn share_suffix(index: &Option<u64>) -> String {
    index.map_or_else(String::new, |i| format!(" (share {i})"))
}

impl SolveError {
    /// Shorthand for [`SolveError::MalformedTestCase`]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedTestCase(message.into())
    }

    /// Attaches the offending share index to decoding errors
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn at_index(self, share: u64) -> Self {
        match self {
            Self::InvalidDigit {
                digit,
                position,
                base,
                ..
            } => Self::InvalidDigit {
                index: Some(share),
                digit,
                position,
                base,
            },
            Self::InvalidBase { base, .. } => Self::InvalidBase {
                index: Some(share),
                base,
            },
            Self::EmptyDigits { .. } => Self::EmptyDigits { index: Some(share) },
            other => other,
        }
    }

    /// Name of the error class, as used in batch reports
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidDigit { .. } | Self::EmptyDigits { .. } => "InvalidDigitError",
            Self::InvalidBase { .. } => "InvalidBaseError",
            Self::InsufficientPoints { .. } => "InsufficientPointsError",
            Self::DegenerateInput { .. } => "DegenerateInputError",
            Self::NonIntegerResult { .. } => "NonIntegerResultError",
            Self::InconsistentShares { .. } => "InconsistentSharesError",
            Self::MalformedTestCase(_) => "MalformedTestCaseError",
        }
    }
}
