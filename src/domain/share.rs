//! Shares as supplied and points as decoded

use num_bigint::BigInt;

use super::ShareIndex;

/// One participant's contribution before decoding
///
/// The base is kept raw so that an unsupported base surfaces as a decoding
/// error tagged with this share's index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    index: ShareIndex,
    base: u32,
    digits: String,
}

impl Share {
    /// Creates a share from its index, raw base and digit string
    ///
    /// Nothing is validated here; the base and digits are checked when the
    /// share is decoded.
    pub fn new(index: ShareIndex, base: u32, digits: impl Into<String>) -> Self {
        Self {
            index,
            base,
            digits: digits.into(),
        }
    }

    /// Gets the share index (the x coordinate)
    #[must_use]
    pub fn index(&self) -> ShareIndex {
        self.index
    }

    /// Gets the stated base, unvalidated
    #[must_use]
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Gets the digit string as supplied
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }
}

/// A decoded share: `x` is the share index, `y` its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: u64,
    pub y: BigInt,
}

impl Point {
    /// Creates a point from any integer-like y value
    pub fn new(x: u64, y: impl Into<BigInt>) -> Self {
        Self { x, y: y.into() }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
