//! Validated case parameters

use super::{ShareCount, Threshold};
use crate::error::SolveError;

/// Validated pair of share count (n) and threshold (k)
///
/// Enforces k <= n: a case cannot require more points than it can index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseParams {
    share_count: ShareCount,
    threshold: Threshold,
}

impl CaseParams {
    /// Creates new case parameters
    ///
    /// # Errors
    /// Returns [`SolveError::MalformedTestCase`] if k exceeds n
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashira::domain::{CaseParams, ShareCount, Threshold};
    ///
    /// let params = CaseParams::new(
    ///     ShareCount::new(4).unwrap(),
    ///     Threshold::new(3).unwrap(),
    /// ).unwrap();
    /// assert_eq!(*params.share_count(), 4);
    /// assert_eq!(*params.threshold(), 3);
    ///
    /// // Invalid: k > n
    /// let result = CaseParams::new(
    ///     ShareCount::new(2).unwrap(),
    ///     Threshold::new(3).unwrap(),
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(share_count: ShareCount, threshold: Threshold) -> Result<Self, SolveError> {
        // usize -> u64 is lossless on every supported target
        if (*threshold as u64) > *share_count {
            return Err(SolveError::malformed(format!(
                "k = {} cannot exceed n = {}",
                *threshold, *share_count
            )));
        }
        Ok(Self {
            share_count,
            threshold,
        })
    }

    /// Builds parameters straight from raw n and k
    ///
    /// # Errors
    /// Returns [`SolveError::MalformedTestCase`] if either value is invalid
    pub fn from_raw(n: u64, k: usize) -> Result<Self, SolveError> {
        Self::new(ShareCount::new(n)?, Threshold::new(k)?)
    }

    /// Gets n
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }

    /// Gets k
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }
}
