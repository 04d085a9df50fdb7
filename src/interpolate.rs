//! Exact Lagrange interpolation at x = 0
//!
//! The constant term of the unique degree-(k-1) polynomial through k points is
//!
//! ```text
//! f(0) = Σ_i y_i · ∏_{j≠i} (0 - x_j) / (x_i - x_j)
//! ```
//!
//! Share values run to dozens of digits, so every term is kept as an exact
//! fraction of big integers. The sum must come out as a whole number; if it
//! does not, the points do not describe an integer polynomial and the result
//! is rejected instead of rounded.

use std::collections::HashSet;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::domain::{Point, Threshold};
use crate::error::SolveError;

/// A fraction kept in lowest terms with a positive denominator
#[derive(Debug, Clone, PartialEq, Eq)]
struct Fraction {
    numer: BigInt,
    denom: BigInt,
}

impl Fraction {
    fn zero() -> Self {
        Self {
            numer: BigInt::zero(),
            denom: BigInt::one(),
        }
    }

    /// Callers guarantee `denom != 0`
    fn new(numer: BigInt, denom: BigInt) -> Self {
        debug_assert!(!denom.is_zero());
        let divisor = numer.gcd(&denom);
        let (mut numer, mut denom) = (numer / &divisor, denom / &divisor);
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        Self { numer, denom }
    }

    fn add(&self, other: &Self) -> Self {
        Self::new(
            &self.numer * &other.denom + &other.numer * &self.denom,
            &self.denom * &other.denom,
        )
    }

    fn into_integer(self) -> Result<BigInt, SolveError> {
        if self.denom.is_one() {
            Ok(self.numer)
        } else {
            Err(SolveError::NonIntegerResult {
                numerator: self.numer,
                denominator: self.denom,
            })
        }
    }
}

/// Interpolates at x = 0 using the first `k` points, in the order given
///
/// The points are not re-sorted or otherwise selected; whichever `k` come
/// first are used.
///
/// # Errors
/// - [`SolveError::InsufficientPoints`] if fewer than `k` points are supplied
/// - any error of [`lagrange_at_zero`] for the selected points
///
/// # Examples
///
/// ```rust
/// use hashira::domain::{Point, Threshold};
/// use hashira::interpolate::interpolate_at_zero;
/// use num_bigint::BigInt;
///
/// // y = 2x + 3
/// let points = [Point::new(1, 5), Point::new(2, 7), Point::new(3, 9)];
/// let secret = interpolate_at_zero(&points, Threshold::new(2).unwrap()).unwrap();
/// assert_eq!(secret, BigInt::from(3));
/// ```
pub fn interpolate_at_zero(points: &[Point], k: Threshold) -> Result<BigInt, SolveError> {
    let required = *k;
    if points.len() < required {
        return Err(SolveError::InsufficientPoints {
            required,
            available: points.len(),
        });
    }

    lagrange_at_zero(&points[..required])
}

/// Interpolates at x = 0 through every supplied point
///
/// # Errors
/// - [`SolveError::InsufficientPoints`] if `points` is empty
/// - [`SolveError::DegenerateInput`] if two points share an x coordinate
/// - [`SolveError::NonIntegerResult`] if the constant term is not a whole number
pub fn lagrange_at_zero(points: &[Point]) -> Result<BigInt, SolveError> {
    if points.is_empty() {
        return Err(SolveError::InsufficientPoints {
            required: 1,
            available: 0,
        });
    }

    let mut seen = HashSet::with_capacity(points.len());
    if let Some(repeated) = points.iter().find(|p| !seen.insert(p.x)) {
        return Err(SolveError::DegenerateInput { x: repeated.x });
    }

    let mut sum = Fraction::zero();
    for (i, point) in points.iter().enumerate() {
        let xi = BigInt::from(point.x);
        let mut numer = point.y.clone();
        let mut denom = BigInt::one();

        for (j, other) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let xj = BigInt::from(other.x);
            numer *= -&xj;
            denom *= &xi - &xj;
        }

        sum = sum.add(&Fraction::new(numer, denom));
    }

    sum.into_integer()
}
