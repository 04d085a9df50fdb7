//! Property tests for exact interpolation

use hashira::domain::{Point, Threshold};
use hashira::interpolate::{interpolate_at_zero, lagrange_at_zero};
use num_bigint::BigInt;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// A polynomial with integer coefficients, degree 0..=7
#[derive(Clone, Debug)]
struct Polynomial(Vec<i64>);

impl Arbitrary for Polynomial {
    fn arbitrary(g: &mut Gen) -> Self {
        let terms = usize::arbitrary(g) % 8 + 1;
        Polynomial((0..terms).map(|_| i64::arbitrary(g)).collect())
    }
}

impl Polynomial {
    fn threshold(&self) -> Threshold {
        Threshold::new(self.0.len()).unwrap_or_else(|_| unreachable!("at least one term"))
    }

    fn eval(&self, x: u64) -> BigInt {
        let x = BigInt::from(x);
        self.0
            .iter()
            .rev()
            .fold(BigInt::from(0), |acc, &c| acc * &x + BigInt::from(c))
    }

    fn points(&self, xs: &[u64]) -> Vec<Point> {
        xs.iter().map(|&x| Point::new(x, self.eval(x))).collect()
    }
}

/// Distinct share indices in 1..=40, in ascending order
#[derive(Clone, Debug)]
struct Indices(Vec<u64>);

impl Arbitrary for Indices {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut xs: Vec<u64> = (0..16).map(|_| u64::arbitrary(g) % 40 + 1).collect();
        xs.sort_unstable();
        xs.dedup();
        Indices(xs)
    }
}

/// The constant term comes back exactly from the first k points
#[quickcheck]
fn prop_recovers_constant_term(poly: Polynomial, indices: Indices) -> bool {
    let Indices(xs) = indices;
    let k = poly.threshold();
    if xs.len() < *k {
        return true; // Skip: not enough distinct indices drawn
    }

    let points = poly.points(&xs);
    interpolate_at_zero(&points, k).is_ok_and(|secret| secret == BigInt::from(poly.0[0]))
}

/// Every k-subset of consistent shares yields the same secret
#[quickcheck]
fn prop_k_subsets_agree(poly: Polynomial, indices: Indices, offset: usize) -> bool {
    let Indices(xs) = indices;
    let k = *poly.threshold();
    if xs.len() < k {
        return true;
    }

    let points = poly.points(&xs);
    let first = lagrange_at_zero(&points[..k]);

    // A second subset: k points taken from a rotated start
    let start = offset % points.len();
    let mut rotated: Vec<Point> = points[start..]
        .iter()
        .chain(&points[..start])
        .cloned()
        .collect();
    rotated.truncate(k);

    first.is_ok() && first == lagrange_at_zero(&rotated)
}

/// Fewer than k points is always an error, never a guess
#[quickcheck]
fn prop_too_few_points_rejected(poly: Polynomial) -> bool {
    let k = poly.threshold();
    let xs: Vec<u64> = (1..*k as u64).collect();
    let points = poly.points(&xs);

    interpolate_at_zero(&points, k).is_err_and(|e| e.kind() == "InsufficientPointsError")
}
