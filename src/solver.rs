//! Share extraction and case solving
//!
//! Data flows one way: shares are decoded into points in ascending index
//! order, the first k points are interpolated at x = 0, and the result is the
//! secret.

use num_bigint::BigInt;

use crate::codec;
use crate::domain::{Point, TestCase};
use crate::error::SolveError;
use crate::interpolate;
use crate::observer::{NoopObserver, SolveEvent, SolveObserver};

/// Knobs for [`solve_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveOptions {
    /// Also interpolate every window of k consecutive points and require
    /// each to agree with the first
    pub cross_validate: bool,
}

/// Decodes every share with index `1..=n` into a point, in ascending index order
///
/// Absent indices are skipped. Decoding errors carry the share index.
///
/// # Errors
/// Returns the first decoding error encountered
pub fn extract_points(case: &TestCase) -> Result<Vec<Point>, SolveError> {
    extract_points_with(case, &mut NoopObserver)
}

fn extract_points_with(
    case: &TestCase,
    observer: &mut dyn SolveObserver,
) -> Result<Vec<Point>, SolveError> {
    case.shares_in_range()
        .map(|share| {
            let index = *share.index();
            let y = codec::decode(share.digits(), share.base())
                .map_err(|e| e.at_index(index))?;
            let point = Point::new(index, y);
            observer.observe(&SolveEvent::PointDecoded {
                share,
                point: &point,
            });
            Ok(point)
        })
        .collect()
}

/// Recovers the secret of a test case using default options and no diagnostics
///
/// # Errors
/// Propagates any decoding or interpolation error unchanged
///
/// # Examples
///
/// ```rust
/// use hashira::domain::TestCase;
/// use hashira::solver::solve;
/// use num_bigint::BigInt;
///
/// let case = TestCase::from_json(r#"{
///     "keys": {"n": 4, "k": 3},
///     "1": {"base": "10", "value": "4"},
///     "2": {"base": "2", "value": "111"},
///     "3": {"base": "10", "value": "12"},
///     "6": {"base": "4", "value": "213"}
/// }"#).unwrap();
///
/// assert_eq!(solve(&case).unwrap(), BigInt::from(3));
/// ```
pub fn solve(case: &TestCase) -> Result<BigInt, SolveError> {
    solve_with(case, SolveOptions::default(), &mut NoopObserver)
}

/// Recovers the secret of a test case, reporting progress to `observer`
///
/// # Errors
/// - decoding errors from extraction, tagged with the share index
/// - [`SolveError::InsufficientPoints`] if fewer than k shares are in range
/// - [`SolveError::DegenerateInput`] or [`SolveError::NonIntegerResult`] from interpolation
/// - [`SolveError::InconsistentShares`] if cross-validation is on and a window disagrees
pub fn solve_with(
    case: &TestCase,
    options: SolveOptions,
    observer: &mut dyn SolveObserver,
) -> Result<BigInt, SolveError> {
    let params = case.params();
    let k = params.threshold();

    observer.observe(&SolveEvent::CaseStarted {
        n: *params.share_count(),
        k,
    });

    let points = extract_points_with(case, observer)?;

    if points.len() >= *k {
        observer.observe(&SolveEvent::PointsSelected {
            points: &points[..*k],
        });
    }

    let secret = interpolate::interpolate_at_zero(&points, k)?;

    if options.cross_validate {
        cross_validate(&points, *k, &secret, observer)?;
    }

    observer.observe(&SolveEvent::SecretRecovered { secret: &secret });
    Ok(secret)
}

/// Checks every later window of `k` consecutive points against `expected`
fn cross_validate(
    points: &[Point],
    k: usize,
    expected: &BigInt,
    observer: &mut dyn SolveObserver,
) -> Result<(), SolveError> {
    for window in points.windows(k).skip(1) {
        let found = interpolate::lagrange_at_zero(window)?;
        observer.observe(&SolveEvent::WindowChecked {
            window,
            secret: &found,
        });

        if &found != expected {
            return Err(SolveError::InconsistentShares {
                expected: expected.clone(),
                found,
                window: window.iter().map(|p| p.x).collect(),
            });
        }
    }
    Ok(())
}
