//! Diagnostic events emitted while solving
//!
//! Solving never depends on an observer: events are purely informational and
//! the solver behaves identically with [`NoopObserver`].

use std::io::{self, Write};

use num_bigint::BigInt;

use crate::domain::{Point, Share, Threshold};

/// A structured progress record
#[derive(Debug, Clone, Copy)]
pub enum SolveEvent<'a> {
    /// A case was read from a file or a built-in sample
    CaseLoaded { source: &'a str },
    /// Solving began for a case with these parameters
    CaseStarted { n: u64, k: Threshold },
    /// A share was decoded into a point
    PointDecoded { share: &'a Share, point: &'a Point },
    /// The first k points chosen for interpolation
    PointsSelected { points: &'a [Point] },
    /// A cross-validation window was interpolated
    WindowChecked { window: &'a [Point], secret: &'a BigInt },
    /// The secret was recovered
    SecretRecovered { secret: &'a BigInt },
}

/// Receives [`SolveEvent`]s
pub trait SolveObserver {
    fn observe(&mut self, event: &SolveEvent<'_>);
}

impl<F> SolveObserver for F
where
    F: FnMut(&SolveEvent<'_>),
{
    fn observe(&mut self, event: &SolveEvent<'_>) {
        self(event);
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SolveObserver for NoopObserver {
    fn observe(&mut self, _event: &SolveEvent<'_>) {}
}

/// Renders events as human-readable progress lines
pub struct ConsoleObserver<W> {
    out: W,
}

impl ConsoleObserver<io::Stderr> {
    /// Progress on stderr, leaving stdout for results
    #[must_use]
    pub fn stderr() -> Self {
        Self { out: io::stderr() }
    }
}

impl<W: Write> ConsoleObserver<W> {
    /// Progress written to an arbitrary writer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Gives back the writer, e.g. to inspect a buffer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, event: &SolveEvent<'_>) -> io::Result<()> {
        match event {
            SolveEvent::CaseLoaded { source } => {
                writeln!(self.out, "=== {source} ===")
            }
            SolveEvent::CaseStarted { n, k } => {
                writeln!(self.out, "Processing test case with n={n}, k={}", **k)?;
                writeln!(self.out, "Polynomial degree: {}", k.degree())
            }
            SolveEvent::PointDecoded { share, point } => writeln!(
                self.out,
                "Point {}: {point} [{} in base {}]",
                share.index(),
                share.digits(),
                share.base()
            ),
            SolveEvent::PointsSelected { points } => {
                writeln!(
                    self.out,
                    "Using first {} points for interpolation:",
                    points.len()
                )?;
                for point in *points {
                    writeln!(self.out, "  {point}")?;
                }
                Ok(())
            }
            SolveEvent::WindowChecked { window, secret } => {
                let xs: Vec<u64> = window.iter().map(|p| p.x).collect();
                writeln!(self.out, "Cross-check x = {xs:?}: {secret}")
            }
            SolveEvent::SecretRecovered { secret } => {
                writeln!(self.out, "Secret (constant term): {secret}")
            }
        }
    }
}

impl<W: Write> SolveObserver for ConsoleObserver<W> {
    fn observe(&mut self, event: &SolveEvent<'_>) {
        // Diagnostics must never fail a solve
        let _ = self.render(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShareIndex;

    fn rendered(events: &[SolveEvent<'_>]) -> String {
        let mut observer = ConsoleObserver::new(Vec::new());
        for event in events {
            observer.observe(event);
        }
        String::from_utf8(observer.into_inner()).unwrap()
    }

    #[test]
    fn test_console_renders_decoded_point() {
        let share = Share::new(ShareIndex::new(2).unwrap(), 2, "111");
        let point = Point::new(2, 7);
        let text = rendered(&[SolveEvent::PointDecoded {
            share: &share,
            point: &point,
        }]);

        assert_eq!(text, "Point 2: (2, 7) [111 in base 2]\n");
    }

    #[test]
    fn test_console_renders_case_header_and_secret() {
        let secret = BigInt::from(3);
        let text = rendered(&[
            SolveEvent::CaseStarted {
                n: 4,
                k: Threshold::new(3).unwrap(),
            },
            SolveEvent::SecretRecovered { secret: &secret },
        ]);

        assert!(text.contains("n=4, k=3"));
        assert!(text.contains("Polynomial degree: 2"));
        assert!(text.ends_with("Secret (constant term): 3\n"));
    }

    #[test]
    fn test_closure_observer() {
        let mut count = 0;
        let mut observer = |_: &SolveEvent<'_>| count += 1;
        observer.observe(&SolveEvent::CaseStarted {
            n: 1,
            k: Threshold::new(1).unwrap(),
        });
        observer.observe(&SolveEvent::CaseLoaded { source: "x" });
        assert_eq!(count, 2);
    }
}
