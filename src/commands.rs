use std::path::PathBuf;

use num_bigint::BigInt;
use serde::Serialize;

use crate::domain::TestCase;
use crate::error::SolveError;
use crate::input;
use crate::observer::{SolveEvent, SolveObserver};
use crate::samples;
use crate::solver::{self, SolveOptions};

/// Where a test case comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseSource {
    File(PathBuf),
    Builtin {
        name: &'static str,
        json: &'static str,
    },
}

impl CaseSource {
    /// All built-in sample cases, in order
    #[must_use]
    pub fn builtins() -> Vec<Self> {
        samples::builtin_cases()
            .into_iter()
            .map(|(name, json)| Self::Builtin { name, json })
            .collect()
    }

    /// Label used in progress output and reports
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Builtin { name, .. } => (*name).to_string(),
        }
    }

    fn load(&self) -> Result<TestCase, SolveError> {
        match self {
            Self::File(path) => input::load_test_case(path),
            Self::Builtin { json, .. } => TestCase::from_json(json),
        }
    }
}

/// Outcome of one case, ready for display or serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseOutcome {
    Solved { secret: String },
    Failed { kind: String, message: String },
}

impl CaseOutcome {
    fn from_result(result: &Result<BigInt, SolveError>) -> Self {
        match result {
            Ok(secret) => Self::Solved {
                secret: secret.to_string(),
            },
            Err(e) => Self::Failed {
                kind: e.kind().to_string(),
                message: e.to_string(),
            },
        }
    }
}

impl std::fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solved { secret } => write!(f, "{secret}"),
            Self::Failed { kind, message } => write!(f, "error [{kind}]: {message}"),
        }
    }
}

/// One line of a batch report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    /// File path or built-in sample name
    pub source: String,
    /// Secret or failure for this case
    #[serde(flatten)]
    pub outcome: CaseOutcome,
}

/// Aggregated results of a batch, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub cases: Vec<CaseReport>,
}

impl BatchReport {
    /// Number of cases that produced a secret
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.cases
            .iter()
            .filter(|c| matches!(c.outcome, CaseOutcome::Solved { .. }))
            .count()
    }

    /// Number of cases that ended in an error
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.cases.len() - self.solved_count()
    }

    /// True when every case was solved
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }
}

/// Loads and solves a single case
///
/// # Errors
/// Returns a [`SolveError`] if loading or solving fails
pub fn solve_source(
    source: &CaseSource,
    options: SolveOptions,
    observer: &mut dyn SolveObserver,
) -> Result<BigInt, SolveError> {
    observer.observe(&SolveEvent::CaseLoaded {
        source: &source.label(),
    });
    let case = source.load()?;
    solver::solve_with(&case, options, observer)
}

/// Solves every source independently and collects the outcomes
///
/// A failing case is recorded in the report; it never stops the batch.
pub fn run_batch(
    sources: &[CaseSource],
    options: SolveOptions,
    observer: &mut dyn SolveObserver,
) -> BatchReport {
    let cases = sources
        .iter()
        .map(|source| {
            let result = solve_source(source, options, observer);
            CaseReport {
                source: source.label(),
                outcome: CaseOutcome::from_result(&result),
            }
        })
        .collect();

    BatchReport { cases }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoopObserver;

    #[test]
    fn test_builtins_solve() {
        let report = run_batch(
            &CaseSource::builtins(),
            SolveOptions::default(),
            &mut NoopObserver,
        );

        assert!(report.is_success());
        assert_eq!(
            report.cases[0],
            CaseReport {
                source: "sample-1".to_string(),
                outcome: CaseOutcome::Solved {
                    secret: "3".to_string()
                },
            }
        );
        assert_eq!(
            report.cases[1].outcome,
            CaseOutcome::Solved {
                secret: "-6290016743746469796".to_string()
            }
        );
    }

    #[test]
    fn test_failure_does_not_abort_batch() {
        let mut sources = vec![CaseSource::File(PathBuf::from("/nonexistent/case.json"))];
        sources.extend(CaseSource::builtins());

        let report = run_batch(&sources, SolveOptions::default(), &mut NoopObserver);

        assert_eq!(report.cases.len(), 3);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.solved_count(), 2);
        assert!(!report.is_success());
        assert!(matches!(
            &report.cases[0].outcome,
            CaseOutcome::Failed { kind, .. } if kind == "MalformedTestCaseError"
        ));
    }

    #[test]
    fn test_cross_validation_reported_per_case() {
        let options = SolveOptions {
            cross_validate: true,
        };
        let report = run_batch(&CaseSource::builtins(), options, &mut NoopObserver);

        assert!(matches!(report.cases[0].outcome, CaseOutcome::Solved { .. }));
        assert!(matches!(
            &report.cases[1].outcome,
            CaseOutcome::Failed { kind, .. } if kind == "InconsistentSharesError"
        ));
    }

    #[test]
    fn test_report_json_shape() {
        let report = BatchReport {
            cases: vec![
                CaseReport {
                    source: "a.json".to_string(),
                    outcome: CaseOutcome::Solved {
                        secret: "3".to_string(),
                    },
                },
                CaseReport {
                    source: "b.json".to_string(),
                    outcome: CaseOutcome::Failed {
                        kind: "InvalidDigitError".to_string(),
                        message: "bad".to_string(),
                    },
                },
            ],
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "cases": [
                    {"source": "a.json", "status": "solved", "secret": "3"},
                    {"source": "b.json", "status": "failed", "kind": "InvalidDigitError", "message": "bad"}
                ]
            })
        );
    }

    #[test]
    fn test_outcome_display() {
        let failed = CaseOutcome::Failed {
            kind: "DegenerateInputError".to_string(),
            message: "degenerate input: x = 1 appears more than once".to_string(),
        };
        assert_eq!(
            failed.to_string(),
            "error [DegenerateInputError]: degenerate input: x = 1 appears more than once"
        );
    }
}
