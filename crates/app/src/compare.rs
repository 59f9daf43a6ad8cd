//! Time declared-constraint validation against a baseline suite.
//!
//! With the canonical sample set the declared suite validates `Gamer`, `Item`
//! and `Plane` through the generic validator while the baseline builds
//! `TypedGamer`, `TypedItem` and `TypedPlane`. The showcase set validates the
//! gamer and the long-description item, and times the plane's hand-written
//! `validate` as the baseline.

use fieldcheck_config::{DemoConfig, SampleSet};
use fieldcheck_domain::samples;
use fieldcheck_shared::{Validatable, ValidationMode, validate_with};
use serde::Serialize;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Which validation style a suite exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Approach {
    /// `#[validate]` declarations checked by the generic validator.
    Declared,
    /// Checks inside `new`.
    Constructor,
    /// A record's own `validate` method.
    HandWritten,
}

impl Approach {
    /// Lowercase label used in text reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Declared => "declared",
            Self::Constructor => "constructor",
            Self::HandWritten => "hand-written",
        }
    }
}

/// Result of validating one sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    /// Type name of the sample.
    pub subject: &'static str,
    /// Failure messages; empty when the sample passed.
    pub messages: Vec<String>,
}

impl Outcome {
    fn passed(subject: &'static str) -> Self {
        Self {
            subject,
            messages: Vec::new(),
        }
    }

    /// Whether the sample passed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Timing and first-pass outcomes for one suite.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteRun {
    /// Suite style.
    pub approach: Approach,
    /// Timed passes.
    pub iterations: u32,
    /// Total elapsed time of the timed passes.
    pub total_micros: u64,
    /// Mean time per timed pass.
    pub per_pass_micros: f64,
    /// Outcomes of the first pass.
    pub outcomes: Vec<Outcome>,
}

/// Which suite finished first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Verdict {
    /// The baseline suite was faster.
    BaselineFaster,
    /// Declared validation was faster.
    DeclaredFaster,
    /// Both took the same whole number of microseconds.
    Tie,
}

impl Verdict {
    /// Human-readable verdict line, naming the baseline when it won.
    #[must_use]
    pub fn describe(self, baseline: Approach) -> String {
        match self {
            Self::BaselineFaster => format!("{} validation is faster", baseline.label()),
            Self::DeclaredFaster => "declared validation is faster".to_string(),
            Self::Tie => "both approaches took the same time".to_string(),
        }
    }
}

/// Outcome of [`compare`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    /// Settings the run used.
    pub config: DemoConfig,
    /// Declared-constraint suite.
    pub declared: SuiteRun,
    /// Constructor or hand-written suite, depending on the sample set.
    pub baseline: SuiteRun,
    /// `declared.total_micros - baseline.total_micros`.
    pub difference_micros: i64,
    /// Faster suite.
    pub verdict: Verdict,
}

fn declared_outcome<T: Validatable>(record: &T, mode: ValidationMode) -> Outcome {
    Outcome {
        subject: T::schema().type_name(),
        messages: validate_with(record, mode)
            .into_errors()
            .into_iter()
            .map(|error| error.to_string())
            .collect(),
    }
}

fn checked_outcome<T, E: std::fmt::Display>(
    subject: &'static str,
    result: Result<T, E>,
) -> Outcome {
    match result {
        Ok(_) => Outcome::passed(subject),
        Err(error) => Outcome {
            subject,
            messages: vec![error.to_string()],
        },
    }
}

/// Validate the declared-constraint samples of `set` once.
#[must_use]
pub fn run_declared_suite(set: SampleSet, mode: ValidationMode) -> Vec<Outcome> {
    match set {
        SampleSet::Canonical => vec![
            declared_outcome(&samples::gamer(), mode),
            declared_outcome(&samples::item(), mode),
            declared_outcome(&samples::plane(), mode),
        ],
        SampleSet::Showcase => vec![
            declared_outcome(&samples::gamer(), mode),
            declared_outcome(&samples::long_item(), mode),
        ],
    }
}

/// Build the canonical constructor-validated samples once.
#[must_use]
pub fn run_constructor_suite() -> Vec<Outcome> {
    vec![
        checked_outcome("TypedGamer", samples::typed_gamer()),
        checked_outcome("TypedItem", samples::typed_item()),
        checked_outcome("TypedPlane", samples::typed_plane()),
    ]
}

/// Run the hand-written plane checks over the showcase planes once.
#[must_use]
pub fn run_hand_written_suite() -> Vec<Outcome> {
    vec![
        checked_outcome("Plane (Boeing 747)", samples::vintage_plane().validate()),
        checked_outcome("Plane (Airbus A-320)", samples::airbus_plane().validate()),
    ]
}

fn saturating_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

#[allow(
    clippy::cast_precision_loss,
    reason = "report value; sub-microsecond precision is irrelevant"
)]
fn mean_micros(total_micros: u64, iterations: u32) -> f64 {
    total_micros as f64 / f64::from(iterations.max(1))
}

fn time_suite(
    approach: Approach,
    config: &DemoConfig,
    mut pass: impl FnMut() -> Vec<Outcome>,
) -> SuiteRun {
    for _ in 0..config.warmup_iterations {
        black_box(pass());
    }

    let started_at = Instant::now();
    let mut outcomes = Vec::new();
    for index in 0..config.iterations {
        let current = black_box(pass());
        if index == 0 {
            outcomes = current;
        }
    }
    let total_micros = saturating_micros(started_at.elapsed());

    tracing::debug!(?approach, total_micros, "suite timed");
    SuiteRun {
        approach,
        iterations: config.iterations,
        total_micros,
        per_pass_micros: mean_micros(total_micros, config.iterations),
        outcomes,
    }
}

fn verdict(declared_micros: u64, baseline_micros: u64) -> Verdict {
    match declared_micros.cmp(&baseline_micros) {
        std::cmp::Ordering::Greater => Verdict::BaselineFaster,
        std::cmp::Ordering::Less => Verdict::DeclaredFaster,
        std::cmp::Ordering::Equal => Verdict::Tie,
    }
}

/// Run both suites and report their timings.
#[tracing::instrument(
    name = "fieldcheck.compare",
    skip_all,
    fields(
        iterations = config.iterations,
        warmup_iterations = config.warmup_iterations,
        mode = %config.mode,
        samples = %config.samples,
    )
)]
pub fn compare(config: &DemoConfig) -> ComparisonReport {
    let (mode, set) = (config.mode, config.samples);
    let declared = time_suite(Approach::Declared, config, || run_declared_suite(set, mode));
    let baseline = match set {
        SampleSet::Canonical => time_suite(Approach::Constructor, config, run_constructor_suite),
        SampleSet::Showcase => time_suite(Approach::HandWritten, config, run_hand_written_suite),
    };

    let difference = i128::from(declared.total_micros) - i128::from(baseline.total_micros);
    let difference_micros = i64::try_from(difference).unwrap_or(i64::MAX);
    let verdict = verdict(declared.total_micros, baseline.total_micros);
    tracing::info!(
        declared_micros = declared.total_micros,
        baseline_micros = baseline.total_micros,
        baseline = ?baseline.approach,
        ?verdict,
        "comparison finished"
    );

    ComparisonReport {
        config: config.clone(),
        declared,
        baseline,
        difference_micros,
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(outcomes: &[Outcome]) -> Vec<(&'static str, Vec<&str>)> {
        outcomes
            .iter()
            .map(|outcome| {
                (
                    outcome.subject,
                    outcome.messages.iter().map(String::as_str).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn declared_suite_reports_the_sample_failures() {
        assert_eq!(
            messages(&run_declared_suite(SampleSet::Canonical, ValidationMode::FailFast)),
            vec![
                (
                    "Gamer",
                    vec!["Field 'username' in class Gamer cannot be null."]
                ),
                (
                    "Item",
                    vec!["Field 'description' in class Item must have length between 3 and 100."]
                ),
                ("Plane", vec![]),
            ]
        );
    }

    #[test]
    fn constructor_suite_rejects_every_sample() {
        assert_eq!(
            messages(&run_constructor_suite()),
            vec![
                (
                    "TypedGamer",
                    vec!["Field 'username' in TypedGamer cannot be null or empty."]
                ),
                (
                    "TypedItem",
                    vec!["Field 'description' in TypedItem must have length between 3 and 100."]
                ),
                (
                    "TypedPlane",
                    vec!["Field 'model' in TypedPlane must have length between 3 and 25."]
                ),
            ]
        );
    }

    #[test]
    fn showcase_suites_use_long_item_and_hand_written_planes() {
        assert_eq!(
            messages(&run_declared_suite(SampleSet::Showcase, ValidationMode::CollectAll)),
            vec![
                (
                    "Gamer",
                    vec!["Field 'username' in class Gamer cannot be null."]
                ),
                (
                    "Item",
                    vec!["Field 'description' in class Item must have length between 3 and 100."]
                ),
            ]
        );
        assert_eq!(
            messages(&run_hand_written_suite()),
            vec![
                (
                    "Plane (Boeing 747)",
                    vec!["Field 'year' in class Plane must be between 1970 and 2024."]
                ),
                ("Plane (Airbus A-320)", vec![]),
            ]
        );
    }

    #[test]
    fn verdict_follows_totals() {
        assert_eq!(verdict(10, 5), Verdict::BaselineFaster);
        assert_eq!(verdict(5, 10), Verdict::DeclaredFaster);
        assert_eq!(verdict(7, 7), Verdict::Tie);
    }

    #[test]
    fn verdict_names_the_baseline() {
        assert_eq!(
            Verdict::BaselineFaster.describe(Approach::HandWritten),
            "hand-written validation is faster"
        );
        assert_eq!(
            Verdict::BaselineFaster.describe(Approach::Constructor),
            "constructor validation is faster"
        );
        assert_eq!(
            Verdict::Tie.describe(Approach::Constructor),
            "both approaches took the same time"
        );
    }

    #[test]
    fn compare_records_first_pass_and_difference() {
        let config = DemoConfig {
            iterations: 3,
            warmup_iterations: 2,
            ..DemoConfig::default()
        };
        let report = compare(&config);

        assert_eq!(report.declared.iterations, 3);
        assert_eq!(report.declared.outcomes.len(), 3);
        assert_eq!(report.baseline.approach, Approach::Constructor);
        assert_eq!(report.baseline.outcomes.len(), 3);
        assert_eq!(
            i128::from(report.difference_micros),
            i128::from(report.declared.total_micros) - i128::from(report.baseline.total_micros)
        );
        assert_eq!(
            report.verdict,
            verdict(report.declared.total_micros, report.baseline.total_micros)
        );
    }

    #[test]
    fn showcase_compare_times_hand_written_baseline() {
        let config = DemoConfig {
            iterations: 2,
            samples: SampleSet::Showcase,
            ..DemoConfig::default()
        };
        let report = compare(&config);

        assert_eq!(report.baseline.approach, Approach::HandWritten);
        assert_eq!(report.declared.outcomes.len(), 2);
        assert_eq!(report.baseline.outcomes.len(), 2);
        assert_eq!(report.config.samples, SampleSet::Showcase);
    }

    #[test]
    fn outcome_passes_only_without_messages() {
        assert!(Outcome::passed("Plane").is_ok());
        let failed = Outcome {
            subject: "Gamer",
            messages: vec!["nope".to_string()],
        };
        assert!(!failed.is_ok());
    }
}
