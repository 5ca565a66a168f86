//! One demonstrative pass: every variant once, in order, over one fixture.

use crate::dataset::Dataset;
use crate::error::{LoopError, Result};
use crate::variants::{MaxFinder, Variant};
use std::fmt;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of running one finder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub variant: &'static str,
    pub max: i32,
    /// Wall time of the single call; a rough figure, not a measurement.
    pub elapsed: Duration,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} max is: {}", self.variant, self.max)
    }
}

/// Run `finder` once and time it.
pub fn run_one<F: MaxFinder + ?Sized>(finder: &F, dataset: &Dataset) -> Result<Outcome> {
    let start = Instant::now();
    let max = finder.find_max(dataset)?;
    let elapsed = start.elapsed();
    debug!(variant = finder.name(), max, ?elapsed, "variant finished");
    Ok(Outcome {
        variant: finder.name(),
        max,
        elapsed,
    })
}

/// Run `finders` in order, stopping at the first error.
pub fn run_each<F: MaxFinder>(finders: &[F], dataset: &Dataset) -> Result<Vec<Outcome>> {
    finders
        .iter()
        .map(|finder| run_one(finder, dataset))
        .collect()
}

/// Run every variant in [Variant::ALL] order.
pub fn run_all(dataset: &Dataset) -> Result<Vec<Outcome>> {
    run_each(&Variant::ALL, dataset)
}

/// Check that every outcome reports the same maximum and return it.
pub fn check_consistency(outcomes: &[Outcome]) -> Result<i32> {
    let Some(first) = outcomes.first() else {
        return Err(LoopError::NoOutcomes);
    };
    match outcomes.iter().find(|o| o.max != first.max) {
        Some(odd) => Err(LoopError::Inconsistent {
            expected: first.max,
            variant: odd.variant,
            actual: odd.max,
        }),
        None => Ok(first.max),
    }
}

/// Write one `"<variant> max is: <value>"` line per outcome.
pub fn write_report<W: Write>(outcomes: &[Outcome], mut out: W) -> io::Result<()> {
    for outcome in outcomes {
        writeln!(out, "{outcome}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(variant: Variant, max: i32) -> Outcome {
        Outcome {
            variant: variant.name(),
            max,
            elapsed: Duration::ZERO,
        }
    }

    /// Ignores its input; stands in for a finder that disagrees with the rest.
    struct Constant(i32);

    impl MaxFinder for Constant {
        fn name(&self) -> &'static str {
            "constant"
        }

        fn find_max(&self, _values: &[i32]) -> Result<i32> {
            Ok(self.0)
        }
    }

    #[test]
    fn runs_every_variant_in_order() {
        let dataset = Dataset::from_values(vec![3, 1, 4, 1, 5, 9, 2, 6]);
        let outcomes = run_all(&dataset).unwrap();
        let order: Vec<_> = outcomes.iter().map(|o| o.variant).collect();
        let expected: Vec<_> = Variant::ALL.iter().map(|v| v.name()).collect();
        assert_eq!(order, expected);
        assert_eq!(check_consistency(&outcomes).unwrap(), 9);
    }

    #[test]
    fn empty_dataset_stops_at_first_variant() {
        let err = run_all(&Dataset::from_values(Vec::new())).unwrap_err();
        assert!(matches!(err, LoopError::EmptyInput { variant: "iterator_max" }));
    }

    #[test]
    fn any_finder_can_be_run() {
        let dataset = Dataset::from_values(vec![1, 2, 3]);
        let mut outcomes = vec![run_one(&Variant::Fold, &dataset).unwrap()];
        outcomes.push(run_one(&Constant(-4), &dataset).unwrap());
        assert_eq!(outcomes[1].to_string(), "constant max is: -4");

        match check_consistency(&outcomes) {
            Err(LoopError::Inconsistent {
                expected,
                variant,
                actual,
            }) => assert_eq!((expected, variant, actual), (3, "constant", -4)),
            other => panic!("expected Inconsistent, got {other:?}"),
        }
    }

    #[test]
    fn disagreement_is_reported() {
        let outcomes = [
            outcome(Variant::Iterator, 10),
            outcome(Variant::Fold, 10),
            outcome(Variant::Indexed, 11),
        ];
        match check_consistency(&outcomes) {
            Err(LoopError::Inconsistent {
                expected,
                variant,
                actual,
            }) => {
                assert_eq!((expected, variant, actual), (10, "indexed_max", 11));
            }
            other => panic!("expected Inconsistent, got {other:?}"),
        }
    }

    #[test]
    fn nothing_to_compare_is_not_an_empty_input() {
        assert!(matches!(check_consistency(&[]), Err(LoopError::NoOutcomes)));
    }

    #[test]
    fn report_lines_use_variant_names() {
        let outcomes = [outcome(Variant::Iterator, 42), outcome(Variant::ParallelPrimitive, 42)];
        let mut buf = Vec::new();
        write_report(&outcomes, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "iterator_max max is: 42\nparallel_primitive_max max is: 42\n"
        );
    }
}
