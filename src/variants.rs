//! Nine ways to find the maximum of an integer slice.
//!
//! Every variant is a pure function over `&[i32]` and returns the same value for
//! the same input; they differ only in how the slice is traversed:
//!
//! | Variant                    | Traversal                                   |
//! |----------------------------|---------------------------------------------|
//! | [iterator_max]             | explicit cursor, `next()` until exhausted   |
//! | [for_each_loop_max]        | `for n in values`                           |
//! | [for_each_closure_max]     | `Iterator::for_each` updating a captured local |
//! | [indexed_max]              | `values[i]` for `i in 0..len`               |
//! | [parallel_reduce_max]      | rayon `reduce_with(i32::max)`               |
//! | [parallel_primitive_max]   | rayon `max()`                               |
//! | [sequential_reduce_max]    | `Iterator::reduce(i32::max)`                |
//! | [sequential_primitive_max] | `Iterator::max()`                           |
//! | [fold_max]                 | `Iterator::fold(i32::MIN, i32::max)`        |
//!
//! All of them reject an empty slice with [LoopError::EmptyInput].

use crate::error::{LoopError, Result};
use rayon::prelude::*;
use std::fmt;

// ── Sequential traversals ──────────────────────────────────────────────────

#[allow(clippy::while_let_on_iterator)]
pub fn iterator_max(values: &[i32]) -> Result<i32> {
    non_empty(values, Variant::Iterator)?;
    let mut max = i32::MIN;
    let mut cursor = values.iter();
    while let Some(&n) = cursor.next() {
        max = max.max(n);
    }
    Ok(max)
}

pub fn for_each_loop_max(values: &[i32]) -> Result<i32> {
    non_empty(values, Variant::ForEachLoop)?;
    let mut max = i32::MIN;
    for &n in values {
        max = max.max(n);
    }
    Ok(max)
}

pub fn for_each_closure_max(values: &[i32]) -> Result<i32> {
    non_empty(values, Variant::ForEachClosure)?;
    let mut max = i32::MIN;
    values.iter().for_each(|&n| max = max.max(n));
    Ok(max)
}

#[allow(clippy::needless_range_loop)]
pub fn indexed_max(values: &[i32]) -> Result<i32> {
    non_empty(values, Variant::Indexed)?;
    let mut max = i32::MIN;
    for i in 0..values.len() {
        max = max.max(values[i]);
    }
    Ok(max)
}

// ── Reductions ─────────────────────────────────────────────────────────────

/// Parallel reduction with the generic combinator; rayon owns splitting and the pool.
pub fn parallel_reduce_max(values: &[i32]) -> Result<i32> {
    values
        .par_iter()
        .copied()
        .reduce_with(i32::max)
        .ok_or_else(|| empty(Variant::ParallelReduce))
}

/// Parallel reduction through rayon's specialised `max`.
pub fn parallel_primitive_max(values: &[i32]) -> Result<i32> {
    values
        .par_iter()
        .copied()
        .max()
        .ok_or_else(|| empty(Variant::ParallelPrimitive))
}

pub fn sequential_reduce_max(values: &[i32]) -> Result<i32> {
    values
        .iter()
        .copied()
        .reduce(i32::max)
        .ok_or_else(|| empty(Variant::SequentialReduce))
}

pub fn sequential_primitive_max(values: &[i32]) -> Result<i32> {
    values
        .iter()
        .copied()
        .max()
        .ok_or_else(|| empty(Variant::SequentialPrimitive))
}

/// Seeded fold. The seed alone would make an empty slice look like `i32::MIN`,
/// so emptiness is checked first.
pub fn fold_max(values: &[i32]) -> Result<i32> {
    non_empty(values, Variant::Fold)?;
    Ok(values.iter().copied().fold(i32::MIN, i32::max))
}

fn non_empty(values: &[i32], variant: Variant) -> Result<()> {
    if values.is_empty() {
        return Err(empty(variant));
    }
    Ok(())
}

fn empty(variant: Variant) -> LoopError {
    LoopError::EmptyInput {
        variant: variant.name(),
    }
}

// ── Variant registry ───────────────────────────────────────────────────────

/// Anything that can compute the maximum of a slice under a stable name.
///
/// `Sync` so a finder can be handed to a worker pool by reference.
pub trait MaxFinder: Sync {
    fn name(&self) -> &'static str;

    fn find_max(&self, values: &[i32]) -> Result<i32>;
}

/// The nine variants, addressable by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Iterator,
    ForEachLoop,
    ForEachClosure,
    Indexed,
    ParallelReduce,
    SequentialReduce,
    Fold,
    ParallelPrimitive,
    SequentialPrimitive,
}

impl Variant {
    /// Invocation order used by the command-line entry point.
    pub const ALL: [Variant; 9] = [
        Variant::Iterator,
        Variant::ForEachLoop,
        Variant::ForEachClosure,
        Variant::Indexed,
        Variant::ParallelReduce,
        Variant::SequentialReduce,
        Variant::Fold,
        Variant::ParallelPrimitive,
        Variant::SequentialPrimitive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Iterator => "iterator_max",
            Variant::ForEachLoop => "for_each_loop_max",
            Variant::ForEachClosure => "for_each_closure_max",
            Variant::Indexed => "indexed_max",
            Variant::ParallelReduce => "parallel_reduce_max",
            Variant::SequentialReduce => "sequential_reduce_max",
            Variant::Fold => "fold_max",
            Variant::ParallelPrimitive => "parallel_primitive_max",
            Variant::SequentialPrimitive => "sequential_primitive_max",
        }
    }

    pub fn is_parallel(self) -> bool {
        matches!(self, Variant::ParallelReduce | Variant::ParallelPrimitive)
    }

    pub fn run(self, values: &[i32]) -> Result<i32> {
        match self {
            Variant::Iterator => iterator_max(values),
            Variant::ForEachLoop => for_each_loop_max(values),
            Variant::ForEachClosure => for_each_closure_max(values),
            Variant::Indexed => indexed_max(values),
            Variant::ParallelReduce => parallel_reduce_max(values),
            Variant::SequentialReduce => sequential_reduce_max(values),
            Variant::Fold => fold_max(values),
            Variant::ParallelPrimitive => parallel_primitive_max(values),
            Variant::SequentialPrimitive => sequential_primitive_max(values),
        }
    }
}

impl MaxFinder for Variant {
    fn name(&self) -> &'static str {
        Variant::name(*self)
    }

    fn find_max(&self, values: &[i32]) -> Result<i32> {
        self.run(values)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_finds_nine() {
        let values = [3, 1, 4, 1, 5, 9, 2, 6];
        for variant in Variant::ALL {
            assert_eq!(variant.run(&values).unwrap(), 9, "{variant}");
        }
    }

    #[test]
    fn every_variant_handles_all_negative() {
        let values = [-5, -1, -9];
        for variant in Variant::ALL {
            assert_eq!(variant.run(&values).unwrap(), -1, "{variant}");
        }
    }

    #[test]
    fn min_value_as_sole_maximum() {
        let values = [i32::MIN, i32::MIN];
        for variant in Variant::ALL {
            assert_eq!(variant.run(&values).unwrap(), i32::MIN, "{variant}");
        }
    }

    #[test]
    fn empty_input_names_the_variant() {
        for variant in Variant::ALL {
            match variant.run(&[]) {
                Err(LoopError::EmptyInput { variant: name }) => assert_eq!(name, variant.name()),
                other => panic!("{variant}: expected EmptyInput, got {other:?}"),
            }
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = Variant::ALL.iter().map(|v| v.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Variant::ALL.len());
    }

    #[test]
    fn only_rayon_variants_are_parallel() {
        let parallel: Vec<_> = Variant::ALL.into_iter().filter(|v| v.is_parallel()).collect();
        assert_eq!(parallel, [Variant::ParallelReduce, Variant::ParallelPrimitive]);
    }

    #[test]
    fn max_finder_dispatches_to_run() {
        let finders: Vec<Box<dyn MaxFinder>> =
            Variant::ALL.into_iter().map(|v| Box::new(v) as Box<dyn MaxFinder>).collect();
        for finder in &finders {
            assert_eq!(finder.find_max(&[7, 70, 700]).unwrap(), 700, "{}", finder.name());
        }
    }
}
