//! Benchmark fixture: a fixed-size list of pseudo-random integers.
//!
//! The fixture is built once before measurement and handed to each variant by
//! reference. It never changes after construction.

use crate::error::{LoopError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Deref;
use tracing::debug;

/// Number of elements in the default fixture.
pub const DATASET_SIZE: usize = 100_000;

/// Exclusive upper bound of generated values.
pub const VALUE_BOUND: i32 = 1_000_000;

/// How a [Dataset] is generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetConfig {
    pub size: usize,
    pub bound: i32,
    /// `None` draws from the thread-local RNG.
    pub seed: Option<u64>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            size: DATASET_SIZE,
            bound: VALUE_BOUND,
            seed: None,
        }
    }
}

impl DatasetConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_bound(mut self, bound: i32) -> Self {
        self.bound = bound;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configurations whose value range `[0, bound)` is empty.
    pub fn validate(&self) -> Result<()> {
        if self.bound <= 0 {
            return Err(LoopError::InvalidConfig(format!(
                "value bound must be positive, got {}",
                self.bound
            )));
        }
        Ok(())
    }
}

/// Immutable list of integers shared read-only by every variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset {
    values: Vec<i32>,
    seed: Option<u64>,
}

impl Dataset {
    /// Draw `config.size` values uniformly from `[0, config.bound)`.
    ///
    /// Fails with [LoopError::InvalidConfig] when `config.bound <= 0`.
    pub fn generate(config: &DatasetConfig) -> Result<Self> {
        config.validate()?;
        let values = match config.seed {
            Some(seed) => fill(&mut StdRng::seed_from_u64(seed), config.size, config.bound),
            None => fill(&mut rand::rng(), config.size, config.bound),
        };
        debug!(size = values.len(), seed = ?config.seed, "generated dataset");
        Ok(Self {
            values,
            seed: config.seed,
        })
    }

    /// Wrap explicit values, e.g. a hand-written boundary case.
    pub fn from_values(values: Vec<i32>) -> Self {
        Self { values, seed: None }
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Deref for Dataset {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        &self.values
    }
}

impl From<Vec<i32>> for Dataset {
    fn from(values: Vec<i32>) -> Self {
        Self::from_values(values)
    }
}

fn fill<R: Rng>(rng: &mut R, size: usize, bound: i32) -> Vec<i32> {
    let mut values = Vec::with_capacity(size);
    for _ in 0..size {
        values.push(rng.random_range(0..bound));
    }
    values
}
