//! Worker pool configuration for the parallel variants.
//!
//! By default the parallel variants run on rayon's global pool. [PoolConfig]
//! builds a dedicated pool instead so runs can be compared across thread counts.

use crate::error::{LoopError, Result};
use crate::variants::MaxFinder;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

const WORKER_STACK_BYTES: usize = 2 * 1024 * 1024;

/// Thread pool settings. Workers are named `loop-max-<label>-<index>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    num_threads: usize,
    label: &'static str,
}

impl PoolConfig {
    fn preset(num_threads: usize, label: &'static str) -> Self {
        Self {
            num_threads: num_threads.max(1),
            label,
        }
    }

    /// One worker per logical core.
    pub fn cpu_bound() -> Self {
        Self::preset(num_cpus::get(), "cpu")
    }

    /// One worker per physical core, ignoring hyperthreads.
    pub fn physical_cores_only() -> Self {
        Self::preset(num_cpus::get_physical(), "physical")
    }

    /// Parallel variants then run serially on one worker.
    pub fn single_threaded() -> Self {
        Self::preset(1, "single")
    }

    pub fn with_threads(num_threads: usize) -> Result<Self> {
        if num_threads == 0 {
            return Err(LoopError::InvalidConfig(
                "thread count must be at least 1".into(),
            ));
        }
        Ok(Self::preset(num_threads, "fixed"))
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn build(&self) -> Result<ThreadPool> {
        let label = self.label;
        debug!(threads = self.num_threads, label, "building worker pool");
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.num_threads)
            .stack_size(WORKER_STACK_BYTES)
            .thread_name(move |i| format!("loop-max-{label}-{i}"))
            .build()?;
        Ok(pool)
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::cpu_bound()
    }
}

/// Run `finder` with `pool` as the current rayon pool.
pub fn run_in<F: MaxFinder + ?Sized>(pool: &ThreadPool, finder: &F, values: &[i32]) -> Result<i32> {
    pool.install(|| finder.find_max(values))
}
