//! Comparative micro-benchmarks for Rust looping idioms.
//!
//! A [Dataset] of 100 000 random integers is generated once, then handed by
//! reference to nine [variants] that each compute its maximum a different way.
//! The criterion bench `loop_max` times them; the `loop-max-bench` binary runs
//! each once and prints the results.
//!
//! ```
//! use loop_max_bench::{Dataset, DatasetConfig, Variant};
//!
//! let dataset = Dataset::generate(&DatasetConfig::default().with_seed(1))?;
//! let expected = Variant::Fold.run(&dataset)?;
//! for variant in Variant::ALL {
//!     assert_eq!(variant.run(&dataset)?, expected);
//! }
//! # Ok::<(), loop_max_bench::LoopError>(())
//! ```

pub mod dataset;
pub mod error;
pub mod logging;
pub mod pool;
pub mod runner;
pub mod variants;

pub use dataset::{Dataset, DatasetConfig, DATASET_SIZE, VALUE_BOUND};
pub use error::{LoopError, Result};
pub use pool::PoolConfig;
pub use runner::{Outcome, check_consistency, run_all, run_each, run_one, write_report};
pub use variants::{MaxFinder, Variant};
