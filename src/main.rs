//! Run every variant once over a fresh fixture and print each maximum.

use loop_max_bench::logging::{self, LoggingConfig};
use loop_max_bench::{Dataset, DatasetConfig, check_consistency, run_all, write_report};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(&LoggingConfig::default())?;

    let dataset = Dataset::generate(&DatasetConfig::default())?;
    let outcomes = run_all(&dataset)?;
    write_report(&outcomes, std::io::stdout().lock())?;

    let max = check_consistency(&outcomes)?;
    info!(max, variants = outcomes.len(), "all variants agree");
    Ok(())
}
