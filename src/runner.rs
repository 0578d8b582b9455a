//! Batch runner for named jobs

use anyhow::{Context, Result};

/// A named unit of work the tool executes
pub trait Runner {
    fn name(&self) -> &str;
    fn run(&mut self) -> Result<()>;
}

/// Run jobs in order, stopping at the first failure
///
/// The returned error is wrapped with the name of the job that failed.
pub fn run_all(runners: &mut [&mut dyn Runner]) -> Result<()> {
    for runner in runners.iter_mut() {
        let name = runner.name().to_string();
        tracing::info!("Executing {}", name);
        runner.run().with_context(|| format!("Failed to execute runner {}", name))?;
    }
    Ok(())
}
