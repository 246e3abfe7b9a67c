use crate::core::Pipeline;
use crate::utils::error::Result;
use std::sync::atomic::{AtomicBool, Ordering};

/// Result of one [`ExportEngine::run`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The archive was written to this location.
    Completed(String),
    /// Another export was already in flight; nothing was done.
    Skipped,
}

pub struct ExportEngine<P: Pipeline> {
    pipeline: P,
    in_flight: AtomicBool,
}

struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<P: Pipeline> ExportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_running(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Runs one export. A call made while another is running returns
    /// [`ExportOutcome::Skipped`] without touching the pipeline.
    pub async fn run(&self) -> Result<ExportOutcome> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!("Export already in progress, ignoring request");
            return Ok(ExportOutcome::Skipped);
        }
        let _guard = InFlight(&self.in_flight);

        tracing::info!("Starting export...");

        tracing::debug!("Loading portfolio data...");
        let data = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded portfolio: {} skills, {} experience, {} projects, {} education",
            data.skills.len(),
            data.experience.len(),
            data.projects.len(),
            data.education.len()
        );

        tracing::debug!("Rendering and compiling document...");
        let bundle = self.pipeline.transform(data).await?;
        tracing::info!(
            "Compiled document ({} bytes), archive {}",
            bundle.document.len(),
            bundle.archive_name
        );

        tracing::debug!("Writing archive...");
        let output_path = self.pipeline.load(bundle).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(ExportOutcome::Completed(output_path))
    }
}
