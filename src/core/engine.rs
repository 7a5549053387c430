use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Runs a pipeline's extract, transform and load phases in order.
pub struct GlobeEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> GlobeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting globe build...");
        self.monitor.log_stats("Start");

        let records = self.pipeline.extract().await?;
        tracing::info!("Extracted {} species records", records.len());
        self.monitor.log_stats("Extract");

        let dataset = self.pipeline.transform(records).await?;
        tracing::info!(
            "Selected {} of {} species ({} excluded)",
            dataset.selection.entries.len(),
            dataset.total_records,
            dataset.excluded.len()
        );
        self.monitor.log_stats("Transform");

        let output_path = self.pipeline.load(dataset).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
