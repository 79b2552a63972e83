use crate::core::{ReportSink, Result, StatusReport};

pub struct ReportEngine<S: ReportSink> {
    sink: S,
}

impl<S: ReportSink> ReportEngine<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Renders `report` into the sink and returns the number of bytes written.
    pub fn run(&mut self, report: &StatusReport) -> Result<usize> {
        tracing::debug!(
            "Rendering report: {} steps ({} done, {} pending), {} recommendations",
            report.steps.len(),
            report.completed_steps(),
            report.pending_steps(),
            report.recommendations.len()
        );

        let rendered = report.to_string();
        self.sink.write_report(&rendered)?;

        tracing::debug!("Report written ({} bytes)", rendered.len());
        Ok(rendered.len())
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
