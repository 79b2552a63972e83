use crate::utils::error::Result;

/// Destination for a rendered report.
pub trait ReportSink {
    fn write_report(&mut self, rendered: &str) -> Result<()>;
}

impl ReportSink for Vec<u8> {
    fn write_report(&mut self, rendered: &str) -> Result<()> {
        self.extend_from_slice(rendered.as_bytes());
        Ok(())
    }
}
