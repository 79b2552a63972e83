use crate::core::ReportSink;
use crate::utils::error::Result;
use std::io::{self, Write};

/// Writes reports to the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for StdoutSink {
    fn write_report(&mut self, rendered: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(rendered.as_bytes())?;
        handle.flush()?;
        Ok(())
    }
}
