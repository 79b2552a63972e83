#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::StdoutSink, CliConfig};

pub use core::{engine::ReportEngine, report::enhancement_plan};
pub use domain::model::StatusReport;
pub use utils::error::{ReportError, Result};
