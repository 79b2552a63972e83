pub mod engine;
pub mod report;

pub use crate::domain::model::{PlanStep, Recommendation, StatusReport, StepStatus};
pub use crate::domain::ports::ReportSink;
pub use crate::utils::error::Result;
