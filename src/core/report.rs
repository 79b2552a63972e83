use crate::core::{PlanStep, Recommendation, StatusReport};

/// Line count of `application.html` at the time the plan was written.
pub const TARGET_FILE_LINES: usize = 1376;

pub const PLAN_DOCUMENT: &str = "APPLICATION-ENHANCEMENT-PLAN.md";

/// The application enhancement status report.
///
/// Neither the target file nor the plan document is read; both only appear
/// in the text.
pub fn enhancement_plan() -> StatusReport {
    StatusReport {
        headline: "✅ Application enhancement plan created!".to_string(),
        summary_title: "🎯 Summary of changes:".to_string(),
        steps: vec![
            PlanStep::done("Added CSS for collapsible sections"),
            PlanStep::done("Added Vue.js data structure for new fields"),
            PlanStep::done("Added Vue.js methods for section management"),
            PlanStep::pending("Need to convert HTML to accordion format"),
        ],
        complexity_note: format!(
            "Due to file complexity ({} lines), I recommend:",
            TARGET_FILE_LINES
        ),
        recommendations: vec![
            Recommendation {
                label: 'A',
                text: format!("Manual implementation following {}", PLAN_DOCUMENT),
            },
            Recommendation {
                label: 'B',
                text: "Or let me create a clean new version from scratch".to_string(),
            },
        ],
        prompt: "Which approach would you prefer?".to_string(),
    }
}
