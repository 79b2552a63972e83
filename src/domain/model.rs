use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Pending,
}

impl StepStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            StepStatus::Done => "✅",
            StepStatus::Pending => "⏳",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStep {
    pub status: StepStatus,
    pub description: String,
}

impl PlanStep {
    pub fn done(description: impl Into<String>) -> Self {
        Self {
            status: StepStatus::Done,
            description: description.into(),
        }
    }

    pub fn pending(description: impl Into<String>) -> Self {
        Self {
            status: StepStatus::Pending,
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub label: char,
    pub text: String,
}

/// A fixed status report, rendered through `Display`.
///
/// Sections are separated by a single blank line; steps are numbered from 1
/// in the order they appear in `steps`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub headline: String,
    pub summary_title: String,
    pub steps: Vec<PlanStep>,
    pub complexity_note: String,
    pub recommendations: Vec<Recommendation>,
    pub prompt: String,
}

impl StatusReport {
    pub fn completed_steps(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.status == StepStatus::Done)
            .count()
    }

    pub fn pending_steps(&self) -> usize {
        self.steps.len() - self.completed_steps()
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline)?;
        writeln!(f)?;

        writeln!(f, "{}", self.summary_title)?;
        for (index, step) in self.steps.iter().enumerate() {
            writeln!(
                f,
                "{}. {} {}",
                index + 1,
                step.status.symbol(),
                step.description
            )?;
        }
        writeln!(f)?;

        writeln!(f, "{}", self.complexity_note)?;
        for recommendation in &self.recommendations {
            writeln!(f, "{}) {}", recommendation.label, recommendation.text)?;
        }
        writeln!(f)?;

        writeln!(f, "{}", self.prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_report() -> StatusReport {
        StatusReport {
            headline: "Done!".to_string(),
            summary_title: "Steps:".to_string(),
            steps: vec![PlanStep::done("first"), PlanStep::pending("second")],
            complexity_note: "Options:".to_string(),
            recommendations: vec![Recommendation {
                label: 'A',
                text: "only one".to_string(),
            }],
            prompt: "Well?".to_string(),
        }
    }

    #[test]
    fn test_step_symbols() {
        assert_eq!(StepStatus::Done.symbol(), "✅");
        assert_eq!(StepStatus::Pending.symbol(), "⏳");
    }

    #[test]
    fn test_display_numbers_steps_and_separates_sections() {
        let rendered = small_report().to_string();
        assert_eq!(
            rendered,
            "Done!\n\nSteps:\n1. ✅ first\n2. ⏳ second\n\nOptions:\nA) only one\n\nWell?\n"
        );
    }

    #[test]
    fn test_step_counts() {
        let report = small_report();
        assert_eq!(report.completed_steps(), 1);
        assert_eq!(report.pending_steps(), 1);
    }
}
