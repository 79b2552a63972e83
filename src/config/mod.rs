pub mod cli;

use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "plan-report")]
#[command(about = "Print the application enhancement status report")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose logging on stderr")]
    pub verbose: bool,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<String>,
}

impl CliConfig {
    /// Parses process arguments, falling back to defaults on any parse error.
    /// Arguments only tune logging; they never change the report.
    pub fn from_args_lenient() -> Self {
        Self::try_parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_flag() {
        let config = CliConfig::try_parse_from(["plan-report", "--verbose"]).unwrap();
        assert!(config.verbose);
        assert!(config.ignored.is_empty());
    }

    #[test]
    fn test_extra_arguments_are_collected() {
        let config = CliConfig::try_parse_from(["plan-report", "application.html", "-x"]).unwrap();
        assert!(!config.verbose);
        assert_eq!(config.ignored, vec!["application.html", "-x"]);
    }

    #[test]
    fn test_help_is_not_a_flag() {
        let result = CliConfig::try_parse_from(["plan-report", "--help"]);
        let config = result.unwrap_or_default();
        assert!(!config.verbose);
    }
}
