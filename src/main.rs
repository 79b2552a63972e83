use plan_report::utils::logger;
use plan_report::{enhancement_plan, CliConfig, ReportEngine, StdoutSink};

fn main() {
    let config = CliConfig::from_args_lenient();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting plan-report");
    tracing::debug!("CLI config: {:?}", config);
    if !config.ignored.is_empty() {
        tracing::debug!("Ignoring {} extra argument(s)", config.ignored.len());
    }

    let report = enhancement_plan();
    let mut engine = ReportEngine::new(StdoutSink::new());

    if let Err(e) = engine.run(&report) {
        tracing::error!("❌ Writing report failed: {} (Severity: {:?})", e, e.severity());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(exit_code);
        }
    }
}
