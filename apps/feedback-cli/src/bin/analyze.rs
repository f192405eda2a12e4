use std::env;
use std::path::PathBuf;

use feedback_core::config::Config;
use feedback_core::error::Error;
use feedback_core::input::FeedbackReader;
use feedback_report::build_pipeline;
use tracing::info;
use tracing_subscriber::EnvFilter;

const EMPTY_COLUMN: &str = "No feedback found. Please check that your chosen column contains text.";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <file> [column]", args[0]);
        eprintln!("Example: {} survey.xlsx B", args[0]);
        std::process::exit(1);
    }
    let path = PathBuf::from(&args[1]);

    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let settings = config.settings()?;
    let reader = FeedbackReader::from_settings(&settings.input, args.get(2).map(String::as_str))?;
    let texts = reader.read_column(&path)?;
    info!(path = %path.display(), column = reader.column(), items = texts.len(), "read feedback");

    let pipeline = build_pipeline(&config)?;
    let report = match pipeline.analyze(&texts) {
        Ok(report) => report,
        Err(Error::EmptyInput) => { eprintln!("{}", EMPTY_COLUMN); std::process::exit(2); }
        Err(e) => return Err(e.into()),
    };
    if report.results.is_empty() {
        eprintln!("Analysis produced no results. Please check that your chosen column contains text.");
        std::process::exit(2);
    }
    for failure in &report.failures {
        eprintln!("warning: {} could not be analyzed: {}", failure.scope, failure.reason);
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
