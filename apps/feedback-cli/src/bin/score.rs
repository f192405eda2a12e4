use std::env;

use feedback_core::config::Config;
use feedback_core::traits::SentimentScorer;
use feedback_sentiment::{load_lexicon, VaderAnalyzer};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let texts: Vec<String> = env::args().skip(1).collect();
    if texts.is_empty() {
        eprintln!("Usage: feedback-score <text>...");
        std::process::exit(1);
    }

    let config = Config::load()?;
    let settings = config.settings()?;
    let lexicon_path = settings.sentiment.lexicon_path.as_ref().map(|p| config.resolve_path(p));
    let analyzer = VaderAnalyzer::new(load_lexicon(lexicon_path.as_deref())?);

    for (text, scores) in texts.iter().zip(analyzer.score(&texts)?) {
        println!("{}", serde_json::json!({ "text": text, "scores": scores }));
    }
    Ok(())
}
