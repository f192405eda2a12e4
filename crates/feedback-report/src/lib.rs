//! feedback-report
//!
//! Turns raw feedback into grouped sentiment results and chart series:
//! sentence splitting and topic categorization, per-scope scoring and
//! grouping, then chart formatting.

use serde::Serialize;
use tracing::info;

use feedback_core::config::Config;
use feedback_core::error::{Error, Result};
use feedback_core::traits::{Lemmatizer, SentimentScorer};
use feedback_core::types::{GroupedResults, ScopeFailure, TopicBuckets, TopicTable};
use feedback_sentiment::{load_lexicon, VaderAnalyzer};
use feedback_text::{split_all, KeywordMatcher, TantivyLemmatizer, TopicCategorizer};

pub mod aggregate;
pub mod charts;
pub mod grouper;

pub use aggregate::{Aggregation, ResultsAggregator};
pub use charts::{format_charts, ChartSeries};
pub use grouper::group_by_sentiment;

/// Everything the presentation layer needs from one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    #[serde(rename = "grouped_text")]
    pub results: GroupedResults,
    pub charts: ChartSeries,
    pub failures: Vec<ScopeFailure>,
}

pub struct FeedbackPipeline<S, L> where S: SentimentScorer, L: Lemmatizer {
    scorer: S,
    categorizer: TopicCategorizer<L>,
    topics: TopicTable,
}

impl<S, L> FeedbackPipeline<S, L> where S: SentimentScorer, L: Lemmatizer {
    pub fn new(scorer: S, lemmatizer: L, topics: TopicTable) -> Self {
        Self { scorer, categorizer: TopicCategorizer::new(KeywordMatcher::new(lemmatizer)), topics }
    }

    /// Sentences of every item bucketed by topic.
    pub fn categorize(&self, items: &[String]) -> TopicBuckets {
        self.categorizer.categorize(&split_all(items), &self.topics)
    }

    /// Runs the whole pipeline. Blank items are dropped; no remaining text
    /// is an [`Error::EmptyInput`].
    pub fn analyze(&self, texts: &[String]) -> Result<AnalysisReport> {
        let items: Vec<String> = texts.iter().map(|t| t.trim()).filter(|t| !t.is_empty()).map(str::to_string).collect();
        if items.is_empty() { return Err(Error::EmptyInput); }

        let by_topic = self.categorize(&items);
        let Aggregation { results, failures } = ResultsAggregator::new(&self.scorer).aggregate(&items, &by_topic);
        let charts = format_charts(&results);
        info!(items = items.len(), scopes = results.len(), failed = failures.len(), "analysis complete");
        Ok(AnalysisReport { results, charts, failures })
    }
}

pub type DefaultPipeline = FeedbackPipeline<VaderAnalyzer, TantivyLemmatizer>;

/// Pipeline with the VADER-style analyzer and tantivy lemmatizer, using the
/// lexicon, exceptions and topics from `config`.
pub fn build_pipeline(config: &Config) -> anyhow::Result<DefaultPipeline> {
    let settings = config.settings()?;
    let lexicon_path = settings.sentiment.lexicon_path.as_ref().map(|p| config.resolve_path(p));
    let scorer = VaderAnalyzer::new(load_lexicon(lexicon_path.as_deref())?);
    let mut lemmatizer = TantivyLemmatizer::new();
    if let Some(path) = &settings.lemmatizer.exceptions_path {
        lemmatizer = lemmatizer.with_exceptions_file(&config.resolve_path(path))?;
    }
    Ok(FeedbackPipeline::new(scorer, lemmatizer, settings.topics))
}
