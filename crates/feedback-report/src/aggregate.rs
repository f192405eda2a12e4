use tracing::{debug, warn};

use feedback_core::error::{Error, Result};
use feedback_core::traits::SentimentScorer;
use feedback_core::types::{GroupedResults, Scope, ScopeFailure, SentimentBuckets, TopicBuckets};

use crate::grouper::group_by_sentiment;

/// Grouped results plus the scopes that could not be computed.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub results: GroupedResults,
    pub failures: Vec<ScopeFailure>,
}

/// Scores and groups the whole feedback set and every topic subset.
///
/// A topic without texts is kept with empty buckets. A scope whose
/// scoring or grouping fails is left out and reported in
/// [`Aggregation::failures`]; the remaining scopes are still computed.
pub struct ResultsAggregator<'a, S: SentimentScorer> {
    scorer: &'a S,
}

impl<'a, S: SentimentScorer> ResultsAggregator<'a, S> {
    pub fn new(scorer: &'a S) -> Self {
        Self { scorer }
    }

    pub fn aggregate(&self, all_texts: &[String], topics: &TopicBuckets) -> Aggregation {
        let mut aggregation = Aggregation::default();

        let overall = if all_texts.is_empty() { Err(Error::EmptyInput) } else { self.scope_buckets(all_texts) };
        self.record(&mut aggregation, Scope::Overall, overall);

        for (topic, texts) in topics.iter() {
            let scope = Scope::Topic(topic.to_string());
            if texts.is_empty() {
                debug!(%scope, "no matching feedback, keeping empty buckets");
                aggregation.results.insert(scope, SentimentBuckets::default());
                continue;
            }
            self.record(&mut aggregation, scope, self.scope_buckets(texts));
        }
        aggregation
    }

    fn scope_buckets(&self, texts: &[String]) -> Result<SentimentBuckets> {
        let scores = self.scorer.score(texts)?;
        group_by_sentiment(texts, &scores)
    }

    fn record(&self, aggregation: &mut Aggregation, scope: Scope, outcome: Result<SentimentBuckets>) {
        match outcome {
            Ok(buckets) => {
                debug!(%scope, items = buckets.len(), "grouped by sentiment");
                aggregation.results.insert(scope, buckets);
            }
            Err(e) => {
                warn!(%scope, error = %e, "omitting scope from results");
                aggregation.failures.push(ScopeFailure { scope: scope.name().to_string(), reason: e.to_string() });
            }
        }
    }
}
