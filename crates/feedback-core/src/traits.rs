use tracing::warn;

use crate::error::{Error, Result};
use crate::types::PolarityScores;

pub trait SentimentScorer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores>;

    /// Scores every text or none: the first failing item abandons the batch.
    fn score(&self, texts: &[String]) -> Result<Vec<PolarityScores>> {
        texts
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let scores = self
                    .polarity_scores(text)
                    .map_err(|e| Error::Scoring { index, reason: e.to_string() })?;
                if scores.is_finite() {
                    Ok(scores)
                } else {
                    Err(Error::Scoring { index, reason: format!("non-finite scores {:?}", scores) })
                }
            })
            .collect::<Result<Vec<_>>>()
            .inspect_err(|e| warn!(error = %e, batch = texts.len(), "abandoning sentiment batch"))
    }
}

pub trait Lemmatizer: Send + Sync {
    /// Lower-cases `text` and reduces it to base forms as one string.
    fn lemmatize(&self, text: &str) -> Result<String>;
}
