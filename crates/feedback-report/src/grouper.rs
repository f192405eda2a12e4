use tracing::warn;

use feedback_core::error::{Error, Result};
use feedback_core::types::{PolarityScores, Sentiment, SentimentBuckets};

/// Splits texts by the sign of their compound score and ranks each bucket
/// by descending |compound|, keeping input order between equal magnitudes.
///
/// `texts` and `scores` are parallel and must be non-empty and of equal
/// length; anything else is a [`Error::Mismatch`].
pub fn group_by_sentiment(texts: &[String], scores: &[PolarityScores]) -> Result<SentimentBuckets> {
    if texts.is_empty() || texts.len() != scores.len() {
        let err = Error::Mismatch { texts: texts.len(), scores: scores.len() };
        warn!(error = %err, "cannot group by sentiment");
        return Err(err);
    }

    let mut buckets = SentimentBuckets::default();
    for sentiment in Sentiment::ALL {
        let mut ranked: Vec<(&String, f64)> = texts
            .iter()
            .zip(scores)
            .filter(|(_, s)| s.sentiment() == sentiment)
            .map(|(t, s)| (t, s.compound.abs()))
            .collect();
        // stable: ties keep encounter order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        *buckets.get_mut(sentiment) = ranked.into_iter().map(|(t, _)| t.clone()).collect();
    }
    Ok(buckets)
}
