//! Chart-ready series derived from grouped results.

use serde::Serialize;

use feedback_core::types::{GroupedResults, Sentiment, SentimentBuckets};

pub const GREEN: &str = "#8bcb90";
pub const YELLOW: &str = "#ffbf5b";
pub const RED: &str = "#ae2c36";
pub const TEAL: &str = "#2980b9";

fn sentiment_color(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => GREEN,
        Sentiment::Neutral => YELLOW,
        Sentiment::Negative => RED,
    }
}

/// Item count per scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub labels: Vec<String>,
    pub data: Vec<usize>,
    pub color: String,
}

/// Sentiment shares of the overall scope; empty when there is no overall scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PieSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    pub colors: Vec<String>,
}

impl PieSeries {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    #[serde(rename = "backgroundColor")]
    pub background_color: String,
    pub data: Vec<f64>,
}

/// One dataset per sentiment, aligned with `labels` (topics).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedBarSeries {
    pub labels: Vec<String>,
    pub data: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    #[serde(rename = "n-feedback")]
    pub n_feedback: BarSeries,
    #[serde(rename = "overall-pie")]
    pub overall_pie: PieSeries,
    #[serde(rename = "topic-sentiment")]
    pub topic_sentiment: StackedBarSeries,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Positive, neutral and negative shares in percent, rounded to two
/// decimals; all zero for empty buckets.
pub fn percentages(buckets: &SentimentBuckets) -> [f64; 3] {
    let total = buckets.len();
    Sentiment::ALL.map(|sentiment| {
        if total == 0 {
            0.0
        } else {
            round2(buckets.get(sentiment).len() as f64 / total as f64 * 100.0)
        }
    })
}

pub fn format_charts(results: &GroupedResults) -> ChartSeries {
    let n_feedback = BarSeries {
        labels: results.iter().map(|(scope, _)| scope.label()).collect(),
        data: results.iter().map(|(_, buckets)| buckets.len()).collect(),
        color: TEAL.to_string(),
    };

    let overall_pie = results
        .overall()
        .map(|buckets| PieSeries {
            labels: Sentiment::ALL.iter().map(|s| s.label()).collect(),
            data: percentages(buckets).to_vec(),
            colors: Sentiment::ALL.iter().map(|s| sentiment_color(*s).to_string()).collect(),
        })
        .unwrap_or_default();

    let topic_shares: Vec<[f64; 3]> = results.topics().map(|(_, buckets)| percentages(buckets)).collect();
    let topic_sentiment = StackedBarSeries {
        labels: results.topics().map(|(scope, _)| scope.label()).collect(),
        data: Sentiment::ALL
            .iter()
            .enumerate()
            .map(|(i, sentiment)| Dataset {
                label: sentiment.label(),
                background_color: sentiment_color(*sentiment).to_string(),
                data: topic_shares.iter().map(|shares| shares[i]).collect(),
            })
            .collect(),
    };

    ChartSeries { n_feedback, overall_pie, topic_sentiment }
}
