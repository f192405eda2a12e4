//! Domain types shared by the scoring, matching and reporting crates.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;

use crate::error::{Error, Result};

/// Scope name reserved for the whole feedback set.
pub const OVERALL: &str = "overall";

/// Lexicon polarity of a single text.
///
/// `negative`, `neutral` and `positive` are proportions that sum to 1;
/// `compound` is the normalized overall score in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarityScores {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    pub compound: f64,
}

impl PolarityScores {
    /// Score of a text with nothing to score: fully neutral.
    pub fn neutral_only() -> Self {
        Self { negative: 0.0, neutral: 1.0, positive: 0.0, compound: 0.0 }
    }

    pub fn sentiment(&self) -> Sentiment {
        Sentiment::from_compound(self.compound)
    }

    pub fn proportion_sum(&self) -> f64 {
        self.negative + self.neutral + self.positive
    }

    pub fn is_finite(&self) -> bool {
        [self.negative, self.neutral, self.positive, self.compound]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// The three fixed sentiment buckets, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn from_compound(compound: f64) -> Self {
        if compound > 0.0 {
            Sentiment::Positive
        } else if compound < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    pub fn label(self) -> String {
        capitalize(self.as_str())
    }
}

/// Texts of one scope split by sentiment, strongest first in each bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBuckets {
    pub positive: Vec<String>,
    pub neutral: Vec<String>,
    pub negative: Vec<String>,
}

impl SentimentBuckets {
    pub fn get(&self, sentiment: Sentiment) -> &[String] {
        match sentiment {
            Sentiment::Positive => &self.positive,
            Sentiment::Neutral => &self.neutral,
            Sentiment::Negative => &self.negative,
        }
    }

    pub fn get_mut(&mut self, sentiment: Sentiment) -> &mut Vec<String> {
        match sentiment {
            Sentiment::Positive => &mut self.positive,
            Sentiment::Neutral => &mut self.neutral,
            Sentiment::Negative => &mut self.negative,
        }
    }

    /// Total number of texts across the three buckets.
    pub fn len(&self) -> usize {
        self.positive.len() + self.neutral.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named category and the keywords that select texts into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub keywords: Vec<String>,
}

impl Topic {
    pub fn new<S: Into<String>>(name: S, keywords: &[&str]) -> Self {
        Self { name: name.into(), keywords: keywords.iter().map(|k| k.to_string()).collect() }
    }
}

/// Ordered topic → keyword table. Topic names are unique and never
/// equal to [`OVERALL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Topic>", into = "Vec<Topic>")]
pub struct TopicTable {
    topics: Vec<Topic>,
}

impl TopicTable {
    pub fn new(topics: Vec<Topic>) -> Result<Self> {
        let topics: Vec<Topic> = topics
            .into_iter()
            .map(|topic| Topic { name: topic.name.trim().to_string(), ..topic })
            .collect();
        let mut seen = HashSet::new();
        for topic in &topics {
            let name = topic.name.as_str();
            if name.is_empty() {
                return Err(Error::InvalidConfig("topic name must not be empty".to_string()));
            }
            if name.eq_ignore_ascii_case(OVERALL) {
                return Err(Error::InvalidConfig(format!("topic name '{}' is reserved", name)));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(Error::InvalidConfig(format!("duplicate topic '{}'", name)));
            }
        }
        Ok(Self { topics })
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl Default for TopicTable {
    fn default() -> Self {
        Self {
            topics: vec![
                Topic::new("product", &["product", "item", "quality", "feature", "design", "selection"]),
                Topic::new("delivery", &["delivery", "ship", "receive", "arrive"]),
                Topic::new("service", &["email", "support", "help", "service", "customer"]),
                Topic::new("price", &["price", "expensive", "dollar", "value", "afford", "budget"]),
            ],
        }
    }
}

impl TryFrom<Vec<Topic>> for TopicTable {
    type Error = Error;

    fn try_from(topics: Vec<Topic>) -> Result<Self> {
        Self::new(topics)
    }
}

impl From<TopicTable> for Vec<Topic> {
    fn from(table: TopicTable) -> Self {
        table.topics
    }
}

/// Sentences matched per topic. Every topic of the table is present,
/// in table order, even when nothing matched it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicBuckets {
    buckets: Vec<(String, Vec<String>)>,
}

impl TopicBuckets {
    pub fn for_table(table: &TopicTable) -> Self {
        Self { buckets: table.names().map(|n| (n.to_string(), Vec::new())).collect() }
    }

    pub fn get(&self, topic: &str) -> Option<&[String]> {
        self.buckets.iter().find(|(n, _)| n == topic).map(|(_, texts)| texts.as_slice())
    }

    pub fn get_mut(&mut self, topic: &str) -> Option<&mut Vec<String>> {
        self.buckets.iter_mut().find(|(n, _)| n == topic).map(|(_, texts)| texts)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.buckets.iter().map(|(n, texts)| (n.as_str(), texts.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl Serialize for TopicBuckets {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (name, texts) in &self.buckets {
            map.serialize_entry(name, texts)?;
        }
        map.end()
    }
}

/// Key into [`GroupedResults`]: the whole feedback set or one topic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    Overall,
    Topic(String),
}

impl Scope {
    pub fn name(&self) -> &str {
        match self {
            Scope::Overall => OVERALL,
            Scope::Topic(name) => name,
        }
    }

    pub fn label(&self) -> String {
        capitalize(self.name())
    }

    pub fn is_overall(&self) -> bool {
        matches!(self, Scope::Overall)
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Scope → sentiment buckets, overall first and then topics in table order.
/// Only scopes that were computed successfully are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedResults {
    scopes: Vec<(Scope, SentimentBuckets)>,
}

impl GroupedResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the buckets of `scope`, keeping overall first.
    pub fn insert(&mut self, scope: Scope, buckets: SentimentBuckets) {
        if let Some(entry) = self.scopes.iter_mut().find(|(s, _)| *s == scope) {
            entry.1 = buckets;
        } else if scope.is_overall() {
            self.scopes.insert(0, (scope, buckets));
        } else {
            self.scopes.push((scope, buckets));
        }
    }

    pub fn get(&self, scope: &str) -> Option<&SentimentBuckets> {
        self.scopes.iter().find(|(s, _)| s.name() == scope).map(|(_, b)| b)
    }

    pub fn overall(&self) -> Option<&SentimentBuckets> {
        self.get(OVERALL)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Scope, &SentimentBuckets)> {
        self.scopes.iter().map(|(s, b)| (s, b))
    }

    pub fn topics(&self) -> impl Iterator<Item = (&Scope, &SentimentBuckets)> {
        self.iter().filter(|(s, _)| !s.is_overall())
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl Serialize for GroupedResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scopes.len()))?;
        for (scope, buckets) in &self.scopes {
            map.serialize_entry(scope.name(), buckets)?;
        }
        map.end()
    }
}

/// A scope left out of [`GroupedResults`] and the reason why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeFailure {
    pub scope: String,
    pub reason: String,
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
