use tracing::debug;

use feedback_core::traits::Lemmatizer;
use feedback_core::types::{TopicBuckets, TopicTable};

use crate::matcher::KeywordMatcher;

pub struct TopicCategorizer<L: Lemmatizer> {
	matcher: KeywordMatcher<L>,
}

impl<L: Lemmatizer> TopicCategorizer<L> {
	pub fn new(matcher: KeywordMatcher<L>) -> Self { Self { matcher } }

	/// Buckets sentences by topic. Every topic of `table` is present; a
	/// sentence lands in each topic it matches, in input order.
	pub fn categorize(&self, sentences: &[String], table: &TopicTable) -> TopicBuckets {
		let mut buckets = TopicBuckets::for_table(table);
		for sentence in sentences {
			for topic in table.topics() {
				if self.matcher.matches(sentence, &topic.keywords) {
					if let Some(bucket) = buckets.get_mut(&topic.name) { bucket.push(sentence.clone()); }
				}
			}
		}
		for (topic, texts) in buckets.iter() { debug!(topic, matched = texts.len(), "categorized"); }
		buckets
	}
}
