//! feedback-text
//!
//! Text normalization and topic matching: a tantivy-based lemmatizer, the
//! keyword matcher built on it, the topic categorizer and a sentence splitter.

pub mod tantivy_utils;
pub mod lemmatizer;
pub mod matcher;
pub mod categorize;
pub mod sentences;

pub use categorize::TopicCategorizer;
pub use lemmatizer::TantivyLemmatizer;
pub use matcher::KeywordMatcher;
pub use sentences::{split_all, split_sentences};
