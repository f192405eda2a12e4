use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tantivy::tokenizer::TextAnalyzer;
use tracing::{info, warn};

use feedback_core::error::{Error, Result};
use feedback_core::traits::Lemmatizer;

use crate::tantivy_utils::{collect_tokens, stem_analyzer, word_analyzer};

/// Irregular forms the stemmer cannot reduce on its own.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
	("bought", "buy"), ("brought", "bring"), ("broke", "break"), ("broken", "break"),
	("came", "come"), ("chose", "choose"), ("chosen", "choose"), ("found", "find"),
	("gave", "give"), ("given", "give"), ("got", "get"), ("gotten", "get"),
	("went", "go"), ("gone", "go"), ("kept", "keep"), ("left", "leave"),
	("made", "make"), ("paid", "pay"), ("sent", "send"), ("sold", "sell"),
	("spent", "spend"), ("took", "take"), ("taken", "take"), ("told", "tell"),
	("thought", "think"), ("wore", "wear"), ("worn", "wear"), ("wrote", "write"),
	("children", "child"), ("people", "person"), ("men", "man"), ("women", "woman"),
	("feet", "foot"), ("teeth", "tooth"), ("mice", "mouse"), ("knives", "knife"),
];

/// Lemmatizer built on tantivy's text analysis: tokenize and lower-case,
/// map irregular forms to their base, then stem with the English Snowball stemmer.
///
/// The output is the normalized tokens joined by single spaces.
pub struct TantivyLemmatizer {
	words: TextAnalyzer,
	stems: TextAnalyzer,
	exceptions: HashMap<String, String>,
}

impl TantivyLemmatizer {
	pub fn new() -> Self {
		let exceptions = IRREGULAR_FORMS.iter().map(|(form, base)| (form.to_string(), base.to_string())).collect();
		Self { words: word_analyzer(), stems: stem_analyzer(), exceptions }
	}

	/// Adds irregular forms from a file with one `inflected base` pair per line.
	/// Blank lines and `#` comments are skipped.
	pub fn with_exceptions_file(mut self, path: &Path) -> Result<Self> {
		let content = fs::read_to_string(path)
			.map_err(|e| Error::ResourceUnavailable(format!("lemmatizer exceptions {}: {}", path.display(), e)))?;
		let mut added = 0usize;
		for (line_no, line) in content.lines().enumerate() {
			let line = line.trim();
			if line.is_empty() || line.starts_with('#') { continue; }
			let mut parts = line.split_whitespace();
			match (parts.next(), parts.next()) {
				(Some(form), Some(base)) => { self.add_exception(form, base); added += 1; }
				_ => warn!(path = %path.display(), line = line_no + 1, "skipping malformed exception entry"),
			}
		}
		info!(path = %path.display(), added, "loaded lemmatizer exceptions");
		Ok(self)
	}

	pub fn add_exception(&mut self, form: &str, base: &str) {
		self.exceptions.insert(form.to_lowercase(), base.to_lowercase());
	}

	fn base_form<'a>(&'a self, word: &'a str) -> &'a str {
		self.exceptions.get(word).map_or(word, String::as_str)
	}
}

impl Default for TantivyLemmatizer {
	fn default() -> Self { Self::new() }
}

impl Lemmatizer for TantivyLemmatizer {
	fn lemmatize(&self, text: &str) -> Result<String> {
		let words = collect_tokens(&self.words, text);
		let bases: Vec<&str> = words.iter().map(|w| self.base_form(w)).collect();
		Ok(collect_tokens(&self.stems, &bases.join(" ")).join(" "))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lemmatize_lowercases_and_stems() {
		let lemmatizer = TantivyLemmatizer::new();
		assert_eq!(lemmatizer.lemmatize("The product ARRIVED early.").unwrap(), "the product arriv earli");
		assert_eq!(lemmatizer.lemmatize("arrive").unwrap(), "arriv");
	}

	#[test]
	fn lemmatize_maps_irregular_forms() {
		let lemmatizer = TantivyLemmatizer::new();
		assert_eq!(lemmatizer.lemmatize("Children bought").unwrap(), "child buy");
	}

	#[test]
	fn lemmatize_empty_text_is_empty() {
		assert_eq!(TantivyLemmatizer::new().lemmatize("  ?! ").unwrap(), "");
	}
}
