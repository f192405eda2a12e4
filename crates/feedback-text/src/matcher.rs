use tracing::warn;

use feedback_core::error::Result;
use feedback_core::traits::Lemmatizer;

/// Substring matching of lemmatized keywords against lemmatized text.
///
/// Containment is not token-bounded, so "ship" also matches "relationship".
pub struct KeywordMatcher<L: Lemmatizer> {
	lemmatizer: L,
}

impl<L: Lemmatizer> KeywordMatcher<L> {
	pub fn new(lemmatizer: L) -> Self { Self { lemmatizer } }

	/// True if any keyword matches; lemmatizer failures count as no match.
	pub fn matches<S: AsRef<str>>(&self, text: &str, keywords: &[S]) -> bool {
		self.try_matches(text, keywords).unwrap_or_else(|e| {
			warn!(error = %e, "lemmatization unavailable, treating text as unmatched");
			false
		})
	}

	pub fn try_matches<S: AsRef<str>>(&self, text: &str, keywords: &[S]) -> Result<bool> {
		let text_lemma = self.lemmatizer.lemmatize(&text.to_lowercase())?;
		for keyword in keywords {
			let keyword = keyword.as_ref().trim();
			if keyword.is_empty() { continue; }
			let keyword_lemma = self.lemmatizer.lemmatize(keyword)?;
			if !keyword_lemma.is_empty() && text_lemma.contains(&keyword_lemma) { return Ok(true); }
		}
		Ok(false)
	}
}
