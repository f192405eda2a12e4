//! Rule-based sentence splitting for short feedback texts.

/// Words that end with a period without ending the sentence.
const ABBREVIATIONS: &[&str] = &[
	"mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "inc", "ltd", "co", "approx", "dept", "fig",
];

fn is_terminator(c: char) -> bool { matches!(c, '.' | '!' | '?') }

fn is_closing(c: char) -> bool { matches!(c, '"' | '\'' | ')' | ']' | '}' | '\u{201d}' | '\u{2019}') }

/// The word directly before byte offset `end`, without leading opening punctuation.
fn word_before(text: &str, end: usize) -> &str {
	let head = &text[..end];
	let start = head.rfind(char::is_whitespace).map_or(0, |i| i + head[i..].chars().next().map_or(1, char::len_utf8));
	head[start..].trim_start_matches(|c: char| !c.is_alphanumeric())
}

fn is_abbreviation(word: &str) -> bool {
	let lower = word.to_lowercase();
	let mut chars = lower.chars();
	let single_letter = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());
	single_letter || ABBREVIATIONS.contains(&lower.as_str())
}

/// Splits `text` into trimmed sentences.
///
/// A run of `.`, `!` or `?` (plus closing quotes or brackets) ends a sentence
/// when it is followed by whitespace and a word that does not start in lower
/// case, or by the end of the text. A lone period after an abbreviation or a
/// single-letter initial does not.
pub fn split_sentences(text: &str) -> Vec<String> {
	let chars: Vec<(usize, char)> = text.char_indices().collect();
	let mut sentences = Vec::new();
	let mut start = 0;
	let mut i = 0;
	while i < chars.len() {
		let (pos, c) = chars[i];
		if !is_terminator(c) { i += 1; continue; }

		let mut end = i + 1;
		while end < chars.len() && is_terminator(chars[end].1) { end += 1; }
		let run_len = end - i;
		while end < chars.len() && is_closing(chars[end].1) { end += 1; }

		let byte_end = chars.get(end).map_or(text.len(), |(b, _)| *b);
		let at_end = end == chars.len();
		let followed_by_space = at_end || chars[end].1.is_whitespace();
		let next_word_lower = chars[end..].iter().map(|(_, ch)| *ch).find(|ch| !ch.is_whitespace()).is_some_and(char::is_lowercase);
		let abbreviated = c == '.' && run_len == 1 && is_abbreviation(word_before(text, pos));

		if followed_by_space && (at_end || !next_word_lower) && !abbreviated {
			let sentence = text[start..byte_end].trim();
			if !sentence.is_empty() { sentences.push(sentence.to_string()); }
			start = byte_end;
		}
		i = end;
	}
	let rest = text[start..].trim();
	if !rest.is_empty() { sentences.push(rest.to_string()); }
	sentences
}

/// Splits every item separately and concatenates the sentences in order.
pub fn split_all<S: AsRef<str>>(items: &[S]) -> Vec<String> {
	items.iter().flat_map(|item| split_sentences(item.as_ref())).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_on_terminal_punctuation() {
		assert_eq!(split_sentences("Love it! Works perfectly."), vec!["Love it!", "Works perfectly."]);
	}

	#[test]
	fn keeps_abbreviations_and_initials_together() {
		assert_eq!(
			split_sentences("Dr. Smith and J. Doe helped me. Great service"),
			vec!["Dr. Smith and J. Doe helped me.", "Great service"]
		);
		assert_eq!(split_sentences("Shoes, socks, etc. All fine."), vec!["Shoes, socks, etc. All fine."]);
	}

	#[test]
	fn keeps_punctuation_runs_and_closing_quotes() {
		assert_eq!(
			split_sentences("It arrived late!!! He said \"never again.\" Then left"),
			vec!["It arrived late!!!", "He said \"never again.\"", "Then left"]
		);
	}

	#[test]
	fn lowercase_continuation_is_not_a_boundary() {
		assert_eq!(split_sentences("Wow... really? yes"), vec!["Wow... really? yes"]);
	}

	#[test]
	fn items_are_split_separately() {
		let items = ["good product", "bad delivery. slow too", ""];
		assert_eq!(split_all(&items), vec!["good product", "bad delivery. slow too"]);
	}

	#[test]
	fn blank_text_has_no_sentences() {
		assert!(split_sentences("   ").is_empty());
	}
}
