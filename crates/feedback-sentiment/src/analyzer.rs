use std::sync::Arc;

use feedback_core::error::Result;
use feedback_core::traits::SentimentScorer;
use feedback_core::types::PolarityScores;

use crate::lexicon::{booster, is_negation, Lexicon};

/// Emphasis added to an ALL-CAPS word when the rest of the text is not shouted.
pub const C_INCR: f64 = 0.733;
/// Multiplier applied to a negated valence.
pub const N_SCALAR: f64 = -0.74;
const ALPHA: f64 = 15.0;
const EXCLAMATION_INCR: f64 = 0.292;
const QUESTION_INCR: f64 = 0.18;

/// Maps an unbounded valence sum into [-1, 1].
pub fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

/// Strips surrounding punctuation from words; emoticons such as ":)" or ":D"
/// have at most one character left and are kept whole.
fn strip_punctuation(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() > 1 && stripped.chars().any(char::is_alphanumeric) { stripped } else { token }
}

/// Tokens of one text prepared for valence lookup.
struct SentiText<'a> {
    words: Vec<&'a str>,
    lower: Vec<String>,
    cap_differential: bool,
}

impl<'a> SentiText<'a> {
    fn new(text: &'a str) -> Self {
        let words: Vec<&str> = text
            .split_whitespace()
            .map(strip_punctuation)
            .filter(|w| w.chars().count() > 1)
            .collect();
        let lower = words.iter().map(|w| w.to_lowercase()).collect();
        let caps = words.iter().filter(|w| is_all_caps(w)).count();
        Self { cap_differential: caps > 0 && caps < words.len(), words, lower }
    }

    fn lower(&self, i: usize) -> &str {
        &self.lower[i]
    }
}

/// Rule-based lexicon sentiment in the style of VADER.
///
/// Word valences are adjusted for intensifiers, capitalization, negation,
/// "least", contrastive "but" and trailing punctuation, then summed and
/// normalized into a compound score.
#[derive(Debug, Clone)]
pub struct VaderAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl VaderAnalyzer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn analyze(&self, text: &str) -> PolarityScores {
        let sentitext = SentiText::new(text);
        let mut sentiments = Vec::with_capacity(sentitext.words.len());
        for i in 0..sentitext.words.len() {
            let word = sentitext.lower(i);
            let kind_of = word == "kind" && sentitext.lower.get(i + 1).is_some_and(|next| next == "of");
            if kind_of || booster(word).is_some() {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.valence(&sentitext, i));
        }
        but_check(&sentitext, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn in_lexicon(&self, word: &str) -> bool {
        self.lexicon.contains(word)
    }

    fn valence(&self, st: &SentiText<'_>, i: usize) -> f64 {
        let item = st.lower(i);
        let Some(base) = self.lexicon.valence(item) else {
            return 0.0;
        };
        let mut valence = base;

        if item == "no" && i + 1 < st.words.len() && self.in_lexicon(st.lower(i + 1)) {
            valence = 0.0;
        }
        let preceded_by_no = (i > 0 && st.lower(i - 1) == "no")
            || (i > 1 && st.lower(i - 2) == "no")
            || (i > 2 && st.lower(i - 3) == "no" && matches!(st.lower(i - 1), "or" | "nor"));
        if preceded_by_no {
            valence = base * N_SCALAR;
        }

        if st.cap_differential && is_all_caps(st.words[i]) {
            valence += if valence > 0.0 { C_INCR } else { -C_INCR };
        }

        for start_i in 0..3 {
            if i <= start_i {
                break;
            }
            let j = i - (start_i + 1);
            if self.in_lexicon(st.lower(j)) {
                continue;
            }
            let mut scalar = scalar_inc_dec(st.words[j], st.lower(j), valence, st.cap_differential);
            if scalar != 0.0 {
                match start_i {
                    1 => scalar *= 0.95,
                    2 => scalar *= 0.9,
                    _ => {}
                }
            }
            valence += scalar;
            valence = negation_check(st, valence, start_i, i);
        }

        self.least_check(st, valence, i)
    }

    fn least_check(&self, st: &SentiText<'_>, valence: f64, i: usize) -> f64 {
        if i > 1 && st.lower(i - 1) == "least" && !self.in_lexicon("least") {
            if !matches!(st.lower(i - 2), "at" | "very") {
                return valence * N_SCALAR;
            }
        } else if i > 0 && st.lower(i - 1) == "least" && !self.in_lexicon("least") {
            return valence * N_SCALAR;
        }
        valence
    }
}

impl SentimentScorer for VaderAnalyzer {
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores> {
        Ok(self.analyze(text))
    }
}

fn scalar_inc_dec(word: &str, lower: &str, valence: f64, cap_differential: bool) -> f64 {
    let Some(mut scalar) = booster(lower) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if cap_differential && is_all_caps(word) {
        scalar += if valence > 0.0 { C_INCR } else { -C_INCR };
    }
    scalar
}

fn negation_check(st: &SentiText<'_>, valence: f64, start_i: usize, i: usize) -> f64 {
    let so_or_this = |w: &str| matches!(w, "so" | "this");
    match start_i {
        0 if is_negation(st.lower(i - 1)) => valence * N_SCALAR,
        1 if st.lower(i - 2) == "never" && so_or_this(st.lower(i - 1)) => valence * 1.25,
        1 if st.lower(i - 2) == "without" && st.lower(i - 1) == "doubt" => valence,
        1 if is_negation(st.lower(i - 2)) => valence * N_SCALAR,
        2 if st.lower(i - 3) == "never" && (so_or_this(st.lower(i - 2)) || so_or_this(st.lower(i - 1))) => valence * 1.25,
        2 if st.lower(i - 3) == "without" && (st.lower(i - 2) == "doubt" || st.lower(i - 1) == "doubt") => valence,
        2 if is_negation(st.lower(i - 3)) => valence * N_SCALAR,
        _ => valence,
    }
}

/// Halves valences before the first "but" and boosts those after it by half.
fn but_check(st: &SentiText<'_>, sentiments: &mut [f64]) {
    let Some(but_index) = st.lower.iter().position(|w| w == "but") else {
        return;
    };
    for (i, sentiment) in sentiments.iter_mut().enumerate() {
        if i < but_index {
            *sentiment *= 0.5;
        } else if i > but_index {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64 * EXCLAMATION_INCR;
    let questions = text.matches('?').count();
    let question_amp = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * QUESTION_INCR,
        _ => 0.96,
    };
    exclamations + question_amp
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::neutral_only();
    }
    let amplifier = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += amplifier;
    } else if sum < 0.0 {
        sum -= amplifier;
    }
    let compound = normalize(sum);

    let (mut pos_sum, mut neg_sum, mut neu_count) = (0.0, 0.0, 0.0);
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += amplifier;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= amplifier;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    PolarityScores {
        negative: (neg_sum / total).abs(),
        neutral: neu_count / total,
        positive: (pos_sum / total).abs(),
        compound,
    }
}
