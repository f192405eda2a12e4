//! Valence lexicon, booster words and negations.
//!
//! Valences use the VADER scale (-4 extremely negative .. +4 extremely
//! positive). The built-in table (`data/lexicon_en.tsv`) covers common
//! English review and feedback vocabulary in the same tab-separated format
//! as the full VADER lexicon file, which can replace it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use feedback_core::error::{Error, Result};

/// Booster increment for intensifiers; the sign follows the boosted valence.
pub const B_INCR: f64 = 0.293;
/// Booster decrement for dampeners.
pub const B_DECR: f64 = -0.293;

const BUILTIN: &str = include_str!("../data/lexicon_en.tsv");

/// Lower-case token → valence.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
}

impl Lexicon {
    pub fn builtin() -> Self {
        Self::parse(BUILTIN)
    }

    /// Loads a VADER-format lexicon (`token<TAB>mean<TAB>...` per line).
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::ResourceUnavailable(format!("sentiment lexicon {}: {}", path.display(), e)))?;
        let lexicon = Self::parse(&content);
        if lexicon.is_empty() {
            return Err(Error::ResourceUnavailable(format!("sentiment lexicon {} has no entries", path.display())));
        }
        info!(path = %path.display(), entries = lexicon.len(), "loaded sentiment lexicon");
        Ok(lexicon)
    }

    /// Parses lexicon lines, skipping malformed ones.
    pub fn parse(content: &str) -> Self {
        let mut valences = HashMap::new();
        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() { continue; }
            let mut fields = line.split('\t');
            let token = fields.next().map(str::trim).filter(|t| !t.is_empty());
            let valence = fields.next().and_then(|v| v.trim().parse::<f64>().ok()).filter(|v| v.is_finite());
            match (token, valence) {
                (Some(token), Some(valence)) => { valences.insert(token.to_lowercase(), valence); }
                _ => warn!(line = line_no + 1, "skipping malformed lexicon entry"),
            }
        }
        Self { valences }
    }

    /// Valence of an already lower-cased token.
    pub fn valence(&self, token: &str) -> Option<f64> {
        self.valences.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.valences.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

/// Scalar added by an intensifier or dampener, for lower-cased tokens.
pub fn booster(token: &str) -> Option<f64> {
    match token {
        "absolutely" | "amazingly" | "awfully" | "completely" | "considerably" | "decidedly"
        | "deeply" | "enormously" | "entirely" | "especially" | "exceptionally" | "extremely"
        | "fabulously" | "fully" | "greatly" | "hella" | "highly" | "hugely" | "incredibly"
        | "intensely" | "majorly" | "more" | "most" | "particularly" | "purely" | "quite"
        | "really" | "remarkably" | "so" | "substantially" | "thoroughly" | "totally"
        | "tremendously" | "uber" | "unbelievably" | "unusually" | "utterly" | "very" => Some(B_INCR),
        "almost" | "barely" | "hardly" | "kinda" | "kindof" | "kind-of" | "less" | "little"
        | "marginally" | "occasionally" | "partly" | "scarcely" | "slightly" | "somewhat"
        | "sorta" | "sortof" | "sort-of" => Some(B_DECR),
        _ => None,
    }
}

/// True for negation words and contracted negations such as "isn't".
pub fn is_negation(token: &str) -> bool {
    matches!(
        token,
        "aint" | "arent" | "cannot" | "cant" | "couldnt" | "darent" | "didnt" | "doesnt"
            | "dont" | "hadnt" | "hasnt" | "havent" | "isnt" | "mightnt" | "mustnt" | "neither"
            | "neednt" | "never" | "none" | "nope" | "nor" | "not" | "nothing" | "nowhere"
            | "oughtnt" | "shant" | "shouldnt" | "uhuh" | "uh-uh" | "wasnt" | "werent"
            | "without" | "wont" | "wouldnt" | "rarely" | "seldom" | "despite"
    ) || token.contains("n't")
}
