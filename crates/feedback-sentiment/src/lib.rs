//! feedback-sentiment
//!
//! Lexicon-based polarity scoring. [`VaderAnalyzer`] implements
//! [`feedback_core::traits::SentimentScorer`] over a shared, read-only
//! [`Lexicon`].

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use feedback_core::error::Result;

pub mod analyzer;
pub mod lexicon;

pub use analyzer::VaderAnalyzer;
pub use lexicon::Lexicon;

/// Loads the lexicon at `path`, or the built-in one when no path is given.
pub fn load_lexicon(path: Option<&Path>) -> Result<Arc<Lexicon>> {
    match path {
        Some(path) => Ok(Arc::new(Lexicon::from_path(path)?)),
        None => {
            let lexicon = Lexicon::builtin();
            info!(entries = lexicon.len(), "using built-in sentiment lexicon");
            Ok(Arc::new(lexicon))
        }
    }
}
