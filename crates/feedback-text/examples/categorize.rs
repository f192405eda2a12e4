use std::env;

use feedback_core::types::TopicTable;
use feedback_text::{split_all, KeywordMatcher, TantivyLemmatizer, TopicCategorizer};

// Split feedback into sentences and bucket them by the default topics.
// Usage:
//   cargo run -p feedback-text --example categorize -- "Fast delivery. Great price!" "Support never replied."

fn main() {
    let items: Vec<String> = env::args().skip(1).collect();
    if items.is_empty() {
        eprintln!("Usage: categorize <feedback>...");
        std::process::exit(2);
    }

    let sentences = split_all(&items);
    let categorizer = TopicCategorizer::new(KeywordMatcher::new(TantivyLemmatizer::new()));
    let buckets = categorizer.categorize(&sentences, &TopicTable::default());

    println!("{} sentences from {} items", sentences.len(), items.len());
    for (topic, texts) in buckets.iter() {
        println!("{} ({})", topic, texts.len());
        for text in texts { println!("  - {}", text); }
    }
}
