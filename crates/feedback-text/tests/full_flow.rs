use std::fs;

use feedback_core::error::{Error, Result};
use feedback_core::traits::Lemmatizer;
use feedback_core::types::{Topic, TopicTable};
use feedback_text::{split_all, KeywordMatcher, TantivyLemmatizer, TopicCategorizer};
use tempfile::TempDir;

fn sample_texts() -> Vec<String> {
    [
        "Love it! Works perfectly.",
        "The customer service was terrible.",
        "Beautiful design and great functionality. Highly recommend it.",
        "The product arrived earlier than expected.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

struct UnavailableLemmatizer;

impl Lemmatizer for UnavailableLemmatizer {
    fn lemmatize(&self, _text: &str) -> Result<String> {
        Err(Error::ResourceUnavailable("wordnet".to_string()))
    }
}

#[test]
fn matcher_finds_lemmatized_keywords() {
    let texts = sample_texts();
    let matcher = KeywordMatcher::new(TantivyLemmatizer::new());
    assert!(matcher.matches(&texts[2], &["design"]));
    assert!(matcher.matches(&texts[0], &["work", "penguin", "dog"]));
    assert!(!matcher.matches(&texts[0], &["elephant", "cat"]));
    assert!(matcher.matches(&texts[3], &["arrive"]));
}

#[test]
fn matcher_uses_substring_containment() {
    let matcher = KeywordMatcher::new(TantivyLemmatizer::new());
    assert!(matcher.matches("A lasting relationship with the brand", &["ship"]));
    assert!(!matcher.matches("Anything at all", &["", "   "]));
}

#[test]
fn matcher_without_lemmatizer_resources_never_matches() {
    let matcher = KeywordMatcher::new(UnavailableLemmatizer);
    assert!(!matcher.matches("The product is great", &["product"]));
    assert!(matcher.try_matches("The product is great", &["product"]).is_err());
}

#[test]
fn categorize_sample_feedback() {
    let categorizer = TopicCategorizer::new(KeywordMatcher::new(TantivyLemmatizer::new()));
    let texts = sample_texts();
    let buckets = categorizer.categorize(&texts, &TopicTable::default());

    assert_eq!(buckets.get("product").unwrap(), &[texts[2].clone(), texts[3].clone()]);
    assert_eq!(buckets.get("delivery").unwrap(), &[texts[3].clone()]);
    assert_eq!(buckets.get("service").unwrap(), &[texts[1].clone()]);
    assert!(buckets.get("price").unwrap().is_empty());
}

#[test]
fn categorize_empty_input_keeps_every_topic() {
    let categorizer = TopicCategorizer::new(KeywordMatcher::new(TantivyLemmatizer::new()));
    let table = TopicTable::default();
    let buckets = categorizer.categorize(&[], &table);

    assert_eq!(buckets.len(), table.len());
    for (_, texts) in buckets.iter() {
        assert!(texts.is_empty());
    }
}

#[test]
fn categorize_with_failing_lemmatizer_yields_empty_buckets() {
    let categorizer = TopicCategorizer::new(KeywordMatcher::new(UnavailableLemmatizer));
    let buckets = categorizer.categorize(&sample_texts(), &TopicTable::default());
    assert_eq!(buckets.len(), 4);
    assert!(buckets.iter().all(|(_, texts)| texts.is_empty()));
}

#[test]
fn categorize_sentences_of_split_feedback() {
    let table = TopicTable::new(vec![
        Topic::new("staff", &["staff", "waiter"]),
        Topic::new("food", &["meal", "dish"]),
    ])
    .unwrap();
    let categorizer = TopicCategorizer::new(KeywordMatcher::new(TantivyLemmatizer::new()));
    let sentences = split_all(&["The waiters were rude. Meals came cold.", "Lovely dishes!"]);
    let buckets = categorizer.categorize(&sentences, &table);

    assert_eq!(buckets.get("staff").unwrap(), &["The waiters were rude.".to_string()]);
    assert_eq!(
        buckets.get("food").unwrap(),
        &["Meals came cold.".to_string(), "Lovely dishes!".to_string()]
    );
}

#[test]
fn exceptions_file_extends_irregular_forms() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("exceptions.txt");
    fs::write(&path, "# irregular forms\nshipt ship\nbroken-line\n").unwrap();

    let lemmatizer = TantivyLemmatizer::new().with_exceptions_file(&path).expect("load exceptions");
    assert_eq!(lemmatizer.lemmatize("Shipt fast").unwrap(), "ship fast");
}

#[test]
fn missing_exceptions_file_is_resource_unavailable() {
    let tmp = TempDir::new().unwrap();
    let result = TantivyLemmatizer::new().with_exceptions_file(&tmp.path().join("missing.txt"));
    assert!(matches!(result, Err(Error::ResourceUnavailable(_))));
}
