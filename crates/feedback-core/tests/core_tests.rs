use std::fs;
use tempfile::TempDir;

use feedback_core::config::Config;
use feedback_core::error::Error;
use feedback_core::input::FeedbackReader;
use feedback_core::types::{GroupedResults, Scope, SentimentBuckets, Topic, TopicTable};

#[test]
fn read_column_from_csv_skips_blank_cells() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("feedback.csv");
    fs::write(&path, "id,comment\n1,Great shoes\n2,\n3,\"Slow delivery, but friendly\"\n4\n").unwrap();

    let reader = FeedbackReader::new(1).with_header(true);
    let cells = reader.read_column(&path).expect("read csv");

    assert_eq!(cells, vec!["Great shoes".to_string(), "Slow delivery, but friendly".to_string()]);
}

#[test]
fn read_column_from_tsv_uses_tab_delimiter() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("feedback.tsv");
    fs::write(&path, "a\tLove it\nb\t  \nc\tToo expensive\n").unwrap();

    let cells = FeedbackReader::new(1).read_column(&path).expect("read tsv");
    assert_eq!(cells, vec!["Love it".to_string(), "Too expensive".to_string()]);
}

#[test]
fn read_column_from_plain_text_uses_lines() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("feedback.txt");
    fs::write(&path, "First line\n\n  Second line  \n").unwrap();

    let cells = FeedbackReader::new(0).read_column(&path).expect("read txt");
    assert_eq!(cells, vec!["First line".to_string(), "Second line".to_string()]);
}

#[test]
fn read_column_from_xlsx_uses_first_worksheet() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/survey.xlsx");

    let cells = FeedbackReader::new(1).with_header(true).read_column(&path).expect("read xlsx");
    assert_eq!(
        cells,
        vec![
            "Love it! Works perfectly.".to_string(),
            "The customer service was terrible.".to_string(),
            "42".to_string(),
        ]
    );

    let with_header_row = FeedbackReader::new(1).read_column(&path).expect("read xlsx");
    assert_eq!(with_header_row.first().map(String::as_str), Some("comment"));
    assert!(FeedbackReader::new(5).read_column(&path).expect("read xlsx").is_empty());
}

#[test]
fn corrupt_workbook_is_a_spreadsheet_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("survey.xlsx");
    fs::write(&path, b"PK\x03\x04[Content_Types].xml \xff\xfe\x00\x01 garbage").unwrap();

    let err = FeedbackReader::new(0).read_column(&path).unwrap_err();
    assert!(matches!(err, Error::Spreadsheet(_)), "{err:?}");
}

#[test]
fn unsupported_extensions_are_rejected() {
    let tmp = TempDir::new().unwrap();
    for name in ["survey.pdf", "survey.docx", "survey"] {
        let path = tmp.path().join(name);
        fs::write(&path, b"\x00\x01binary").unwrap();
        let err = FeedbackReader::new(0).read_column(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)), "{name}: {err:?}");
    }
}

#[test]
fn read_column_missing_file_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let err = FeedbackReader::new(0).read_column(&tmp.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn config_without_files_uses_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_from(tmp.path()).expect("load");
    let settings = config.settings().expect("settings");

    assert_eq!(settings.topics, TopicTable::default());
    assert_eq!(settings.input.column, "A");
    assert_eq!(settings.input.delimiter, ',');
    assert!(settings.sentiment.lexicon_path.is_none());
}

#[test]
fn config_file_overrides_topics_and_input() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        r#"
[sentiment]
lexicon_path = "lexicon.txt"

[input]
column = "C"
delimiter = ";"
has_header = true

[[topics]]
name = "staff"
keywords = ["staff", "waiter"]
"#,
    )
    .unwrap();

    let config = Config::load_from(tmp.path()).expect("load");
    let settings = config.settings().expect("settings");

    assert_eq!(settings.topics.names().collect::<Vec<_>>(), vec!["staff"]);
    assert_eq!(settings.input.delimiter, ';');
    assert!(settings.input.has_header);
    let reader = FeedbackReader::from_settings(&settings.input, None).expect("reader");
    assert_eq!(reader.column(), 2);
    let lexicon = settings.sentiment.lexicon_path.expect("lexicon path");
    assert_eq!(config.resolve_path(lexicon), tmp.path().join("lexicon.txt"));
}

#[test]
fn config_with_duplicate_topics_is_rejected() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        "[[topics]]\nname = \"price\"\nkeywords = [\"cost\"]\n\n[[topics]]\nname = \"Price\"\nkeywords = [\"fee\"]\n",
    )
    .unwrap();

    let config = Config::load_from(tmp.path()).expect("load");
    assert!(config.settings().is_err());
}

#[test]
fn topic_table_rejects_reserved_name() {
    let err = TopicTable::new(vec![Topic::new("Overall", &["x"])]).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}

#[test]
fn topic_names_are_stored_trimmed() {
    let table = TopicTable::new(vec![Topic::new(" price ", &["cost"]), Topic::new("staff\t", &["waiter"])]).expect("table");
    assert_eq!(table.names().collect::<Vec<_>>(), vec!["price", "staff"]);
    assert_eq!(Scope::Topic(table.topics()[0].name.clone()).label(), "Price");

    let err = TopicTable::new(vec![Topic::new("price", &["cost"]), Topic::new(" Price", &["fee"])]).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}

#[test]
fn grouped_results_keep_overall_first_and_serialize_as_map() {
    let mut results = GroupedResults::new();
    results.insert(Scope::Topic("price".to_string()), SentimentBuckets::default());
    results.insert(
        Scope::Overall,
        SentimentBuckets { positive: vec!["Nice".to_string()], ..SentimentBuckets::default() },
    );

    let names: Vec<&str> = results.iter().map(|(s, _)| s.name()).collect();
    assert_eq!(names, vec!["overall", "price"]);
    assert_eq!(results.overall().map(SentimentBuckets::len), Some(1));

    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json["overall"]["positive"][0], "Nice");
    assert_eq!(json["price"]["negative"].as_array().map(Vec::len), Some(0));
}
