use grid_boggle::config::DictionarySource;
use grid_boggle::core::Grid;
use grid_boggle::dictionary::loader::{load_from_file, load_or_empty};
use grid_boggle::dictionary::{Dictionary, DictionaryError};
use grid_boggle::game::{Round, Verdict, find_words};
use std::io::Write;
use tempfile::NamedTempFile;

fn word_list(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const SAMPLE: &str = r#"{
  "Cat": [
    "n.",
    "A small domesticated carnivore"
  ],
  "rent": [
    "n."
  ],
  "tent": [
    "n."
  ]
}
"#;

#[test]
fn loads_keys_in_file_order() {
    let file = word_list(SAMPLE);
    let dictionary = load_from_file(file.path()).unwrap();

    assert_eq!(dictionary.words(), ["cat", "rent", "tent"]);
    assert!(dictionary.is_valid_word("CAT"));
    assert!(!dictionary.is_valid_word("n."));
}

#[test]
fn loaded_words_play_on_a_grid() {
    let file = word_list(SAMPLE);
    let dictionary = load_or_empty(file.path());
    let grid: Grid = "CATSEPRNT".parse().unwrap();

    assert_eq!(find_words(&grid, &dictionary), vec!["cat", "rent", "tent"]);

    let mut round = Round::new(&dictionary, grid.clone(), 30);
    for pos in grid.trace("rent").unwrap() {
        round.press(pos);
    }
    assert_eq!(
        round.commit(),
        Some(Verdict::Accepted {
            word: "RENT".to_string(),
            points: 400
        })
    );
}

#[test]
fn malformed_file_is_an_error() {
    let file = word_list("{\n  \"cat\": [],\n  \"dog: [\n}\n");
    let err = load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, DictionaryError::Malformed { line: 3, .. }));
}

#[test]
fn malformed_file_degrades_to_empty() {
    let file = word_list("  broken: [\n");
    assert!(load_or_empty(file.path()).is_empty());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let err = load_from_file(&path).unwrap_err();
    assert!(matches!(err, DictionaryError::Io { .. }));
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn missing_file_rejects_every_word() {
    let dir = tempfile::tempdir().unwrap();
    let dictionary = DictionarySource::File(dir.path().join("missing.txt")).load();
    assert!(dictionary.is_empty());

    let grid: Grid = "CATSEPRNT".parse().unwrap();
    let mut round = Round::new(&dictionary, grid.clone(), 30);
    for pos in grid.trace("cat").unwrap() {
        round.press(pos);
    }
    assert_eq!(round.commit(), Some(Verdict::NotFound("CAT".to_string())));
    assert_eq!(round.score(), 0);
}

#[test]
fn file_without_entries_is_empty() {
    let file = word_list("just some text\nwithout entries\n");
    let dictionary = load_from_file(file.path()).unwrap();
    assert!(dictionary.is_empty());
    assert_eq!(dictionary.letter_frequencies(), Dictionary::empty().letter_frequencies());
}
