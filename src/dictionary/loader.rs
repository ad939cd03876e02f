//! Word list loading
//!
//! Word lists are structured text files where each dictionary entry sits on a
//! line of the form `"word": [ ...`. Only the quoted key is kept; everything
//! else on the line and every line without the `: [` marker is ignored.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Marker that identifies a dictionary entry line
const ENTRY_MARKER: &str = ": [";

/// Error type for word list loading
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("cannot read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed word list entry on line {line}: {text:?}")]
    Malformed { line: usize, text: String },
}

/// Extract the lowercase key from a single word-list line
///
/// Returns `Ok(None)` for lines that are not entries, and `Err(())` for entry
/// lines without a closed pair of quotes.
fn parse_line(line: &str) -> Result<Option<String>, ()> {
    if !line.contains(ENTRY_MARKER) {
        return Ok(None);
    }
    let open = line.find('"').ok_or(())?;
    let rest = &line[open + 1..];
    let close = rest.find('"').ok_or(())?;
    Ok(Some(rest[..close].to_lowercase()))
}

/// Parse word-list text into its dictionary keys, in file order
///
/// # Errors
///
/// Returns `DictionaryError::Malformed` if an entry line has no closed quoted key.
///
/// # Examples
/// ```
/// use grid_boggle::dictionary::loader::parse_word_list;
///
/// let text = "{\n  \"Cat\": [\n    \"a small feline\"\n  ],\n  \"dog\": []\n}";
/// assert_eq!(parse_word_list(text).unwrap(), vec!["cat", "dog"]);
/// ```
pub fn parse_word_list(content: &str) -> Result<Vec<String>, DictionaryError> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| match parse_line(line) {
            Ok(key) => key.map(Ok),
            Err(()) => Some(Err(DictionaryError::Malformed {
                line: i + 1,
                text: line.trim().to_string(),
            })),
        })
        .collect()
}

/// Load a dictionary from a word-list file
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read, or
/// `DictionaryError::Malformed` if an entry line cannot be parsed.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_word_list(&content)?;
    Ok(Dictionary::new(words))
}

/// Load a dictionary, degrading to an empty one on any failure
///
/// The failure is logged; the game stays playable but rejects every word.
pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Dictionary {
    let path = path.as_ref();
    match load_from_file(path) {
        Ok(dictionary) => {
            log::info!(
                "loaded {} words from {}",
                dictionary.len(),
                path.display()
            );
            dictionary
        }
        Err(err) => {
            log::warn!("{err}; continuing with an empty dictionary");
            Dictionary::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_extracts_first_quoted_key() {
        assert_eq!(
            parse_line(r#"  "Abandon": ["to leave", "x"],"#),
            Ok(Some("abandon".to_string()))
        );
    }

    #[test]
    fn parse_line_skips_non_entries() {
        assert_eq!(parse_line("{"), Ok(None));
        assert_eq!(parse_line(r#"    "a definition","#), Ok(None));
        assert_eq!(parse_line("  ],"), Ok(None));
    }

    #[test]
    fn parse_line_rejects_unclosed_key() {
        assert_eq!(parse_line(r#"  "broken: ["#), Err(()));
        assert_eq!(parse_line("nokey: ["), Err(()));
    }

    #[test]
    fn parse_word_list_keeps_file_order() {
        let text = "{\n  \"zebra\": [\n  ],\n  \"apple\": [\n  ]\n}\n";
        assert_eq!(parse_word_list(text).unwrap(), vec!["zebra", "apple"]);
    }

    #[test]
    fn parse_word_list_reports_malformed_line() {
        let text = "{\n  \"ok\": [],\n  \"bad: [\n}";
        match parse_word_list(text) {
            Err(DictionaryError::Malformed { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn parse_word_list_empty_input() {
        assert!(parse_word_list("").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_from_file("/definitely/not/here/english.txt");
        assert!(matches!(result, Err(DictionaryError::Io { .. })));
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let dictionary = load_or_empty("/definitely/not/here/english.txt");
        assert!(dictionary.is_empty());
        assert!(!dictionary.is_valid_word("cat"));
    }
}
