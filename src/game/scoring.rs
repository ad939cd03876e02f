//! Word scoring and submission verdicts
//!
//! Words shorter than three letters are worth nothing; anything from three to
//! nine letters (the whole grid) is worth 100 points per letter.

use crate::dictionary::Dictionary;
use std::fmt;

/// Shortest word that scores
pub const MIN_WORD_LEN: usize = 3;

/// Longest word a 3×3 grid can spell
pub const MAX_WORD_LEN: usize = crate::core::TILE_COUNT;

/// Points awarded per letter of an accepted word
pub const POINTS_PER_LETTER: u32 = 100;

/// Points a word of this text is worth
///
/// Length ≤2 scores 0; length 3..=9 scores length × 100. Longer strings cannot
/// come from the grid and also score 0.
///
/// # Examples
/// ```
/// use grid_boggle::game::score_word;
///
/// assert_eq!(score_word("at"), 0);
/// assert_eq!(score_word("cat"), 300);
/// assert_eq!(score_word("strengths"), 900);
/// ```
#[must_use]
pub fn score_word(word: &str) -> u32 {
    let len = word.chars().count();
    if (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len) {
        len as u32 * POINTS_PER_LETTER
    } else {
        0
    }
}

/// Outcome of submitting a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Fewer than three letters
    TooShort,
    /// Already scored this round
    AlreadyFound(String),
    /// Not in the dictionary
    NotFound(String),
    /// Scored; the word is stored uppercase
    Accepted { word: String, points: u32 },
}

impl Verdict {
    /// Points this verdict adds to the round score
    #[must_use]
    pub const fn points(&self) -> u32 {
        match self {
            Self::Accepted { points, .. } => *points,
            _ => 0,
        }
    }

    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "WORD TOO SHORT"),
            Self::AlreadyFound(_) => write!(f, "WORD ALREADY FOUND"),
            Self::NotFound(word) => write!(f, "{word} NOT FOUND"),
            Self::Accepted { word, points } => write!(f, "{word} +{points}"),
        }
    }
}

/// Judge a submitted word against the words already found and the dictionary
///
/// Checks run in order: too short, already found, in dictionary.
/// `found` holds uppercase words; the comparison ignores case.
#[must_use]
pub fn judge(word: &str, found: &[String], dictionary: &Dictionary) -> Verdict {
    let upper = word.to_uppercase();

    if upper.chars().count() < MIN_WORD_LEN {
        return Verdict::TooShort;
    }
    if found.iter().any(|w| w.eq_ignore_ascii_case(&upper)) {
        return Verdict::AlreadyFound(upper);
    }
    if dictionary.is_valid_word(&upper) {
        let points = score_word(&upper);
        return Verdict::Accepted {
            word: upper,
            points,
        };
    }
    Verdict::NotFound(upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::new(["at", "cat", "rent", "strengths"])
    }

    #[test]
    fn short_words_score_zero() {
        assert_eq!(score_word(""), 0);
        assert_eq!(score_word("a"), 0);
        assert_eq!(score_word("at"), 0);
    }

    #[test]
    fn score_is_length_times_100() {
        assert_eq!(score_word("cat"), 300);
        assert_eq!(score_word("rent"), 400);
        assert_eq!(score_word("strengths"), 900);
    }

    #[test]
    fn overlong_scores_zero() {
        assert_eq!(score_word("strengthen"), 0);
    }

    #[test]
    fn too_short_checked_first() {
        // "at" is in the dictionary but still too short
        assert_eq!(judge("at", &[], &dictionary()), Verdict::TooShort);
        assert_eq!(judge("at", &["AT".to_string()], &dictionary()), Verdict::TooShort);
    }

    #[test]
    fn accepted_word_scores() {
        let verdict = judge("cat", &[], &dictionary());
        assert_eq!(
            verdict,
            Verdict::Accepted {
                word: "CAT".to_string(),
                points: 300
            }
        );
        assert_eq!(verdict.points(), 300);
        assert!(verdict.is_accepted());
    }

    #[test]
    fn already_found_never_rescored() {
        let found = vec!["CAT".to_string()];
        let verdict = judge("Cat", &found, &dictionary());
        assert_eq!(verdict, Verdict::AlreadyFound("CAT".to_string()));
        assert_eq!(verdict.points(), 0);
    }

    #[test]
    fn unknown_word_not_found() {
        let verdict = judge("tnr", &[], &dictionary());
        assert_eq!(verdict, Verdict::NotFound("TNR".to_string()));
        assert_eq!(verdict.to_string(), "TNR NOT FOUND");
    }

    #[test]
    fn empty_dictionary_rejects_everything() {
        let verdict = judge("cat", &[], &Dictionary::empty());
        assert_eq!(verdict, Verdict::NotFound("CAT".to_string()));
    }

    #[test]
    fn verdict_messages() {
        assert_eq!(Verdict::TooShort.to_string(), "WORD TOO SHORT");
        assert_eq!(
            Verdict::AlreadyFound("CAT".to_string()).to_string(),
            "WORD ALREADY FOUND"
        );
        assert_eq!(
            Verdict::Accepted {
                word: "CAT".to_string(),
                points: 300
            }
            .to_string(),
            "CAT +300"
        );
    }
}
