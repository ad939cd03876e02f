//! Grid survey
//!
//! Generates many grids and reports how playable they are: how many words
//! each holds, what a perfect round would score, and which centre vowels
//! come up.

use crate::core::{Grid, GridGenerator, VOWELS};
use crate::dictionary::Dictionary;
use crate::game::{find_words, total_score};
use crate::output::formatters::create_progress_bar;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Statistics over a batch of generated grids
#[derive(Debug)]
pub struct SurveyStatistics {
    pub grids: usize,
    pub average_words: f64,
    pub average_max_score: f64,
    /// Highest score any single grid allowed
    pub best_max_score: u32,
    /// Grids on which no word can be found
    pub dead_grids: usize,
    /// Grid with the most words and its word count
    pub richest: Option<(Grid, usize)>,
    /// How often each vowel landed in the centre
    pub center_vowels: FxHashMap<char, usize>,
    pub total_time: Duration,
}

/// Generate `count` grids and collect statistics
pub fn run_survey<R: Rng>(dictionary: &Dictionary, count: usize, rng: &mut R) -> SurveyStatistics {
    let generator = GridGenerator::new(&dictionary.letter_frequencies());

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut total_words = 0usize;
    let mut total_max_score = 0u64;
    let mut best_max_score = 0u32;
    let mut dead_grids = 0usize;
    let mut richest: Option<(Grid, usize)> = None;
    let mut center_vowels: FxHashMap<char, usize> = FxHashMap::default();

    for idx in 0..count {
        let grid = generator.generate(rng);
        let words = find_words(&grid, dictionary);

        total_words += words.len();
        let max_score = total_score(&words);
        total_max_score += u64::from(max_score);
        best_max_score = best_max_score.max(max_score);
        if words.is_empty() {
            dead_grids += 1;
        }
        *center_vowels.entry(grid.center()).or_insert(0) += 1;

        if richest.as_ref().is_none_or(|(_, best)| words.len() > *best) {
            richest = Some((grid, words.len()));
        }

        if idx % 10 == 0 {
            let avg = total_words as f64 / (idx + 1) as f64;
            pb.set_message(format!("Avg words: {avg:.1}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let (average_words, average_max_score) = if count == 0 {
        (0.0, 0.0)
    } else {
        (
            total_words as f64 / count as f64,
            total_max_score as f64 / count as f64,
        )
    };

    log::debug!("surveyed {count} grids in {:?}", start.elapsed());

    SurveyStatistics {
        grids: count,
        average_words,
        average_max_score,
        best_max_score,
        dead_grids,
        richest,
        center_vowels,
        total_time: start.elapsed(),
    }
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60));
    println!(" Survey Results ");
    println!("{}", "═".repeat(60));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Grids generated:     {}", stats.grids);
    println!(
        "  Average words:       {}",
        format!("{:.2}", stats.average_words).bright_yellow().bold()
    );
    println!("  Average max score:   {:.0}", stats.average_max_score);
    println!("  Best max score:      {}", stats.best_max_score);
    if stats.dead_grids > 0 {
        println!(
            "  Grids with no words: {}",
            stats.dead_grids.to_string().red()
        );
    }
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    if stats.grids > 0 {
        println!("\n📈 {}", "Centre Vowels".bright_cyan().bold());
        let max_count = stats.center_vowels.values().copied().max().unwrap_or(0);
        for &vowel in VOWELS {
            let letter = char::from(vowel.to_ascii_uppercase());
            let count = stats.center_vowels.get(&letter).copied().unwrap_or(0);
            let percentage = count as f64 / stats.grids as f64 * 100.0;
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!("  {letter}: {} {count:5} ({percentage:5.1}%)", bar.green());
        }
    }

    if let Some((grid, words)) = &stats.richest {
        println!("\n✨ {}", "Richest Grid".green().bold());
        for line in grid.to_string().lines() {
            println!("  {}", line.bright_white().bold());
        }
        println!("  {words} words");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn survey_counts_every_grid() {
        let dictionary = Dictionary::embedded();
        let stats = run_survey(&dictionary, 20, &mut StdRng::seed_from_u64(3));

        assert_eq!(stats.grids, 20);
        assert_eq!(stats.center_vowels.values().sum::<usize>(), 20);
        assert!(
            stats
                .center_vowels
                .keys()
                .all(|c| VOWELS.contains(&(c.to_ascii_lowercase() as u8)))
        );
        assert!(stats.richest.is_some());
        assert!(stats.dead_grids <= 20);
    }

    #[test]
    fn survey_of_nothing() {
        let stats = run_survey(&Dictionary::embedded(), 0, &mut StdRng::seed_from_u64(3));
        assert_eq!(stats.grids, 0);
        assert!(stats.average_words.abs() < f64::EPSILON);
        assert!(stats.richest.is_none());
    }

    #[test]
    fn survey_with_empty_dictionary() {
        let stats = run_survey(&Dictionary::empty(), 5, &mut StdRng::seed_from_u64(3));
        assert_eq!(stats.dead_grids, 5);
        assert!(stats.average_max_score.abs() < f64::EPSILON);
        assert_eq!(stats.best_max_score, 0);
    }

    #[test]
    fn survey_is_reproducible() {
        let dictionary = Dictionary::embedded();
        let a = run_survey(&dictionary, 10, &mut StdRng::seed_from_u64(9));
        let b = run_survey(&dictionary, 10, &mut StdRng::seed_from_u64(9));
        assert_eq!(a.richest, b.richest);
        assert!((a.average_words - b.average_words).abs() < f64::EPSILON);
    }
}
