//! Display functions for command results

use super::formatters::{format_weights, grid_lines, join_words};
use crate::commands::{CheckResult, GridReport, SolutionsResult};
use crate::core::{Grid, Position};
use crate::game::{RoundSummary, SessionStats, Verdict};
use colored::Colorize;

fn banner(title: &str, subject: Option<&str>) {
    println!("\n{}", "═".repeat(60).cyan());
    match subject {
        Some(subject) => println!(
            " {} {} ",
            title.bright_cyan().bold(),
            subject.bright_yellow().bold()
        ),
        None => println!(" {} ", title.bright_cyan().bold()),
    }
    println!("{}", "═".repeat(60).cyan());
}

/// Print the grid with selected tiles highlighted
pub fn print_grid(grid: &Grid, selected: &[Position]) {
    let mut lines = grid_lines(grid, selected).into_iter();
    if let Some(header) = lines.next() {
        println!("{}", header.bright_black());
    }
    for line in lines {
        println!("{}", line.bright_white().bold());
    }
}

/// Print a submission verdict in its colour
pub fn print_verdict(verdict: &Verdict) {
    let text = verdict.to_string();
    match verdict {
        Verdict::Accepted { .. } => println!("  ✅ {}", text.green().bold()),
        Verdict::AlreadyFound(_) => println!("  🔁 {}", text.yellow()),
        Verdict::TooShort | Verdict::NotFound(_) => println!("  ❌ {}", text.red()),
    }
}

/// Print a generated grid and the letter weights behind it
pub fn print_grid_report(report: &GridReport) {
    banner("GENERATED GRID", None);
    println!();
    print_grid(&report.grid, &[]);

    if report.weighted {
        println!("\n📊 {}", "Letter weights:".bright_cyan().bold());
        println!("   Vowels:      {}", format_weights(&report.vowel_weights));
        println!("   Consonants:  {}", format_weights(&report.top_consonants));
    } else {
        println!(
            "\n{}",
            "⚠️  Dictionary has no letters; grid drawn uniformly".yellow()
        );
    }

    println!("\n🎯 {}", "Potential:".bright_cyan().bold());
    println!(
        "   Findable words:  {}",
        report.findable_words.to_string().bright_yellow().bold()
    );
    println!("   Max score:       {}", report.max_score);
}

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult) {
    banner("WORD CHECK:", Some(&result.word));

    let dictionary = if result.in_dictionary {
        "yes".green()
    } else {
        "no".red()
    };
    println!("\n   In dictionary:  {dictionary}");
    println!("   Points:         {}", result.points);

    if let Some(grid) = &result.grid {
        println!();
        let path = result.path.as_deref().unwrap_or(&[]);
        print_grid(grid, path);
        match &result.path {
            Some(path) => {
                let labels: Vec<String> = path.iter().map(|p| p.label()).collect();
                println!("\n   Path:           {}", labels.join(" → ").green());
            }
            None => println!("\n   Path:           {}", "not on this grid".red()),
        }
    }

    println!();
    if result.playable() {
        println!(
            "{}",
            format!("✅ {} scores {}", result.word, result.points)
                .green()
                .bold()
        );
    } else {
        println!("{}", format!("❌ {} would not score", result.word).red().bold());
    }
}

/// Print every word a grid holds
pub fn print_solutions(result: &SolutionsResult) {
    banner("SOLUTIONS", None);
    println!();
    print_grid(&result.grid, &[]);

    println!(
        "\n📊 {} words, max score {}",
        result.words.len().to_string().bright_yellow().bold(),
        result.max_score.to_string().bright_yellow().bold()
    );
    for (len, count) in result.counts_by_length() {
        println!("   {len} letters: {count}");
    }

    if !result.words.is_empty() {
        println!("\n📝 {}", "Words:".bright_cyan().bold());
        for chunk in result.words.chunks(8) {
            println!("   {}", chunk.join("  "));
        }
    }
}

/// Print the end-of-round summary
pub fn print_round_summary(summary: &RoundSummary, missed: &[String]) {
    banner("TIME'S UP", None);
    println!(
        "\n   Score:         {}",
        summary.score.to_string().bright_yellow().bold()
    );
    println!("   Words found:   {}", summary.word_count());
    println!(
        "   Longest word:  {}",
        summary.longest_word().unwrap_or("None").green()
    );
    println!("\n   Found:   {}", join_words(&summary.words).green());
    println!("   Missed:  {}", join_words(missed).bright_black());
}

/// Print the best results of the session so far
pub fn print_session_stats(stats: &SessionStats) {
    println!("\n🏆 {}", "Session bests:".bright_cyan().bold());
    println!("   Rounds played:  {}", stats.rounds_played());
    println!("   Best score:     {}", stats.best_score());
    println!("   Most words:     {}", stats.best_word_count());
    match stats.best_word() {
        Some(word) => println!(
            "   Best word:      {} (+{})",
            word.bright_green(),
            stats.best_word_points()
        ),
        None => println!("   Best word:      None"),
    }
}
