//! Simple text mode
//!
//! Plays timed rounds on stdin/stdout without the TUI. Each input line spells
//! one word as a list of tiles.

use crate::config::GameConfig;
use crate::core::{GridGenerator, Position, PositionError};
use crate::dictionary::Dictionary;
use crate::game::{PressOutcome, Round, SessionStats, find_words, missed_words};
use crate::output::{print_grid, print_round_summary, print_session_stats, print_verdict};
use crate::output::formatters::format_clock;
use std::io::{self, Write};
use std::time::Instant;

/// Parse one line of tiles
///
/// Tokens are separated by whitespace. A token is a label such as `b2`, a
/// single digit, or a run of digits like `159`.
///
/// # Errors
///
/// Returns the first token that does not name a tile.
pub fn parse_tiles(input: &str) -> Result<Vec<Position>, PositionError> {
    let mut tiles = Vec::new();
    for token in input.split_whitespace() {
        if token.len() > 1 && token.chars().all(|c| c.is_ascii_digit()) {
            for digit in token.chars() {
                tiles.push(digit.to_string().parse()?);
            }
        } else {
            tiles.push(token.parse()?);
        }
    }
    Ok(tiles)
}

/// Advance the round to match the wall clock
fn catch_up(round: &mut Round<'_>, started: Instant, ticked: &mut u64) {
    let elapsed = started.elapsed().as_secs();
    while *ticked < elapsed && !round.is_over() {
        round.tick();
        *ticked += 1;
    }
}

/// Spell and submit one word
fn play_word(round: &mut Round<'_>, tiles: &[Position]) {
    round.discard();
    for &pos in tiles {
        match round.press(pos) {
            PressOutcome::Selected(_) => {}
            PressOutcome::NotAdjacent => {
                println!("  ❌ {} is not next to the last tile", pos.label().to_uppercase());
                round.discard();
                return;
            }
            PressOutcome::Submitted(verdict) => {
                print_verdict(&verdict);
                return;
            }
            PressOutcome::Finished => return,
        }
    }
    if let Some(verdict) = round.commit() {
        print_verdict(&verdict);
    }
}

/// Play one round; returns once the time runs out or the player stops
fn play_round(round: &mut Round<'_>) -> Result<(), String> {
    let started = Instant::now();
    let mut ticked = 0u64;

    loop {
        catch_up(round, started, &mut ticked);
        if round.is_over() {
            break;
        }

        println!("────────────────────────────────────────────────────────────");
        println!(
            "⏱  {}   Score: {}   Words: {}",
            format_clock(round.countdown().remaining()),
            round.score(),
            round.found_words().len()
        );
        println!("────────────────────────────────────────────────────────────");
        print_grid(round.grid(), &[]);
        println!();

        let input = get_user_input("Tiles")?.to_lowercase();

        catch_up(round, started, &mut ticked);
        if round.is_over() {
            println!("\n⏰ Time ran out before that word was entered");
            break;
        }

        match input.as_str() {
            "" => {}
            "q" | "quit" | "stop" => {
                round.stop();
                break;
            }
            "found" | "f" => {
                println!("  Found: {}", round.found_words().join(", "));
            }
            _ => match parse_tiles(&input) {
                Ok(tiles) => play_word(round, &tiles),
                Err(e) => println!("  ❌ {e}"),
            },
        }
    }

    Ok(())
}

/// Run the simple text mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(dictionary: &Dictionary, config: &GameConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Grid Boggle - Text Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Spell words by naming tiles that touch, including diagonally.");
    println!("Each tile may be used once per word.\n");
    println!("  - Name tiles by row and column: a1 b2 c3");
    println!("  - Or by number, left to right, top to bottom: 159");
    println!("  - Words need at least three letters; each letter is worth 100\n");
    println!("Commands: 'found' to list your words, 'q' to end the round\n");

    if dictionary.is_empty() {
        println!("⚠️  The dictionary is empty; no word will score.\n");
    }

    let generator = GridGenerator::new(&dictionary.letter_frequencies());
    let mut rng = config.rng();
    let mut stats = SessionStats::new();

    loop {
        let grid = generator.generate(&mut rng);
        let mut round = Round::new(dictionary, grid, config.time_limit);
        println!(
            "\n🔤 New round: {} to find as many words as you can!\n",
            format_clock(config.time_limit)
        );

        play_round(&mut round)?;

        let possible = find_words(round.grid(), dictionary);
        let summary = round.finish();
        let missed = missed_words(&possible, &summary.words);

        stats.record(&summary);
        print_round_summary(&summary, &missed);
        print_session_stats(&stats);
        println!();

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => continue,
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
