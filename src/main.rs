//! Grid Boggle - CLI
//!
//! Timed 3×3 word game with TUI and text modes, plus grid tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use grid_boggle::{
    commands::{
        check_word, generate_grid, print_survey_statistics, run_simple, run_survey, solve_grid,
    },
    config::{DictionarySource, GameConfig},
    core::{Grid, GridGenerator},
    dictionary::Dictionary,
    output::{print_check_result, print_grid_report, print_solutions},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "grid_boggle",
    about = "Timed word game on a 3×3 letter grid",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word-list file (default: the built-in English list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Round length in seconds
    #[arg(
        short,
        long,
        global = true,
        default_value = "90",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    seconds: u32,

    /// Seed for reproducible grids
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Play in plain text without the TUI
    Simple,

    /// Generate a grid and show the letter weights behind it
    Grid,

    /// Check whether a word is valid and what it scores
    Check {
        /// Word to check
        word: String,

        /// Nine letters to trace the word on, e.g. CATSEPRNT
        #[arg(short, long)]
        grid: Option<String>,
    },

    /// List every word on a grid
    Solutions {
        /// Nine letters in reading order (default: a generated grid)
        letters: Option<String>,
    },

    /// Generate many grids and report how playable they are
    Survey {
        /// Number of grids to generate
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            time_limit: self.seconds,
            seed: self.seed,
            dictionary: self
                .dictionary
                .clone()
                .map_or(DictionarySource::Embedded, DictionarySource::File),
        }
    }
}

fn parse_grid(letters: &str) -> Result<Grid> {
    letters
        .parse()
        .with_context(|| format!("invalid grid '{letters}'"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.config();
    let dictionary = config.dictionary.load();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, &config),
        Commands::Simple => run_simple(&dictionary, &config).map_err(|e| anyhow::anyhow!(e)),
        Commands::Grid => {
            let report = generate_grid(&dictionary, &mut config.rng());
            print_grid_report(&report);
            Ok(())
        }
        Commands::Check { word, grid } => {
            let grid = grid.as_deref().map(parse_grid).transpose()?;
            let result =
                check_word(&word, &dictionary, grid.as_ref()).map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Solutions { letters } => {
            let grid = match letters {
                Some(letters) => parse_grid(&letters)?,
                None => GridGenerator::new(&dictionary.letter_frequencies())
                    .generate(&mut config.rng()),
            };
            print_solutions(&solve_grid(grid, &dictionary));
            Ok(())
        }
        Commands::Survey { count } => {
            println!("🎯 Surveying {count} grids...");
            let stats = run_survey(&dictionary, count, &mut config.rng());
            print_survey_statistics(&stats);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: &Dictionary, config: &GameConfig) -> Result<()> {
    use grid_boggle::interactive::{App, run_tui};

    let app = App::new(dictionary, config);
    run_tui(app)
}
