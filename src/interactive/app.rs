//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::{Grid, GridGenerator, Position};
use crate::dictionary::Dictionary;
use crate::game::{
    PressOutcome, Round, RoundSummary, SessionStats, Tick, Verdict, find_words, missed_words,
    time_limit_for_choice, total_score,
};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Messages kept in the log
const MAX_MESSAGES: usize = 5;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Playing,
    Results,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

/// What the results screen shows about the last round
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub summary: RoundSummary,
    pub missed: Vec<String>,
    pub possible_words: usize,
    pub max_score: u32,
}

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    generator: GridGenerator,
    rng: StdRng,
    pub screen: Screen,
    pub round: Option<Round<'a>>,
    /// Limit used when a round starts without an explicit choice
    pub time_limit: u32,
    pub cursor: Position,
    pub messages: Vec<Message>,
    pub stats: SessionStats,
    pub last_round: Option<RoundReport>,
    pub should_quit: bool,
    round_started: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, config: &GameConfig) -> Self {
        let mut app = Self {
            dictionary,
            generator: GridGenerator::new(&dictionary.letter_frequencies()),
            rng: config.rng(),
            screen: Screen::Welcome,
            round: None,
            time_limit: config.time_limit,
            cursor: Position::CENTER,
            messages: Vec::new(),
            stats: SessionStats::new(),
            last_round: None,
            should_quit: false,
            round_started: false,
        };
        if dictionary.is_empty() {
            app.add_message("Dictionary is empty: no word will score", MessageStyle::Warning);
        }
        app
    }

    /// Start a round on a freshly generated grid
    pub fn start_round(&mut self, time_limit: u32) {
        let grid = self.generator.generate(&mut self.rng);
        self.start_round_on(grid, time_limit);
    }

    /// Start a round on the given grid
    pub fn start_round_on(&mut self, grid: Grid, time_limit: u32) {
        self.time_limit = time_limit;
        self.round = Some(Round::new(self.dictionary, grid, time_limit));
        self.cursor = Position::CENTER;
        self.screen = Screen::Playing;
        self.round_started = true;
        self.messages.clear();
        self.add_message(
            &format!("New round: {time_limit} seconds. Go!"),
            MessageStyle::Info,
        );
    }

    /// Close the running round and switch to the results screen
    pub fn end_round(&mut self) {
        let Some(mut round) = self.round.take() else {
            return;
        };
        round.stop();

        let possible = find_words(round.grid(), self.dictionary);
        let max_score = total_score(&possible);
        let summary = round.finish();
        let missed = missed_words(&possible, &summary.words);

        self.stats.record(&summary);
        self.last_round = Some(RoundReport {
            summary,
            missed,
            possible_words: possible.len(),
            max_score,
        });
        self.screen = Screen::Results;
        self.add_message("GAME OVER", MessageStyle::Info);
    }

    /// Returns true once after a round starts, so the caller can restart its tick clock
    pub fn take_round_started(&mut self) -> bool {
        std::mem::take(&mut self.round_started)
    }

    /// Advance the countdown by one second
    pub fn on_tick(&mut self) {
        if self.screen != Screen::Playing {
            return;
        }
        let expired = self
            .round
            .as_mut()
            .is_none_or(|round| round.tick() == Tick::Expired);
        if expired {
            self.end_round();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Welcome | Screen::Results => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c @ '1'..='4') => {
                    let choice = c as usize - '0' as usize;
                    if let Some(limit) = time_limit_for_choice(choice) {
                        self.start_round(limit);
                    }
                }
                KeyCode::Enter => self.start_round(self.time_limit),
                _ => {}
            },
            Screen::Playing => self.handle_playing_key(key.code),
        }
    }

    fn handle_playing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Char(' ') => self.press(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = Position::from_index(c as usize - '1' as usize) {
                    self.cursor = pos;
                    self.press(pos);
                }
            }
            KeyCode::Enter => {
                let verdict = self.round.as_mut().and_then(Round::commit);
                if let Some(verdict) = verdict {
                    self.report(&verdict);
                }
            }
            KeyCode::Backspace => {
                if let Some(round) = self.round.as_mut() {
                    round.undo();
                }
            }
            KeyCode::Esc => {
                if let Some(round) = self.round.as_mut() {
                    round.discard();
                }
            }
            _ => {}
        }
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        if let Some(pos) = self.cursor.offset(d_row, d_col) {
            self.cursor = pos;
        }
    }

    fn press(&mut self, pos: Position) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        match round.press(pos) {
            PressOutcome::Selected(_) | PressOutcome::Finished => {}
            PressOutcome::NotAdjacent => {
                self.add_message("Pick a tile next to the last one", MessageStyle::Error);
            }
            PressOutcome::Submitted(verdict) => self.report(&verdict),
        }
    }

    fn report(&mut self, verdict: &Verdict) {
        let style = match verdict {
            Verdict::Accepted { .. } => MessageStyle::Success,
            Verdict::AlreadyFound(_) => MessageStyle::Warning,
            Verdict::TooShort | Verdict::NotFound(_) => MessageStyle::Error,
        };
        self.add_message(&verdict.to_string(), style);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.take_round_started() {
            last_tick = Instant::now();
        } else if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
