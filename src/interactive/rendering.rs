//! TUI rendering with ratatui
//!
//! Welcome, grid and results screens for the word game.

use super::app::{App, MessageStyle, RoundReport, Screen};
use crate::core::{GRID_SIZE, Position};
use crate::game::{Round, SessionStats, TIME_LIMITS};
use crate::output::formatters::{format_clock, join_words};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match (app.screen, app.round.as_ref()) {
        (Screen::Playing, Some(round)) => render_playing(f, app, round, chunks[1]),
        (Screen::Results, _) => render_results(f, app, chunks[1]),
        _ => render_welcome(f, app, chunks[1]),
    }

    render_status(f, app, chunks[2]);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 GRID BOGGLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_welcome(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            "How to play",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("• Select adjacent letters to form words"),
        Line::from("  (diagonals count, each tile once per word)"),
        Line::from("• Words must be at least 3 letters"),
        Line::from("• Longer words score more: 100 points per letter"),
        Line::from(""),
        Line::from(Span::styled(
            "Choose a time limit",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, limit) in TIME_LIMITS.iter().enumerate() {
        let style = if *limit == app.time_limit {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("  {}: {} seconds", i + 1, limit),
            style,
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "  Enter: start with {}",
        format_clock(app.time_limit)
    )));

    let welcome = Paragraph::new(lines)
        .block(panel(" Welcome "))
        .wrap(Wrap { trim: false });
    f.render_widget(welcome, chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_session_stats(f, &app.stats, right[0]);
    render_messages(f, app, right[1]);
}

fn render_playing(f: &mut Frame, app: &App, round: &Round, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(9),    // Grid
            Constraint::Length(3), // Current word
        ])
        .split(chunks[0]);

    render_grid(f, app, round, left[0]);
    render_current_word(f, round, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Time
            Constraint::Percentage(55), // Found words
            Constraint::Min(4),         // Messages
        ])
        .split(chunks[1]);

    render_time(f, round, right[0]);
    render_found_words(f, round, right[1]);
    render_messages(f, app, right[2]);
}

fn tile_style(is_cursor: bool, is_selected: bool, is_last: bool) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match (is_cursor, is_selected) {
        (true, true) => style.fg(Color::Black).bg(Color::LightGreen),
        (true, false) => style.fg(Color::Black).bg(Color::Yellow),
        (false, true) if is_last => style.fg(Color::Black).bg(Color::Green),
        (false, true) => style.fg(Color::Green),
        (false, false) => style.fg(Color::White),
    }
}

fn render_grid(f: &mut Frame, app: &App, round: &Round, area: Rect) {
    let selection = round.selection();
    let mut lines = vec![Line::from("")];

    for row in 0..GRID_SIZE {
        let mut spans = vec![Span::raw("   ")];
        for col in 0..GRID_SIZE {
            let Ok(pos) = Position::new(row, col) else {
                continue;
            };
            let style = tile_style(
                pos == app.cursor,
                selection.contains(pos),
                selection.last() == Some(pos),
            );
            spans.push(Span::styled(
                format!(" {} ", round.grid().letter(pos)),
                style,
            ));
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("  {}", row * GRID_SIZE + 1),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let grid = Paragraph::new(lines).block(panel(" Grid "));
    f.render_widget(grid, area);
}

fn render_current_word(f: &mut Frame, round: &Round, area: Rect) {
    let word = round.current_word();
    let content = if word.is_empty() {
        Span::styled("select a tile…", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            word.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };

    let current = Paragraph::new(Line::from(content)).block(
        Block::default()
            .title(" Current Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(current, area);
}

fn render_time(f: &mut Frame, round: &Round, area: Rect) {
    let countdown = round.countdown();
    let fraction = countdown.fraction_remaining();
    let color = if fraction > 0.5 {
        Color::Green
    } else if fraction > 0.2 {
        Color::Yellow
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(panel(" Time "))
        .gauge_style(Style::default().fg(color))
        .ratio(fraction.clamp(0.0, 1.0))
        .label(format_clock(countdown.remaining()));
    f.render_widget(gauge, area);
}

fn render_found_words(f: &mut Frame, round: &Round, area: Rect) {
    let items: Vec<ListItem> = round
        .found_words()
        .iter()
        .rev()
        .map(|word| ListItem::new(word.clone()).style(Style::default().fg(Color::Green)))
        .collect();

    let title = format!(" Found ({}) ", round.found_words().len());
    let found = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(found, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let lines = app
        .last_round
        .as_ref()
        .map_or_else(|| vec![Line::from("No round played")], round_report_lines);

    let results = Paragraph::new(lines)
        .block(panel(" Results "))
        .wrap(Wrap { trim: true });
    f.render_widget(results, chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_session_stats(f, &app.stats, right[0]);
    render_messages(f, app, right[1]);
}

fn round_report_lines(report: &RoundReport) -> Vec<Line<'static>> {
    let summary = &report.summary;
    vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Score:  "),
            Span::styled(
                summary.score.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" / {}", report.max_score)),
        ]),
        Line::from(format!(
            "Words:  {} / {}",
            summary.word_count(),
            report.possible_words
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Found: {}", join_words(&summary.words)),
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Missed: {}", join_words(&report.missed)),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from("Press 1-4 to play again, q to quit"),
    ]
}

fn render_session_stats(f: &mut Frame, stats: &SessionStats, area: Rect) {
    let best_word = stats.best_word().map_or_else(
        || "None".to_string(),
        |word| format!("{word} (+{})", stats.best_word_points()),
    );
    let lines = vec![
        Line::from(format!("Rounds played: {}", stats.rounds_played())),
        Line::from(format!("Best word:     {best_word}")),
        Line::from(format!("High score:    {}", stats.best_score())),
        Line::from(format!("Most words:    {}", stats.best_word_count())),
    ];

    let paragraph = Paragraph::new(lines).block(panel(" Session "));
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let (score_text, words_text, time_text) = match app.round.as_ref() {
        Some(round) => (
            format!("Score: {}", round.score()),
            format!("Words: {}", round.found_words().len()),
            format!("Time: {}", format_clock(round.countdown().remaining())),
        ),
        None => (
            format!("High score: {}", app.stats.best_score()),
            format!("Rounds: {}", app.stats.rounds_played()),
            format!("Limit: {}", format_clock(app.time_limit)),
        ),
    };

    f.render_widget(
        Paragraph::new(score_text).alignment(Alignment::Center),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(words_text).alignment(Alignment::Center),
        chunks[1],
    );
    f.render_widget(
        Paragraph::new(time_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = match app.screen {
        Screen::Playing => "Space/1-9: Pick | Enter: Submit | Bksp: Undo | Esc: Clear | q: Quit",
        Screen::Welcome | Screen::Results => "1-4: Play | Enter: Play | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::dictionary::Dictionary;
    use ratatui::backend::TestBackend;

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn welcome_screen_lists_time_limits() {
        let dictionary = Dictionary::new(["cat"]);
        let app = App::new(&dictionary, &GameConfig::default());
        let screen = draw(&app);
        assert!(screen.contains("Select adjacent letters"));
        assert!(screen.contains("120 seconds"));
    }

    #[test]
    fn playing_screen_shows_grid_and_word() {
        let dictionary = Dictionary::new(["cat"]);
        let mut app = App::new(&dictionary, &GameConfig::default());
        app.start_round_on("CATSEPRNT".parse().unwrap(), 30);
        app.handle_key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('1'),
            crossterm::event::KeyModifiers::NONE,
        ));

        let screen = draw(&app);
        assert!(screen.contains("Current Word"));
        assert!(screen.contains("0:30"));
        assert!(screen.contains(" R "));
    }

    #[test]
    fn results_screen_shows_game_over() {
        let dictionary = Dictionary::new(["cat"]);
        let mut app = App::new(&dictionary, &GameConfig::default());
        app.start_round_on("CATSEPRNT".parse().unwrap(), 30);
        app.end_round();

        let screen = draw(&app);
        assert!(screen.contains("GAME OVER"));
        assert!(screen.contains("Missed: CAT"));
    }
}
