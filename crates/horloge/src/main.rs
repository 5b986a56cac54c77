use std::time::Duration;

use chrono::{Local, Timelike};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use horloge_config::Config;
use horloge_core::{ClockReading, bounce, hand_angles};
use horloge_face::{ClockFace, FaceStyle};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();
    let result = App::new(Config::load()).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Persisted settings: time format, theme, frame interval.
    config: Config,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            config,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface: sample time, compute bounce, compute
    /// angles, paint.
    fn render(&mut self, frame: &mut Frame) {
        let now = Local::now();

        // chrono folds a leap second into nanosecond() >= 1e9; keep the
        // bounce progress inside [0, 1).
        let progress = f64::from(now.nanosecond().min(999_999_999)) / 1e9;
        let eased = bounce(progress);

        let Ok(reading) = ClockReading::new(now.hour() as u8, now.minute() as u8, now.second() as u8)
        else {
            return;
        };
        let angles = hand_angles(reading, self.config.time_format, eased);

        let theme = self.config.theme;
        let color = theme.color();

        // Format date
        let date_str = now.format("%A, %B %d, %Y").to_string();

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Clock face
            Constraint::Length(1), // Date
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());

        // Render the face
        let face = ClockFace {
            angles,
            format: self.config.time_format,
            style: FaceStyle {
                disc: theme.dim_color(),
                tick: ratatui::style::Color::Gray,
                hand: color,
                numeral: Style::new().fg(color),
            },
        };
        frame.render_widget(face, chunks[0]);

        // Render date
        let date = Paragraph::new(date_str)
            .style(Style::new().fg(color))
            .alignment(Alignment::Center);
        frame.render_widget(date, chunks[1]);

        // Render help text
        let help = Line::from(vec![
            "q".bold().fg(color),
            " quit  ".dark_gray(),
            "t".bold().fg(color),
            " toggle 12/24h  ".dark_gray(),
            "c".bold().fg(color),
            " cycle color".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[2]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with the frame interval as timeout so the hands keep
    /// moving between key presses.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = Duration::from_millis(self.config.frame_interval_ms);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('t')) => self.toggle_time_format(),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            _ => {}
        }
    }

    /// Toggle between 12-hour and 24-hour time format.
    fn toggle_time_format(&mut self) {
        self.config.time_format = self.config.time_format.toggle();
        self.persist();
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.config.theme = self.config.theme.next();
        self.persist();
    }

    /// Save settings; a failed save leaves the session usable.
    fn persist(&self) {
        let _ = self.config.save();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
