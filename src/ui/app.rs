use crate::config::{AppConfig, BoardConfig, DisplayConfig};
use crate::error::{ConfigError, MoveError};
use crate::game::{GameSession, Outcome, Player, Run};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    session: GameSession,
    board_config: BoardConfig,
    display: DisplayConfig,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    winning_run: Option<Run>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        let session = GameSession::from_config(&config.board)?;
        Ok(App {
            selected_column: session.board().cols() / 2, // Start in middle
            session,
            board_config: config.board.clone(),
            display: config.display.clone(),
            should_quit: false,
            message: None,
            winning_run: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.session.board().cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column as isize);
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Direct column pick; out-of-range digits go to the engine
                // and come back rejected.
                let column = c as isize - '1' as isize;
                if let Ok(col) = usize::try_from(column) {
                    if col < self.session.board().cols() {
                        self.selected_column = col;
                    }
                }
                self.drop_piece(column);
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        match GameSession::from_config(&self.board_config) {
            Ok(session) => {
                self.selected_column = session.board().cols() / 2;
                self.session = session;
                self.winning_run = None;
                self.message = Some("New game started!".to_string());
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Drop piece in a column and describe what happened
    fn drop_piece(&mut self, column: isize) {
        let outcome = self.session.play_move(column);
        if let Outcome::Win { run, .. } = &outcome {
            self.winning_run = Some(*run);
        }
        self.message = describe(&outcome, &self.display);
    }

    pub fn player_name(&self, player: Player) -> &str {
        player_name(&self.display, player)
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &super::game_view::View {
                session: &self.session,
                selected_column: self.selected_column,
                message: self.message.as_deref(),
                winning_run: self.winning_run.as_ref(),
                player_one: &self.display.player_one,
                player_two: &self.display.player_two,
            },
        );
    }
}

fn player_name(display: &DisplayConfig, player: Player) -> &str {
    match player {
        Player::One => &display.player_one,
        Player::Two => &display.player_two,
    }
}

/// Message line for an outcome. Ordinary moves need none.
pub fn describe(outcome: &Outcome, display: &DisplayConfig) -> Option<String> {
    match outcome {
        Outcome::Placed { .. } => None,
        Outcome::Win { player, .. } => Some(format!(
            "{} wins! Press 'r' to restart.",
            player_name(display, *player)
        )),
        Outcome::Tie { .. } => Some("It's a tie! Press 'r' to restart.".to_string()),
        Outcome::Rejected { reason } => Some(match reason {
            MoveError::ColumnFull { .. } => "Column is full!".to_string(),
            MoveError::InvalidColumn { .. } => "Invalid column!".to_string(),
            MoveError::GameOver => "Game over! Press 'r' to restart.".to_string(),
        }),
    }
}
