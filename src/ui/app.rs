use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::ai::{self, Agent};
use crate::config::AppConfig;
use crate::error::BoardError;
use crate::game::{Coord, GameOutcome, GameState, MoveError, Player};
use crate::save;

/// The human always plays Dark; the configured agent answers as Light.
const HUMAN: Player = Player::Dark;
const COMPUTER: Player = Player::Light;

pub struct App {
    game_state: GameState,
    cursor: Coord,
    should_quit: bool,
    message: Option<String>,
    show_hints: bool,
    opponent: Box<dyn Agent>,
    save_path: PathBuf,
    autosave: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, BoardError> {
        let (game_state, message) = match save::load_game(&config.save.path) {
            Ok(state) if !state.is_finished() => (state, Some("Resumed saved game".to_string())),
            _ => (GameState::new(config.game.board_size)?, None),
        };

        let mid = game_state.board().size() / 2;
        Ok(App {
            game_state,
            cursor: Coord::new(mid, mid),
            should_quit: false,
            message,
            show_hints: true,
            opponent: ai::build_agent(config.opponent.kind),
            save_path: config.save.path.clone(),
            autosave: config.save.autosave,
        })
    }

    /// Main application loop
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
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
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        let last = self.game_state.board().size() - 1;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.persist();
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.cursor.col > 0 {
                    self.cursor.col -= 1;
                }
            }
            KeyCode::Right => {
                if self.cursor.col < last {
                    self.cursor.col += 1;
                }
            }
            KeyCode::Up => {
                if self.cursor.row > 0 {
                    self.cursor.row -= 1;
                }
            }
            KeyCode::Down => {
                if self.cursor.row < last {
                    self.cursor.row += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_token();
            }
            KeyCode::Char('h') => {
                self.show_hints = !self.show_hints;
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        let size = self.game_state.board().size();
        save::remove_save(&self.save_path);
        // Size was accepted once already, so a fresh board cannot fail.
        if let Ok(fresh) = GameState::new(size) {
            self.game_state = fresh;
        }
        self.cursor = Coord::new(size / 2, size / 2);
        self.message = Some("New game started!".to_string());
    }

    /// Submit the cursor cell as the human's move, then let the computer
    /// answer until it is the human's turn again (or the game ends).
    fn place_token(&mut self) {
        if self.game_state.is_finished() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.apply_move_mut(self.cursor) {
            Ok(flipped) => {
                self.opponent.observe_opponent_flips(flipped);
                let replies = self.run_computer_turns();
                self.announce(replies);
            }
            Err(MoveError::CellOccupied) => {
                self.message = Some("Cell already occupied".to_string());
            }
            Err(MoveError::NoOutflankedPieces) => {
                self.message = Some("No outflanked pieces".to_string());
            }
            Err(MoveError::OutOfBounds) => {
                self.message = Some("Coordinate is off the board".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }

        self.persist();
    }

    /// The computer keeps moving while it is the only side with a legal
    /// move. Returns how many moves it made.
    fn run_computer_turns(&mut self) -> usize {
        let mut moves = 0;
        while !self.game_state.is_finished() && self.game_state.current_player() == COMPUTER {
            let Some(coord) = self.opponent.select_move(&self.game_state) else {
                break;
            };
            if self.game_state.apply_move_mut(coord).is_err() {
                break;
            }
            moves += 1;
        }
        moves
    }

    fn announce(&mut self, computer_replies: usize) {
        if self.game_state.is_finished() {
            let score = self.game_state.score();
            self.message = Some(match score.outcome {
                GameOutcome::Winner(player) => format!(
                    "{} has won {}:{} - press 'r' for a new game",
                    player.name(),
                    score.dark.max(score.light),
                    score.dark.min(score.light),
                ),
                GameOutcome::Draw => {
                    format!("Draw at {}! Press 'r' for a new game", score.dark)
                }
            });
        } else if computer_replies == 0 && self.game_state.current_player() == HUMAN {
            self.message = Some("Light has no move - Dark goes again".to_string());
        }
    }

    /// Autosave after each processed move; drop the file once the game ends.
    fn persist(&mut self) {
        if self.game_state.is_finished() {
            save::remove_save(&self.save_path);
        } else if self.autosave {
            if let Err(err) = save::save_game(&self.save_path, &self.game_state) {
                self.message = Some(format!("Failed to save game: {err}"));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.cursor,
            self.show_hints,
            self.opponent.name(),
            &self.message,
        );
    }
}
