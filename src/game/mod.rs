//! Core Othello game logic: board representation, player types, move rules,
//! and the turn/termination state machine.

mod board;
mod player;
mod state;

pub mod rules;

pub use board::{Board, Cell, Coord, DEFAULT_SIZE};
pub use player::Player;
pub use rules::MoveError;
pub use state::{has_any_legal_move, legal_moves, score, GameOutcome, GameState, Score};
