use super::board::{Board, Cell, Coord};
use super::player::Player;
use super::rules::{self, MoveError};
use crate::error::BoardError;

/// Who won once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Token counts plus the outcome they imply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub dark: usize,
    pub light: usize,
    pub outcome: GameOutcome,
}

/// The complete state of one game, owned by the driver.
///
/// `finished` becomes true exactly when neither player has a legal move. A
/// full board is one way for that to happen, not the only one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    finished: bool,
}

impl GameState {
    /// Start a fresh game. Dark moves first.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(GameState {
            board: Board::new(size)?,
            current_player: Player::Dark,
            finished: false,
        })
    }

    /// Reassemble a state, e.g. from a loaded save.
    pub fn from_parts(board: Board, current_player: Player, finished: bool) -> Self {
        GameState {
            board,
            current_player,
            finished,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Legal moves for the player whose turn it is.
    pub fn legal_moves_for_current(&self) -> Vec<Coord> {
        if self.finished {
            return Vec::new();
        }
        legal_moves(&self.board, self.current_player)
    }

    /// Validate and apply a move for the current player, then advance the
    /// turn. Returns the number of tokens flipped.
    pub fn apply_move_mut(&mut self, coord: Coord) -> Result<usize, MoveError> {
        if self.finished {
            return Err(MoveError::GameOver);
        }
        rules::check_move(&self.board, self.current_player, coord)?;
        let flipped = rules::apply_move(&mut self.board, self.current_player, coord);
        self.advance_turn();
        Ok(flipped)
    }

    /// Turn-advance rule: the opponent plays next if they can; otherwise the
    /// mover goes again; otherwise the game is over.
    fn advance_turn(&mut self) {
        let other = self.current_player.other();
        if has_any_legal_move(&self.board, other) {
            self.current_player = other;
        } else if !has_any_legal_move(&self.board, self.current_player) {
            self.finished = true;
        }
        // else: mover keeps the turn
    }

    pub fn score(&self) -> Score {
        score(&self.board)
    }
}

/// Whether `player` has at least one legal move anywhere on the board.
pub fn has_any_legal_move(board: &Board, player: Player) -> bool {
    board
        .coords()
        .any(|coord| rules::is_legal(board, player, coord) == Ok(true))
}

/// All legal moves for `player`, in row-major scan order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Coord> {
    board
        .coords()
        .filter(|&coord| rules::is_legal(board, player, coord) == Ok(true))
        .collect()
}

/// Count tokens by color and derive the winner. Empty cells are ignored.
pub fn score(board: &Board) -> Score {
    let dark = board.count(Cell::Dark);
    let light = board.count(Cell::Light);
    let outcome = if dark > light {
        GameOutcome::Winner(Player::Dark)
    } else if light > dark {
        GameOutcome::Winner(Player::Light)
    } else {
        GameOutcome::Draw
    };
    Score {
        dark,
        light,
        outcome,
    }
}
