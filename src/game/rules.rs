//! Move legality checking and line-flip resolution.
//!
//! These are deliberately separate steps: [`check_move`] classifies a
//! candidate move and [`apply_move`] mutates the board without re-validating.
//! Callers own the ordering (check first, then apply).

use super::board::{Board, Cell, Coord};
use super::player::Player;

/// The 8 compass offsets shared by the legality checker and flip resolver.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Why a candidate move was rejected.
///
/// `CellOccupied` and `NoOutflankedPieces` are expected, recoverable outcomes
/// the driver reports back to the user. `OutOfBounds` is a malformed
/// coordinate and is kept distinct from "not a move".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds,
    CellOccupied,
    NoOutflankedPieces,
    GameOver,
}

/// Classify a candidate move for `player` at `coord`.
///
/// Returns `Ok(())` when the move is legal, otherwise the first applicable
/// rejection reason. Never returns [`MoveError::GameOver`]; the state machine
/// layers that on top.
pub fn check_move(board: &Board, player: Player, coord: Coord) -> Result<(), MoveError> {
    if !board.contains(coord) {
        return Err(MoveError::OutOfBounds);
    }
    if board.get(coord) != Cell::Empty {
        return Err(MoveError::CellOccupied);
    }

    // Legal iff at least one direction outflanks; stop at the first hit.
    for (dx, dy) in DIRECTIONS {
        if outflanks(board, player, coord, dx, dy) {
            return Ok(());
        }
    }
    Err(MoveError::NoOutflankedPieces)
}

/// Whether placing at `coord` is legal for `player`.
///
/// Errors only for out-of-bounds coordinates; an occupied cell or a move with
/// no outflanked line is `Ok(false)`.
pub fn is_legal(board: &Board, player: Player, coord: Coord) -> Result<bool, MoveError> {
    match check_move(board, player, coord) {
        Ok(()) => Ok(true),
        Err(MoveError::OutOfBounds) => Err(MoveError::OutOfBounds),
        Err(_) => Ok(false),
    }
}

/// Whether the run starting one step from `coord` in `(dx, dy)` is a
/// contiguous line of opponent tokens terminated by one of `player`'s own.
fn outflanks(board: &Board, player: Player, coord: Coord, dx: i32, dy: i32) -> bool {
    let own = player.to_cell();
    let opponent = player.other().to_cell();

    let mut seen_opponent = false;
    let mut cursor = coord;
    while let Some(next) = board.step(cursor, dx, dy) {
        match board.get(next) {
            cell if cell == opponent => seen_opponent = true,
            cell if cell == own => return seen_opponent,
            _ => return false, // empty gap, no outflank
        }
        cursor = next;
    }
    false // ran off the board without closing the line
}

/// Place `player`'s token at `coord` and flip every outflanked run.
///
/// Returns the number of opponent tokens flipped. Does NOT validate legality;
/// call [`check_move`] first. Applying an illegal placement simply places the
/// token and flips nothing.
pub fn apply_move(board: &mut Board, player: Player, coord: Coord) -> usize {
    let own = player.to_cell();
    let opponent = player.other().to_cell();

    board.set(coord, own);

    let mut flipped = 0;
    for (dx, dy) in DIRECTIONS {
        let mut line = Vec::new();
        let mut cursor = coord;
        while let Some(next) = board.step(cursor, dx, dy) {
            match board.get(next) {
                cell if cell == opponent => line.push(next),
                cell if cell == own => {
                    for c in &line {
                        board.set(*c, own);
                    }
                    flipped += line.len();
                    break;
                }
                _ => break, // empty gap terminates the run with no flips
            }
            cursor = next;
        }
    }
    flipped
}
