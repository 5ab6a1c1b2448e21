//! JSON persistence of a single game.
//!
//! The on-disk shape is `{ board, current_player, finished }` where `board`
//! is the flat row-major cell-tag sequence. Saves are written to a temporary
//! file and renamed into place.

use std::fs;
use std::path::Path;

use crate::error::SaveError;
use crate::game::{Board, GameState, Player};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct SavedGame {
    board: Board,
    current_player: Player,
    finished: bool,
}

/// Write the game to `path`, replacing any previous save.
pub fn save_game(path: &Path, state: &GameState) -> Result<(), SaveError> {
    let saved = SavedGame {
        board: state.board().clone(),
        current_player: state.current_player(),
        finished: state.is_finished(),
    };
    let json = serde_json::to_string_pretty(&saved)?;

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Load a previously saved game from `path`.
pub fn load_game(path: &Path) -> Result<GameState, SaveError> {
    let json = fs::read_to_string(path).map_err(|e| SaveError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let saved: SavedGame = serde_json::from_str(&json).map_err(|e| SaveError::FileParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(GameState::from_parts(
        saved.board,
        saved.current_player,
        saved.finished,
    ))
}

/// Remove the save file, if present. Used once a game has finished.
pub fn remove_save(path: &Path) {
    let _ = fs::remove_file(path);
}
