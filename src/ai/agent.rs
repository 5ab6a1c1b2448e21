use crate::game::{Coord, GameState};

/// Interface for all computer opponents.
pub trait Agent {
    /// Select a move for the player whose turn it is, or `None` when no legal
    /// move exists.
    fn select_move(&mut self, state: &GameState) -> Option<Coord>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Inform the agent how many tokens the opponent's last move flipped.
    /// Agents that don't track the opponent ignore this.
    fn observe_opponent_flips(&mut self, _flipped: usize) {}
}
