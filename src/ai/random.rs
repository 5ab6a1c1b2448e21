use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Coord, GameState};

use super::agent::Agent;

/// An agent that selects uniformly at random from legal moves.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, state: &GameState) -> Option<Coord> {
        let moves = state.legal_moves_for_current();
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..moves.len());
        Some(moves[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}
