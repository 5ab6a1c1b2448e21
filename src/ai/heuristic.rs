//! The mirror heuristic: pick the legal move whose flip count is closest to
//! what the opponent's last move flipped, preferring the weaker option on a
//! tie. This intentionally plays slightly below a pure mirroring strategy.

use crate::game::{legal_moves, rules, Board, Coord, GameState, Player};

use super::agent::Agent;

/// How many opponent tokens `player` would flip by playing `coord`.
///
/// Operates on a private copy; the caller's board is never mutated. For any
/// legal move the result is at least 1.
pub fn flip_count(board: &Board, player: Player, coord: Coord) -> usize {
    let mut scratch = board.clone();
    rules::apply_move(&mut scratch, player, coord)
}

/// Flip counts for every legal move of `player`, keyed by coordinate in
/// row-major scan order. The keys are exactly [`legal_moves`].
pub fn candidate_flip_counts(board: &Board, player: Player) -> Vec<(Coord, usize)> {
    legal_moves(board, player)
        .into_iter()
        .map(|coord| (coord, flip_count(board, player, coord)))
        .collect()
}

/// Pick the candidate whose flip count is closest to `reference`.
///
/// Ties go to the smaller flip count; remaining ties to the earliest
/// candidate in scan order. Returns `None` iff `candidates` is empty.
pub fn select_move(reference: usize, candidates: &[(Coord, usize)]) -> Option<Coord> {
    candidates
        .iter()
        .min_by_key(|(_, flips)| (flips.abs_diff(reference), *flips))
        .map(|(coord, _)| *coord)
}

/// An agent driving [`select_move`] with the opponent's last flip count as
/// the reference.
#[derive(Debug, Default)]
pub struct MirrorAgent {
    reference: usize,
}

impl MirrorAgent {
    pub fn new() -> Self {
        MirrorAgent { reference: 0 }
    }
}

impl Agent for MirrorAgent {
    fn select_move(&mut self, state: &GameState) -> Option<Coord> {
        let candidates = candidate_flip_counts(state.board(), state.current_player());
        select_move(self.reference, &candidates)
    }

    fn name(&self) -> &str {
        "Mirror"
    }

    fn observe_opponent_flips(&mut self, flipped: usize) {
        self.reference = flipped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, MoveError};

    #[test]
    fn test_flip_count_is_positive_for_every_legal_move() {
        let board = Board::new(8).unwrap();
        for player in [Player::Dark, Player::Light] {
            for coord in legal_moves(&board, player) {
                assert!(flip_count(&board, player, coord) >= 1, "at {}", coord);
            }
        }
    }

    #[test]
    fn test_flip_count_does_not_mutate_board() {
        let board = Board::new(8).unwrap();
        let before = board.clone();
        flip_count(&board, Player::Dark, Coord::new(2, 3));
        assert_eq!(board, before);
    }

    #[test]
    fn test_candidates_match_legal_moves() {
        let mut state = GameState::new(8).unwrap();
        state.apply_move_mut(Coord::new(2, 3)).unwrap();

        let board = state.board();
        let candidates = candidate_flip_counts(board, Player::Light);
        let keys: Vec<Coord> = candidates.iter().map(|(c, _)| *c).collect();
        assert_eq!(keys, legal_moves(board, Player::Light));
        assert!(!candidates.is_empty());
    }

    #[test]
    fn test_opening_candidates_all_flip_one() {
        let board = Board::new(8).unwrap();
        for (coord, flips) in candidate_flip_counts(&board, Player::Dark) {
            assert_eq!(flips, 1, "at {}", coord);
        }
    }

    #[test]
    fn test_select_move_empty_candidates() {
        assert_eq!(select_move(3, &[]), None);
    }

    #[test]
    fn test_select_move_returns_a_candidate_key() {
        let board = Board::new(8).unwrap();
        let candidates = candidate_flip_counts(&board, Player::Dark);
        let chosen = select_move(2, &candidates).unwrap();
        assert!(candidates.iter().any(|(c, _)| *c == chosen));
    }

    #[test]
    fn test_select_move_prefers_closest_flip_count() {
        let candidates = [
            (Coord::new(0, 0), 6),
            (Coord::new(1, 0), 3),
            (Coord::new(2, 0), 1),
        ];
        assert_eq!(select_move(4, &candidates), Some(Coord::new(1, 0)));
    }

    #[test]
    fn test_equal_distance_ties_go_to_lower_flip_count() {
        // |3 - 2| == |1 - 2|, so the count of 1 wins.
        let candidates = [(Coord::new(0, 0), 3), (Coord::new(1, 0), 1)];
        assert_eq!(select_move(2, &candidates), Some(Coord::new(1, 0)));
    }

    #[test]
    fn test_full_ties_resolve_by_scan_order() {
        // Equal distance and equal flip count: the first candidate wins.
        let candidates = [(Coord::new(5, 1), 2), (Coord::new(0, 4), 2)];
        assert_eq!(select_move(5, &candidates), Some(Coord::new(5, 1)));
    }

    #[test]
    fn test_mirror_agent_plays_a_legal_move() {
        let mut state = GameState::new(8).unwrap();
        state.apply_move_mut(Coord::new(2, 3)).unwrap();

        let mut agent = MirrorAgent::new();
        agent.observe_opponent_flips(1);
        let coord = agent.select_move(&state).unwrap();
        assert!(legal_moves(state.board(), Player::Light).contains(&coord));

        // All opening replies flip exactly one token, so the agent mirrors.
        assert_eq!(flip_count(state.board(), Player::Light, coord), 1);
    }

    #[test]
    fn test_mirror_agent_finishes_a_game() {
        let mut state = GameState::new(8).unwrap();
        let mut agent = MirrorAgent::new();

        while !state.is_finished() {
            let coord = agent
                .select_move(&state)
                .expect("unfinished game has a legal move for the current player");
            let flipped = state.apply_move_mut(coord).unwrap();
            agent.observe_opponent_flips(flipped);
        }

        let score = state.score();
        assert_eq!(
            score.dark + score.light + state.board().count(Cell::Empty),
            64
        );
        assert_eq!(
            state.apply_move_mut(Coord::new(0, 0)),
            Err(MoveError::GameOver)
        );
    }
}
