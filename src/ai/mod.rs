//! Computer opponents: the Agent trait, the mirror heuristic that shadows the
//! human's flip counts, and a uniform random baseline.

mod agent;
pub mod heuristic;
mod random;

pub use agent::Agent;
pub use heuristic::MirrorAgent;
pub use random::RandomAgent;

use crate::config::OpponentKind;

/// Build the configured opponent.
pub fn build_agent(kind: OpponentKind) -> Box<dyn Agent> {
    match kind {
        OpponentKind::Mirror => Box::new(MirrorAgent::new()),
        OpponentKind::Random => Box::new(RandomAgent::new()),
    }
}
