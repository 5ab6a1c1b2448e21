//! Terminal UI: cursor-driven board for playing against the configured
//! computer opponent.

mod app;
mod game_view;

pub use app::App;
