//! # Othello
//!
//! The classic board game with a terminal UI and a deliberately beatable
//! computer opponent: it mirrors how many tokens your last move flipped and,
//! on a tie, takes the weaker option.
//!
//! ## Modules
//!
//! - [`game`] — Core rules: board, players, move legality, line flipping,
//!   turn/termination state machine
//! - [`ai`] — Agent trait and the mirror/random opponents
//! - [`save`] — JSON persistence of a game in progress
//! - [`ui`] — Terminal UI built with Ratatui
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod save;
pub mod ui;
