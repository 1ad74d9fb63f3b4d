//! Observers of finished play: roll histograms and a scoreboard.
//!
//! Both consume engine output (`GameEvent`, `GameSummary`) and never touch
//! a running game.

pub mod histogram;
pub mod scoreboard;

pub use histogram::RollHistogram;
pub use scoreboard::{ScoreRecord, Scoreboard};
