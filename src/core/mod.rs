//! Core types: seats, RNG, configuration, errors.
//!
//! These are shared by every other module and carry no game rules.

pub mod config;
pub mod error;
pub mod rng;
pub mod seat;

pub use config::{GameConfig, DEFAULT_SEED, DEFAULT_TARGET_SCORE};
pub use error::{PigError, Result};
pub use rng::{GameRng, GameRngState};
pub use seat::{Seat, SeatMap};
