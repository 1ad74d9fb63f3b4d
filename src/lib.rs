//! # pig-dice
//!
//! Turn engine and tiered AI opponent for Pig, the two-player dice game:
//! roll a die as often as you like, bank the sum, and lose the whole turn
//! on a 1. First to the target score wins.
//!
//! ## Design Principles
//!
//! 1. **One Mutator**: `Game` owns its state and is the only thing that
//!    changes it. Callers submit intents and read events.
//!
//! 2. **Explicit State Machine**: Every step is a `Transition` checked by
//!    `Phase::next`. Bust, hold and winning are single edges.
//!
//! 3. **Reproducible**: All randomness flows through one seeded `GameRng`.
//!    The same seed and the same inputs replay the same game.
//!
//! ## Architecture
//!
//! - **Profiles, not classes**: the six AI tiers are data
//!   (`DifficultyProfile`) driving one `DecisionPolicy`.
//!
//! - **Persistent History**: events live in an `im::Vector`, so snapshots
//!   of a game's history clone in O(1).
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, errors
//! - `dice`: Dice sources (fair die, scripted die)
//! - `turn`: Per-turn roll and point accumulation
//! - `ai`: Difficulty tiers and decision policies
//! - `engine`: State machine, game state, events, `Game`
//! - `stats`: Roll histogram and scoreboard
//! - `arena`: AI-vs-AI runs for comparing tiers

pub mod ai;
pub mod arena;
pub mod core;
pub mod dice;
pub mod engine;
pub mod stats;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameRngState, PigError, Result, Seat, SeatMap};

pub use crate::dice::{DiceSource, Die, ScriptedDie};

pub use crate::turn::TurnAccumulator;

pub use crate::ai::{
    Decision, DecisionContext, DecisionPolicy, DifficultyProfile, HoldAt, RiskPolicy, RiskStyle,
    Tier,
};

pub use crate::engine::{
    start_game, Game, GameBuilder, GameEvent, GameSummary, HumanStep, Intent, Phase, RollEvent,
    TurnEnd, TurnReport,
};

pub use crate::stats::{RollHistogram, ScoreRecord, Scoreboard};

pub use crate::arena::{Arena, ArenaConfig, ArenaReport};
