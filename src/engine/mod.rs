//! Turn engine: the state machine, game state, events and the `Game` handle.
//!
//! `Game` is the single mutator of a game's state. Callers drive it through
//! two surfaces:
//!
//! - `submit_human_intent` applies one roll or hold for a human seat
//! - `advance_ai_turn` plays an AI seat's whole turn
//!
//! ## Usage
//!
//! ```rust
//! use pig_dice::ai::Tier;
//! use pig_dice::core::GameConfig;
//! use pig_dice::engine::{start_game, Intent};
//!
//! let mut game = start_game(Some("Ada"), Tier::Noob, GameConfig::new().with_seed(7)).unwrap();
//!
//! while !game.is_over() {
//!     if game.awaits_human() {
//!         let intent = match game.state().turn() {
//!             Some(turn) if turn.points_accrued() >= 15 => Intent::Hold,
//!             _ => Intent::Roll,
//!         };
//!         game.submit_human_intent(intent).unwrap();
//!     } else {
//!         game.advance_ai_turn().unwrap();
//!     }
//! }
//!
//! let summary = game.summary().unwrap();
//! assert!(summary.final_scores[summary.winner] >= 100);
//! ```

pub mod event;
pub mod game;
pub mod machine;
pub mod state;

pub use event::{GameEvent, GameSummary, RollEvent, TurnEnd, TurnReport};
pub use game::{start_game, Game, GameBuilder, HumanStep, Intent, COMPUTER_NAME, DEFAULT_HUMAN_NAME};
pub use machine::{Phase, Transition};
pub use state::{Contestant, ContestantKind, GameState};
