//! AI contestant: difficulty tiers and decision policies.
//!
//! ## Overview
//!
//! - `profile`: six immutable `DifficultyProfile`s keyed by `Tier`
//! - `policy`: the `DecisionPolicy` trait and its implementations
//!
//! ## Usage
//!
//! ```rust
//! use pig_dice::ai::{Decision, DecisionContext, DecisionPolicy, RiskPolicy, Tier};
//! use pig_dice::core::GameRng;
//! use pig_dice::turn::TurnAccumulator;
//!
//! let mut turn = TurnAccumulator::new();
//! turn.apply_roll(6);
//! turn.apply_roll(5);
//!
//! let ctx = DecisionContext {
//!     profile: Tier::Legendary.profile(),
//!     turn: &turn,
//!     my_total: 95,
//!     opponent_total: 40,
//!     target_score: 100,
//! };
//!
//! // 95 + 11 reaches the target: always hold.
//! let mut rng = GameRng::new(42);
//! assert_eq!(RiskPolicy::default().decide(&ctx, &mut rng), Decision::Hold);
//! ```

pub mod policy;
pub mod profile;

pub use policy::{Decision, DecisionContext, DecisionPolicy, HoldAt, RiskPolicy, DEFAULT_RISK_STEP};
pub use profile::{DifficultyProfile, RiskStyle, Tier};
