//! Error types for pig-dice.
//!
//! Bust, cap and roll-budget exhaustion are ordinary turn endings and never
//! surface here. Everything in this enum is either a construction-time
//! rejection or a caller mistake the presentation layer can re-prompt on.

use thiserror::Error;

use super::seat::Seat;
use crate::engine::{Phase, Transition};

/// Core error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PigError {
    /// A difficulty profile violated its invariants.
    #[error("invalid difficulty profile: {0}")]
    InvalidProfile(String),

    /// The caller tried to act for a seat that is not active.
    #[error("not your turn: {seat} is to play")]
    NotYourTurn { seat: Seat },

    /// Human input other than roll/hold.
    #[error("invalid intent '{0}': expected roll or hold")]
    InvalidIntent(String),

    /// Tier name that matches none of the six tiers.
    #[error("unknown difficulty tier '{0}'")]
    UnknownTier(String),

    /// Rejected game or arena configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The game already has a winner.
    #[error("game is over")]
    GameFinished,

    /// The state machine has no edge for this step.
    #[error("illegal transition {transition:?} from {phase:?}")]
    IllegalTransition { phase: Phase, transition: Transition },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PigError>;
