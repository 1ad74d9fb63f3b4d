//! Per-turn accumulation of rolls and points.
//!
//! A turn lives from its first roll until it busts or is held. The one hard
//! rule of Pig sits here: a 1 wipes every unbanked point of the turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::ai::DifficultyProfile;

/// Face that busts a turn.
pub const BUST_FACE: u8 = 1;

/// Rolls and points of the active turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnAccumulator {
    /// Every face rolled this turn, busting roll included.
    /// Inline for up to 12 rolls, the largest AI roll budget.
    rolls: SmallVec<[u8; 12]>,
    points_accrued: u32,
    busted: bool,
}

impl TurnAccumulator {
    /// Start an empty turn.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one die face.
    ///
    /// A 1 busts the turn and zeroes its points; any other face adds to
    /// them. A busted turn ignores further rolls. Returns whether the turn
    /// is busted afterwards.
    pub fn apply_roll(&mut self, value: u8) -> bool {
        if self.busted {
            return true;
        }

        self.rolls.push(value);
        if value == BUST_FACE {
            self.busted = true;
            self.points_accrued = 0;
        } else {
            self.points_accrued += u32::from(value);
        }
        self.busted
    }

    /// Whether an AI with `profile` must stop: bust, roll budget spent, or
    /// turn cap reached.
    #[must_use]
    pub fn is_over(&self, profile: &DifficultyProfile) -> bool {
        self.busted
            || self.rolls_taken() >= profile.max_rolls()
            || self.points_accrued >= profile.turn_cap()
    }

    /// Number of faces rolled so far.
    #[must_use]
    pub fn rolls_taken(&self) -> u32 {
        self.rolls.len() as u32
    }

    /// Unbanked points. Always 0 once busted.
    #[must_use]
    pub fn points_accrued(&self) -> u32 {
        self.points_accrued
    }

    /// Whether a 1 has been rolled.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.busted
    }

    /// Faces in roll order.
    #[must_use]
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Points this turn contributes if resolved now.
    #[must_use]
    pub fn bankable(&self) -> u32 {
        if self.busted {
            0
        } else {
            self.points_accrued
        }
    }
}
