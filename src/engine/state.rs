//! Game state: contestants, active turn, phase and history.
//!
//! `GameState` is owned and mutated only by `Game`; everything outside the
//! engine sees it through shared references.

use std::borrow::Cow;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::ai::{DifficultyProfile, Tier};
use crate::core::{Seat, SeatMap};
use crate::turn::TurnAccumulator;

use super::event::GameEvent;
use super::machine::Phase;

/// Who controls a seat.
///
/// Tier seats borrow the shared static profile; only custom profiles are
/// owned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ContestantKind {
    Human,
    Ai(Cow<'static, DifficultyProfile>),
}

impl ContestantKind {
    /// AI seat playing a preset tier.
    #[must_use]
    pub fn tier(tier: Tier) -> Self {
        ContestantKind::Ai(Cow::Borrowed(tier.profile()))
    }

    /// AI seat playing a custom profile.
    #[must_use]
    pub fn custom(profile: DifficultyProfile) -> Self {
        ContestantKind::Ai(Cow::Owned(profile))
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        matches!(self, ContestantKind::Human)
    }

    /// The AI profile, if this seat is AI-controlled.
    #[must_use]
    pub fn profile(&self) -> Option<&DifficultyProfile> {
        match self {
            ContestantKind::Human => None,
            ContestantKind::Ai(profile) => Some(profile.as_ref()),
        }
    }
}

/// One side of the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contestant {
    pub name: String,
    pub kind: ContestantKind,
    /// Banked points. Never decreases during a game.
    total: u32,
}

impl Contestant {
    pub fn new(name: impl Into<String>, kind: ContestantKind) -> Self {
        Self {
            name: name.into(),
            kind,
            total: 0,
        }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    pub(crate) fn bank(&mut self, points: u32) {
        self.total = self.total.saturating_add(points);
    }

    pub(crate) fn set_total(&mut self, total: u32) {
        self.total = total;
    }
}

/// Full state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) contestants: SeatMap<Contestant>,
    pub(crate) active: Seat,
    pub(crate) turn: Option<TurnAccumulator>,
    pub(crate) phase: Phase,
    pub(crate) target_score: u32,
    pub(crate) winner: Option<Seat>,
    /// Turns started so far.
    pub(crate) turn_number: u32,
    /// Every event in order. Persistent vector: snapshots clone in O(1).
    pub(crate) history: Vector<GameEvent>,
}

impl GameState {
    pub(crate) fn new(contestants: SeatMap<Contestant>, first: Seat, target_score: u32) -> Self {
        Self {
            contestants,
            active: first,
            turn: None,
            phase: Phase::AwaitingTurn,
            target_score,
            winner: None,
            turn_number: 0,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn contestant(&self, seat: Seat) -> &Contestant {
        &self.contestants[seat]
    }

    #[must_use]
    pub fn active_seat(&self) -> Seat {
        self.active
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The turn being played, if any.
    #[must_use]
    pub fn turn(&self) -> Option<&TurnAccumulator> {
        self.turn.as_ref()
    }

    #[must_use]
    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Running totals for both seats.
    #[must_use]
    pub fn totals(&self) -> SeatMap<u32> {
        self.contestants.map(Contestant::total)
    }

    #[must_use]
    pub fn history(&self) -> &Vector<GameEvent> {
        &self.history
    }

    pub(crate) fn record(&mut self, event: GameEvent) {
        self.history.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        let contestants = SeatMap::from_pair(
            Contestant::new("Ada", ContestantKind::Human),
            Contestant::new("Computer", ContestantKind::tier(Tier::Elite)),
        );
        GameState::new(contestants, Seat::First, 100)
    }

    #[test]
    fn test_new_state() {
        let state = state();

        assert_eq!(state.phase(), Phase::AwaitingTurn);
        assert_eq!(state.active_seat(), Seat::First);
        assert_eq!(state.totals(), SeatMap::from_pair(0, 0));
        assert!(state.turn().is_none());
        assert!(state.winner().is_none());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_contestant_kinds() {
        let state = state();

        assert!(state.contestant(Seat::First).kind.is_human());
        assert!(state.contestant(Seat::First).kind.profile().is_none());
        assert_eq!(
            state.contestant(Seat::Second).kind.profile(),
            Some(Tier::Elite.profile())
        );
    }

    #[test]
    fn test_tier_seat_shares_static_profile() {
        let kind = ContestantKind::tier(Tier::Legendary);
        assert!(matches!(kind, ContestantKind::Ai(Cow::Borrowed(_))));
        assert!(std::ptr::eq(kind.profile().unwrap(), Tier::Legendary.profile()));

        let copied = kind.clone();
        assert!(std::ptr::eq(copied.profile().unwrap(), Tier::Legendary.profile()));

        let custom = ContestantKind::custom(*Tier::Legendary.profile());
        assert!(matches!(custom, ContestantKind::Ai(Cow::Owned(_))));
        assert_eq!(custom, kind);
    }

    #[test]
    fn test_bank_accumulates() {
        let mut c = Contestant::new("Ada", ContestantKind::Human);
        c.bank(12);
        c.bank(0);
        c.bank(7);
        assert_eq!(c.total(), 19);
    }

    #[test]
    fn test_history_snapshot_is_independent() {
        let mut state = state();
        state.record(GameEvent::TurnStarted { seat: Seat::First, turn_number: 1 });

        let snapshot = state.history().clone();
        state.record(GameEvent::TurnStarted { seat: Seat::Second, turn_number: 2 });

        assert_eq!(snapshot.len(), 1);
        assert_eq!(state.history().len(), 2);
    }
}
