//! Events emitted by the engine for display, statistics and score keeping.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Seat, SeatMap};

/// One die roll as seen by observers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollEvent {
    pub roller: Seat,
    pub value: u8,
    /// Turn points after this roll (0 on a bust).
    pub running_turn_points: u32,
    pub busted: bool,
}

/// Why a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnEnd {
    /// Holder chose to stop (human intent or policy decision).
    Held,
    /// AI roll budget or turn cap reached.
    ForcedHold,
    /// A 1 was rolled.
    Busted,
}

/// Full account of one resolved turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub seat: Seat,
    /// 1-based turn counter across the game.
    pub turn_number: u32,
    pub rolls: SmallVec<[u8; 12]>,
    pub end: TurnEnd,
    /// Points added to the running total (0 on a bust).
    pub banked: u32,
    /// Running total after the commit.
    pub total: u32,
    /// Set when this turn won the game.
    pub winner: Option<Seat>,
}

impl TurnReport {
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.end == TurnEnd::Busted
    }
}

/// Final result handed to score keepers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub winner: Seat,
    pub final_scores: SeatMap<u32>,
    pub names: SeatMap<String>,
}

impl GameSummary {
    /// The seat that lost.
    #[must_use]
    pub fn loser(&self) -> Seat {
        self.winner.other()
    }
}

/// Entry in a game's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    TurnStarted { seat: Seat, turn_number: u32 },
    Roll(RollEvent),
    TurnResolved(TurnReport),
    GameOver(GameSummary),
}
