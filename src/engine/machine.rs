//! Turn/game state machine.
//!
//! The whole game is four phases and one transition function. Bust
//! mid-turn, hold, and winning by crossing the target are each a single
//! edge in `Phase::next`.
//!
//! ```text
//! AwaitingTurn --BeginTurn--> TurnInProgress --Roll{busted:false}--> TurnInProgress
//!                             TurnInProgress --Roll{busted:true}---> TurnResolved
//!                             TurnInProgress --Hold---------------> TurnResolved
//! TurnResolved --Commit{reached_target:false}--> AwaitingTurn
//! TurnResolved --Commit{reached_target:true}---> GameOver
//! ```

use serde::{Deserialize, Serialize};

/// Where the game currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    AwaitingTurn,
    TurnInProgress,
    TurnResolved,
    GameOver,
}

/// A step the engine wants to take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// Open a fresh turn for the active seat.
    BeginTurn,
    /// A die face was applied to the turn.
    Roll { busted: bool },
    /// The active seat stops rolling (chosen or forced).
    Hold,
    /// The resolved turn's points were committed.
    Commit { reached_target: bool },
}

impl Phase {
    /// Apply a transition. `None` if this phase has no such edge.
    #[must_use]
    pub fn next(self, transition: Transition) -> Option<Phase> {
        use Phase::*;
        use Transition::*;

        match (self, transition) {
            (AwaitingTurn, BeginTurn) => Some(TurnInProgress),
            (TurnInProgress, Roll { busted: false }) => Some(TurnInProgress),
            (TurnInProgress, Roll { busted: true }) => Some(TurnResolved),
            (TurnInProgress, Hold) => Some(TurnResolved),
            (TurnResolved, Commit { reached_target: true }) => Some(GameOver),
            (TurnResolved, Commit { reached_target: false }) => Some(AwaitingTurn),
            _ => None,
        }
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Phase::GameOver
    }
}
