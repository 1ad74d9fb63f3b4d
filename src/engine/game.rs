//! The game engine: owns state, dice, policy and RNG, and drives turns.

use std::str::FromStr;

use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::ai::{Decision, DecisionContext, DecisionPolicy, DifficultyProfile, RiskPolicy, Tier};
use crate::core::{GameConfig, GameRng, GameRngState, PigError, Result, Seat, SeatMap};
use crate::dice::{DiceSource, Die};
use crate::turn::TurnAccumulator;

use super::event::{GameEvent, GameSummary, RollEvent, TurnEnd, TurnReport};
use super::machine::{Phase, Transition};
use super::state::{Contestant, ContestantKind, GameState};

/// Name given to a human seat when none is supplied.
pub const DEFAULT_HUMAN_NAME: &str = "Player";

/// Name of the AI seat in `start_game`, and the stem of `ai_tier` names.
pub const COMPUTER_NAME: &str = "Computer";

/// What a human asks for on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    Roll,
    Hold,
}

impl FromStr for Intent {
    type Err = PigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "roll" | "r" => Ok(Intent::Roll),
            "hold" | "h" => Ok(Intent::Hold),
            _ => Err(PigError::InvalidIntent(s.trim().to_string())),
        }
    }
}

/// Result of one human intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HumanStep {
    /// Rolled without busting; the turn goes on.
    Rolled(RollEvent),
    /// The turn was resolved by a bust or a hold.
    TurnOver(TurnReport),
}

/// Builder for creating a `Game`.
///
/// Defaults to a human "Player" in the first seat against a Casual
/// "Computer" in the second.
pub struct GameBuilder {
    config: GameConfig,
    contestants: SeatMap<Contestant>,
    starting_totals: SeatMap<u32>,
    die: Option<Box<dyn DiceSource>>,
    policy: Option<Box<dyn DecisionPolicy>>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            contestants: SeatMap::from_pair(
                Contestant::new(DEFAULT_HUMAN_NAME, ContestantKind::Human),
                Contestant::new(COMPUTER_NAME, ContestantKind::tier(Tier::default())),
            ),
            starting_totals: SeatMap::with_value(0),
            die: None,
            policy: None,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    #[must_use]
    pub fn target_score(mut self, target: u32) -> Self {
        self.config.target_score = target;
        self
    }

    #[must_use]
    pub fn first_seat(mut self, seat: Seat) -> Self {
        self.config.first_seat = seat;
        self
    }

    /// Seat a human.
    #[must_use]
    pub fn human(mut self, seat: Seat, name: impl Into<String>) -> Self {
        self.contestants[seat] = Contestant::new(name, ContestantKind::Human);
        self
    }

    /// Seat an AI with an explicit profile.
    #[must_use]
    pub fn ai(mut self, seat: Seat, name: impl Into<String>, profile: DifficultyProfile) -> Self {
        self.contestants[seat] = Contestant::new(name, ContestantKind::custom(profile));
        self
    }

    /// Seat a preset tier named after its seat, e.g. "Computer (Seat 2)".
    #[must_use]
    pub fn ai_tier(self, seat: Seat, tier: Tier) -> Self {
        self.ai_tier_named(seat, format!("{COMPUTER_NAME} ({seat})"), tier)
    }

    /// Seat a preset tier under an explicit name.
    #[must_use]
    pub fn ai_tier_named(mut self, seat: Seat, name: impl Into<String>, tier: Tier) -> Self {
        self.contestants[seat] = Contestant::new(name, ContestantKind::tier(tier));
        self
    }

    /// Give a seat a head start. Must stay below the target.
    #[must_use]
    pub fn starting_total(mut self, seat: Seat, points: u32) -> Self {
        self.starting_totals[seat] = points;
        self
    }

    /// Replace the fair d6.
    #[must_use]
    pub fn with_die<D: DiceSource + 'static>(mut self, die: D) -> Self {
        self.die = Some(Box::new(die));
        self
    }

    /// Replace the default `RiskPolicy` used by AI seats.
    #[must_use]
    pub fn with_policy<P: DecisionPolicy + 'static>(mut self, policy: P) -> Self {
        self.policy = Some(Box::new(policy));
        self
    }

    /// Validate everything and create the game.
    pub fn build(self) -> Result<Game> {
        self.config.validate()?;

        let mut contestants = self.contestants;
        for (seat, contestant) in contestants.iter_mut() {
            let name = contestant.name.trim();
            if name.is_empty() {
                return Err(PigError::InvalidConfig(format!("{seat} needs a name")));
            }
            contestant.name = name.to_string();

            let head_start = self.starting_totals[seat];
            if head_start >= self.config.target_score {
                return Err(PigError::InvalidConfig(format!(
                    "{seat} starts at {head_start}, at or above the target {}",
                    self.config.target_score
                )));
            }
            contestant.set_total(head_start);
        }

        // Names key the scoreboard.
        if contestants[Seat::First].name == contestants[Seat::Second].name {
            return Err(PigError::InvalidConfig(format!(
                "both seats are named {:?}",
                contestants[Seat::First].name
            )));
        }

        info!(
            seed = self.config.seed,
            target = self.config.target_score,
            first = %self.config.first_seat,
            "game started: {} vs {}",
            contestants[Seat::First].name,
            contestants[Seat::Second].name
        );

        Ok(Game {
            state: GameState::new(contestants, self.config.first_seat, self.config.target_score),
            rng: GameRng::new(self.config.seed),
            config: self.config,
            starting_totals: self.starting_totals,
            die: self.die.unwrap_or_else(|| Box::new(Die::d6())),
            policy: self.policy.unwrap_or_else(|| Box::new(RiskPolicy::default())),
        })
    }
}

/// Start a human-vs-AI game.
///
/// The human takes the first seat (named `human`, or "Player"), the AI the
/// second seat.
pub fn start_game(human: Option<&str>, tier: Tier, config: GameConfig) -> Result<Game> {
    GameBuilder::new()
        .config(config)
        .human(Seat::First, human.unwrap_or(DEFAULT_HUMAN_NAME))
        .ai_tier_named(Seat::Second, COMPUTER_NAME, tier)
        .build()
}

/// A game in progress. Sole owner and mutator of its `GameState`.
pub struct Game {
    state: GameState,
    config: GameConfig,
    starting_totals: SeatMap<u32>,
    rng: GameRng,
    die: Box<dyn DiceSource>,
    policy: Box<dyn DecisionPolicy>,
}

impl Game {
    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn active_seat(&self) -> Seat {
        self.state.active
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.phase.is_terminal()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.state.winner
    }

    #[must_use]
    pub fn totals(&self) -> SeatMap<u32> {
        self.state.totals()
    }

    #[must_use]
    pub fn contestant(&self, seat: Seat) -> &Contestant {
        self.state.contestant(seat)
    }

    /// Whether the active seat waits on human input.
    #[must_use]
    pub fn awaits_human(&self) -> bool {
        !self.is_over() && self.state.contestants[self.state.active].kind.is_human()
    }

    #[must_use]
    pub fn history(&self) -> &im::Vector<GameEvent> {
        &self.state.history
    }

    /// Winner and final scores, once the game is over.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        let winner = self.state.winner?;
        Some(GameSummary {
            winner,
            final_scores: self.state.totals(),
            names: self.state.contestants.map(|c| c.name.clone()),
        })
    }

    /// Snapshot of the RNG position.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Call surfaces ===

    /// Apply one human intent for the active seat.
    pub fn submit_human_intent(&mut self, intent: Intent) -> Result<HumanStep> {
        self.ensure_playable()?;
        let seat = self.state.active;
        if !self.state.contestants[seat].kind.is_human() {
            return Err(PigError::NotYourTurn { seat });
        }

        self.begin_turn_if_needed()?;
        match intent {
            Intent::Roll => {
                let event = self.roll_once()?;
                if event.busted {
                    Ok(HumanStep::TurnOver(self.finish_turn(TurnEnd::Busted)?))
                } else {
                    Ok(HumanStep::Rolled(event))
                }
            }
            Intent::Hold => Ok(HumanStep::TurnOver(self.finish_turn(TurnEnd::Held)?)),
        }
    }

    /// Play the active AI seat's whole turn.
    pub fn advance_ai_turn(&mut self) -> Result<TurnReport> {
        self.ensure_playable()?;
        let seat = self.state.active;
        let Some(profile) = self.state.contestants[seat].kind.profile().copied() else {
            return Err(PigError::NotYourTurn { seat });
        };

        self.begin_turn_if_needed()?;
        loop {
            let event = self.roll_once()?;
            if event.busted {
                return self.finish_turn(TurnEnd::Busted);
            }

            let turn = self.state.turn.as_ref().ok_or(PigError::IllegalTransition {
                phase: self.state.phase,
                transition: Transition::Hold,
            })?;
            let ctx = DecisionContext {
                profile: &profile,
                turn,
                my_total: self.state.contestants[seat].total(),
                opponent_total: self.state.contestants[seat.other()].total(),
                target_score: self.state.target_score,
            };
            let decision = self.policy.decide(&ctx, &mut self.rng);

            // The roll budget and cap bind whatever the policy says.
            if turn.is_over(&profile) {
                return self.finish_turn(TurnEnd::ForcedHold);
            }
            if decision == Decision::Hold {
                return self.finish_turn(TurnEnd::Held);
            }
        }
    }

    /// Reset totals to their starting values and replay from the first seat.
    ///
    /// Contestants, dice, policy and the RNG stream carry over.
    pub fn restart(&mut self) {
        for (seat, contestant) in self.state.contestants.iter_mut() {
            contestant.set_total(self.starting_totals[seat]);
        }
        self.state.active = self.config.first_seat;
        self.state.turn = None;
        self.state.phase = Phase::AwaitingTurn;
        self.state.winner = None;
        self.state.turn_number = 0;
        self.state.history.clear();
        info!("game restarted");
    }

    // === Transitions ===

    fn ensure_playable(&self) -> Result<()> {
        if self.is_over() {
            return Err(PigError::GameFinished);
        }
        Ok(())
    }

    fn apply(&mut self, transition: Transition) -> Result<()> {
        let phase = self.state.phase;
        self.state.phase = phase
            .next(transition)
            .ok_or(PigError::IllegalTransition { phase, transition })?;
        Ok(())
    }

    fn begin_turn_if_needed(&mut self) -> Result<()> {
        if self.state.phase == Phase::TurnInProgress {
            return Ok(());
        }

        self.apply(Transition::BeginTurn)?;
        self.state.turn = Some(TurnAccumulator::new());
        self.state.turn_number += 1;

        let seat = self.state.active;
        let turn_number = self.state.turn_number;
        trace!(%seat, turn_number, "turn started");
        self.state.record(GameEvent::TurnStarted { seat, turn_number });
        Ok(())
    }

    fn roll_once(&mut self) -> Result<RollEvent> {
        let value = self.die.roll(&mut self.rng);
        let turn = self.state.turn.get_or_insert_with(TurnAccumulator::new);
        let busted = turn.apply_roll(value);
        let running_turn_points = turn.points_accrued();

        self.apply(Transition::Roll { busted })?;

        let event = RollEvent {
            roller: self.state.active,
            value,
            running_turn_points,
            busted,
        };
        trace!(roller = %event.roller, value, running_turn_points, busted, "roll");
        self.state.record(GameEvent::Roll(event));
        Ok(event)
    }

    /// Resolve the active turn and commit its points.
    fn finish_turn(&mut self, end: TurnEnd) -> Result<TurnReport> {
        if end != TurnEnd::Busted {
            self.apply(Transition::Hold)?;
        }

        let turn = self.state.turn.take().unwrap_or_default();
        let seat = self.state.active;
        let banked = turn.bankable();

        let contestant = &mut self.state.contestants[seat];
        contestant.bank(banked);
        let total = contestant.total();
        let reached_target = total >= self.state.target_score;

        self.apply(Transition::Commit { reached_target })?;

        let winner = if reached_target {
            self.state.winner = Some(seat);
            Some(seat)
        } else {
            self.state.active = seat.other();
            None
        };

        let report = TurnReport {
            seat,
            turn_number: self.state.turn_number,
            rolls: SmallVec::from_slice(turn.rolls()),
            end,
            banked,
            total,
            winner,
        };
        debug!(%seat, ?end, banked, total, rolls = turn.rolls_taken(), "turn resolved");
        self.state.record(GameEvent::TurnResolved(report.clone()));

        if let Some(summary) = self.summary() {
            info!(
                winner = %summary.winner,
                first = summary.final_scores[Seat::First],
                second = summary.final_scores[Seat::Second],
                "game over: {} wins",
                summary.names[summary.winner]
            );
            self.state.record(GameEvent::GameOver(summary));
        }

        Ok(report)
    }
}
