//! AI-vs-AI arena for comparing tiers over many seeded games.
//!
//! Each game draws its seed from a fork of the arena RNG, so a whole run
//! replays exactly from `ArenaConfig::seed`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ai::{HoldAt, Tier};
use crate::core::{GameConfig, GameRng, PigError, Result, Seat, SeatMap, DEFAULT_SEED, DEFAULT_TARGET_SCORE};
use crate::engine::GameBuilder;
use crate::stats::RollHistogram;

/// Configuration for an arena run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Number of games to play.
    pub games: u32,

    /// Tier seated in each seat.
    pub tiers: SeatMap<Tier>,

    /// Seed the per-game seeds are forked from.
    pub seed: u64,

    pub target_score: u32,

    /// Swap the opening seat every other game.
    pub alternate_first: bool,

    /// Turns after which a game is abandoned as unfinished.
    pub max_turns: u32,

    /// When set, both seats play `HoldAt(baseline)` inside their tier's
    /// roll budget and cap instead of the tiered policy.
    pub baseline: Option<u32>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: 100,
            tiers: SeatMap::from_pair(Tier::default(), Tier::default()),
            seed: DEFAULT_SEED,
            target_score: DEFAULT_TARGET_SCORE,
            alternate_first: true,
            max_turns: 1_000,
            baseline: None,
        }
    }
}

impl ArenaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Seat `first` against `second`.
    #[must_use]
    pub fn with_tiers(mut self, first: Tier, second: Tier) -> Self {
        self.tiers = SeatMap::from_pair(first, second);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = target;
        self
    }

    #[must_use]
    pub fn with_alternate_first(mut self, alternate: bool) -> Self {
        self.alternate_first = alternate;
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Play the fixed "hold at `threshold`" baseline.
    #[must_use]
    pub fn with_baseline(mut self, threshold: u32) -> Self {
        self.baseline = Some(threshold);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_turns == 0 {
            return Err(PigError::InvalidConfig("max_turns must be positive".into()));
        }
        if self.baseline == Some(0) {
            return Err(PigError::InvalidConfig("baseline threshold must be positive".into()));
        }
        GameConfig::new().with_target_score(self.target_score).validate()
    }

    /// Opening seat of game `index`.
    #[must_use]
    pub fn first_seat(&self, index: u32) -> Seat {
        if self.alternate_first && index % 2 == 1 {
            Seat::Second
        } else {
            Seat::First
        }
    }
}

/// Aggregate results of an arena run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaReport {
    pub games: u32,
    pub tiers: SeatMap<Tier>,
    pub wins: SeatMap<u32>,

    /// Games that hit `max_turns` without a winner.
    pub unfinished: u32,

    pub total_turns: u64,
    pub busts: u64,

    /// Rolls and banked turn totals across every game.
    pub histogram: RollHistogram,
}

impl ArenaReport {
    fn new(config: &ArenaConfig) -> Self {
        Self {
            games: 0,
            tiers: config.tiers.clone(),
            wins: SeatMap::with_value(0),
            unfinished: 0,
            total_turns: 0,
            busts: 0,
            histogram: RollHistogram::new(),
        }
    }

    /// Share of played games won by `seat`.
    #[must_use]
    pub fn win_rate(&self, seat: Seat) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.wins[seat]) / f64::from(self.games)
        }
    }

    #[must_use]
    pub fn average_turns(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_turns as f64 / f64::from(self.games)
        }
    }

    /// Share of resolved turns that ended in a bust.
    #[must_use]
    pub fn bust_rate(&self) -> f64 {
        if self.total_turns == 0 {
            0.0
        } else {
            self.busts as f64 / self.total_turns as f64
        }
    }
}

/// Runs AI-vs-AI games.
pub struct Arena {
    config: ArenaConfig,
}

impl Arena {
    pub fn new(config: ArenaConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Play every configured game.
    pub fn run(&self) -> Result<ArenaReport> {
        self.config.validate()?;

        let mut seeds = GameRng::new(self.config.seed);
        let mut report = ArenaReport::new(&self.config);

        for index in 0..self.config.games {
            let seed = seeds.fork().seed();
            self.play_one(index, seed, &mut report)?;
        }

        info!(
            games = report.games,
            first_wins = report.wins[Seat::First],
            second_wins = report.wins[Seat::Second],
            unfinished = report.unfinished,
            "arena finished: {} vs {}",
            self.config.tiers[Seat::First],
            self.config.tiers[Seat::Second]
        );
        Ok(report)
    }

    fn play_one(&self, index: u32, seed: u64, report: &mut ArenaReport) -> Result<()> {
        let config = GameConfig::new()
            .with_seed(seed)
            .with_target_score(self.config.target_score)
            .with_first_seat(self.config.first_seat(index));

        let mut builder = GameBuilder::new().config(config);
        for (seat, tier) in self.config.tiers.iter() {
            builder = builder.ai_tier_named(seat, format!("{tier} ({seat})"), *tier);
        }
        if let Some(threshold) = self.config.baseline {
            builder = builder.with_policy(HoldAt::new(threshold));
        }
        let mut game = builder.build()?;

        let mut turns = 0;
        while !game.is_over() && turns < self.config.max_turns {
            let turn = game.advance_ai_turn()?;
            turns += 1;
            if turn.is_bust() {
                report.busts += 1;
            }
        }

        report.games += 1;
        report.total_turns += u64::from(turns);
        report.histogram.merge(&RollHistogram::from_events(game.history()));
        match game.winner() {
            Some(seat) => report.wins[seat] += 1,
            None => report.unfinished += 1,
        }

        debug!(game = index, seed, turns, winner = ?game.winner(), "arena game done");
        Ok(())
    }
}
