//! In-memory win/loss records keyed by contestant name.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::engine::GameSummary;

/// Results of one contestant across games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    /// Sum of final scores across all games.
    pub total_score: u64,
    /// Highest final score in any one game.
    #[serde(default)]
    pub best_score: u32,
}

impl ScoreRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games_played)
        }
    }

    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_score as f64 / f64::from(self.games_played)
        }
    }
}

/// Records for every contestant seen so far.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    records: FxHashMap<String, ScoreRecord>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit both seats of a finished game.
    pub fn record(&mut self, summary: &GameSummary) {
        for (seat, name) in summary.names.iter() {
            let record = self
                .records
                .entry(name.clone())
                .or_insert_with(|| ScoreRecord::new(name.as_str()));

            record.games_played += 1;
            if seat == summary.winner {
                record.wins += 1;
            } else {
                record.losses += 1;
            }
            let score = summary.final_scores[seat];
            record.total_score += u64::from(score);
            record.best_score = record.best_score.max(score);
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ScoreRecord> {
        self.records.get(name)
    }

    /// Best `n` records: most wins, then best win rate, then best average
    /// score. Ties fall back to name order.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<&ScoreRecord> {
        let mut ranked: Vec<&ScoreRecord> = self.records.values().collect();
        ranked.sort_by(|a, b| {
            b.wins
                .cmp(&a.wins)
                .then_with(|| b.win_rate().total_cmp(&a.win_rate()))
                .then_with(|| b.average_score().total_cmp(&a.average_score()))
                .then_with(|| a.name.cmp(&b.name))
        });
        ranked.truncate(n);
        ranked
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
