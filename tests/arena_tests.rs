//! Arena integration tests: many seeded AI-vs-AI games.

use proptest::prelude::*;

use pig_dice::ai::Tier;
use pig_dice::arena::{Arena, ArenaConfig, ArenaReport};
use pig_dice::core::{GameConfig, Seat};
use pig_dice::engine::{GameBuilder, GameEvent};

// =============================================================================
// Tier Comparison Tests
// =============================================================================

#[test]
fn test_legendary_beats_noob() {
    let report = Arena::new(
        ArenaConfig::new()
            .with_games(200)
            .with_tiers(Tier::Noob, Tier::Legendary)
            .with_seed(2024),
    )
    .run()
    .unwrap();

    assert_eq!(report.unfinished, 0);
    assert!(
        report.wins[Seat::Second] > report.wins[Seat::First] * 2,
        "legendary {} vs noob {}",
        report.wins[Seat::Second],
        report.wins[Seat::First]
    );
}

#[test]
fn test_noob_turns_are_short() {
    let report = Arena::new(
        ArenaConfig::new()
            .with_games(20)
            .with_tiers(Tier::Noob, Tier::Noob),
    )
    .run()
    .unwrap();

    // Two rolls at most per turn.
    assert!(report.histogram.total_rolls() <= report.total_turns * 2);
    for (banked, _) in report.histogram.turn_totals() {
        assert!(banked <= 12, "noob banked {banked}");
    }
}

#[test]
fn test_histogram_faces_roughly_uniform() {
    let report = Arena::new(ArenaConfig::new().with_games(100).with_seed(5))
        .run()
        .unwrap();

    for face in 1..=6 {
        let freq = report.histogram.frequency(face);
        assert!((freq - 1.0 / 6.0).abs() < 0.03, "face {face}: {freq}");
    }
}

// =============================================================================
// Invariant Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    // Totals only grow, by exactly what each turn banked; busts bank nothing
    #[test]
    fn totals_monotonic_across_seeds(
        seed in any::<u64>(),
        first in prop::sample::select(Tier::ALL.to_vec()),
        second in prop::sample::select(Tier::ALL.to_vec()),
    ) {
        let mut game = GameBuilder::new()
            .config(GameConfig::new().with_seed(seed))
            .ai_tier(Seat::First, first)
            .ai_tier(Seat::Second, second)
            .build()
            .unwrap();

        while !game.is_over() {
            game.advance_ai_turn().unwrap();
        }

        let mut totals = [0u32; 2];
        for event in game.history() {
            if let GameEvent::TurnResolved(report) = event {
                let slot = report.seat.index();
                prop_assert!(report.total >= totals[slot]);
                prop_assert_eq!(report.total, totals[slot] + report.banked);
                if report.is_bust() {
                    prop_assert_eq!(report.banked, 0);
                }
                totals[slot] = report.total;
            }
        }
    }
}

#[test]
fn test_baseline_arena_completes() {
    let report = Arena::new(
        ArenaConfig::new()
            .with_games(20)
            .with_tiers(Tier::Veteran, Tier::Veteran)
            .with_baseline(20),
    )
    .run()
    .unwrap();

    assert_eq!(report.unfinished, 0);
    assert_eq!(report.wins[Seat::First] + report.wins[Seat::Second], 20);
}

#[test]
fn test_report_serde_roundtrip() {
    let report = Arena::new(ArenaConfig::new().with_games(3)).run().unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let back: ArenaReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report, back);
}
