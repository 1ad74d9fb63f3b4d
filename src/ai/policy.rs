//! Roll-or-hold decision policies for AI seats.
//!
//! Policies are trait-based so the engine can be driven by:
//! - `RiskPolicy`: the tiered, score-aware policy with fumbles
//! - `HoldAt`: the classic fixed "hold at N" baseline
//!
//! Both honor the same forced holds: a finished turn (bust, roll budget,
//! turn cap) and a turn whose points already reach the target.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::GameRng;
use crate::turn::TurnAccumulator;

use super::profile::DifficultyProfile;

/// Threshold points added (behind) or removed (ahead) per risk ordinal.
pub const DEFAULT_RISK_STEP: u32 = 1;

/// What the AI does after a roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Continue,
    Hold,
}

impl Decision {
    /// The opposite decision.
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Decision::Continue => Decision::Hold,
            Decision::Hold => Decision::Continue,
        }
    }
}

/// Everything a policy may look at.
#[derive(Clone, Copy, Debug)]
pub struct DecisionContext<'a> {
    pub profile: &'a DifficultyProfile,
    pub turn: &'a TurnAccumulator,
    pub my_total: u32,
    pub opponent_total: u32,
    pub target_score: u32,
}

impl DecisionContext<'_> {
    /// Holding now would reach the target.
    #[must_use]
    pub fn is_winning_hold(&self) -> bool {
        self.my_total.saturating_add(self.turn.points_accrued()) >= self.target_score
    }

    /// Holds no policy may override.
    #[must_use]
    pub fn is_forced_hold(&self) -> bool {
        self.turn.is_over(self.profile) || self.is_winning_hold()
    }
}

/// Policy for deciding whether an AI keeps rolling.
pub trait DecisionPolicy: Send + Sync {
    /// Decide after a roll. May draw from `rng`.
    fn decide(&self, ctx: &DecisionContext<'_>, rng: &mut GameRng) -> Decision;
}

/// Tiered, score-aware policy.
///
/// Starts from the profile's hold threshold and shifts it by
/// `risk_style.ordinal() * risk_step`: up when behind, down when ahead.
/// An unforced decision is inverted with the profile's fumble chance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskPolicy {
    pub risk_step: u32,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            risk_step: DEFAULT_RISK_STEP,
        }
    }
}

impl RiskPolicy {
    /// Create a policy with a custom risk step.
    pub fn with_risk_step(risk_step: u32) -> Self {
        Self { risk_step }
    }

    /// Hold threshold after adjusting for the score situation, clamped to
    /// `1..=turn_cap`.
    #[must_use]
    pub fn effective_threshold(
        &self,
        profile: &DifficultyProfile,
        my_total: u32,
        opponent_total: u32,
    ) -> u32 {
        let shift = profile.risk_style().ordinal().saturating_mul(self.risk_step);
        let base = profile.hold_threshold();

        let adjusted = match my_total.cmp(&opponent_total) {
            std::cmp::Ordering::Less => base.saturating_add(shift),
            std::cmp::Ordering::Greater => base.saturating_sub(shift),
            std::cmp::Ordering::Equal => base,
        };

        adjusted.clamp(1, profile.turn_cap())
    }
}

impl DecisionPolicy for RiskPolicy {
    fn decide(&self, ctx: &DecisionContext<'_>, rng: &mut GameRng) -> Decision {
        if ctx.is_forced_hold() {
            trace!(points = ctx.turn.points_accrued(), "forced hold");
            return Decision::Hold;
        }

        let threshold = self.effective_threshold(ctx.profile, ctx.my_total, ctx.opponent_total);
        let planned = if ctx.turn.points_accrued() >= threshold {
            Decision::Hold
        } else {
            Decision::Continue
        };

        let fumbled = rng.gen_bool(ctx.profile.fumble_chance());
        let decision = if fumbled { planned.inverted() } else { planned };

        trace!(
            points = ctx.turn.points_accrued(),
            threshold,
            ?planned,
            fumbled,
            ?decision,
            "policy decision"
        );
        decision
    }
}

/// Fixed-threshold baseline: keep rolling until the turn holds `threshold`
/// points. Never fumbles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldAt {
    pub threshold: u32,
}

impl HoldAt {
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }
}

impl DecisionPolicy for HoldAt {
    fn decide(&self, ctx: &DecisionContext<'_>, _rng: &mut GameRng) -> Decision {
        if ctx.is_forced_hold() || ctx.turn.points_accrued() >= self.threshold {
            Decision::Hold
        } else {
            Decision::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::profile::{RiskStyle, Tier};

    fn turn_from(faces: &[u8]) -> TurnAccumulator {
        let mut turn = TurnAccumulator::new();
        for &face in faces {
            turn.apply_roll(face);
        }
        turn
    }

    fn no_fumble(profile: &DifficultyProfile) -> DifficultyProfile {
        profile.with_fumble_chance(0.0).unwrap()
    }

    #[test]
    fn test_effective_threshold_shifts() {
        let policy = RiskPolicy::default();
        let veteran = Tier::Veteran.profile();

        assert_eq!(policy.effective_threshold(veteran, 10, 40), 24);
        assert_eq!(policy.effective_threshold(veteran, 40, 10), 16);
        assert_eq!(policy.effective_threshold(veteran, 30, 30), 20);
    }

    #[test]
    fn test_effective_threshold_clamped() {
        let policy = RiskPolicy::with_risk_step(10);
        let noob = Tier::Noob.profile();

        assert_eq!(policy.effective_threshold(noob, 0, 50), noob.turn_cap());
        assert_eq!(policy.effective_threshold(noob, 50, 0), 1);
    }

    #[test]
    fn test_aggressive_tiers_shift_further() {
        let policy = RiskPolicy::default();
        let shift = |tier: Tier| {
            let p = tier.profile();
            policy.effective_threshold(p, 0, 50) - p.hold_threshold()
        };

        assert!(shift(Tier::Noob) < shift(Tier::Challenger));
        assert!(shift(Tier::Challenger) < shift(Tier::Legendary));
    }

    #[test]
    fn test_below_threshold_continues_without_fumble() {
        let profile = no_fumble(Tier::Veteran.profile());
        let turn = turn_from(&[6, 6]);
        let ctx = DecisionContext {
            profile: &profile,
            turn: &turn,
            my_total: 0,
            opponent_total: 0,
            target_score: 100,
        };

        let mut rng = GameRng::new(1);
        assert_eq!(RiskPolicy::default().decide(&ctx, &mut rng), Decision::Continue);
    }

    #[test]
    fn test_at_threshold_holds_without_fumble() {
        let profile = no_fumble(Tier::Veteran.profile());
        let turn = turn_from(&[6, 6, 4, 4]);
        let ctx = DecisionContext {
            profile: &profile,
            turn: &turn,
            my_total: 0,
            opponent_total: 0,
            target_score: 100,
        };

        let mut rng = GameRng::new(1);
        assert_eq!(RiskPolicy::default().decide(&ctx, &mut rng), Decision::Hold);
    }

    #[test]
    fn test_forced_hold_consumes_no_randomness() {
        let profile = *Tier::Noob.profile();
        let turn = turn_from(&[3, 3]);
        let ctx = DecisionContext {
            profile: &profile,
            turn: &turn,
            my_total: 0,
            opponent_total: 0,
            target_score: 100,
        };

        let mut rng = GameRng::new(5);
        let before = rng.state();
        assert_eq!(RiskPolicy::default().decide(&ctx, &mut rng), Decision::Hold);
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn test_exact_target_is_winning_hold() {
        let profile = *Tier::Legendary.profile();
        let turn = turn_from(&[5]);
        let ctx = DecisionContext {
            profile: &profile,
            turn: &turn,
            my_total: 95,
            opponent_total: 0,
            target_score: 100,
        };

        assert!(ctx.is_winning_hold());
        let mut rng = GameRng::new(0);
        for _ in 0..100 {
            assert_eq!(RiskPolicy::default().decide(&ctx, &mut rng), Decision::Hold);
        }
    }

    #[test]
    fn test_certain_fumble_inverts() {
        let profile = DifficultyProfile::new(10, 10, 30, RiskStyle::Safe, 0.999_999).unwrap();
        let turn = turn_from(&[2]);
        let ctx = DecisionContext {
            profile: &profile,
            turn: &turn,
            my_total: 0,
            opponent_total: 0,
            target_score: 100,
        };

        let mut rng = GameRng::new(3);
        assert_eq!(RiskPolicy::default().decide(&ctx, &mut rng), Decision::Hold);
    }

    #[test]
    fn test_hold_at_baseline() {
        let profile = *Tier::Legendary.profile();
        let policy = HoldAt::new(10);
        let mut rng = GameRng::new(0);

        let short = turn_from(&[4, 4]);
        let long = turn_from(&[4, 6]);
        let short_ctx = DecisionContext {
            profile: &profile,
            turn: &short,
            my_total: 0,
            opponent_total: 0,
            target_score: 100,
        };
        let long_ctx = DecisionContext {
            turn: &long,
            ..short_ctx
        };

        assert_eq!(policy.decide(&short_ctx, &mut rng), Decision::Continue);
        assert_eq!(policy.decide(&long_ctx, &mut rng), Decision::Hold);
    }

    #[test]
    fn test_decision_inverted() {
        assert_eq!(Decision::Hold.inverted(), Decision::Continue);
        assert_eq!(Decision::Continue.inverted(), Decision::Hold);
    }
}
