//! Difficulty tiers and their parameter sets.
//!
//! Each tier is a fixed, validated `DifficultyProfile`. The decision
//! algorithm is the same for all of them; only these numbers differ.
//!
//! | Tier       | max_rolls | hold_threshold | turn_cap | risk_style | fumble |
//! |------------|-----------|----------------|----------|------------|--------|
//! | Noob       | 2         | 8              | 12       | Safe       | 0.20   |
//! | Casual     | 4         | 12             | 18       | Mild       | 0.15   |
//! | Challenger | 6         | 16             | 22       | Balanced   | 0.10   |
//! | Veteran    | 8         | 20             | 26       | Moderate   | 0.07   |
//! | Elite      | 10        | 22             | 28       | High       | 0.04   |
//! | Legendary  | 12        | 24             | 32       | Extreme    | 0.02   |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{PigError, Result};

/// How far a tier bends its hold threshold with the score situation.
///
/// Ordered from most cautious to most aggressive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskStyle {
    Safe,
    Mild,
    Balanced,
    Moderate,
    High,
    Extreme,
}

impl RiskStyle {
    /// 1-based ordinal (Safe = 1 .. Extreme = 6).
    #[must_use]
    pub const fn ordinal(self) -> u32 {
        match self {
            RiskStyle::Safe => 1,
            RiskStyle::Mild => 2,
            RiskStyle::Balanced => 3,
            RiskStyle::Moderate => 4,
            RiskStyle::High => 5,
            RiskStyle::Extreme => 6,
        }
    }
}

/// Parameters that drive the AI for one difficulty level.
///
/// Fields are private: every profile in play went through `validate`,
/// including ones deserialized from JSON.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileFields")]
pub struct DifficultyProfile {
    /// Rolls attempted before a forced hold.
    max_rolls: u32,

    /// Turn points at which the policy leans toward holding.
    hold_threshold: u32,

    /// Hard ceiling on points accrued in one turn.
    turn_cap: u32,

    /// Score-aware threshold adjustment strength.
    risk_style: RiskStyle,

    /// Probability of inverting an unforced decision.
    fumble_chance: f64,
}

/// Unchecked wire form of `DifficultyProfile`.
#[derive(Deserialize)]
struct ProfileFields {
    max_rolls: u32,
    hold_threshold: u32,
    turn_cap: u32,
    risk_style: RiskStyle,
    fumble_chance: f64,
}

impl TryFrom<ProfileFields> for DifficultyProfile {
    type Error = PigError;

    fn try_from(fields: ProfileFields) -> Result<Self> {
        DifficultyProfile::new(
            fields.max_rolls,
            fields.hold_threshold,
            fields.turn_cap,
            fields.risk_style,
            fields.fumble_chance,
        )
    }
}

impl DifficultyProfile {
    /// Build a custom profile, checking its invariants.
    pub fn new(
        max_rolls: u32,
        hold_threshold: u32,
        turn_cap: u32,
        risk_style: RiskStyle,
        fumble_chance: f64,
    ) -> Result<Self> {
        let profile = Self {
            max_rolls,
            hold_threshold,
            turn_cap,
            risk_style,
            fumble_chance,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Same profile with a different fumble chance.
    pub fn with_fumble_chance(self, fumble_chance: f64) -> Result<Self> {
        Self::new(
            self.max_rolls,
            self.hold_threshold,
            self.turn_cap,
            self.risk_style,
            fumble_chance,
        )
    }

    /// Check `max_rolls > 0`, `0 < hold_threshold < turn_cap` and
    /// `0 <= fumble_chance < 1`.
    pub fn validate(&self) -> Result<()> {
        if self.max_rolls == 0 {
            return Err(PigError::InvalidProfile("max_rolls must be positive".into()));
        }
        if self.hold_threshold == 0 || self.hold_threshold >= self.turn_cap {
            return Err(PigError::InvalidProfile(format!(
                "hold_threshold {} must lie in 1..{}",
                self.hold_threshold, self.turn_cap
            )));
        }
        // Written so NaN fails too.
        if !(self.fumble_chance >= 0.0 && self.fumble_chance < 1.0) {
            return Err(PigError::InvalidProfile(format!(
                "fumble_chance {} must lie in [0, 1)",
                self.fumble_chance
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn max_rolls(&self) -> u32 {
        self.max_rolls
    }

    #[must_use]
    pub fn hold_threshold(&self) -> u32 {
        self.hold_threshold
    }

    #[must_use]
    pub fn turn_cap(&self) -> u32 {
        self.turn_cap
    }

    #[must_use]
    pub fn risk_style(&self) -> RiskStyle {
        self.risk_style
    }

    #[must_use]
    pub fn fumble_chance(&self) -> f64 {
        self.fumble_chance
    }
}

/// The six AI skill tiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Noob,
    #[default]
    Casual,
    Challenger,
    Veteran,
    Elite,
    Legendary,
}

static PROFILES: [DifficultyProfile; 6] = [
    preset(2, 8, 12, RiskStyle::Safe, 0.20),
    preset(4, 12, 18, RiskStyle::Mild, 0.15),
    preset(6, 16, 22, RiskStyle::Balanced, 0.10),
    preset(8, 20, 26, RiskStyle::Moderate, 0.07),
    preset(10, 22, 28, RiskStyle::High, 0.04),
    preset(12, 24, 32, RiskStyle::Extreme, 0.02),
];

const fn preset(
    max_rolls: u32,
    hold_threshold: u32,
    turn_cap: u32,
    risk_style: RiskStyle,
    fumble_chance: f64,
) -> DifficultyProfile {
    DifficultyProfile {
        max_rolls,
        hold_threshold,
        turn_cap,
        risk_style,
        fumble_chance,
    }
}

impl Tier {
    /// All tiers, weakest first.
    pub const ALL: [Tier; 6] = [
        Tier::Noob,
        Tier::Casual,
        Tier::Challenger,
        Tier::Veteran,
        Tier::Elite,
        Tier::Legendary,
    ];

    /// The shared, immutable profile for this tier.
    #[must_use]
    pub fn profile(self) -> &'static DifficultyProfile {
        &PROFILES[self as usize]
    }

    /// Lowercase tier name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Tier::Noob => "noob",
            Tier::Casual => "casual",
            Tier::Challenger => "challenger",
            Tier::Veteran => "veteran",
            Tier::Elite => "elite",
            Tier::Legendary => "legendary",
        }
    }

    /// One-line description for menus.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Tier::Noob => "Low skill, rolls only twice per turn.",
            Tier::Casual => "Slightly smarter, rolls four times.",
            Tier::Challenger => "Moderate AI, takes a few risks.",
            Tier::Veteran => "Experienced AI, rolls carefully.",
            Tier::Elite => "Tough AI, rolls aggressively but rarely busts.",
            Tier::Legendary => "Almost perfect AI, very risky but rewards high.",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = PigError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Tier::ALL
            .into_iter()
            .find(|tier| tier.name() == wanted)
            .ok_or_else(|| PigError::UnknownTier(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_table() {
        let expected = [
            (Tier::Noob, 2, 8, 12, RiskStyle::Safe),
            (Tier::Casual, 4, 12, 18, RiskStyle::Mild),
            (Tier::Challenger, 6, 16, 22, RiskStyle::Balanced),
            (Tier::Veteran, 8, 20, 26, RiskStyle::Moderate),
            (Tier::Elite, 10, 22, 28, RiskStyle::High),
            (Tier::Legendary, 12, 24, 32, RiskStyle::Extreme),
        ];

        for (tier, max_rolls, threshold, cap, style) in expected {
            let p = tier.profile();
            assert_eq!(p.max_rolls, max_rolls, "{tier}");
            assert_eq!(p.hold_threshold, threshold, "{tier}");
            assert_eq!(p.turn_cap, cap, "{tier}");
            assert_eq!(p.risk_style, style, "{tier}");
            assert!(p.hold_threshold < p.turn_cap);
        }
    }

    #[test]
    fn test_presets_pass_validation() {
        for tier in Tier::ALL {
            assert!(tier.profile().validate().is_ok(), "{tier}");
        }
    }

    #[test]
    fn test_fumble_shrinks_with_skill() {
        let chances: Vec<f64> = Tier::ALL.iter().map(|t| t.profile().fumble_chance).collect();
        assert!(chances.windows(2).all(|w| w[0] > w[1]));
        assert!(chances.iter().all(|&c| c > 0.0 && c < 1.0));
    }

    #[test]
    fn test_risk_ordering() {
        assert!(RiskStyle::Safe < RiskStyle::Mild);
        assert!(RiskStyle::High < RiskStyle::Extreme);
        assert_eq!(RiskStyle::Safe.ordinal(), 1);
        assert_eq!(RiskStyle::Extreme.ordinal(), 6);
    }

    #[test]
    fn test_profile_validation() {
        assert!(DifficultyProfile::new(3, 10, 20, RiskStyle::Mild, 0.1).is_ok());

        let cases = [
            DifficultyProfile::new(0, 10, 20, RiskStyle::Mild, 0.1),
            DifficultyProfile::new(3, 0, 20, RiskStyle::Mild, 0.1),
            DifficultyProfile::new(3, 20, 20, RiskStyle::Mild, 0.1),
            DifficultyProfile::new(3, 10, 20, RiskStyle::Mild, 1.0),
            DifficultyProfile::new(3, 10, 20, RiskStyle::Mild, -0.1),
            DifficultyProfile::new(3, 10, 20, RiskStyle::Mild, f64::NAN),
        ];
        for case in cases {
            assert!(matches!(case, Err(PigError::InvalidProfile(_))));
        }
    }

    #[test]
    fn test_tier_parse() {
        assert_eq!("Veteran".parse::<Tier>().unwrap(), Tier::Veteran);
        assert_eq!("  LEGENDARY ".parse::<Tier>().unwrap(), Tier::Legendary);
        assert_eq!(
            "grandmaster".parse::<Tier>(),
            Err(PigError::UnknownTier("grandmaster".into()))
        );
    }

    #[test]
    fn test_tier_metadata() {
        assert_eq!(Tier::default(), Tier::Casual);
        assert_eq!(Tier::Elite.to_string(), "elite");
        assert!(Tier::Noob.description().contains("twice"));
        assert_eq!(Tier::ALL.len(), 6);
    }

    #[test]
    fn test_deserialize_rejects_invalid_profile() {
        let json = r#"{"max_rolls":5,"hold_threshold":10,"turn_cap":20,"risk_style":"Mild","fumble_chance":1.5}"#;
        let err = serde_json::from_str::<DifficultyProfile>(json).unwrap_err();
        assert!(err.to_string().contains("invalid difficulty profile"), "{err}");

        let json = r#"{"max_rolls":5,"hold_threshold":10,"turn_cap":0,"risk_style":"Mild","fumble_chance":0.1}"#;
        assert!(serde_json::from_str::<DifficultyProfile>(json).is_err());

        let fields = ProfileFields {
            max_rolls: 5,
            hold_threshold: 10,
            turn_cap: 20,
            risk_style: RiskStyle::Mild,
            fumble_chance: 1.5,
        };
        assert!(matches!(
            DifficultyProfile::try_from(fields),
            Err(PigError::InvalidProfile(_))
        ));
    }

    #[test]
    fn test_with_fumble_chance() {
        let calm = Tier::Elite.profile().with_fumble_chance(0.0).unwrap();
        assert_eq!(calm.fumble_chance(), 0.0);
        assert_eq!(calm.turn_cap(), Tier::Elite.profile().turn_cap());
        assert!(Tier::Elite.profile().with_fumble_chance(2.0).is_err());
    }

    #[test]
    fn test_profile_serde() {
        let profile = *Tier::Challenger.profile();
        let json = serde_json::to_string(&profile).unwrap();
        let back: DifficultyProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, back);
    }
}
