//! Global posture modes and the bias profiles they publish.

use std::fmt;

/// The closed set of global postures.
///
/// Ordering in the rule table matters; the enum itself carries no priority.
/// `Balanced` is the catch-all default and the machine's starting mode.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyMode {
    /// Emergency turtle: enemy at the gates and badly outgunned.
    Fortress,
    /// Crushing force advantage — close the session out now.
    Overwhelm,
    /// Losing the stand-up fight; pivot to guerrilla bleed.
    BleedOut,
    /// Under pressure but economically ahead; hold and grind.
    Attrition,
    /// Force advantage plus momentum; press forward.
    PressAdvantage,
    /// Economic dominance; pressure from every direction at once.
    AllFronts,
    /// Initiative-based poking and harassment.
    Skirmish,
    /// Textbook macro default.
    #[default]
    Balanced,
}

impl StrategyMode {
    /// Postures that resist retreating and favor committed engagements.
    pub fn is_aggressive(self) -> bool {
        matches!(
            self,
            StrategyMode::Overwhelm | StrategyMode::PressAdvantage | StrategyMode::AllFronts
        )
    }

    /// Postures that prioritize survival over map presence.
    pub fn is_defensive(self) -> bool {
        matches!(self, StrategyMode::Fortress | StrategyMode::Attrition)
    }

    /// The additive bias bundle tactics consume when scoring.
    ///
    /// Values are confidence deltas in the same additive units tactics use;
    /// `aggression` is the 0..1 scalar forwarded into ability contexts.
    pub fn profile(self) -> ModeProfile {
        match self {
            StrategyMode::Fortress => ModeProfile {
                engage_bias:  -0.30,
                retreat_bias:  0.25,
                harass_bias:  -0.20,
                regroup_bias:  0.15,
                aggression:    0.10,
            },
            StrategyMode::Overwhelm => ModeProfile {
                engage_bias:   0.30,
                retreat_bias: -0.25,
                harass_bias:   0.00,
                regroup_bias: -0.05,
                aggression:    1.00,
            },
            StrategyMode::BleedOut => ModeProfile {
                engage_bias:  -0.15,
                retreat_bias:  0.10,
                harass_bias:   0.30,
                regroup_bias:  0.00,
                aggression:    0.45,
            },
            StrategyMode::Attrition => ModeProfile {
                engage_bias:  -0.10,
                retreat_bias:  0.15,
                harass_bias:   0.05,
                regroup_bias:  0.20,
                aggression:    0.30,
            },
            StrategyMode::PressAdvantage => ModeProfile {
                engage_bias:   0.20,
                retreat_bias: -0.15,
                harass_bias:   0.05,
                regroup_bias:  0.00,
                aggression:    0.80,
            },
            StrategyMode::AllFronts => ModeProfile {
                engage_bias:   0.15,
                retreat_bias: -0.10,
                harass_bias:   0.25,
                regroup_bias: -0.10,
                aggression:    0.75,
            },
            StrategyMode::Skirmish => ModeProfile {
                engage_bias:   0.05,
                retreat_bias:  0.00,
                harass_bias:   0.20,
                regroup_bias:  0.05,
                aggression:    0.60,
            },
            StrategyMode::Balanced => ModeProfile::default(),
        }
    }
}

impl fmt::Display for StrategyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StrategyMode::Fortress       => "fortress",
            StrategyMode::Overwhelm      => "overwhelm",
            StrategyMode::BleedOut       => "bleed-out",
            StrategyMode::Attrition      => "attrition",
            StrategyMode::PressAdvantage => "press-advantage",
            StrategyMode::AllFronts      => "all-fronts",
            StrategyMode::Skirmish       => "skirmish",
            StrategyMode::Balanced       => "balanced",
        };
        f.write_str(s)
    }
}

/// Additive scoring biases published by the active mode.
///
/// Tactics read these instead of matching on [`StrategyMode`], which keeps
/// the mode set and the tactic set independently extensible.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeProfile {
    /// Added to engage-style confidence scores.
    pub engage_bias: f32,
    /// Added to retreat-style confidence scores.
    pub retreat_bias: f32,
    /// Added to harassment confidence scores.
    pub harass_bias: f32,
    /// Added to rally/regroup confidence scores.
    pub regroup_bias: f32,
    /// 0.0 = full retreat, 1.0 = all-in; forwarded into ability contexts.
    pub aggression: f32,
}

impl Default for ModeProfile {
    fn default() -> Self {
        Self {
            engage_bias:  0.0,
            retreat_bias: 0.0,
            harass_bias:  0.0,
            regroup_bias: 0.0,
            aggression:   0.5,
        }
    }
}
