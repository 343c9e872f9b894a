//! The priority rule table: signal predicates → target mode.

use arb_core::SignalSnapshot;

use crate::StrategyMode;

/// One entry in the priority table.
///
/// `enter` returning `true` means conditions are right to switch to `mode`.
/// `emergency` rules bypass both the lockout and the confirmation gate.
/// Predicates are plain function pointers, so the default table is fully
/// `'static` and rules stay trivially copyable and comparable in logs.
#[derive(Copy, Clone)]
pub struct StrategyRule {
    pub mode:      StrategyMode,
    pub enter:     fn(&SignalSnapshot) -> bool,
    pub emergency: bool,
}

impl StrategyRule {
    pub const fn new(mode: StrategyMode, enter: fn(&SignalSnapshot) -> bool) -> Self {
        Self { mode, enter, emergency: false }
    }

    pub const fn emergency(mode: StrategyMode, enter: fn(&SignalSnapshot) -> bool) -> Self {
        Self { mode, enter, emergency: true }
    }
}

/// The default priority table.  Rules are checked top to bottom; the first
/// match wins.  `Balanced` is last and always matches.
///
/// Threshold notes:
/// - Fortress: threat 0.65 ≈ enemy force closing on a home site;
///   strength_ratio < 0.65 = significantly outgunned; phase ≥ 0.30 because
///   before that there is no static defence worth turtling behind.
/// - Overwhelm: 1.75× force value past the opening — don't drag it out.
/// - BleedOut: losing the stand-up fight at mid-game or later; stop taking
///   fair trades.
/// - Attrition: being pushed but with a real economic lead; grind, don't
///   throw it away.
/// - PressAdvantage: winning the fight with momentum behind it.
/// - AllFronts: economically dominant and ahead on force; maximize the
///   number of simultaneous problems the opponent faces.
/// - Skirmish: our force is in their half and roughly even; poke and force
///   splits.
pub fn default_rules() -> Vec<StrategyRule> {
    vec![
        StrategyRule::emergency(StrategyMode::Fortress, |s| {
            s.threat_level >= 0.65 && s.strength_ratio < 0.65 && s.phase >= 0.30
        }),
        StrategyRule::new(StrategyMode::Overwhelm, |s| {
            s.strength_ratio >= 1.75 && s.phase >= 0.20
        }),
        StrategyRule::new(StrategyMode::BleedOut, |s| {
            s.strength_ratio < 0.80 && s.phase >= 0.25
        }),
        StrategyRule::new(StrategyMode::Attrition, |s| {
            s.threat_level >= 0.50 && s.economic_health >= 1.15 && s.phase >= 0.35
        }),
        StrategyRule::new(StrategyMode::PressAdvantage, |s| {
            s.strength_ratio >= 1.30 && s.momentum > 0.5 && s.phase >= 0.20
        }),
        StrategyRule::new(StrategyMode::AllFronts, |s| {
            s.economic_health >= 1.30 && s.strength_ratio >= 1.10 && s.phase >= 0.30
        }),
        StrategyRule::new(StrategyMode::Skirmish, |s| {
            s.initiative > 0.15 && s.strength_ratio >= 0.90 && s.phase >= 0.28
        }),
        StrategyRule::new(StrategyMode::Balanced, |_| true),
    ]
}
