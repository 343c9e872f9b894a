//! Unit tests for arb-strategy.

use arb_core::{SignalSnapshot, Tick};

use crate::{
    MachineConfig, StrategyMachine, StrategyMode, StrategyRule, SwitchReason, default_rules,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Evaluate-every-tick config with a short lockout so tests stay readable.
fn fast_config() -> MachineConfig {
    MachineConfig {
        eval_cadence_ticks: 1,
        lockout_ticks:      10,
        confirmation_count: 3,
    }
}

fn machine() -> StrategyMachine {
    StrategyMachine::with_rules(default_rules(), fast_config())
}

fn signals_for_overwhelm() -> SignalSnapshot {
    SignalSnapshot {
        strength_ratio: 2.0,
        phase:          0.5,
        ..Default::default()
    }
}

fn signals_for_fortress() -> SignalSnapshot {
    SignalSnapshot {
        threat_level:   0.8,
        strength_ratio: 0.4,
        phase:          0.5,
        ..Default::default()
    }
}

// ── Rule table ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rule_tests {
    use super::*;

    #[test]
    fn balanced_is_catch_all() {
        let rules = default_rules();
        let last = rules.last().unwrap();
        assert_eq!(last.mode, StrategyMode::Balanced);
        assert!((last.enter)(&SignalSnapshot::default()));
    }

    #[test]
    fn first_match_wins() {
        // Signals satisfying both Overwhelm and PressAdvantage: Overwhelm is
        // higher in the table and must win.
        let s = SignalSnapshot {
            strength_ratio: 2.0,
            momentum:       1.0,
            phase:          0.5,
            ..Default::default()
        };
        let mut m = machine();
        let switch = drive_to_switch(&mut m, &s, Tick(20));
        assert_eq!(switch.to, StrategyMode::Overwhelm);
    }

    #[test]
    fn only_fortress_is_emergency() {
        let rules = default_rules();
        for rule in &rules {
            assert_eq!(rule.emergency, rule.mode == StrategyMode::Fortress);
        }
    }

    /// Drive `m` with constant signals from `start` until a switch commits.
    fn drive_to_switch(
        m:       &mut StrategyMachine,
        signals: &SignalSnapshot,
        start:   Tick,
    ) -> crate::Switch {
        for i in 0..16 {
            if let Some(sw) = m.update(start + i, signals) {
                return sw;
            }
        }
        panic!("no switch committed within 16 evaluations");
    }
}

// ── Mode profiles ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod profile_tests {
    use super::*;

    #[test]
    fn balanced_profile_is_neutral() {
        let p = StrategyMode::Balanced.profile();
        assert_eq!(p.engage_bias, 0.0);
        assert_eq!(p.retreat_bias, 0.0);
        assert_eq!(p.aggression, 0.5);
    }

    #[test]
    fn fortress_profile_leans_defensive() {
        let p = StrategyMode::Fortress.profile();
        assert!(p.engage_bias < 0.0);
        assert!(p.retreat_bias > 0.0);
        assert!(p.aggression < 0.5);
    }

    #[test]
    fn aggressive_modes_boost_engagement() {
        for mode in [StrategyMode::Overwhelm, StrategyMode::PressAdvantage] {
            assert!(mode.is_aggressive());
            assert!(mode.profile().engage_bias > 0.0, "{mode} should favor engaging");
        }
    }
}

// ── Hysteresis ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod machine_tests {
    use super::*;

    #[test]
    fn starts_balanced() {
        assert_eq!(machine().current(), StrategyMode::Balanced);
    }

    #[test]
    fn same_mode_resets_candidate() {
        let mut m = machine();
        let overwhelm = signals_for_overwhelm();
        let neutral = SignalSnapshot::default();

        // Two agreeing evaluations, then signals revert to the current mode.
        assert!(m.update(Tick(20), &overwhelm).is_none());
        assert!(m.update(Tick(21), &overwhelm).is_none());
        assert!(m.update(Tick(22), &neutral).is_none());

        // Streak was reset: two more agreements are not enough.
        assert!(m.update(Tick(23), &overwhelm).is_none());
        assert!(m.update(Tick(24), &overwhelm).is_none());
        // Third consecutive agreement commits.
        let sw = m.update(Tick(25), &overwhelm).expect("switch should commit");
        assert_eq!(sw.to, StrategyMode::Overwhelm);
        assert_eq!(sw.reason, SwitchReason::Confirmed);
    }

    #[test]
    fn confirmation_commits_exactly_once() {
        let mut m = machine();
        let s = signals_for_overwhelm();

        assert!(m.update(Tick(20), &s).is_none());
        assert!(m.update(Tick(21), &s).is_none());
        let sw = m.update(Tick(22), &s).expect("third agreement commits");
        assert_eq!(sw.from, StrategyMode::Balanced);
        assert_eq!(sw.to, StrategyMode::Overwhelm);

        // Further agreeing evaluations are no-ops: target == current.
        assert!(m.update(Tick(23), &s).is_none());
        assert!(m.update(Tick(24), &s).is_none());
        assert_eq!(m.current(), StrategyMode::Overwhelm);
    }

    #[test]
    fn candidate_reset_on_divergence() {
        let mut m = machine();
        let overwhelm = signals_for_overwhelm();
        let skirmish = SignalSnapshot {
            initiative:     0.3,
            strength_ratio: 1.0,
            phase:          0.4,
            ..Default::default()
        };

        // Overwhelm at evaluations 1 and 2, Skirmish at 3: streak resets.
        assert!(m.update(Tick(20), &overwhelm).is_none());
        assert!(m.update(Tick(21), &overwhelm).is_none());
        assert!(m.update(Tick(22), &skirmish).is_none());
        assert!(m.candidate_summary().contains("skirmish"));
        assert_eq!(m.current(), StrategyMode::Balanced);
    }

    #[test]
    fn lockout_blocks_candidate_tracking() {
        let mut m = machine();
        let overwhelm = signals_for_overwhelm();

        // Commit a switch at T22 (lockout_ticks = 10 runs until T32).
        m.update(Tick(20), &overwhelm);
        m.update(Tick(21), &overwhelm);
        assert!(m.update(Tick(22), &overwhelm).is_some());

        // New target appears immediately; within lockout nothing accumulates.
        let bleed = SignalSnapshot {
            strength_ratio: 0.5,
            phase:          0.5,
            ..Default::default()
        };
        for t in 23..32 {
            assert!(m.update(Tick(t), &bleed).is_none());
        }
        assert_eq!(m.candidate_summary(), "no candidate");

        // After the lockout the confirmation gate still applies.
        assert!(m.update(Tick(32), &bleed).is_none());
        assert!(m.update(Tick(33), &bleed).is_none());
        let sw = m.update(Tick(34), &bleed).expect("post-lockout switch");
        assert_eq!(sw.to, StrategyMode::BleedOut);
    }

    #[test]
    fn emergency_bypasses_lockout_and_confirmation() {
        let mut m = machine();
        let overwhelm = signals_for_overwhelm();

        // Put the machine deep inside a fresh lockout.
        m.update(Tick(20), &overwhelm);
        m.update(Tick(21), &overwhelm);
        assert!(m.update(Tick(22), &overwhelm).is_some());

        // Fortress signals on the very next evaluation: immediate switch.
        let sw = m
            .update(Tick(23), &signals_for_fortress())
            .expect("emergency switches on first observation");
        assert_eq!(sw.to, StrategyMode::Fortress);
        assert_eq!(sw.reason, SwitchReason::Emergency);
        assert_eq!(m.current(), StrategyMode::Fortress);
        // Hysteresis state fully reset.
        assert_eq!(m.candidate_summary(), "no candidate");
    }

    #[test]
    fn emergency_resets_lockout_clock() {
        let mut m = machine();

        let sw = m.update(Tick(5), &signals_for_fortress()).unwrap();
        assert_eq!(sw.reason, SwitchReason::Emergency);

        // A non-emergency target within the new lockout window is ignored.
        let overwhelm = signals_for_overwhelm();
        for t in 6..15 {
            assert!(m.update(Tick(t), &overwhelm).is_none());
        }
        // Once clear of the lockout, confirmation proceeds normally.
        assert!(m.update(Tick(15), &overwhelm).is_none());
        assert!(m.update(Tick(16), &overwhelm).is_none());
        assert!(m.update(Tick(17), &overwhelm).is_some());
    }

    #[test]
    fn cadence_gates_evaluation() {
        let cfg = MachineConfig {
            eval_cadence_ticks: 22,
            lockout_ticks:      0,
            confirmation_count: 1,
        };
        let mut m = StrategyMachine::with_rules(default_rules(), cfg);
        let s = signals_for_overwhelm();

        // Off-cadence ticks never evaluate, whatever the signals say.
        assert!(m.update(Tick(21), &s).is_none());
        assert!(m.update(Tick(23), &s).is_none());
        assert_eq!(m.current(), StrategyMode::Balanced);

        // On-cadence tick evaluates (confirmation_count 1 commits at once).
        assert!(m.update(Tick(44), &s).is_some());
    }

    #[test]
    fn config_rejects_zero_confirmation() {
        let cfg = MachineConfig { confirmation_count: 0, ..fast_config() };
        assert!(cfg.validate().is_err());
        assert!(fast_config().validate().is_ok());
    }
}
