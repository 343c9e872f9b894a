//! `StrategyMachine` — rule-table evaluation with two-part hysteresis.

use arb_core::{SignalSnapshot, Tick};

use crate::{StrategyError, StrategyMode, StrategyResult, StrategyRule, default_rules};

// ── Config ────────────────────────────────────────────────────────────────────

/// Tuning for the machine's cadence and anti-thrash gates.
///
/// Defaults: evaluate every 22 ticks, hold
/// each committed mode for at least 1344 ticks, and require 3 consecutive
/// agreeing evaluations before a non-emergency switch commits.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MachineConfig {
    /// Evaluate the rule table every N ticks.
    pub eval_cadence_ticks: u64,
    /// Hard cooldown after any switch; emergency rules bypass it.
    pub lockout_ticks: u64,
    /// Consecutive agreeing evaluations required to commit a switch.
    pub confirmation_count: u32,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            eval_cadence_ticks: 22,
            lockout_ticks:      1344,
            confirmation_count: 3,
        }
    }
}

impl MachineConfig {
    pub fn validate(&self) -> StrategyResult<()> {
        if self.confirmation_count == 0 {
            return Err(StrategyError::Config(
                "confirmation_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

// ── Switch event ──────────────────────────────────────────────────────────────

/// Why a committed switch happened.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SwitchReason {
    /// An emergency rule matched; lockout and confirmation were bypassed.
    Emergency,
    /// The candidate survived the confirmation gate.
    Confirmed,
}

/// A committed mode change, returned to the host for logging/announcement.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Switch {
    pub from:   StrategyMode,
    pub to:     StrategyMode,
    pub tick:   Tick,
    pub reason: SwitchReason,
}

// ── Machine ───────────────────────────────────────────────────────────────────

/// Heuristic-driven posture selection with anti-thrash protection.
///
/// Owned by the host's engine and mutated only through [`update`].  The
/// machine never acts on the world itself; it returns a [`Switch`] event
/// when one commits and the caller propagates the new mode.
///
/// [`update`]: StrategyMachine::update
pub struct StrategyMachine {
    rules:  Vec<StrategyRule>,
    config: MachineConfig,

    mode:             StrategyMode,
    last_switch_tick: Tick,
    candidate:        Option<StrategyMode>,
    candidate_streak: u32,
}

impl StrategyMachine {
    /// Machine with the default rule table and tuning.
    pub fn new() -> Self {
        Self::with_rules(default_rules(), MachineConfig::default())
    }

    /// Machine with a custom table and tuning.  The table should end with a
    /// catch-all rule; if nothing matches, the machine falls back to
    /// `Balanced`.
    pub fn with_rules(rules: Vec<StrategyRule>, config: MachineConfig) -> Self {
        Self {
            rules,
            config,
            mode:             StrategyMode::default(),
            last_switch_tick: Tick::ZERO,
            candidate:        None,
            candidate_streak: 0,
        }
    }

    /// The active posture.
    #[inline]
    pub fn current(&self) -> StrategyMode {
        self.mode
    }

    /// Evaluate the table and possibly switch.  Call once per tick; the
    /// machine gates itself to its own cadence internally.
    ///
    /// Returns `Some(Switch)` only on the tick a switch commits.
    pub fn update(&mut self, tick: Tick, signals: &SignalSnapshot) -> Option<Switch> {
        if !tick.is_due(self.config.eval_cadence_ticks) {
            return None;
        }

        let (target, is_emergency) = self.select_target(signals);

        // Already on the right posture — reset any pending candidate.
        if target == self.mode {
            self.candidate = None;
            self.candidate_streak = 0;
            return None;
        }

        if is_emergency {
            let switch = self.commit(target, tick, SwitchReason::Emergency);
            log::warn!(
                "strategy EMERGENCY: {} -> {} ({tick}, ratio={:.2}, threat={:.2})",
                switch.from, switch.to, signals.strength_ratio, signals.threat_level,
            );
            return Some(switch);
        }

        // Lockout: still within the cooldown window.
        if tick.since(self.last_switch_tick) < self.config.lockout_ticks {
            return None;
        }

        // Confirmation: accumulate consecutive agreements.
        if self.candidate == Some(target) {
            self.candidate_streak += 1;
        } else {
            self.candidate = Some(target);
            self.candidate_streak = 1;
        }

        if self.candidate_streak >= self.config.confirmation_count {
            let switch = self.commit(target, tick, SwitchReason::Confirmed);
            log::info!(
                "strategy: {} -> {} ({tick}, ratio={:.2} econ={:.2} threat={:.2} phase={:.2})",
                switch.from, switch.to,
                signals.strength_ratio, signals.economic_health,
                signals.threat_level, signals.phase,
            );
            return Some(switch);
        }

        None
    }

    /// Human-readable candidate state for periodic logs.
    pub fn candidate_summary(&self) -> String {
        match self.candidate {
            None    => "no candidate".to_string(),
            Some(c) => format!(
                "candidate={c} ({}/{})",
                self.candidate_streak, self.config.confirmation_count
            ),
        }
    }

    // ── Private ───────────────────────────────────────────────────────────

    /// First rule whose predicate fires, top to bottom.
    fn select_target(&self, signals: &SignalSnapshot) -> (StrategyMode, bool) {
        for rule in &self.rules {
            if (rule.enter)(signals) {
                return (rule.mode, rule.emergency);
            }
        }
        (StrategyMode::Balanced, false)
    }

    fn commit(&mut self, target: StrategyMode, tick: Tick, reason: SwitchReason) -> Switch {
        let switch = Switch { from: self.mode, to: target, tick, reason };
        self.mode = target;
        self.last_switch_tick = tick;
        self.candidate = None;
        self.candidate_streak = 0;
        switch
    }
}

impl Default for StrategyMachine {
    fn default() -> Self {
        Self::new()
    }
}
