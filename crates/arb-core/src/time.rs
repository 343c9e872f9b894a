//! Simulation time model and engine tuning knobs.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter owned by the host loop.
//! Every timeout in the framework — suppression cooldowns, the strategy
//! lockout window, evaluation cadences — is expressed in tick counts, never
//! wall-clock seconds.  That makes the whole decision pipeline deterministic
//! under variable real-time speed: replaying the same tick stream with the
//! same inputs produces the same decisions.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64`: at one tick per simulated frame a u64 outlasts any
/// conceivable session by many orders of magnitude.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }

    /// `true` every `cadence` ticks — the standard gate for slow-path work
    /// (strategy evaluation, idea generation).  A cadence of 0 or 1 means
    /// "every tick".
    #[inline]
    pub fn is_due(self, cadence: u64) -> bool {
        cadence <= 1 || self.0 % cadence == 0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── EngineConfig ──────────────────────────────────────────────────────────────

/// Tuning knobs for the idea/suppression pipeline.
///
/// Defaults: a hard confidence floor of 0.40
/// for mobile agents (0.35 for passive subjects like production structures,
/// which have fewer competing ideas), a 50-tick repeat-decision cooldown
/// (20 for passive subjects), and idea generation every 10 ticks.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Minimum confidence for a mobile agent's idea to be considered at all.
    pub confidence_floor: f32,

    /// Minimum confidence for passive decision subjects.
    pub passive_floor: f32,

    /// Ticks an accepted mobile agent is barred from a new decision.
    pub cooldown_ticks: u64,

    /// Shorter cooldown for passive subjects.
    pub passive_cooldown_ticks: u64,

    /// Run the idea/suppression/execution pipeline every N ticks.
    pub idea_cadence_ticks: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            confidence_floor:       0.40,
            passive_floor:          0.35,
            cooldown_ticks:         50,
            passive_cooldown_ticks: 20,
            idea_cadence_ticks:     10,
        }
    }
}

impl EngineConfig {
    /// Sanity-check the knobs.  Floors must be finite and non-negative; a
    /// zero idea cadence is normalized to "every tick" by [`Tick::is_due`],
    /// so it is allowed.
    pub fn validate(&self) -> Result<(), String> {
        if !self.confidence_floor.is_finite() || self.confidence_floor < 0.0 {
            return Err(format!("confidence_floor must be finite and >= 0, got {}", self.confidence_floor));
        }
        if !self.passive_floor.is_finite() || self.passive_floor < 0.0 {
            return Err(format!("passive_floor must be finite and >= 0, got {}", self.passive_floor));
        }
        Ok(())
    }
}
