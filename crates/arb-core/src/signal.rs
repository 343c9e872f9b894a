//! `SignalSnapshot` — the per-tick evidence bundle consumed by all scoring.
//!
//! The snapshot is the compressed representation of the world state that the
//! whole decision pipeline operates on: tactic scoring reads it, the strategy
//! rule table matches over it.  It is computed once per tick by the host's
//! perception/metrics layer, owned by the caller, and borrowed immutably by
//! everything below — no component of this crate family ever mutates it.
//!
//! Signals are deliberately flat named numerics rather than nested structures
//! so rule predicates and scoring terms read as plain field comparisons.

/// Read-only numeric signals for a single tick.
///
/// Replaced wholesale each tick; carries no identity and no history.  Fields
/// default to neutral values so partially-instrumented hosts can fill only
/// the signals they measure.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalSnapshot {
    // ── Combat signals ────────────────────────────────────────────────────
    /// Rolling score of recent kills, losses, and ground taken.
    pub momentum: f32,
    /// Who is choosing where fights happen.  Positive = we are.
    pub initiative: f32,
    /// How dangerous the enemy force is to our home sites, 0..1.
    pub threat_level: f32,
    /// Ahead (+) or behind (−) on timings.
    pub tempo: f32,
    /// Are our agents together or scattered, 0..1.
    pub cohesion: f32,

    // ── Economic signals ──────────────────────────────────────────────────
    /// Our income versus the opponent's estimated income.  1.0 = parity.
    pub economic_health: f32,
    /// Banking resources (low) or spending them (high).
    pub spend_efficiency: f32,
    /// How exposed our production workers are, 0..1 (1 = safe).
    pub worker_safety: f32,
    /// How many more workers we could employ productively.
    pub saturation_delta: f32,
    /// Owned sites with nothing left to extract.
    pub depleted_sites: u32,

    // ── Map signals ───────────────────────────────────────────────────────
    /// Fraction of the map under our influence, 0..1.
    pub coverage_pct: f32,
    /// Map area we can see versus the opponent.
    pub vision_dominance: f32,
    /// Our expansion count versus theirs.
    pub expansion_index: f32,
    /// Do we own the key chokepoints, 0..1.
    pub choke_control: f32,
    /// How close our force is to the hottest threat cell, 0..1.
    pub hotspot_proximity: f32,

    // ── Force signals ─────────────────────────────────────────────────────
    /// Our force value / their force value.  1.0 = parity.
    pub strength_ratio: f32,
    /// Our upgrade level minus theirs.
    pub upgrade_advantage: f32,
    /// How long until our next reinforcement wave arrives, 0..1 (1 = now).
    pub reinforcement_proximity: f32,

    // ── Opponent-model signals ────────────────────────────────────────────
    /// How quickly the opponent responded to our last action, 0..1.
    pub opponent_reaction: f32,
    /// Greedy (high) or safe (low) opponent play, 0..1.
    pub opponent_risk: f32,
    /// Confidence in our read of the opponent's plan, 0..1.
    pub read_confidence: f32,

    // ── Composites ────────────────────────────────────────────────────────
    /// 0–100 composite aggression score.
    pub aggression_dial: f32,
    /// 0.0 = session start, 1.0 = late game.
    pub phase: f32,
}

impl Default for SignalSnapshot {
    fn default() -> Self {
        Self {
            momentum:                0.0,
            initiative:              0.0,
            threat_level:            0.0,
            tempo:                   0.0,
            cohesion:                0.0,
            economic_health:         1.0,
            spend_efficiency:        0.0,
            worker_safety:           1.0,
            saturation_delta:        0.0,
            depleted_sites:          0,
            coverage_pct:            0.0,
            vision_dominance:        0.0,
            expansion_index:         0.0,
            choke_control:           0.0,
            hotspot_proximity:       0.0,
            strength_ratio:          1.0,
            upgrade_advantage:       0.0,
            reinforcement_proximity: 0.0,
            opponent_reaction:       0.5,
            opponent_risk:           0.5,
            read_confidence:         1.0,
            aggression_dial:         50.0,
            phase:                   0.0,
        }
    }
}
