//! `SuppressionLedger` — per-agent repeat-decision throttle.
//!
//! Two gates, applied in order:
//!
//! 1. **Confidence floor.**  Ideas below the floor are rejected outright,
//!    regardless of timing.
//! 2. **Cooldown window.**  Once an agent's idea is accepted, further ideas
//!    for that agent are rejected until the window elapses.
//!
//! Cooldown-exempt ideas (idempotent corrective re-issues such as refreshing
//! a standing rally point) skip gate 2 in *both* directions: they are not
//! blocked by an open window, and accepting one does not open a new window
//! that would block other tactics.  They still honor the floor.
//!
//! The no-stamp half of the exemption is intentional, not an oversight: a
//! scheme that stamps every acceptance would let a single rally refresh lock
//! its agent out of every other tactic for a full window.  Do not "simplify"
//! exempt acceptances into stamping ones.
//!
//! The engine owns two ledgers — one for mobile agents, one for passive
//! subjects — tuned with different floors and windows.  The ledger itself is
//! agnostic about which population it tracks.

use arb_core::{AgentId, Tick};
use rustc_hash::FxHashMap;

/// Outcome of a suppression check.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Verdict {
    /// Passed both gates.
    Accepted,
    /// Confidence below the ledger's floor.
    BelowFloor,
    /// A prior acceptance is still within the cooldown window.
    Cooldown,
}

impl Verdict {
    #[inline]
    pub fn is_accepted(self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Tracks, per agent, the tick of the last accepted decision.
pub struct SuppressionLedger {
    floor:  f32,
    window: u64,
    stamps: FxHashMap<AgentId, Tick>,
}

impl SuppressionLedger {
    pub fn new(floor: f32, window: u64) -> Self {
        Self {
            floor,
            window,
            stamps: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn floor(&self) -> f32 {
        self.floor
    }

    #[inline]
    pub fn window(&self) -> u64 {
        self.window
    }

    /// Pure gate check; never mutates the ledger.
    ///
    /// Group consolidation uses this to pre-filter candidate members, then
    /// stamps only the members of buckets that actually commit — a bucket
    /// that fails quorum leaves no trace.
    pub fn check(
        &self,
        agent:           AgentId,
        confidence:      f32,
        tick:            Tick,
        cooldown_exempt: bool,
    ) -> Verdict {
        if confidence < self.floor {
            return Verdict::BelowFloor;
        }
        if !cooldown_exempt
            && let Some(&last) = self.stamps.get(&agent)
            && tick.since(last) < self.window
        {
            return Verdict::Cooldown;
        }
        Verdict::Accepted
    }

    /// Check and, on acceptance of a non-exempt idea, open the cooldown
    /// window.  The one-call path for individual ideas.
    pub fn accept(
        &mut self,
        agent:           AgentId,
        confidence:      f32,
        tick:            Tick,
        cooldown_exempt: bool,
    ) -> Verdict {
        let verdict = self.check(agent, confidence, tick, cooldown_exempt);
        if verdict.is_accepted() && !cooldown_exempt {
            self.stamp(agent, tick);
        }
        verdict
    }

    /// Record an accepted decision for `agent` at `tick`.
    #[inline]
    pub fn stamp(&mut self, agent: AgentId, tick: Tick) {
        self.stamps.insert(agent, tick);
    }

    /// Stamp a whole posse at once (group commit).
    pub fn stamp_all(&mut self, agents: &[AgentId], tick: Tick) {
        for &agent in agents {
            self.stamp(agent, tick);
        }
    }

    /// Tick of the last accepted decision, if any.
    #[inline]
    pub fn last_accepted(&self, agent: AgentId) -> Option<Tick> {
        self.stamps.get(&agent).copied()
    }

    /// Drop an agent's history (e.g. when the host reports it destroyed).
    pub fn forget(&mut self, agent: AgentId) {
        self.stamps.remove(&agent);
    }

    /// Number of agents with an open history entry.
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }
}
