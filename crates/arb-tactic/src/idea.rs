//! `Idea` — a scored candidate decision for one agent.

use arb_ability::AbilityContext;
use arb_core::{Evidence, TacticId, Target};

/// One tactic's proposal for what an agent should attempt this tick.
///
/// Ideas are ephemeral: created, compared, and consumed within a single
/// tick, never persisted.  `confidence` is built additively from named
/// sub-signals and is *not* centrally clamped — individual tactics clamp
/// where their scoring model calls for it, and the suppression floor is the
/// only global bound.  Every contributing term lives in `evidence`.
#[derive(Clone, Debug)]
pub struct Idea {
    /// Catalog slot of the tactic that produced this idea.
    pub tactic: TacticId,

    /// Additive confidence score.  Higher wins; ties break to the earlier
    /// catalog slot.
    pub confidence: f32,

    /// Named record of every scoring contribution, for the audit trail.
    pub evidence: Evidence,

    /// What the idea is aimed at, if anything.
    pub target: Option<Target>,

    /// Pre-built ability context for tactics that have adopted the ability
    /// path directly.  `None` means the selector synthesizes one from the
    /// tactic's goal mapping (the legacy-compatible route).
    pub context: Option<AbilityContext>,

    /// Idempotent corrective re-issues (e.g. refreshing a standing rally
    /// point) skip the suppression cooldown.  They still honor the
    /// confidence floor.  Without this carve-out such tactics would starve
    /// themselves: each re-issue stamps the ledger that blocks the next.
    pub cooldown_exempt: bool,
}

impl Idea {
    /// An idea with the given score and no target; remaining fields neutral.
    pub fn new(tactic: TacticId, confidence: f32, evidence: Evidence) -> Self {
        Self {
            tactic,
            confidence,
            evidence,
            target:          None,
            context:         None,
            cooldown_exempt: false,
        }
    }

    /// An idea without a catalog slot.  The engine stamps `tactic` with the
    /// producing tactic's slot during arbitration, so implementations never
    /// need to know their own slot.
    pub fn scored(confidence: f32, evidence: Evidence) -> Self {
        Self::new(TacticId::INVALID, confidence, evidence)
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_context(mut self, context: AbilityContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn cooldown_exempt(mut self) -> Self {
        self.cooldown_exempt = true;
        self
    }
}
