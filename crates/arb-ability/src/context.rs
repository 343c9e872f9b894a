//! `AbilityContext` — the tick-scoped blackboard threaded from tactic to
//! ability execution.
//!
//! The context is a single owned value that *moves* through the pipeline:
//! built by a tactic (or synthesized by the selector from the tactic's goal
//! mapping), handed by value to the execution step, filled in by whichever
//! ability fires.  Nothing needs it after the tick ends, so there is no
//! sharing, no reference counting, and no lifetime threading — it is simply
//! dropped at the tick boundary.

use arb_core::{Evidence, Target};

use crate::Goal;

/// Mutable blackboard set by the tactic layer and consumed by abilities.
///
/// The tactic layer sets the intent fields (`goal`, `target`, `aggression`,
/// `confidence`, `evidence`); the executing ability sets the out-fields
/// (`ability_used`, `command_issued`) so the caller can log what actually
/// happened.
#[derive(Clone, Debug)]
pub struct AbilityContext {
    /// The intent label used to route to a concrete ability.
    pub goal: Goal,

    /// 0.0 = full retreat, 1.0 = all-in.  Abilities may scale their
    /// behavior by this (e.g. how deep a harass run commits).
    pub aggression: f32,

    /// What the idea was aimed at, if anything.
    pub target: Option<Target>,

    /// The winning idea's confidence, forwarded for logging and scaling.
    pub confidence: f32,

    /// The winning idea's scoring trail, forwarded for the audit log.
    pub evidence: Evidence,

    // ── Execution out-fields ──────────────────────────────────────────────
    /// Name of the ability that fired, set by `execute` on success.
    pub ability_used: Option<&'static str>,

    /// `true` once a command has been pushed into the sink.
    pub command_issued: bool,
}

impl AbilityContext {
    /// A context carrying only a goal; remaining fields neutral.
    pub fn for_goal(goal: Goal) -> Self {
        Self {
            goal,
            aggression:     0.5,
            target:         None,
            confidence:     0.0,
            evidence:       Evidence::new(),
            ability_used:   None,
            command_issued: false,
        }
    }

    /// Builder-style target attachment.
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    /// Builder-style confidence (also used as the aggression scalar when the
    /// tactic supplies no separate value).
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self.aggression = confidence;
        self
    }

    /// Mark a successful dispatch.  Called by abilities from `execute`.
    pub fn mark_issued(&mut self, ability_name: &'static str) {
        self.ability_used = Some(ability_name);
        self.command_issued = true;
    }
}
