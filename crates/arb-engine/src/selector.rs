//! Two-tier execution resolution for a winning idea.
//!
//! Tier 1 — **abilities**: build (or take over) an [`AbilityContext`] and
//! walk the agent kind's registered candidates in priority order until one
//! issues a command.
//!
//! Tier 2 — **legacy**: if no ability fires, fall back to the tactic's own
//! `execute_legacy` path.  This keeps partially migrated catalogs working:
//! a tactic with no matching abilities behaves exactly as it did before the
//! ability layer existed.

use arb_ability::{AbilityContext, AbilityRegistry, Dispatch};
use arb_core::{AgentId, CommandSink, WorldView};
use arb_tactic::{Idea, Tactic};

use crate::EngineError;

/// How a winning idea was (or was not) turned into a command.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Resolution {
    /// A registered ability issued; carries the ability's name.
    Ability(&'static str),
    /// The tactic's legacy path issued.
    Legacy,
    /// Every candidate declined and the legacy path declined too.  Not an
    /// error: the agent simply does nothing this pass.
    Unresolved,
}

impl Resolution {
    #[inline]
    pub fn issued(self) -> bool {
        !matches!(self, Resolution::Unresolved)
    }
}

/// Resolve and execute one winning idea for one agent.
///
/// The context is taken from the idea when the tactic pre-built one,
/// otherwise synthesized from the tactic's goal mapping; either way it
/// carries the idea's confidence, target, and evidence forward so the
/// executing ability (and the audit log) see the full picture.
///
/// Faults from an ability or the legacy path surface as `Err`; the caller
/// contains them at the per-agent boundary.
pub fn execute_idea(
    tactic: &dyn Tactic,
    agent:  AgentId,
    idea:   &Idea,
    registry: &AbilityRegistry,
    world:    &dyn WorldView,
    sink:     &mut dyn CommandSink,
) -> Result<Resolution, EngineError> {
    let mut ctx = match &idea.context {
        Some(prebuilt) => prebuilt.clone(),
        None => {
            let mut ctx = AbilityContext::for_goal(tactic.goal())
                .with_confidence(idea.confidence);
            ctx.target = idea.target;
            ctx.evidence = idea.evidence.clone();
            ctx
        }
    };

    let kind = world.kind_of(agent);
    for ability in registry.get(kind) {
        if !ability.goal_filter().matches(ctx.goal) {
            continue;
        }
        if !ability.can_use(agent, &ctx, world) {
            continue;
        }
        match ability.execute(agent, &mut ctx, world, sink)? {
            Dispatch::Issued   => return Ok(Resolution::Ability(ability.name())),
            Dispatch::Declined => continue,
        }
    }

    match tactic.execute_legacy(agent, idea, world, sink)? {
        Dispatch::Issued   => Ok(Resolution::Legacy),
        Dispatch::Declined => Ok(Resolution::Unresolved),
    }
}
