//! `PatrolTactic` — deterministic coverage routes across home sites.

use arb_ability::Goal;
use arb_core::{AgentId, Evidence, Target};
use arb_tactic::{DecisionContext, Idea, Tactic, TacticError};

use crate::kinds;

/// Walk soldiers and scouts between home sites when nothing is visible.
///
/// Site selection is a round-robin over `(agent, tick)` so coverage rotates
/// without any randomness: the same agent on the same tick always patrols
/// toward the same site.
pub struct PatrolTactic;

impl PatrolTactic {
    const BASE: f32 = 0.42;
    /// Ticks each patrol leg nominally lasts before the slot rotates.
    const ROTATION_TICKS: u64 = 200;
}

impl Tactic for PatrolTactic {
    fn name(&self) -> &'static str {
        "patrol"
    }

    fn goal(&self) -> Goal {
        Goal::Patrol
    }

    fn is_applicable(&self, agent: AgentId, ctx: &DecisionContext<'_>) -> bool {
        let kind = ctx.world.kind_of(agent);
        (kind == kinds::SOLDIER || kind == kinds::SCOUT)
            && ctx.world.enemies().is_empty()
            && !ctx.world.home_sites().is_empty()
    }

    fn generate_idea(
        &self,
        agent: AgentId,
        ctx:   &DecisionContext<'_>,
    ) -> Result<Option<Idea>, TacticError> {
        let sites = ctx.world.home_sites();
        if sites.is_empty() {
            return Ok(None);
        }

        let rotation = (ctx.tick.0 / Self::ROTATION_TICKS) as usize;
        let slot = (agent.index() + rotation) % sites.len();

        let mut ev = Evidence::new();
        ev.push("patrol.base", Self::BASE);
        let coverage = (1.0 - ctx.signals.coverage_pct) * 0.08;
        ev.push("patrol.coverage", coverage);

        Ok(Some(
            Idea::scored(Self::BASE + coverage, ev).with_target(Target::Point(sites[slot])),
        ))
    }
}
