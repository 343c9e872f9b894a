//! `BackToWorkTactic` — idle workers return to extraction.

use arb_ability::Goal;
use arb_core::{AgentId, Evidence, Target};
use arb_tactic::{DecisionContext, Idea, Tactic, TacticError};

use crate::kinds;

/// Default occupation for a worker with nothing threatening nearby.
///
/// Deliberately modest: any mob or keep-safe idea outbids it, so it only
/// wins when the base is quiet.
pub struct BackToWorkTactic;

impl BackToWorkTactic {
    const BASE: f32 = 0.45;
    const DANGER_RADIUS: f32 = 12.0;
}

impl Tactic for BackToWorkTactic {
    fn name(&self) -> &'static str {
        "back-to-work"
    }

    fn goal(&self) -> Goal {
        Goal::Gather
    }

    fn is_applicable(&self, agent: AgentId, ctx: &DecisionContext<'_>) -> bool {
        if ctx.world.kind_of(agent) != kinds::WORKER || ctx.world.home_sites().is_empty() {
            return false;
        }
        match ctx.world.position_of(agent) {
            Some(pos) => ctx.world.enemies_within(pos, Self::DANGER_RADIUS).is_empty(),
            None => false,
        }
    }

    fn generate_idea(
        &self,
        agent: AgentId,
        ctx:   &DecisionContext<'_>,
    ) -> Result<Option<Idea>, TacticError> {
        let Some(pos) = ctx.world.position_of(agent) else {
            return Ok(None);
        };
        let sites = ctx.world.home_sites();
        let Some(site) = sites.iter().copied().min_by(|a, b| {
            pos.distance(*a)
                .partial_cmp(&pos.distance(*b))
                .unwrap_or(std::cmp::Ordering::Equal)
        }) else {
            return Ok(None);
        };

        let mut ev = Evidence::new();
        let mut score = Self::BASE;
        ev.push("work.base", Self::BASE);

        // A struggling economy makes getting back to work more urgent.
        if ctx.signals.economic_health < 1.0 {
            let urgency = (1.0 - ctx.signals.economic_health) * 0.10;
            score += urgency;
            ev.push("work.urgency", urgency);
        }

        Ok(Some(Idea::scored(score, ev).with_target(Target::Point(site))))
    }
}
