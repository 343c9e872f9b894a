//! `HarassTactic` — initiative-driven raids on soft targets.

use arb_ability::Goal;
use arb_core::{AgentId, Evidence, Target};
use arb_tactic::{DecisionContext, Idea, Tactic, TacticError};

use crate::kinds;

/// Send scouts after the weakest visible enemy when we hold the initiative.
pub struct HarassTactic;

impl HarassTactic {
    const BASE: f32 = 0.35;
}

impl Tactic for HarassTactic {
    fn name(&self) -> &'static str {
        "harass"
    }

    fn goal(&self) -> Goal {
        Goal::Harass
    }

    fn is_applicable(&self, agent: AgentId, ctx: &DecisionContext<'_>) -> bool {
        ctx.world.kind_of(agent) == kinds::SCOUT && !ctx.world.enemies().is_empty()
    }

    fn generate_idea(
        &self,
        _agent: AgentId,
        ctx:    &DecisionContext<'_>,
    ) -> Result<Option<Idea>, TacticError> {
        let Some(mark) = softest_enemy(ctx) else {
            return Ok(None);
        };

        let mut ev = Evidence::new();
        let mut score = Self::BASE;
        ev.push("harass.base", Self::BASE);

        let initiative = ctx.signals.initiative.max(0.0) * 0.20;
        score += initiative;
        ev.push("harass.initiative", initiative);

        let mode = ctx.profile.harass_bias;
        score += mode;
        ev.push("harass.mode", mode);

        // A distracted or risk-averse opponent invites raids.
        let opening = (1.0 - ctx.signals.opponent_reaction) * 0.10;
        score += opening;
        ev.push("harass.opening", opening);

        Ok(Some(Idea::scored(score, ev).with_target(Target::Agent(mark))))
    }
}

/// Lowest-health living enemy; ties break to the lower agent id via the
/// stable ordering of `enemies()`.
fn softest_enemy(ctx: &DecisionContext<'_>) -> Option<AgentId> {
    ctx.world
        .enemies()
        .into_iter()
        .filter(|&e| ctx.world.is_alive(e))
        .min_by(|&a, &b| {
            ctx.world
                .health_of(a)
                .partial_cmp(&ctx.world.health_of(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}
