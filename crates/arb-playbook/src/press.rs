//! `PressForwardTactic` — committed engagement when the numbers favor us.

use arb_ability::Goal;
use arb_core::{AgentId, Evidence, Point, Target};
use arb_tactic::{DecisionContext, Idea, Tactic, TacticError};

use crate::kinds;

/// Engage the nearest enemy when strength and momentum say we can win.
///
/// Scoring is purely additive; every term lands in the evidence under a
/// `press.*` key.  No internal cap: when the numbers are overwhelming this
/// tactic should outbid everything else.
pub struct PressForwardTactic;

impl PressForwardTactic {
    const BASE: f32 = 0.30;
}

impl Tactic for PressForwardTactic {
    fn name(&self) -> &'static str {
        "press-forward"
    }

    fn goal(&self) -> Goal {
        Goal::Engage
    }

    fn is_applicable(&self, agent: AgentId, ctx: &DecisionContext<'_>) -> bool {
        ctx.world.kind_of(agent) == kinds::SOLDIER && !ctx.world.enemies().is_empty()
    }

    fn generate_idea(
        &self,
        agent: AgentId,
        ctx:   &DecisionContext<'_>,
    ) -> Result<Option<Idea>, TacticError> {
        let Some(pos) = ctx.world.position_of(agent) else {
            return Ok(None);
        };
        let Some(target) = nearest_enemy(pos, ctx) else {
            return Ok(None);
        };

        let mut ev = Evidence::new();
        let mut score = Self::BASE;
        ev.push("press.base", Self::BASE);

        let mode = ctx.profile.engage_bias;
        score += mode;
        ev.push("press.mode", mode);

        if ctx.signals.strength_ratio >= 1.2 {
            score += 0.15;
            ev.push("press.strength", 0.15);
        }
        if ctx.signals.momentum > 0.0 {
            let m = ctx.signals.momentum * 0.10;
            score += m;
            ev.push("press.momentum", m);
        }

        let dial = (ctx.signals.aggression_dial / 100.0) * 0.10;
        score += dial;
        ev.push("press.dial", dial);

        Ok(Some(Idea::scored(score, ev).with_target(Target::Agent(target))))
    }
}

fn nearest_enemy(from: Point, ctx: &DecisionContext<'_>) -> Option<AgentId> {
    ctx.world
        .enemies()
        .into_iter()
        .filter(|&e| ctx.world.is_alive(e))
        .filter_map(|e| ctx.world.position_of(e).map(|p| (e, from.distance(p))))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(e, _)| e)
}
