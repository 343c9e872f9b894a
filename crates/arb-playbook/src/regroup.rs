//! `RegroupTactic` — pull stragglers back to the main force.

use arb_ability::Goal;
use arb_core::{AgentId, Evidence, Point, Target};
use arb_tactic::{DecisionContext, Idea, Tactic, TacticError};

use crate::kinds;

/// Rally an isolated soldier back to its fellows.
///
/// A soldier is a straggler when no other soldier stands within
/// `STRAGGLE_DISTANCE` of it.  The rally point is the centroid of the
/// *other* soldiers, never the full-force centroid: one extreme outlier
/// would drag that centroid far enough to reclassify a tight cluster as
/// stragglers.
///
/// The rally order is an idempotent corrective: re-issuing it while the
/// agent is already walking home changes nothing, so the idea is marked
/// cooldown-exempt.  If it stamped the ledger, the first rally would block
/// its own refresh and every other idea for the straggler for a full window.
pub struct RegroupTactic;

impl RegroupTactic {
    const BASE: f32 = 0.45;
    const STRAGGLE_DISTANCE: f32 = 25.0;

    /// Centroid of the other soldiers; `None` when the agent has no peers.
    fn peer_centroid(agent: AgentId, ctx: &DecisionContext<'_>) -> Option<Point> {
        let pts: Vec<Point> = ctx
            .world
            .agents()
            .into_iter()
            .filter(|&a| a != agent && ctx.world.kind_of(a) == kinds::SOLDIER)
            .filter_map(|a| ctx.world.position_of(a))
            .collect();
        Point::centroid(&pts)
    }
}

impl Tactic for RegroupTactic {
    fn name(&self) -> &'static str {
        "regroup"
    }

    fn goal(&self) -> Goal {
        Goal::Rally
    }

    fn is_applicable(&self, agent: AgentId, ctx: &DecisionContext<'_>) -> bool {
        if ctx.world.kind_of(agent) != kinds::SOLDIER {
            return false;
        }
        let Some(pos) = ctx.world.position_of(agent) else {
            return false;
        };
        let has_near_peer = ctx
            .world
            .allies_within(pos, Self::STRAGGLE_DISTANCE)
            .into_iter()
            .any(|a| a != agent && ctx.world.kind_of(a) == kinds::SOLDIER);
        !has_near_peer && Self::peer_centroid(agent, ctx).is_some()
    }

    fn generate_idea(
        &self,
        agent: AgentId,
        ctx:   &DecisionContext<'_>,
    ) -> Result<Option<Idea>, TacticError> {
        let Some(center) = Self::peer_centroid(agent, ctx) else {
            return Ok(None);
        };

        let mut ev = Evidence::new();
        let mut score = Self::BASE;
        ev.push("regroup.base", Self::BASE);

        let scattered = (1.0 - ctx.signals.cohesion) * 0.10;
        score += scattered;
        ev.push("regroup.scattered", scattered);

        let mode = ctx.profile.regroup_bias;
        score += mode;
        ev.push("regroup.mode", mode);

        Ok(Some(
            Idea::scored(score, ev)
                .with_target(Target::Point(center))
                .cooldown_exempt(),
        ))
    }
}
