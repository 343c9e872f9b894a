//! `MobTactic` — workers gang up on an intruder near a home site.

use arb_ability::Goal;
use arb_core::{AgentId, Evidence, Point, Target};
use arb_tactic::{DecisionContext, Idea, Tactic, TacticError};

use crate::kinds;

/// Quorum group tactic: a lone worker never picks a fight, but enough of
/// them together can chase off a raider before the army arrives.
///
/// Each worker scores the mob independently; the engine buckets the ideas
/// and commits only if at least [`QUORUM`] workers agree.  Confidence weighs
/// the posse's combined damage output against the intruder's staying power.
///
/// [`QUORUM`]: MobTactic::QUORUM
pub struct MobTactic;

impl MobTactic {
    pub const QUORUM: usize = 3;

    const BASE: f32 = 0.50;
    const CAP: f32 = 0.95;
    /// Minimum score worth proposing at all; below this a worker stays on
    /// the job rather than joining a doomed chase.
    const WORTHWHILE: f32 = 0.55;
    /// How far from a home site a worker will notice and chase an intruder.
    const MOB_RADIUS: f32 = 10.0;
}

impl Tactic for MobTactic {
    fn name(&self) -> &'static str {
        "mob"
    }

    fn is_group(&self) -> bool {
        true
    }

    fn min_quorum(&self) -> usize {
        Self::QUORUM
    }

    fn goal(&self) -> Goal {
        Goal::Engage
    }

    fn is_applicable(&self, agent: AgentId, ctx: &DecisionContext<'_>) -> bool {
        ctx.world.kind_of(agent) == kinds::WORKER && ctx.world.position_of(agent).is_some()
    }

    fn generate_idea(
        &self,
        agent: AgentId,
        ctx:   &DecisionContext<'_>,
    ) -> Result<Option<Idea>, TacticError> {
        let Some(pos) = ctx.world.position_of(agent) else {
            return Ok(None);
        };
        let Some((site, intruder)) = intrusion_near(pos, ctx) else {
            return Ok(None);
        };

        let posse = ctx.world.allies_within(site, Self::MOB_RADIUS);
        let muscle: f32 = posse.iter().map(|&a| ctx.world.threat_of(a)).sum();
        let staying = (ctx.world.health_of(intruder) * ctx.world.threat_of(intruder)).max(0.1);
        let kill_speed = (muscle / (staying * 4.0)).min(1.0);

        let mut ev = Evidence::new();
        let mut score = Self::BASE;
        ev.push("mob.base", Self::BASE);

        let speed = kill_speed * 0.25;
        score += speed;
        ev.push("mob.kill_speed", speed);

        if posse.len() >= 5 {
            score += 0.05;
            ev.push("mob.big_posse", 0.05);
        }
        if ctx.signals.strength_ratio < 0.4 {
            score -= 0.10;
            ev.push("mob.outmatched", -0.10);
        }

        let score = score.min(Self::CAP);
        if score < Self::WORTHWHILE {
            return Ok(None);
        }
        Ok(Some(Idea::scored(score, ev).with_target(Target::Agent(intruder))))
    }
}

/// The home site this worker can respond at, with the intruder closest to
/// it.  Workers only mob near their own ground; open-field enemies are the
/// army's problem.
fn intrusion_near(worker: Point, ctx: &DecisionContext<'_>) -> Option<(Point, AgentId)> {
    for site in ctx.world.home_sites() {
        if worker.distance(site) > MobTactic::MOB_RADIUS {
            continue;
        }
        let intruder = ctx
            .world
            .enemies_within(site, MobTactic::MOB_RADIUS)
            .into_iter()
            .filter(|&e| ctx.world.is_alive(e))
            .min_by(|&a, &b| {
                let da = ctx.world.position_of(a).map_or(f32::MAX, |p| site.distance(p));
                let db = ctx.world.position_of(b).map_or(f32::MAX, |p| site.distance(p));
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            });
        if let Some(intruder) = intruder {
            return Some((site, intruder));
        }
    }
    None
}
