//! `KeepSafeTactic` — the always-available defensive fallback.

use arb_ability::Goal;
use arb_core::{AgentId, Evidence, Point, Target};
use arb_tactic::{DecisionContext, Idea, Tactic, TacticError};

/// Pull a hurt or outnumbered agent back toward the nearest home site.
///
/// Applicable to every mobile kind.  The score is capped at [`CAP`] so that
/// any genuinely better idea outbids it, and floored at [`MIN`] so the
/// evidence trail always shows what the fallback was worth — whether it
/// clears the engine's suppression floor is the ledger's call, not ours.
///
/// [`CAP`]: KeepSafeTactic::CAP
/// [`MIN`]: KeepSafeTactic::MIN
pub struct KeepSafeTactic;

impl KeepSafeTactic {
    pub const CAP: f32 = 0.60;
    pub const MIN: f32 = 0.20;

    const DANGER_RADIUS: f32 = 12.0;
}

impl Tactic for KeepSafeTactic {
    fn name(&self) -> &'static str {
        "keep-safe"
    }

    fn goal(&self) -> Goal {
        Goal::Retreat
    }

    fn is_applicable(&self, agent: AgentId, ctx: &DecisionContext<'_>) -> bool {
        ctx.world.position_of(agent).is_some() && !ctx.world.home_sites().is_empty()
    }

    fn generate_idea(
        &self,
        agent: AgentId,
        ctx:   &DecisionContext<'_>,
    ) -> Result<Option<Idea>, TacticError> {
        let Some(pos) = ctx.world.position_of(agent) else {
            return Ok(None);
        };

        let mut ev = Evidence::new();
        let mut score = 0.0;

        let hurt = (1.0 - ctx.world.health_of(agent)) * 0.50;
        score += hurt;
        ev.push("safe.hurt", hurt);

        let nearby = ctx.world.enemies_within(pos, Self::DANGER_RADIUS).len();
        let pressure = (nearby as f32 * 0.08).min(0.32);
        score += pressure;
        ev.push("safe.pressure", pressure);

        let threat = ctx.signals.threat_level * 0.15;
        score += threat;
        ev.push("safe.threat", threat);

        if ctx.signals.strength_ratio < 0.9 {
            let outgunned = (0.9 - ctx.signals.strength_ratio) * 0.30;
            score += outgunned;
            ev.push("safe.outgunned", outgunned);
        }

        // Aggressive postures damp the urge to run; defensive ones feed it.
        let mode = ctx.profile.retreat_bias;
        score += mode;
        ev.push("safe.mode", mode);

        let score = score.clamp(Self::MIN, Self::CAP);
        let refuge = nearest_site(pos, &ctx.world.home_sites());
        Ok(Some(Idea::scored(score, ev).with_target(Target::Point(refuge))))
    }
}

fn nearest_site(from: Point, sites: &[Point]) -> Point {
    sites
        .iter()
        .copied()
        .min_by(|a, b| {
            from.distance(*a)
                .partial_cmp(&from.distance(*b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or(Point::ORIGIN)
}
