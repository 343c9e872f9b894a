//! Unit tests for arb-tactic.

use arb_ability::{AbilityContext, Goal};
use arb_core::{
    AgentId, Evidence, KindId, Point, SignalSnapshot, TacticId, Target, Tick, WorldView,
};
use arb_strategy::StrategyMode;

use crate::{DecisionContext, Idea, NoopTactic, Tactic, TacticError};

// ── Helpers ───────────────────────────────────────────────────────────────────

struct EmptyWorld;

impl WorldView for EmptyWorld {
    fn agents(&self) -> Vec<AgentId> {
        vec![]
    }
    fn enemies(&self) -> Vec<AgentId> {
        vec![]
    }
    fn kind_of(&self, _agent: AgentId) -> KindId {
        KindId(0)
    }
    fn position_of(&self, _agent: AgentId) -> Option<Point> {
        None
    }
    fn health_of(&self, _agent: AgentId) -> f32 {
        1.0
    }
    fn is_alive(&self, _agent: AgentId) -> bool {
        false
    }
    fn home_sites(&self) -> Vec<Point> {
        vec![]
    }
    fn enemies_within(&self, _center: Point, _radius: f32) -> Vec<AgentId> {
        vec![]
    }
    fn allies_within(&self, _center: Point, _radius: f32) -> Vec<AgentId> {
        vec![]
    }
    fn force_centroid(&self) -> Option<Point> {
        None
    }
}

fn make_context<'a>(signals: &'a SignalSnapshot, world: &'a EmptyWorld) -> DecisionContext<'a> {
    DecisionContext::new(Tick(100), signals, StrategyMode::Balanced, world)
}

// ── DecisionContext ───────────────────────────────────────────────────────────

#[cfg(test)]
mod context_tests {
    use super::*;

    #[test]
    fn profile_matches_mode() {
        let signals = SignalSnapshot::default();
        let world = EmptyWorld;
        let ctx = DecisionContext::new(Tick(5), &signals, StrategyMode::Fortress, &world);
        assert_eq!(ctx.mode, StrategyMode::Fortress);
        assert_eq!(ctx.profile, StrategyMode::Fortress.profile());
        assert_eq!(ctx.tick, Tick(5));
    }
}

// ── Idea ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod idea_tests {
    use super::*;

    #[test]
    fn builder_chain() {
        let mut ev = Evidence::new();
        ev.push("momentum", 0.3);
        let idea = Idea::new(TacticId(2), 0.7, ev)
            .with_target(Target::Point(Point::new(4.0, 4.0)))
            .cooldown_exempt();
        assert_eq!(idea.tactic, TacticId(2));
        assert_eq!(idea.confidence, 0.7);
        assert!(idea.cooldown_exempt);
        assert!(idea.context.is_none());
        assert_eq!(idea.target, Some(Target::Point(Point::new(4.0, 4.0))));
    }

    #[test]
    fn prebuilt_context_is_carried() {
        let ctx = AbilityContext::for_goal(Goal::Harass).with_confidence(0.9);
        let idea = Idea::new(TacticId(0), 0.9, Evidence::new()).with_context(ctx);
        let carried = idea.context.as_ref().unwrap();
        assert_eq!(carried.goal, Goal::Harass);
        assert_eq!(carried.confidence, 0.9);
    }
}

// ── Tactic trait defaults ─────────────────────────────────────────────────────

#[cfg(test)]
mod trait_tests {
    use super::*;

    /// A tactic that always wants to engage with fixed confidence.
    struct AlwaysEngage;

    impl Tactic for AlwaysEngage {
        fn name(&self) -> &'static str {
            "always-engage"
        }
        fn is_applicable(&self, _agent: AgentId, _ctx: &DecisionContext<'_>) -> bool {
            true
        }
        fn generate_idea(
            &self,
            _agent: AgentId,
            _ctx:   &DecisionContext<'_>,
        ) -> Result<Option<Idea>, TacticError> {
            let mut ev = Evidence::new();
            ev.push("base", 0.5);
            Ok(Some(Idea::new(TacticId(0), 0.5, ev)))
        }
    }

    #[test]
    fn defaults_are_individual_engage() {
        let t = AlwaysEngage;
        assert!(!t.is_group());
        assert_eq!(t.min_quorum(), 2);
        assert_eq!(t.goal(), Goal::Engage);
    }

    #[test]
    fn default_legacy_path_declines() {
        let t = AlwaysEngage;
        let idea = Idea::new(TacticId(0), 0.5, Evidence::new());
        struct NullSink;
        impl arb_core::CommandSink for NullSink {
            fn issue(&mut self, _agents: &[AgentId], _command: arb_core::Command) {}
        }
        let outcome = t
            .execute_legacy(AgentId(0), &idea, &EmptyWorld, &mut NullSink)
            .unwrap();
        assert!(!outcome.is_issued());
    }

    #[test]
    fn object_safety_via_box() {
        let tactics: Vec<Box<dyn Tactic>> = vec![Box::new(AlwaysEngage), Box::new(NoopTactic)];
        let signals = SignalSnapshot::default();
        let world = EmptyWorld;
        let ctx = make_context(&signals, &world);

        let applicable: Vec<_> = tactics
            .iter()
            .filter(|t| t.is_applicable(AgentId(0), &ctx))
            .map(|t| t.name())
            .collect();
        assert_eq!(applicable, vec!["always-engage"]);
    }

    #[test]
    fn noop_never_produces_ideas() {
        let signals = SignalSnapshot::default();
        let world = EmptyWorld;
        let ctx = make_context(&signals, &world);
        assert!(!NoopTactic.is_applicable(AgentId(0), &ctx));
        assert!(NoopTactic.generate_idea(AgentId(0), &ctx).unwrap().is_none());
    }
}
