//! Unit tests for arb-engine.

use arb_ability::{
    Ability, AbilityContext, AbilityError, Dispatch, Goal, GoalFilter,
};
use arb_core::{
    AgentId, Command, CommandSink, EngineConfig, Evidence, KindId, Point, SignalSnapshot,
    TacticId, Target, Tick, WorldView,
};
use arb_tactic::{DecisionContext, Idea, Tactic, TacticError};

use crate::{
    DecisionObserver, Engine, EngineBuilder, IdeaBatch, NoopObserver, Resolution, ScoredIdea,
    SuppressionLedger, Verdict, execute_idea,
};

const SOLDIER: KindId = KindId(1);

// ── Test world ────────────────────────────────────────────────────────────────

struct TestWorld {
    agents:  Vec<AgentId>,
    enemies: Vec<AgentId>,
    dead:    Vec<AgentId>,
    passive: Vec<AgentId>,
}

impl TestWorld {
    fn with_agents(n: u32) -> Self {
        Self {
            agents:  (0..n).map(AgentId).collect(),
            enemies: vec![AgentId(900)],
            dead:    vec![],
            passive: vec![],
        }
    }
}

impl WorldView for TestWorld {
    fn agents(&self) -> Vec<AgentId> {
        self.agents.clone()
    }
    fn enemies(&self) -> Vec<AgentId> {
        self.enemies.clone()
    }
    fn kind_of(&self, _agent: AgentId) -> KindId {
        SOLDIER
    }
    fn position_of(&self, agent: AgentId) -> Option<Point> {
        Some(Point::new(agent.0 as f32 * 10.0, 0.0))
    }
    fn health_of(&self, _agent: AgentId) -> f32 {
        1.0
    }
    fn is_alive(&self, agent: AgentId) -> bool {
        !self.dead.contains(&agent)
    }
    fn is_passive(&self, agent: AgentId) -> bool {
        self.passive.contains(&agent)
    }
    fn home_sites(&self) -> Vec<Point> {
        vec![Point::ORIGIN]
    }
    fn enemies_within(&self, _center: Point, _radius: f32) -> Vec<AgentId> {
        self.enemies.clone()
    }
    fn allies_within(&self, _center: Point, _radius: f32) -> Vec<AgentId> {
        self.agents.clone()
    }
    fn force_centroid(&self) -> Option<Point> {
        Point::centroid(&[Point::ORIGIN])
    }
}

#[derive(Default)]
struct RecordingSink {
    issued: Vec<(Vec<AgentId>, Command)>,
}

impl CommandSink for RecordingSink {
    fn issue(&mut self, agents: &[AgentId], command: Command) {
        self.issued.push((agents.to_vec(), command));
    }
}

#[derive(Default)]
struct Recorder {
    verdicts:      Vec<(AgentId, Verdict)>,
    dispatches:    Vec<(AgentId, &'static str, Resolution)>,
    group_commits: Vec<(&'static str, Vec<AgentId>)>,
}

impl DecisionObserver for Recorder {
    fn on_idea(&mut self, agent: AgentId, _idea: &Idea, verdict: Verdict, _tick: Tick) {
        self.verdicts.push((agent, verdict));
    }
    fn on_dispatch(
        &mut self,
        agent:      AgentId,
        tactic:     &'static str,
        resolution: Resolution,
        _tick:      Tick,
    ) {
        self.dispatches.push((agent, tactic, resolution));
    }
    fn on_group_commit(
        &mut self,
        tactic: &'static str,
        agents: &[AgentId],
        _target: Target,
        _tick:  Tick,
    ) {
        self.group_commits.push((tactic, agents.to_vec()));
    }
}

// ── Test tactics & abilities ──────────────────────────────────────────────────

/// Individual tactic with a fixed confidence, targeting the first enemy.
struct Scripted {
    name:       &'static str,
    confidence: f32,
    exempt:     bool,
}

impl Scripted {
    fn new(name: &'static str, confidence: f32) -> Self {
        Self { name, confidence, exempt: false }
    }
}

impl Tactic for Scripted {
    fn name(&self) -> &'static str {
        self.name
    }
    fn is_applicable(&self, _agent: AgentId, _ctx: &DecisionContext<'_>) -> bool {
        true
    }
    fn generate_idea(
        &self,
        _agent: AgentId,
        ctx:    &DecisionContext<'_>,
    ) -> Result<Option<Idea>, TacticError> {
        let mut ev = Evidence::new();
        ev.push("base", self.confidence);
        let mut idea = Idea::scored(self.confidence, ev);
        if let Some(&enemy) = ctx.world.enemies().first() {
            idea = idea.with_target(Target::Agent(enemy));
        }
        if self.exempt {
            idea = idea.cooldown_exempt();
        }
        Ok(Some(idea))
    }
}

/// Group tactic: everyone proposes mobbing the first enemy.
struct Hunt {
    quorum: usize,
}

impl Tactic for Hunt {
    fn name(&self) -> &'static str {
        "hunt"
    }
    fn is_group(&self) -> bool {
        true
    }
    fn min_quorum(&self) -> usize {
        self.quorum
    }
    fn is_applicable(&self, _agent: AgentId, _ctx: &DecisionContext<'_>) -> bool {
        true
    }
    fn generate_idea(
        &self,
        _agent: AgentId,
        ctx:    &DecisionContext<'_>,
    ) -> Result<Option<Idea>, TacticError> {
        let Some(&enemy) = ctx.world.enemies().first() else {
            return Ok(None);
        };
        let mut ev = Evidence::new();
        ev.push("pack", 0.6);
        Ok(Some(Idea::scored(0.6, ev).with_target(Target::Agent(enemy))))
    }
}

/// Tactic whose scoring always faults.
struct Broken;

impl Tactic for Broken {
    fn name(&self) -> &'static str {
        "broken"
    }
    fn is_applicable(&self, _agent: AgentId, _ctx: &DecisionContext<'_>) -> bool {
        true
    }
    fn generate_idea(
        &self,
        agent: AgentId,
        _ctx:  &DecisionContext<'_>,
    ) -> Result<Option<Idea>, TacticError> {
        Err(TacticError::Scoring {
            tactic: "broken",
            agent,
            reason: "synthetic fault".to_string(),
        })
    }
}

/// Ability that attacks the context target.
struct Strike {
    name:     &'static str,
    priority: i32,
}

impl Ability for Strike {
    fn name(&self) -> &'static str {
        self.name
    }
    fn goal_filter(&self) -> GoalFilter {
        GoalFilter::Only(Goal::Engage)
    }
    fn priority(&self) -> i32 {
        self.priority
    }
    fn can_use(&self, _agent: AgentId, ctx: &AbilityContext, _world: &dyn WorldView) -> bool {
        ctx.target.is_some()
    }
    fn execute(
        &self,
        agent: AgentId,
        ctx:   &mut AbilityContext,
        _world: &dyn WorldView,
        sink:  &mut dyn CommandSink,
    ) -> Result<Dispatch, AbilityError> {
        let target = ctx
            .target
            .ok_or(AbilityError::MissingTarget { ability: self.name })?;
        sink.issue(&[agent], Command::Attack { target });
        ctx.mark_issued(self.name);
        Ok(Dispatch::Issued)
    }
}

/// Ability that passes `can_use` but always declines at execution.
struct Hesitant;

impl Ability for Hesitant {
    fn name(&self) -> &'static str {
        "hesitant"
    }
    fn goal_filter(&self) -> GoalFilter {
        GoalFilter::Only(Goal::Engage)
    }
    fn priority(&self) -> i32 {
        100
    }
    fn can_use(&self, _agent: AgentId, _ctx: &AbilityContext, _world: &dyn WorldView) -> bool {
        true
    }
    fn execute(
        &self,
        _agent: AgentId,
        _ctx:   &mut AbilityContext,
        _world: &dyn WorldView,
        _sink:  &mut dyn CommandSink,
    ) -> Result<Dispatch, AbilityError> {
        Ok(Dispatch::Declined)
    }
}

fn strike_engine(tactics: Vec<Box<dyn Tactic>>) -> Engine {
    let mut builder = EngineBuilder::new().ability(
        SOLDIER,
        Box::new(Strike { name: "strike", priority: 10 }),
    );
    for t in tactics {
        builder = builder.tactic(t);
    }
    builder.build().unwrap()
}

// ── SuppressionLedger ─────────────────────────────────────────────────────────

#[cfg(test)]
mod ledger_tests {
    use super::*;

    #[test]
    fn worked_example() {
        let mut ledger = SuppressionLedger::new(0.40, 50);
        let a = AgentId(7);

        assert_eq!(ledger.check(a, 0.35, Tick(100), false), Verdict::BelowFloor);
        assert_eq!(ledger.accept(a, 0.55, Tick(100), false), Verdict::Accepted);
        assert_eq!(ledger.last_accepted(a), Some(Tick(100)));

        assert_eq!(ledger.check(a, 0.90, Tick(130), false), Verdict::Cooldown);
        assert_eq!(ledger.check(a, 0.90, Tick(150), false), Verdict::Accepted);
        assert_eq!(ledger.check(a, 0.90, Tick(151), false), Verdict::Accepted);
    }

    #[test]
    fn exempt_skips_window_but_not_floor() {
        let mut ledger = SuppressionLedger::new(0.40, 50);
        let a = AgentId(1);
        ledger.accept(a, 0.80, Tick(10), false);

        // Inside the window, an exempt idea still passes...
        assert_eq!(ledger.check(a, 0.50, Tick(20), true), Verdict::Accepted);
        // ...but never below the floor.
        assert_eq!(ledger.check(a, 0.30, Tick(20), true), Verdict::BelowFloor);
    }

    #[test]
    fn exempt_acceptance_leaves_no_stamp() {
        let mut ledger = SuppressionLedger::new(0.40, 50);
        let a = AgentId(2);

        assert_eq!(ledger.accept(a, 0.80, Tick(10), true), Verdict::Accepted);
        assert_eq!(ledger.last_accepted(a), None);

        // A non-exempt idea right after is therefore unblocked.
        assert_eq!(ledger.accept(a, 0.80, Tick(11), false), Verdict::Accepted);
        assert_eq!(ledger.last_accepted(a), Some(Tick(11)));
    }

    #[test]
    fn stamp_all_and_forget() {
        let mut ledger = SuppressionLedger::new(0.40, 50);
        let posse = [AgentId(1), AgentId(2), AgentId(3)];
        ledger.stamp_all(&posse, Tick(5));
        assert_eq!(ledger.len(), 3);
        for &a in &posse {
            assert_eq!(ledger.check(a, 0.9, Tick(6), false), Verdict::Cooldown);
        }
        ledger.forget(AgentId(2));
        assert_eq!(ledger.check(AgentId(2), 0.9, Tick(6), false), Verdict::Accepted);
    }
}

// ── Selector ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod selector_tests {
    use super::*;
    use arb_ability::AbilityRegistry;

    fn idea_with_target() -> Idea {
        Idea::scored(0.7, Evidence::new()).with_target(Target::Agent(AgentId(900)))
    }

    #[test]
    fn priority_order_is_deterministic() {
        let mut registry = AbilityRegistry::new();
        registry.register(SOLDIER, Box::new(Strike { name: "low", priority: 1 }));
        registry.register(SOLDIER, Box::new(Strike { name: "high", priority: 9 }));

        let world = TestWorld::with_agents(1);
        let tactic = Scripted::new("s", 0.7);
        let idea = idea_with_target();

        for _ in 0..3 {
            let mut sink = RecordingSink::default();
            let r = execute_idea(&tactic, AgentId(0), &idea, &registry, &world, &mut sink)
                .unwrap();
            assert_eq!(r, Resolution::Ability("high"));
            assert_eq!(sink.issued.len(), 1);
        }
    }

    #[test]
    fn decline_falls_through_to_next_candidate() {
        let mut registry = AbilityRegistry::new();
        registry.register(SOLDIER, Box::new(Hesitant));
        registry.register(SOLDIER, Box::new(Strike { name: "strike", priority: 1 }));

        let world = TestWorld::with_agents(1);
        let tactic = Scripted::new("s", 0.7);
        let mut sink = RecordingSink::default();
        let r = execute_idea(&tactic, AgentId(0), &idea_with_target(), &registry, &world, &mut sink)
            .unwrap();
        assert_eq!(r, Resolution::Ability("strike"));
    }

    #[test]
    fn prebuilt_context_overrides_goal_mapping() {
        let mut registry = AbilityRegistry::new();
        registry.register(SOLDIER, Box::new(Strike { name: "strike", priority: 1 }));

        // Tactic's static goal is Engage, but the idea carries a Retreat
        // context, so the Engage-only ability must not fire.
        let ctx = AbilityContext::for_goal(Goal::Retreat)
            .with_target(Target::Agent(AgentId(900)))
            .with_confidence(0.7);
        let idea = Idea::scored(0.7, Evidence::new()).with_context(ctx);

        let world = TestWorld::with_agents(1);
        let tactic = Scripted::new("s", 0.7);
        let mut sink = RecordingSink::default();
        let r = execute_idea(&tactic, AgentId(0), &idea, &registry, &world, &mut sink).unwrap();
        assert_eq!(r, Resolution::Unresolved);
        assert!(sink.issued.is_empty());
    }

    #[test]
    fn empty_registry_reaches_legacy_path() {
        struct LegacyOnly;
        impl Tactic for LegacyOnly {
            fn name(&self) -> &'static str {
                "legacy-only"
            }
            fn is_applicable(&self, _a: AgentId, _c: &DecisionContext<'_>) -> bool {
                true
            }
            fn generate_idea(
                &self,
                _a: AgentId,
                _c: &DecisionContext<'_>,
            ) -> Result<Option<Idea>, TacticError> {
                Ok(None)
            }
            fn execute_legacy(
                &self,
                agent: AgentId,
                _idea: &Idea,
                world: &dyn WorldView,
                sink:  &mut dyn CommandSink,
            ) -> Result<Dispatch, TacticError> {
                if let Some(at) = world.position_of(agent) {
                    sink.issue(&[agent], Command::HoldAt { at });
                    return Ok(Dispatch::Issued);
                }
                Ok(Dispatch::Declined)
            }
        }

        let registry = AbilityRegistry::new();
        let world = TestWorld::with_agents(1);
        let mut sink = RecordingSink::default();
        let r = execute_idea(
            &LegacyOnly,
            AgentId(0),
            &idea_with_target(),
            &registry,
            &world,
            &mut sink,
        )
        .unwrap();
        assert_eq!(r, Resolution::Legacy);
        assert_eq!(sink.issued.len(), 1);
    }
}

// ── Engine pipeline ───────────────────────────────────────────────────────────

#[cfg(test)]
mod engine_tests {
    use super::*;

    #[test]
    fn one_command_per_agent_per_pass() {
        let mut engine = strike_engine(vec![
            Box::new(Scripted::new("eager", 0.9)),
            Box::new(Scripted::new("meek", 0.5)),
        ]);
        let world = TestWorld::with_agents(3);
        let signals = SignalSnapshot::default();
        let mut sink = RecordingSink::default();
        let mut rec = Recorder::default();

        let report = engine.run_tick(Tick(10), &signals, &world, &mut sink, &mut rec);

        // Two tactics scored per agent, but exactly one command per agent.
        assert_eq!(report.ideas_generated, 6);
        assert_eq!(report.executed, 3);
        assert_eq!(sink.issued.len(), 3);
        for (agent, tactic, _) in &rec.dispatches {
            assert_eq!(*tactic, "eager", "winner must be the higher confidence for {agent}");
        }
    }

    #[test]
    fn equal_confidence_breaks_to_earlier_slot() {
        let mut engine = strike_engine(vec![
            Box::new(Scripted::new("first", 0.7)),
            Box::new(Scripted::new("second", 0.7)),
        ]);
        let world = TestWorld::with_agents(1);
        let signals = SignalSnapshot::default();
        let mut sink = RecordingSink::default();
        let mut rec = Recorder::default();

        engine.run_tick(Tick(10), &signals, &world, &mut sink, &mut rec);
        assert_eq!(rec.dispatches.len(), 1);
        assert_eq!(rec.dispatches[0].1, "first");
    }

    #[test]
    fn accepted_agents_cool_down() {
        let mut engine = strike_engine(vec![Box::new(Scripted::new("eager", 0.9))]);
        let world = TestWorld::with_agents(2);
        let signals = SignalSnapshot::default();
        let mut sink = RecordingSink::default();
        let mut rec = Recorder::default();

        let first = engine.run_tick(Tick(10), &signals, &world, &mut sink, &mut rec);
        assert_eq!(first.executed, 2);

        // Tick 20 is on the idea cadence but inside the 50-tick window.
        let second = engine.run_tick(Tick(20), &signals, &world, &mut sink, &mut rec);
        assert_eq!(second.executed, 0);
        assert_eq!(second.suppressed, 2);

        // Past the window the agents are live again.
        let third = engine.run_tick(Tick(60), &signals, &world, &mut sink, &mut rec);
        assert_eq!(third.executed, 2);
    }

    #[test]
    fn group_below_quorum_issues_nothing_and_leaves_no_stamp() {
        let mut engine = strike_engine(vec![Box::new(Hunt { quorum: 3 })]);
        let world = TestWorld::with_agents(2);
        let signals = SignalSnapshot::default();
        let mut sink = RecordingSink::default();
        let mut rec = Recorder::default();

        let report = engine.run_tick(Tick(10), &signals, &world, &mut sink, &mut rec);
        assert_eq!(report.group_commits, 0);
        assert_eq!(report.group_dropped, 1);
        assert!(sink.issued.is_empty());

        // No stamps: the very next pass the same agents are still Accepted.
        rec.verdicts.clear();
        engine.run_tick(Tick(20), &signals, &world, &mut sink, &mut rec);
        assert!(rec.verdicts.iter().all(|(_, v)| v.is_accepted()));
    }

    #[test]
    fn group_at_quorum_issues_one_command_and_stamps_all() {
        let mut engine = strike_engine(vec![Box::new(Hunt { quorum: 3 })]);
        let world = TestWorld::with_agents(3);
        let signals = SignalSnapshot::default();
        let mut sink = RecordingSink::default();
        let mut rec = Recorder::default();

        let report = engine.run_tick(Tick(10), &signals, &world, &mut sink, &mut rec);
        assert_eq!(report.group_commits, 1);
        assert_eq!(sink.issued.len(), 1);
        let (agents, command) = &sink.issued[0];
        assert_eq!(agents.len(), 3);
        assert_eq!(*command, Command::Attack { target: Target::Agent(AgentId(900)) });
        assert_eq!(rec.group_commits.len(), 1);

        // All members stamped: next pass is fully suppressed.
        let second = engine.run_tick(Tick(20), &signals, &world, &mut sink, &mut rec);
        assert_eq!(second.suppressed, 3);
        assert_eq!(second.group_commits, 0);
    }

    #[test]
    fn group_with_dead_target_drops() {
        let mut engine = strike_engine(vec![Box::new(Hunt { quorum: 2 })]);
        let mut world = TestWorld::with_agents(3);
        world.dead.push(AgentId(900));
        let signals = SignalSnapshot::default();
        let mut sink = RecordingSink::default();
        let mut rec = Recorder::default();

        let report = engine.run_tick(Tick(10), &signals, &world, &mut sink, &mut rec);
        assert_eq!(report.group_commits, 0);
        assert_eq!(report.group_dropped, 1);
        assert!(sink.issued.is_empty());
    }

    #[test]
    fn faults_are_contained_per_agent() {
        let mut engine = strike_engine(vec![
            Box::new(Broken),
            Box::new(Scripted::new("eager", 0.9)),
        ]);
        let world = TestWorld::with_agents(2);
        let signals = SignalSnapshot::default();
        let mut sink = RecordingSink::default();
        let mut rec = Recorder::default();

        let report = engine.run_tick(Tick(10), &signals, &world, &mut sink, &mut rec);
        // Broken faults once per agent; the healthy tactic still executes.
        assert_eq!(report.faults, 2);
        assert_eq!(report.executed, 2);
    }

    #[test]
    fn off_cadence_ticks_skip_the_idea_pipeline() {
        let mut engine = strike_engine(vec![Box::new(Scripted::new("eager", 0.9))]);
        let world = TestWorld::with_agents(2);
        let signals = SignalSnapshot::default();
        let mut sink = RecordingSink::default();
        let mut rec = Recorder::default();

        let report = engine.run_tick(Tick(13), &signals, &world, &mut sink, &mut rec);
        assert_eq!(report.ideas_generated, 0);
        assert!(sink.issued.is_empty());
    }

    #[test]
    fn dead_agents_are_skipped() {
        let mut engine = strike_engine(vec![Box::new(Scripted::new("eager", 0.9))]);
        let mut world = TestWorld::with_agents(3);
        world.dead.push(AgentId(1));
        let signals = SignalSnapshot::default();
        let mut sink = RecordingSink::default();
        let mut rec = Recorder::default();

        let report = engine.run_tick(Tick(10), &signals, &world, &mut sink, &mut rec);
        assert_eq!(report.executed, 2);
        assert!(rec.dispatches.iter().all(|(a, _, _)| *a != AgentId(1)));
    }

    #[test]
    fn passive_agents_use_their_own_ledger_tuning() {
        // Passive floor 0.35 accepts what the mobile floor 0.40 rejects.
        let mut engine = strike_engine(vec![Box::new(Scripted::new("steady", 0.37))]);
        let mut world = TestWorld::with_agents(2);
        world.passive.push(AgentId(0));
        let signals = SignalSnapshot::default();
        let mut sink = RecordingSink::default();
        let mut rec = Recorder::default();

        engine.run_tick(Tick(10), &signals, &world, &mut sink, &mut rec);
        let verdict_of = |agent| {
            rec.verdicts
                .iter()
                .find(|(a, _)| *a == agent)
                .map(|(_, v)| *v)
                .unwrap()
        };
        assert_eq!(verdict_of(AgentId(0)), Verdict::Accepted);
        assert_eq!(verdict_of(AgentId(1)), Verdict::BelowFloor);
    }

    #[test]
    fn hand_built_batch_with_stale_slot_is_contained() {
        // The phase methods are public, so a host can hand the engine a
        // batch whose slots the engine never assigned.
        let mut engine = strike_engine(vec![Box::new(Scripted::new("eager", 0.9))]);
        let world = TestWorld::with_agents(1);
        let mut sink = RecordingSink::default();

        // Idea::scored leaves the slot at the INVALID sentinel.
        let batch = IdeaBatch {
            individual: vec![ScoredIdea {
                agent: AgentId(0),
                idea:  Idea::scored(0.9, Evidence::new()),
            }],
            ..IdeaBatch::default()
        };
        let (executed, faults) =
            engine.execute_individual(&batch, Tick(10), &world, &mut sink, &mut NoopObserver);
        assert_eq!(executed, 0);
        assert_eq!(faults, 1);
        assert!(sink.issued.is_empty());

        // Same for a group bucket keyed by an unregistered slot.
        let mut batch = IdeaBatch::default();
        batch.group.entry(TacticId(99)).or_default().push(ScoredIdea {
            agent: AgentId(0),
            idea:  Idea::scored(0.9, Evidence::new()).with_target(Target::Agent(AgentId(900))),
        });
        let (commits, dropped) =
            engine.consolidate_groups(&mut batch, Tick(10), &world, &mut sink, &mut NoopObserver);
        assert_eq!(commits, 0);
        assert_eq!(dropped, 1);
        assert!(sink.issued.is_empty());
    }

    #[test]
    fn builder_rejects_bad_config() {
        let bad = EngineConfig {
            confidence_floor: f32::NAN,
            ..EngineConfig::default()
        };
        assert!(EngineBuilder::new().config(bad).build().is_err());
    }
}
