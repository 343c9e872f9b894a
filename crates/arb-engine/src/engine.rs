//! `Engine` — the tick-driven arbitration pipeline.
//!
//! One `Engine` owns everything the decision core needs between ticks: the
//! tactic catalog, the ability registry, the two suppression ledgers, and
//! the strategy machine.  The host owns the engine and drives it with
//! [`Engine::run_tick`]; world state stays on the host side behind
//! `WorldView`/`CommandSink` borrows.
//!
//! # Pipeline phases
//!
//! 1. **Strategy** — evaluate the mode machine (it self-gates to its own
//!    cadence).
//! 2. **Generate & filter** — per agent, score every applicable tactic,
//!    keep the strictly best idea, apply suppression.
//! 3. **Consolidate** — bucket surviving group ideas by tactic, apply the
//!    quorum test, issue one coordinated command per committed bucket.
//! 4. **Execute** — resolve each surviving individual idea through the
//!    ability registry, falling back to the tactic's legacy path.
//!
//! Phases 2–4 run only on the idea cadence; phase 1 runs every call.
//! The phase methods are public so hosts (and tests) can drive a partial
//! pipeline, but `run_tick` is the intended entry point.

use arb_ability::{Ability, AbilityRegistry};
use arb_core::{
    AgentId, Command, CommandSink, EngineConfig, KindId, SignalSnapshot, TacticId, Tick, WorldView,
};
use arb_strategy::{StrategyMachine, StrategyMode, Switch};
use arb_tactic::{DecisionContext, Idea, Tactic};
use rustc_hash::FxHashMap;

use crate::{DecisionObserver, EngineError, SuppressionLedger, execute_idea};

// ── Batch types ───────────────────────────────────────────────────────────────

/// One agent's winning idea, post-suppression.
#[derive(Clone, Debug)]
pub struct ScoredIdea {
    pub agent: AgentId,
    pub idea:  Idea,
}

/// Output of the generate-and-filter phase.
///
/// Individual ideas have already stamped their ledger; group ideas have
/// only been *checked* — they stamp when (and only when) their bucket
/// commits.
#[derive(Default)]
pub struct IdeaBatch {
    pub individual: Vec<ScoredIdea>,
    pub group:      FxHashMap<TacticId, Vec<ScoredIdea>>,
    pub generated:  usize,
    pub suppressed: usize,
    pub faults:     usize,
}

/// Per-tick accounting returned by [`Engine::run_tick`].
#[derive(Clone, Debug, Default)]
pub struct TickReport {
    /// Ideas produced by tactics (before arbitration and suppression).
    pub ideas_generated: usize,
    /// Winning ideas rejected by a suppression ledger.
    pub suppressed: usize,
    /// Individual ideas that issued a command (ability or legacy path).
    pub executed: usize,
    /// Group buckets that passed quorum and issued.
    pub group_commits: usize,
    /// Group buckets dropped for missing quorum or a dead target.
    pub group_dropped: usize,
    /// Contained per-agent faults (logged, not propagated).
    pub faults: usize,
    /// Set on the tick a strategy switch committed.
    pub mode_switch: Option<Switch>,
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// Owns the catalog, registry, ledgers, and strategy machine.
pub struct Engine {
    catalog:  Vec<Box<dyn Tactic>>,
    registry: AbilityRegistry,
    strategy: StrategyMachine,
    config:   EngineConfig,

    mobile_ledger:  SuppressionLedger,
    passive_ledger: SuppressionLedger,
}

impl Engine {
    /// Engine with the given tuning, the default strategy machine, and an
    /// empty catalog/registry.  Prefer [`EngineBuilder`] for full setup.
    ///
    /// [`EngineBuilder`]: crate::EngineBuilder
    pub fn new(config: EngineConfig, strategy: StrategyMachine) -> Self {
        let mobile_ledger =
            SuppressionLedger::new(config.confidence_floor, config.cooldown_ticks);
        let passive_ledger =
            SuppressionLedger::new(config.passive_floor, config.passive_cooldown_ticks);
        Self {
            catalog: Vec::new(),
            registry: AbilityRegistry::new(),
            strategy,
            config,
            mobile_ledger,
            passive_ledger,
        }
    }

    // ── Setup ─────────────────────────────────────────────────────────────

    /// Append a tactic to the catalog and return its slot.
    ///
    /// Catalog order is arbitration order: on equal confidence the earlier
    /// slot wins, and registration order never changes after setup.
    pub fn register_tactic(&mut self, tactic: Box<dyn Tactic>) -> TacticId {
        let slot = TacticId(self.catalog.len() as u16);
        log::debug!("catalog[{}] = {}", slot.0, tactic.name());
        self.catalog.push(tactic);
        slot
    }

    /// Register an ability for an agent kind.
    pub fn register_ability(&mut self, kind: KindId, ability: Box<dyn Ability>) {
        self.registry.register(kind, ability);
    }

    // ── Introspection ─────────────────────────────────────────────────────

    #[inline]
    pub fn mode(&self) -> StrategyMode {
        self.strategy.current()
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn registry(&self) -> &AbilityRegistry {
        &self.registry
    }

    #[inline]
    pub fn tactic_name(&self, slot: TacticId) -> Option<&'static str> {
        self.catalog.get(slot.index()).map(|t| t.name())
    }

    /// Startup-log listing of the catalog.
    pub fn catalog_summary(&self) -> String {
        self.catalog
            .iter()
            .enumerate()
            .map(|(i, t)| {
                if t.is_group() {
                    format!("  [{i}] {} (group, quorum {})", t.name(), t.min_quorum())
                } else {
                    format!("  [{i}] {}", t.name())
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    // ── Phase 1: strategy ─────────────────────────────────────────────────

    /// Evaluate the strategy machine.  Self-gated to its own cadence.
    pub fn update_strategy(&mut self, tick: Tick, signals: &SignalSnapshot) -> Option<Switch> {
        self.strategy.update(tick, signals)
    }

    // ── Phase 2: generate & filter ────────────────────────────────────────

    /// Score every applicable tactic for every living agent, arbitrate to
    /// one best idea per agent, and apply suppression.
    pub fn generate_and_filter_ideas(
        &mut self,
        tick:     Tick,
        signals:  &SignalSnapshot,
        world:    &dyn WorldView,
        observer: &mut dyn DecisionObserver,
    ) -> IdeaBatch {
        let ctx = DecisionContext::new(tick, signals, self.strategy.current(), world);
        let mut batch = IdeaBatch::default();

        for agent in world.agents() {
            if !world.is_alive(agent) {
                continue;
            }

            let mut best: Option<(usize, Idea)> = None;
            for (slot, tactic) in self.catalog.iter().enumerate() {
                if !tactic.is_applicable(agent, &ctx) {
                    continue;
                }
                match tactic.generate_idea(agent, &ctx) {
                    Ok(None) => {}
                    Ok(Some(mut idea)) => {
                        batch.generated += 1;
                        idea.tactic = TacticId(slot as u16);
                        // Strict > keeps ties on the earlier catalog slot.
                        let wins = match &best {
                            None => true,
                            Some((_, b)) => idea.confidence > b.confidence,
                        };
                        if wins {
                            best = Some((slot, idea));
                        }
                    }
                    Err(e) => {
                        batch.faults += 1;
                        log::error!("{tick} {agent}: tactic {} fault: {e}", tactic.name());
                    }
                }
            }

            let Some((slot, idea)) = best else { continue };
            let passive = world.is_passive(agent);
            let is_group = self.catalog[slot].is_group();

            // Individual ideas stamp on acceptance; group ideas are only
            // checked here and stamp at bucket commit.
            let ledger = if passive {
                &mut self.passive_ledger
            } else {
                &mut self.mobile_ledger
            };
            let verdict = if is_group {
                ledger.check(agent, idea.confidence, tick, idea.cooldown_exempt)
            } else {
                ledger.accept(agent, idea.confidence, tick, idea.cooldown_exempt)
            };

            observer.on_idea(agent, &idea, verdict, tick);
            if !verdict.is_accepted() {
                batch.suppressed += 1;
                log::trace!(
                    "{tick} {agent}: idea from slot {slot} suppressed ({verdict:?}, conf {:.2})",
                    idea.confidence,
                );
                continue;
            }

            let scored = ScoredIdea { agent, idea };
            if is_group {
                batch.group.entry(TacticId(slot as u16)).or_default().push(scored);
            } else {
                batch.individual.push(scored);
            }
        }

        batch
    }

    // ── Phase 3: group consolidation ──────────────────────────────────────

    /// Apply the quorum test to each group bucket; committed buckets issue
    /// one coordinated command and stamp every member's ledger.
    ///
    /// All-or-nothing: a bucket below quorum (or whose best target died
    /// between scoring and commit) drops entirely and leaves no ledger
    /// trace, so its members are immediately free for other ideas.
    pub fn consolidate_groups(
        &mut self,
        batch:    &mut IdeaBatch,
        tick:     Tick,
        world:    &dyn WorldView,
        sink:     &mut dyn CommandSink,
        observer: &mut dyn DecisionObserver,
    ) -> (usize, usize) {
        let mut commits = 0;
        let mut dropped = 0;

        // FxHashMap iteration order is arbitrary; sort by slot so commit
        // order is deterministic across runs.
        let mut slots: Vec<TacticId> = batch.group.keys().copied().collect();
        slots.sort();

        for slot in slots {
            let mut members = batch.group.remove(&slot).unwrap_or_default();
            let Some((name, quorum)) = self
                .catalog
                .get(slot.index())
                .map(|t| (t.name(), t.min_quorum()))
            else {
                // Only reachable with a hand-built batch.
                dropped += 1;
                log::error!("{tick}: {}", EngineError::UnknownTactic(slot));
                continue;
            };

            members.retain(|m| world.is_alive(m.agent));
            if members.len() < quorum {
                dropped += 1;
                log::debug!(
                    "{tick}: group {name} dropped ({} member(s), quorum {quorum})",
                    members.len(),
                );
                continue;
            }

            // The most confident member's target leads the posse.
            let leader = members
                .iter()
                .max_by(|a, b| {
                    a.idea.confidence
                        .partial_cmp(&b.idea.confidence)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .and_then(|m| m.idea.target);

            let Some(target) = leader else {
                dropped += 1;
                log::debug!("{tick}: group {name} dropped (no target)");
                continue;
            };
            if let Some(victim) = target.agent()
                && !world.is_alive(victim)
            {
                dropped += 1;
                log::debug!("{tick}: group {name} dropped (target {victim} dead)");
                continue;
            }

            let agents: Vec<AgentId> = members.iter().map(|m| m.agent).collect();
            sink.issue(&agents, Command::Attack { target });
            self.stamp_members(&members, world, tick);
            observer.on_group_commit(name, &agents, target, tick);
            log::info!("{tick}: group {name} committed with {} member(s)", agents.len());
            commits += 1;
        }

        (commits, dropped)
    }

    // ── Phase 4: individual execution ─────────────────────────────────────

    /// Resolve each surviving individual idea into a command (or nothing).
    ///
    /// Faults are contained per agent: logged, counted, never propagated.
    pub fn execute_individual(
        &mut self,
        batch:    &IdeaBatch,
        tick:     Tick,
        world:    &dyn WorldView,
        sink:     &mut dyn CommandSink,
        observer: &mut dyn DecisionObserver,
    ) -> (usize, usize) {
        let mut executed = 0;
        let mut faults = 0;

        for scored in &batch.individual {
            let Some(tactic) = self.catalog.get(scored.idea.tactic.index()) else {
                faults += 1;
                log::error!(
                    "{tick} {}: {}",
                    scored.agent,
                    EngineError::UnknownTactic(scored.idea.tactic),
                );
                continue;
            };
            match execute_idea(tactic.as_ref(), scored.agent, &scored.idea, &self.registry, world, sink) {
                Ok(resolution) => {
                    if resolution.issued() {
                        executed += 1;
                    }
                    observer.on_dispatch(scored.agent, tactic.name(), resolution, tick);
                    log::trace!("{tick} {}: {} -> {resolution:?}", scored.agent, tactic.name());
                }
                Err(e) => {
                    faults += 1;
                    log::error!("{tick} {}: {} execution fault: {e}", scored.agent, tactic.name());
                }
            }
        }

        (executed, faults)
    }

    // ── Full pass ─────────────────────────────────────────────────────────

    /// Run the complete pipeline for one tick.
    ///
    /// Strategy evaluation runs every call (self-gated); the idea pipeline
    /// runs only when `tick` lands on the idea cadence.
    pub fn run_tick(
        &mut self,
        tick:     Tick,
        signals:  &SignalSnapshot,
        world:    &dyn WorldView,
        sink:     &mut dyn CommandSink,
        observer: &mut dyn DecisionObserver,
    ) -> TickReport {
        let mut report = TickReport::default();

        report.mode_switch = self.update_strategy(tick, signals);
        if let Some(switch) = &report.mode_switch {
            observer.on_mode_switch(switch);
        }

        if !tick.is_due(self.config.idea_cadence_ticks) {
            return report;
        }

        let mut batch = self.generate_and_filter_ideas(tick, signals, world, observer);
        report.ideas_generated = batch.generated;
        report.suppressed = batch.suppressed;
        report.faults = batch.faults;

        let (commits, dropped) = self.consolidate_groups(&mut batch, tick, world, sink, observer);
        report.group_commits = commits;
        report.group_dropped = dropped;

        let (executed, faults) = self.execute_individual(&batch, tick, world, sink, observer);
        report.executed = executed;
        report.faults += faults;

        observer.on_tick_end(tick, &report);
        report
    }

    // ── Private ───────────────────────────────────────────────────────────

    fn stamp_members(&mut self, members: &[ScoredIdea], world: &dyn WorldView, tick: Tick) {
        for m in members {
            if m.idea.cooldown_exempt {
                continue;
            }
            if world.is_passive(m.agent) {
                self.passive_ledger.stamp(m.agent, tick);
            } else {
                self.mobile_ledger.stamp(m.agent, tick);
            }
        }
    }
}
