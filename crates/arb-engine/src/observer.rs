//! `DecisionObserver` — host-side hook points on the decision pipeline.
//!
//! The engine reports what it decided; the observer decides what to do with
//! that (commentary, metrics, replay capture).  All methods default to
//! no-ops so hosts implement only what they care about.

use arb_core::{AgentId, Target, Tick};
use arb_strategy::Switch;
use arb_tactic::Idea;

use crate::{Resolution, TickReport, Verdict};

/// Callbacks fired as the pipeline runs.  Borrowed mutably for one tick.
pub trait DecisionObserver {
    /// An agent's best idea, after suppression was applied.  Fired for every
    /// winning idea, accepted or not — the verdict says which.
    fn on_idea(&mut self, _agent: AgentId, _idea: &Idea, _verdict: Verdict, _tick: Tick) {}

    /// An individual idea finished execution (including `Unresolved`).
    fn on_dispatch(
        &mut self,
        _agent:      AgentId,
        _tactic:     &'static str,
        _resolution: Resolution,
        _tick:       Tick,
    ) {
    }

    /// A group bucket passed quorum and issued its coordinated command.
    fn on_group_commit(
        &mut self,
        _tactic: &'static str,
        _agents: &[AgentId],
        _target: Target,
        _tick:   Tick,
    ) {
    }

    /// The strategy machine committed a posture change.
    fn on_mode_switch(&mut self, _switch: &Switch) {}

    /// The pipeline finished a full pass.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl DecisionObserver for NoopObserver {}
