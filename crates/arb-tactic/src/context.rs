//! Read-only decision state passed to every tactic callback.

use arb_core::{SignalSnapshot, Tick, WorldView};
use arb_strategy::{ModeProfile, StrategyMode};

/// A read-only snapshot of everything scoring is allowed to see.
///
/// Built once per pipeline pass by the engine and shared (immutably) across
/// all per-agent tactic calls.  Tactics read the signal snapshot and the
/// active mode's bias profile from here; they query the world through the
/// borrowed [`WorldView`].
///
/// # Lifetimes
///
/// All borrows live for the duration of one tick's idea phase.  The engine
/// never mutates the ledger, registry, or machine while a `DecisionContext`
/// is live.
pub struct DecisionContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// The per-tick evidence bundle computed by the host's metrics layer.
    pub signals: &'a SignalSnapshot,

    /// The active global posture.  Provided for logging; scoring should
    /// read [`profile`](Self::profile) instead of matching on this.
    pub mode: StrategyMode,

    /// The active mode's additive bias bundle — the only strategy input
    /// tactic scoring consumes.
    pub profile: ModeProfile,

    /// Read-only query surface over the host's world.
    pub world: &'a dyn WorldView,
}

impl<'a> DecisionContext<'a> {
    /// Build a context for one pipeline pass.
    pub fn new(
        tick:    Tick,
        signals: &'a SignalSnapshot,
        mode:    StrategyMode,
        world:   &'a dyn WorldView,
    ) -> Self {
        Self { tick, signals, mode, profile: mode.profile(), world }
    }
}
