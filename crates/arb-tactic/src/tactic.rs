//! The `Tactic` trait — the intent extension point.

use arb_ability::{Dispatch, Goal};
use arb_core::{AgentId, CommandSink, WorldView};

use crate::{DecisionContext, Idea, TacticError};

/// Pluggable decision rule: one source of evidence about what an agent
/// should attempt.
///
/// The catalog is an open set of implementations stored as trait objects;
/// the engine dispatches through this interface and never type-switches on
/// concrete tactics.
///
/// # Contract
///
/// - `is_applicable` is a fast gate; keep it cheap, the engine calls it for
///   every agent/tactic pair each pass.
/// - `generate_idea` is pure: no shared-state mutation while scoring, and
///   every additive confidence term recorded in the idea's evidence.
/// - Group tactics (`is_group` true) are never executed individually; the
///   engine buckets their ideas and applies the quorum test after all
///   agents are processed.
pub trait Tactic: Send + Sync {
    /// Stable name used in logs and the audit trail.
    fn name(&self) -> &'static str;

    /// Group tactics require quorum consolidation instead of individual
    /// execution.
    fn is_group(&self) -> bool {
        false
    }

    /// Minimum participants before a group idea commits.  Ignored for
    /// individual tactics.
    fn min_quorum(&self) -> usize {
        2
    }

    /// The goal tag the selector uses when synthesizing an ability context
    /// for ideas that don't carry a pre-built one.  This *is* the static
    /// tactic-to-goal mapping of the legacy compatibility path; tactics
    /// that build their own contexts can ignore it.
    fn goal(&self) -> Goal {
        Goal::Engage
    }

    /// Fast eligibility gate for this agent right now.
    fn is_applicable(&self, agent: AgentId, ctx: &DecisionContext<'_>) -> bool;

    /// Score this tactic for `agent`.
    ///
    /// `Ok(None)` means "not applicable right now" — ordinary control flow.
    /// `Err` is a genuine fault in the scoring logic; the engine logs it
    /// with agent/tactic/tick context and treats it as no idea, without
    /// aborting the tick for other agents.
    fn generate_idea(
        &self,
        agent: AgentId,
        ctx:   &DecisionContext<'_>,
    ) -> Result<Option<Idea>, TacticError>;

    /// Legacy execution path, used when no registered ability fires for the
    /// winning idea.  Kept for incremental migration of tactics onto the
    /// ability system; the default declines so pure-ability tactics need
    /// not implement it.
    fn execute_legacy(
        &self,
        _agent: AgentId,
        _idea:  &Idea,
        _world: &dyn WorldView,
        _sink:  &mut dyn CommandSink,
    ) -> Result<Dispatch, TacticError> {
        Ok(Dispatch::Declined)
    }
}
