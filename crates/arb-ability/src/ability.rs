//! The `Ability` trait — the mechanism extension point.

use arb_core::{AgentId, CommandSink, KindId, WorldView};

use crate::{AbilityContext, AbilityError, GoalFilter};

/// Outcome of an execution attempt that did not fault.
///
/// `Declined` is ordinary control flow, not an error: the selector moves on
/// to the next candidate in priority order and finally to the tactic's
/// legacy path.  Only an `Err` from [`Ability::execute`] is a real fault.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Dispatch {
    /// A command was pushed into the sink.
    Issued,
    /// This ability chose not to act; try the next candidate.
    Declined,
}

impl Dispatch {
    #[inline]
    pub fn is_issued(self) -> bool {
        matches!(self, Dispatch::Issued)
    }
}

/// One concrete thing an agent can do.
///
/// Implementations are stateless: all runtime information flows in through
/// the [`AbilityContext`] and the world view.  Keep `execute` as close to a
/// single `sink.issue` call as possible — business logic about *when* to act
/// belongs in `can_use` or in the tactic layer.
///
/// # Contract
///
/// - `can_use` must be side-effect-free; the registry may probe many
///   candidates before one fires.
/// - `execute` must call [`AbilityContext::mark_issued`] when it pushes a
///   command, so the caller's audit trail stays truthful.
/// - Returning `Ok(Dispatch::Declined)` from `execute` is legal even after
///   `can_use` passed — the world is queried twice and may disagree; the
///   selector treats it as "try the next one".
pub trait Ability: Send + Sync {
    /// Stable unique name.  The registry replaces an existing entry with the
    /// same name on re-registration, and the audit log records it.
    fn name(&self) -> &'static str;

    /// Agent kinds this ability applies to.  Empty slice = universal.
    fn kinds(&self) -> &[KindId] {
        &[]
    }

    /// Which goals route to this ability.
    fn goal_filter(&self) -> GoalFilter;

    /// Tie-break among abilities serving the same goal: higher fires first.
    fn priority(&self) -> i32 {
        0
    }

    /// Fast eligibility gate.  Check targets, ranges, resource state — not
    /// confidence math, which belongs in tactics.
    fn can_use(&self, agent: AgentId, ctx: &AbilityContext, world: &dyn WorldView) -> bool;

    /// Perform the action: push a command into `sink` and mark the context.
    ///
    /// Return `Ok(Issued)` on dispatch, `Ok(Declined)` to pass, `Err` only
    /// for genuine faults (which the caller logs and contains).
    fn execute(
        &self,
        agent: AgentId,
        ctx:   &mut AbilityContext,
        world: &dyn WorldView,
        sink:  &mut dyn CommandSink,
    ) -> Result<Dispatch, AbilityError>;
}
