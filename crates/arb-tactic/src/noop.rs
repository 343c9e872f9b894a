//! A no-op tactic — never applicable, never produces ideas.

use arb_core::AgentId;

use crate::{DecisionContext, Idea, Tactic, TacticError};

/// A [`Tactic`] that declines every agent.
///
/// Useful as a catalog placeholder in tests and for reserving a catalog
/// slot before a real implementation lands.
pub struct NoopTactic;

impl Tactic for NoopTactic {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn is_applicable(&self, _agent: AgentId, _ctx: &DecisionContext<'_>) -> bool {
        false
    }

    fn generate_idea(
        &self,
        _agent: AgentId,
        _ctx:   &DecisionContext<'_>,
    ) -> Result<Option<Idea>, TacticError> {
        Ok(None)
    }
}
