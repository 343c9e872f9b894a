use thiserror::Error;

use arb_core::AgentId;

/// Faults raised by user-supplied tactic logic.
///
/// These are the Rust rendering of "an exception inside one tactic": the
/// engine catches them at the per-agent boundary, logs them with full
/// context, and moves on.  A tactic declining is `Ok(None)`, never an error.
#[derive(Debug, Error)]
pub enum TacticError {
    #[error("tactic {tactic} failed while scoring {agent}: {reason}")]
    Scoring {
        tactic: &'static str,
        agent:  AgentId,
        reason: String,
    },

    #[error("tactic {tactic} failed while executing for {agent}: {reason}")]
    Execution {
        tactic: &'static str,
        agent:  AgentId,
        reason: String,
    },
}

pub type TacticResult<T> = Result<T, TacticError>;
