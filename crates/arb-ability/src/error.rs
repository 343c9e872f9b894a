use thiserror::Error;

use arb_core::AgentId;

/// Faults raised by user-supplied ability logic.
///
/// A fault is *not* "I chose not to act" — that is [`Dispatch::Declined`]
/// (see [`crate::Dispatch`]).  These errors mean the ability hit a state it
/// cannot reason about; the caller logs them with full context and treats
/// the agent as taking no action this tick.
#[derive(Debug, Error)]
pub enum AbilityError {
    #[error("ability {ability} failed for {agent}: {reason}")]
    Failed {
        ability: &'static str,
        agent:   AgentId,
        reason:  String,
    },

    #[error("ability {ability} requires a target but the context carries none")]
    MissingTarget { ability: &'static str },
}

pub type AbilityResult<T> = Result<T, AbilityError>;
