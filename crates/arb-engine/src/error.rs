use arb_ability::AbilityError;
use arb_core::TacticId;
use arb_strategy::StrategyError;
use arb_tactic::TacticError;
use thiserror::Error;

/// Faults surfaced by the engine.
///
/// Per-agent faults ([`Ability`][EngineError::Ability] and
/// [`Tactic`][EngineError::Tactic]) are contained inside the pipeline: the
/// engine logs them, counts them in the tick report, and carries on with the
/// remaining agents.  Configuration faults abort construction.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine config: {0}")]
    Config(String),

    #[error(transparent)]
    Strategy(#[from] StrategyError),

    #[error(transparent)]
    Ability(#[from] AbilityError),

    #[error(transparent)]
    Tactic(#[from] TacticError),

    #[error("no tactic registered at catalog slot {0}")]
    UnknownTactic(TacticId),
}

pub type EngineResult<T> = Result<T, EngineError>;
