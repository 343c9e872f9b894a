use thiserror::Error;

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("strategy configuration error: {0}")]
    Config(String),
}

pub type StrategyResult<T> = Result<T, StrategyError>;
