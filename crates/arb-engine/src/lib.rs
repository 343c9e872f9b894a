//! `arb-engine` — the arbitration pipeline that ties the framework together.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`ledger`]   | `SuppressionLedger`, `Verdict` — floor + cooldown gates   |
//! | [`selector`] | Two-tier idea execution (abilities, then legacy path)     |
//! | [`engine`]   | `Engine`, `IdeaBatch`, `TickReport` — the pipeline itself |
//! | [`observer`] | `DecisionObserver` host hooks                             |
//! | [`builder`]  | `EngineBuilder` — validated construction                  |
//! | [`error`]    | `EngineError`, `EngineResult<T>`                          |
//!
//! # Ownership
//!
//! The host owns one `Engine`; the engine owns the tactic catalog, the
//! ability registry, both suppression ledgers, and the strategy machine.
//! World state never crosses into the engine — it is borrowed per call as
//! `&dyn WorldView` and mutated only through `&mut dyn CommandSink`.  There
//! are no global singletons anywhere in the framework.
//!
//! # Determinism
//!
//! Given the same tick stream, signals, and world answers, the pipeline
//! produces the same decisions: catalog order breaks confidence ties, group
//! buckets commit in slot order, and nothing in the hot path consults a
//! clock or RNG.

pub mod builder;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod observer;
pub mod selector;

#[cfg(test)]
mod tests;

pub use builder::EngineBuilder;
pub use engine::{Engine, IdeaBatch, ScoredIdea, TickReport};
pub use error::{EngineError, EngineResult};
pub use ledger::{SuppressionLedger, Verdict};
pub use observer::{DecisionObserver, NoopObserver};
pub use selector::{Resolution, execute_idea};
