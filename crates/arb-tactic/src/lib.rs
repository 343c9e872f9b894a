//! `arb-tactic` — tactic trait and scored-idea types.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`idea`]    | `Idea` — a scored candidate decision with its evidence      |
//! | [`context`] | `DecisionContext<'a>` — read-only tick snapshot             |
//! | [`tactic`]  | `Tactic` trait                                              |
//! | [`noop`]    | `NoopTactic` — placeholder that never produces ideas        |
//! | [`error`]   | `TacticError`, `TacticResult<T>`                            |
//!
//! # Design notes
//!
//! The engine's per-agent loop works as follows:
//!
//! 1. For every registered tactic, in fixed catalog order, call
//!    `is_applicable`; for each pass, call `generate_idea`.
//! 2. Among all returned ideas, the strictly highest confidence wins; ties
//!    break to the earliest catalog slot.  Deterministic, never random.
//! 3. The winner flows through suppression and then to the ability layer
//!    (or the tactic's own legacy execution path).
//!
//! Scoring is a pure function of `(agent, context)`: no tactic may mutate
//! shared state while scoring, and every additive term must be recorded in
//! the idea's [`Evidence`][arb_core::Evidence] under a stable key.
//! `Ok(None)` from `generate_idea` means "not applicable right now" — it is
//! ordinary control flow, distinct from a low-confidence idea, and the
//! caller handles both identically (no idea for this tactic).

pub mod context;
pub mod error;
pub mod idea;
pub mod noop;
pub mod tactic;

#[cfg(test)]
mod tests;

pub use context::DecisionContext;
pub use error::{TacticError, TacticResult};
pub use idea::Idea;
pub use noop::NoopTactic;
pub use tactic::Tactic;
