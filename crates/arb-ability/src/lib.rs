//! `arb-ability` — the mechanism half of the two-tier dispatch model.
//!
//! Tactics reason about *intent* ("this agent should harass"); abilities own
//! the *mechanism* (which concrete command realizes that intent for this
//! agent type).  The two layers meet at the [`Goal`] tag carried inside an
//! [`AbilityContext`]: tactics attach a goal, the registry routes it to the
//! highest-priority ability that serves that goal for the agent's kind.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`goal`]     | `Goal` enum, `GoalFilter`                                |
//! | [`context`]  | `AbilityContext` — the tick-scoped blackboard            |
//! | [`ability`]  | `Ability` trait, `Dispatch`                              |
//! | [`registry`] | `AbilityRegistry` (per-kind, priority-ordered)           |
//! | [`error`]    | `AbilityError`, `AbilityResult<T>`                       |
//!
//! # Design notes
//!
//! Goals are a closed enum rather than free-form strings: the decoupling is
//! preserved (a tactic never names a concrete ability) but a typo'd goal is
//! now a compile error instead of a silent routing miss.
//!
//! `Ability::execute` returns `Result<Dispatch, AbilityError>` — `Declined`
//! means "try the next candidate" and is not an error; only `Err` is a real
//! fault, and faults are contained at the per-agent boundary by the caller.

pub mod ability;
pub mod context;
pub mod error;
pub mod goal;
pub mod registry;


pub use ability::{Ability, Dispatch};
pub use context::AbilityContext;
pub use error::{AbilityError, AbilityResult};
pub use goal::{Goal, GoalFilter};
pub use registry::AbilityRegistry;
