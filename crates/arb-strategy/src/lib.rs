//! `arb-strategy` — the slow-moving meta-layer.
//!
//! The strategy machine evaluates a priority-ordered rule table over the
//! per-tick [`SignalSnapshot`][arb_core::SignalSnapshot] on its own coarse
//! cadence and maintains one global [`StrategyMode`].  The active mode
//! publishes a [`ModeProfile`] — a bundle of additive bias values — which is
//! the *only* thing tactic scoring ever sees.  Tactics never inspect the
//! mode enum; adding a mode means defining its profile, adding a tactic
//! means consuming the relevant bias fields, and no combinatorial if/else
//! chain appears anywhere.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`mode`]    | `StrategyMode`, `ModeProfile`                             |
//! | [`rule`]    | `StrategyRule`, `default_rules()` priority table          |
//! | [`machine`] | `StrategyMachine`, `MachineConfig`, `Switch`              |
//! | [`error`]   | `StrategyError`, `StrategyResult<T>`                      |
//!
//! # Anti-thrash design
//!
//! Two mechanisms prevent posture flip-flop, and they are deliberately
//! asymmetric with the emergency path:
//!
//! 1. **Lockout timer** — after any switch, no further switch for
//!    `lockout_ticks`.  Postures get time to play out.
//! 2. **Confirmation gate** — a candidate must win `confirmation_count`
//!    consecutive evaluations before the switch commits, filtering
//!    single-evaluation signal spikes.
//!
//! Rules flagged `emergency` bypass both: a sustained crisis must flip the
//! posture on the very first observation.

pub mod error;
pub mod machine;
pub mod mode;
pub mod rule;

#[cfg(test)]
mod tests;

pub use error::{StrategyError, StrategyResult};
pub use machine::{MachineConfig, StrategyMachine, Switch, SwitchReason};
pub use mode::{ModeProfile, StrategyMode};
pub use rule::{StrategyRule, default_rules};
