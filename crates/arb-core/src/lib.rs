//! `arb-core` — foundational types for the `arbiter` decision framework.
//!
//! This crate is a dependency of every other `arb-*` crate.  It intentionally
//! has no `arb-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`ids`]      | `AgentId`, `KindId`, `TacticId`                           |
//! | [`time`]     | `Tick`, `EngineConfig`                                    |
//! | [`geo`]      | `Point`, euclidean distance                               |
//! | [`signal`]   | `SignalSnapshot` — the per-tick evidence bundle           |
//! | [`evidence`] | `Evidence` — named scoring-term audit trail               |
//! | [`world`]    | `Target`, `Command`, `WorldView`, `CommandSink`           |
//! | [`rng`]      | `AgentRng` (per-agent), `SimRng` (global)                 |
//! | [`error`]    | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod evidence;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod signal;
pub mod time;
pub mod world;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use evidence::Evidence;
pub use geo::Point;
pub use ids::{AgentId, KindId, TacticId};
pub use rng::{AgentRng, SimRng};
pub use signal::SignalSnapshot;
pub use time::{EngineConfig, Tick};
pub use world::{Command, CommandSink, Target, WorldView};
