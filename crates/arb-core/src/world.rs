//! The external world surface: query trait, command payloads, dispatch sink.
//!
//! The decision core never owns world state.  It reads the world through
//! [`WorldView`] (implemented by the host) and mutates it only by pushing
//! [`Command`]s into a [`CommandSink`].  Dispatch is fire-and-forget: issuing
//! a command does not block, and the core never learns synchronously whether
//! a command "succeeded" downstream — only that it was issued.

use crate::{AgentId, KindId, Point};

// ── Target ────────────────────────────────────────────────────────────────────

/// What an idea or command is aimed at: an agent **or** a point, never both.
///
/// The original design carried two nullable fields and relied on convention;
/// the enum makes the exclusivity structural.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    Agent(AgentId),
    Point(Point),
}

impl Target {
    /// The targeted agent, if this is an agent target.
    #[inline]
    pub fn agent(self) -> Option<AgentId> {
        match self {
            Target::Agent(a) => Some(a),
            Target::Point(_) => None,
        }
    }

    /// The targeted point, if this is a spatial target.
    #[inline]
    pub fn point(self) -> Option<Point> {
        match self {
            Target::Agent(_) => None,
            Target::Point(p) => Some(p),
        }
    }

    /// Resolve to a concrete position using the world (agent targets follow
    /// the agent).  `None` if the agent has no known position.
    pub fn resolve(self, world: &dyn WorldView) -> Option<Point> {
        match self {
            Target::Agent(a) => world.position_of(a),
            Target::Point(p) => Some(p),
        }
    }
}

// ── Command ───────────────────────────────────────────────────────────────────

/// A concrete low-level command dispatched to the host's world-mutation sink.
///
/// Commands are produced by the ability layer (or a tactic's legacy path)
/// and consumed by the host; the decision core attaches no meaning beyond
/// the variant and payload.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Engage `target` with weapons.
    Attack { target: Target },

    /// Move to `to` without engaging.
    MoveTo { to: Point },

    /// Patrol through `to` and back.
    Patrol { to: Point },

    /// Hold position at `at`.
    HoldAt { at: Point },

    /// Extract resources at `at` (passive/production subjects).
    Gather { at: Point },
}

// ── WorldView ─────────────────────────────────────────────────────────────────

/// Read-only query surface over the host's world, borrowed for one tick.
///
/// Implementations must be cheap to query: tactics call these methods inside
/// the per-agent scoring loop.  All answers describe the state at the start
/// of the current tick; the core never observes mid-tick mutation.
pub trait WorldView {
    /// All of our own decision subjects, in a stable order.
    fn agents(&self) -> Vec<AgentId>;

    /// All currently known enemy agents.
    fn enemies(&self) -> Vec<AgentId>;

    /// The agent's type (registry bucket key).
    fn kind_of(&self, agent: AgentId) -> KindId;

    /// Current position, or `None` if unknown/unplaced.
    fn position_of(&self, agent: AgentId) -> Option<Point>;

    /// Remaining health as a fraction of maximum, 0..1.
    fn health_of(&self, agent: AgentId) -> f32;

    /// `false` once the agent has been destroyed or removed.  Group
    /// consolidation re-validates targets with this between scoring and
    /// commit.
    fn is_alive(&self, agent: AgentId) -> bool;

    /// Passive decision subjects (production structures and the like) use
    /// the shorter suppression window and the lower confidence floor.
    fn is_passive(&self, _agent: AgentId) -> bool {
        false
    }

    /// Damage-output proxy for threat scoring.  Units without weapons
    /// report 0.
    fn threat_of(&self, _agent: AgentId) -> f32 {
        1.0
    }

    /// Positions of our home sites (the places worth defending).
    fn home_sites(&self) -> Vec<Point>;

    /// Enemy agents within `radius` of `center`.
    fn enemies_within(&self, center: Point, radius: f32) -> Vec<AgentId>;

    /// Own agents within `radius` of `center`.
    fn allies_within(&self, center: Point, radius: f32) -> Vec<AgentId>;

    /// Centroid of our mobile force, or `None` if we have none.
    fn force_centroid(&self) -> Option<Point>;
}

// ── CommandSink ───────────────────────────────────────────────────────────────

/// Fire-and-forget dispatch boundary.
///
/// One call covers one or many agents: group consolidation issues a single
/// coordinated command for a whole posse through the same method individual
/// execution uses for one agent.
pub trait CommandSink {
    /// Dispatch `command` on behalf of every agent in `agents`.
    ///
    /// Must not block and must not report downstream success; the decision
    /// core only tracks that the command was issued.
    fn issue(&mut self, agents: &[AgentId], command: Command);
}
