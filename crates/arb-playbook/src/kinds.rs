//! Agent kind constants used by the stock playbook.
//!
//! Hosts are free to define their own kinds; these three cover the roles the
//! stock tactics and abilities reason about.

use arb_core::KindId;

/// Front-line combat agent.
pub const SOLDIER: KindId = KindId(1);

/// Resource-extraction agent; passive by default but mobs intruders.
pub const WORKER: KindId = KindId(2);

/// Fast, fragile agent used for harassment and map coverage.
pub const SCOUT: KindId = KindId(3);
