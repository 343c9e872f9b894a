//! `AbilityRegistry` — per-kind, priority-ordered ability lists.

use std::fmt::Write as _;

use arb_core::{AgentId, KindId, WorldView};
use rustc_hash::FxHashMap;

use crate::{Ability, AbilityContext};

/// Maps each agent kind to its ordered ability list.
///
/// Invariants:
/// - Every bucket is sorted by **descending** priority; within equal
///   priority, earlier registration stays earlier (stable sort).
/// - A bucket never holds two abilities with the same `name()` —
///   re-registering replaces the previous entry in place, so hot-reload
///   style re-setup is idempotent.
///
/// Ownership is explicit: the host's engine owns exactly one registry and
/// passes it by reference into each phase call.  There is no ambient global
/// instance.
#[derive(Default)]
pub struct AbilityRegistry {
    buckets: FxHashMap<KindId, Vec<Box<dyn Ability>>>,
}

impl AbilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Registration API ──────────────────────────────────────────────────

    /// Register `ability` for `kind`.
    ///
    /// If an ability with the same name is already present for this kind the
    /// old entry is removed first, then the bucket is re-sorted by
    /// descending priority.
    pub fn register(&mut self, kind: KindId, ability: Box<dyn Ability>) {
        log::debug!("ability '{}' registered for {kind}", ability.name());
        let bucket = self.buckets.entry(kind).or_default();
        bucket.retain(|a| a.name() != ability.name());
        bucket.push(ability);
        bucket.sort_by_key(|a| std::cmp::Reverse(a.priority()));
    }

    /// Convenience batch registration.
    pub fn register_many(&mut self, kind: KindId, abilities: Vec<Box<dyn Ability>>) {
        for ability in abilities {
            self.register(kind, ability);
        }
    }

    // ── Query API ─────────────────────────────────────────────────────────

    /// The ability list for a kind (may be empty).
    pub fn get(&self, kind: KindId) -> &[Box<dyn Ability>] {
        self.buckets.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `true` if at least one ability is registered for this kind.
    pub fn has_abilities(&self, kind: KindId) -> bool {
        self.buckets.get(&kind).is_some_and(|b| !b.is_empty())
    }

    /// The highest-priority ability whose goal filter matches the context
    /// and whose `can_use` passes, or `None`.
    pub fn first_applicable(
        &self,
        agent: AgentId,
        ctx:   &AbilityContext,
        world: &dyn WorldView,
    ) -> Option<&dyn Ability> {
        for ability in self.get(world.kind_of(agent)) {
            if !ability.goal_filter().matches(ctx.goal) {
                continue;
            }
            if ability.can_use(agent, ctx, world) {
                return Some(ability.as_ref());
            }
        }
        None
    }

    /// Candidates for `agent` matching the context's goal, in firing order.
    ///
    /// Used by the selector's fallback chain: it walks this list calling
    /// `can_use`/`execute` until one issues.
    pub fn candidates<'a>(
        &'a self,
        kind: KindId,
        ctx:  &'a AbilityContext,
    ) -> impl Iterator<Item = &'a dyn Ability> + 'a {
        self.get(kind)
            .iter()
            .filter(|a| a.goal_filter().matches(ctx.goal))
            .map(|a| a.as_ref())
    }

    // ── Debug ─────────────────────────────────────────────────────────────

    /// Human-readable registry listing for startup logs.
    pub fn summary(&self) -> String {
        if self.buckets.is_empty() {
            return "  (empty)".to_string();
        }
        let mut kinds: Vec<_> = self.buckets.keys().copied().collect();
        kinds.sort();
        let mut out = String::new();
        for kind in kinds {
            let names = self.buckets[&kind]
                .iter()
                .map(|a| format!("{}(p={})", a.name(), a.priority()))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "  {kind}: [{names}]");
        }
        out.pop();
        out
    }
}
