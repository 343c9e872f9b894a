//! Stock abilities: the mechanism layer for the stock tactics.
//!
//! Each one is a thin translation from goal + context to a single command.
//! Anything smarter (when to act, at what score) lives in the tactic layer.

use arb_ability::{Ability, AbilityContext, AbilityError, Dispatch, Goal, GoalFilter};
use arb_core::{AgentId, Command, CommandSink, Point, WorldView};

// ── AttackAbility ─────────────────────────────────────────────────────────────

/// Engage the context target.
pub struct AttackAbility;

impl Ability for AttackAbility {
    fn name(&self) -> &'static str {
        "attack"
    }

    fn goal_filter(&self) -> GoalFilter {
        GoalFilter::Only(Goal::Engage)
    }

    fn can_use(&self, _agent: AgentId, ctx: &AbilityContext, world: &dyn WorldView) -> bool {
        ctx.target.is_some_and(|t| t.resolve(world).is_some())
    }

    fn execute(
        &self,
        agent: AgentId,
        ctx:   &mut AbilityContext,
        _world: &dyn WorldView,
        sink:  &mut dyn CommandSink,
    ) -> Result<Dispatch, AbilityError> {
        let target = ctx
            .target
            .ok_or(AbilityError::MissingTarget { ability: self.name() })?;
        sink.issue(&[agent], Command::Attack { target });
        ctx.mark_issued(self.name());
        Ok(Dispatch::Issued)
    }
}

// ── StrikeRunAbility ──────────────────────────────────────────────────────────

/// Harass variant of attack: same command, routed by the Harass goal so a
/// kind can carry different mechanisms for committed vs hit-and-run fights.
pub struct StrikeRunAbility;

impl Ability for StrikeRunAbility {
    fn name(&self) -> &'static str {
        "strike-run"
    }

    fn goal_filter(&self) -> GoalFilter {
        GoalFilter::Only(Goal::Harass)
    }

    fn can_use(&self, _agent: AgentId, ctx: &AbilityContext, world: &dyn WorldView) -> bool {
        ctx.target.is_some_and(|t| t.resolve(world).is_some())
    }

    fn execute(
        &self,
        agent: AgentId,
        ctx:   &mut AbilityContext,
        _world: &dyn WorldView,
        sink:  &mut dyn CommandSink,
    ) -> Result<Dispatch, AbilityError> {
        let target = ctx
            .target
            .ok_or(AbilityError::MissingTarget { ability: self.name() })?;
        sink.issue(&[agent], Command::Attack { target });
        ctx.mark_issued(self.name());
        Ok(Dispatch::Issued)
    }
}

// ── WithdrawAbility ───────────────────────────────────────────────────────────

/// Disengage toward the context target (or the nearest home site).
pub struct WithdrawAbility;

impl Ability for WithdrawAbility {
    fn name(&self) -> &'static str {
        "withdraw"
    }

    fn goal_filter(&self) -> GoalFilter {
        GoalFilter::Only(Goal::Retreat)
    }

    fn can_use(&self, agent: AgentId, ctx: &AbilityContext, world: &dyn WorldView) -> bool {
        refuge(agent, ctx, world).is_some()
    }

    fn execute(
        &self,
        agent: AgentId,
        ctx:   &mut AbilityContext,
        world: &dyn WorldView,
        sink:  &mut dyn CommandSink,
    ) -> Result<Dispatch, AbilityError> {
        let Some(to) = refuge(agent, ctx, world) else {
            return Ok(Dispatch::Declined);
        };
        sink.issue(&[agent], Command::MoveTo { to });
        ctx.mark_issued(self.name());
        Ok(Dispatch::Issued)
    }
}

fn refuge(agent: AgentId, ctx: &AbilityContext, world: &dyn WorldView) -> Option<Point> {
    if let Some(p) = ctx.target.and_then(|t| t.resolve(world)) {
        return Some(p);
    }
    let from = world.position_of(agent)?;
    world
        .home_sites()
        .into_iter()
        .min_by(|a, b| {
            from.distance(*a)
                .partial_cmp(&from.distance(*b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

// ── MoveAbility ───────────────────────────────────────────────────────────────

/// Plain movement, registered once per movement-flavored goal.
pub struct MoveAbility {
    goal: Goal,
}

impl MoveAbility {
    pub fn rally() -> Self {
        Self { goal: Goal::Rally }
    }

    pub fn reposition() -> Self {
        Self { goal: Goal::Reposition }
    }
}

impl Ability for MoveAbility {
    fn name(&self) -> &'static str {
        match self.goal {
            Goal::Rally => "rally-move",
            _           => "reposition-move",
        }
    }

    fn goal_filter(&self) -> GoalFilter {
        GoalFilter::Only(self.goal)
    }

    fn can_use(&self, _agent: AgentId, ctx: &AbilityContext, world: &dyn WorldView) -> bool {
        ctx.target.is_some_and(|t| t.resolve(world).is_some())
    }

    fn execute(
        &self,
        agent: AgentId,
        ctx:   &mut AbilityContext,
        world: &dyn WorldView,
        sink:  &mut dyn CommandSink,
    ) -> Result<Dispatch, AbilityError> {
        let Some(to) = ctx.target.and_then(|t| t.resolve(world)) else {
            return Ok(Dispatch::Declined);
        };
        sink.issue(&[agent], Command::MoveTo { to });
        ctx.mark_issued(self.name());
        Ok(Dispatch::Issued)
    }
}

// ── PatrolAbility ─────────────────────────────────────────────────────────────

/// Patrol through the context target point.
pub struct PatrolAbility;

impl Ability for PatrolAbility {
    fn name(&self) -> &'static str {
        "patrol"
    }

    fn goal_filter(&self) -> GoalFilter {
        GoalFilter::Only(Goal::Patrol)
    }

    fn can_use(&self, _agent: AgentId, ctx: &AbilityContext, world: &dyn WorldView) -> bool {
        ctx.target.is_some_and(|t| t.resolve(world).is_some())
    }

    fn execute(
        &self,
        agent: AgentId,
        ctx:   &mut AbilityContext,
        world: &dyn WorldView,
        sink:  &mut dyn CommandSink,
    ) -> Result<Dispatch, AbilityError> {
        let Some(to) = ctx.target.and_then(|t| t.resolve(world)) else {
            return Ok(Dispatch::Declined);
        };
        sink.issue(&[agent], Command::Patrol { to });
        ctx.mark_issued(self.name());
        Ok(Dispatch::Issued)
    }
}

// ── GatherAbility ─────────────────────────────────────────────────────────────

/// Put a worker back on resource extraction.
///
/// High priority so Gather ideas resolve here first, but it declines when
/// the site is contested — the selector then falls through to whatever else
/// serves the goal (usually nothing, leaving the worker to the mob or
/// keep-safe tactics on a later pass).
pub struct GatherAbility;

impl GatherAbility {
    const CONTESTED_RADIUS: f32 = 10.0;
}

impl Ability for GatherAbility {
    fn name(&self) -> &'static str {
        "gather"
    }

    fn goal_filter(&self) -> GoalFilter {
        GoalFilter::Only(Goal::Gather)
    }

    fn priority(&self) -> i32 {
        100
    }

    fn can_use(&self, agent: AgentId, ctx: &AbilityContext, world: &dyn WorldView) -> bool {
        site_for(agent, ctx, world).is_some()
    }

    fn execute(
        &self,
        agent: AgentId,
        ctx:   &mut AbilityContext,
        world: &dyn WorldView,
        sink:  &mut dyn CommandSink,
    ) -> Result<Dispatch, AbilityError> {
        let Some(at) = site_for(agent, ctx, world) else {
            return Ok(Dispatch::Declined);
        };
        if !world.enemies_within(at, Self::CONTESTED_RADIUS).is_empty() {
            return Ok(Dispatch::Declined);
        }
        sink.issue(&[agent], Command::Gather { at });
        ctx.mark_issued(self.name());
        Ok(Dispatch::Issued)
    }
}

fn site_for(agent: AgentId, ctx: &AbilityContext, world: &dyn WorldView) -> Option<Point> {
    if let Some(p) = ctx.target.and_then(|t| t.resolve(world)) {
        return Some(p);
    }
    let from = world.position_of(agent)?;
    world
        .home_sites()
        .into_iter()
        .min_by(|a, b| {
            from.distance(*a)
                .partial_cmp(&from.distance(*b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}
