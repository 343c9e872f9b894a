//! Goal tags — the routing key between the tactic and ability layers.

use std::fmt;

/// What a tactic wants done, without saying how.
///
/// The set is closed on purpose: both layers share it, so adding a goal is
/// an explicit API change and every `match` over goals is exhaustively
/// checked.  Tactics attach one of these to their ideas; abilities declare
/// which one they serve (or all of them, via [`GoalFilter::Any`]).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Goal {
    /// Close and fight.
    Engage,
    /// Disengage toward safety.
    Retreat,
    /// Hold ground near something worth keeping.
    Defend,
    /// Hit soft targets and leave.
    Harass,
    /// Regroup with the main force.
    Rally,
    /// Relocate without fighting.
    Reposition,
    /// Walk a coverage route.
    Patrol,
    /// Extract resources.
    Gather,
    /// Nothing wanted.
    Idle,
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Goal::Engage     => "engage",
            Goal::Retreat    => "retreat",
            Goal::Defend     => "defend",
            Goal::Harass     => "harass",
            Goal::Rally      => "rally",
            Goal::Reposition => "reposition",
            Goal::Patrol     => "patrol",
            Goal::Gather     => "gather",
            Goal::Idle       => "idle",
        };
        f.write_str(s)
    }
}

/// Which goals an ability responds to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GoalFilter {
    /// Eligible for every goal (universal mechanisms like plain movement).
    Any,
    /// Eligible only when the context carries exactly this goal.
    Only(Goal),
}

impl GoalFilter {
    /// `true` if an ability with this filter may serve `goal`.
    #[inline]
    pub fn matches(self, goal: Goal) -> bool {
        match self {
            GoalFilter::Any => true,
            GoalFilter::Only(g) => g == goal,
        }
    }
}
