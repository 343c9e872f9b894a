//! `arb-playbook` — a stock catalog of tactics and abilities.
//!
//! Everything here is built purely on the public extension traits; a host
//! can use the whole set via [`register_playbook`], cherry-pick pieces, or
//! ignore the crate entirely and write its own.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`kinds`]     | `SOLDIER`, `WORKER`, `SCOUT` kind constants           |
//! | [`press`]     | `PressForwardTactic` — committed engagement           |
//! | [`keep_safe`] | `KeepSafeTactic` — capped defensive fallback          |
//! | [`harass`]    | `HarassTactic` — initiative-driven raids              |
//! | [`regroup`]   | `RegroupTactic` — cooldown-exempt rally refresh       |
//! | [`patrol`]    | `PatrolTactic` — deterministic coverage rotation      |
//! | [`mob`]       | `MobTactic` — the worker quorum group tactic          |
//! | [`gather`]    | `BackToWorkTactic` — idle workers resume extraction   |
//! | [`abilities`] | Attack/StrikeRun/Withdraw/Move/Patrol/Gather          |

pub mod abilities;
pub mod gather;
pub mod harass;
pub mod keep_safe;
pub mod kinds;
pub mod mob;
pub mod patrol;
pub mod press;
pub mod regroup;


pub use abilities::{
    AttackAbility, GatherAbility, MoveAbility, PatrolAbility, StrikeRunAbility, WithdrawAbility,
};
pub use gather::BackToWorkTactic;
pub use harass::HarassTactic;
pub use keep_safe::KeepSafeTactic;
pub use mob::MobTactic;
pub use patrol::PatrolTactic;
pub use press::PressForwardTactic;
pub use regroup::RegroupTactic;

use arb_engine::Engine;

/// Install the full stock catalog and ability set.
///
/// Catalog order is arbitration tie-break order and is part of the stock
/// behavior: safety outranks aggression on equal confidence.
pub fn register_playbook(engine: &mut Engine) {
    engine.register_tactic(Box::new(KeepSafeTactic));
    engine.register_tactic(Box::new(PressForwardTactic));
    engine.register_tactic(Box::new(MobTactic));
    engine.register_tactic(Box::new(HarassTactic));
    engine.register_tactic(Box::new(RegroupTactic));
    engine.register_tactic(Box::new(PatrolTactic));
    engine.register_tactic(Box::new(BackToWorkTactic));

    for kind in [kinds::SOLDIER, kinds::SCOUT] {
        engine.register_ability(kind, Box::new(AttackAbility));
        engine.register_ability(kind, Box::new(StrikeRunAbility));
        engine.register_ability(kind, Box::new(WithdrawAbility));
        engine.register_ability(kind, Box::new(MoveAbility::rally()));
        engine.register_ability(kind, Box::new(MoveAbility::reposition()));
        engine.register_ability(kind, Box::new(PatrolAbility));
    }

    engine.register_ability(kinds::WORKER, Box::new(AttackAbility));
    engine.register_ability(kinds::WORKER, Box::new(WithdrawAbility));
    engine.register_ability(kinds::WORKER, Box::new(GatherAbility));

    log::debug!("stock playbook registered");
}
