//! `EngineBuilder` — validated one-shot engine construction.

use arb_ability::Ability;
use arb_core::{EngineConfig, KindId};
use arb_strategy::{MachineConfig, StrategyMachine, StrategyRule, default_rules};
use arb_tactic::Tactic;

use crate::{Engine, EngineError, EngineResult};

/// Collects configuration, tactics, and abilities, then builds an [`Engine`]
/// after validating every config block.
///
/// ```no_run
/// # use arb_engine::EngineBuilder;
/// let engine = EngineBuilder::new()
///     .build()
///     .unwrap();
/// ```
pub struct EngineBuilder {
    config:         EngineConfig,
    machine_config: MachineConfig,
    rules:          Option<Vec<StrategyRule>>,
    tactics:        Vec<Box<dyn Tactic>>,
    abilities:      Vec<(KindId, Box<dyn Ability>)>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            config:         EngineConfig::default(),
            machine_config: MachineConfig::default(),
            rules:          None,
            tactics:        Vec::new(),
            abilities:      Vec::new(),
        }
    }

    /// Replace the pipeline tuning knobs.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the strategy machine tuning.
    pub fn machine_config(mut self, config: MachineConfig) -> Self {
        self.machine_config = config;
        self
    }

    /// Replace the strategy rule table (defaults to [`default_rules`]).
    pub fn strategy_rules(mut self, rules: Vec<StrategyRule>) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Append a tactic.  Build-time order is catalog (and tie-break) order.
    pub fn tactic(mut self, tactic: Box<dyn Tactic>) -> Self {
        self.tactics.push(tactic);
        self
    }

    /// Register an ability for a kind.
    pub fn ability(mut self, kind: KindId, ability: Box<dyn Ability>) -> Self {
        self.abilities.push((kind, ability));
        self
    }

    /// Validate and assemble.
    pub fn build(self) -> EngineResult<Engine> {
        self.config.validate().map_err(EngineError::Config)?;
        self.machine_config.validate()?;

        let rules = self.rules.unwrap_or_else(default_rules);
        let machine = StrategyMachine::with_rules(rules, self.machine_config);

        let mut engine = Engine::new(self.config, machine);
        for tactic in self.tactics {
            engine.register_tactic(tactic);
        }
        for (kind, ability) in self.abilities {
            engine.register_ability(kind, ability);
        }

        log::info!("engine ready; catalog:\n{}", engine.catalog_summary());
        log::info!("ability registry:\n{}", engine.registry().summary());
        Ok(engine)
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
