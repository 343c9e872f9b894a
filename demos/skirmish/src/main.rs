//! skirmish — smallest end-to-end run of the arbiter decision pipeline.
//!
//! A mixed force (soldiers, workers, scouts) defends two home sites against
//! seeded raider waves.  Every tick the host derives a signal snapshot from
//! the toy world, runs the full pipeline, applies the buffered orders, and
//! steps the world.  A commentary observer narrates the interesting events.

mod world;

use std::time::Instant;

use anyhow::Result;

use arb_core::{AgentId, SignalSnapshot, Target, Tick};
use arb_engine::{DecisionObserver, EngineBuilder, Resolution, TickReport, Verdict};
use arb_playbook::register_playbook;
use arb_strategy::Switch;
use arb_tactic::Idea;

use world::{OrderBuffer, SkirmishWorld};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:        u64 = 42;
const TOTAL_TICKS: u64 = 2_000;
const REPORT_EVERY: u64 = 200;

// ── Commentary observer ───────────────────────────────────────────────────────

#[derive(Default)]
struct Commentary {
    ideas:      usize,
    suppressed: usize,
    dispatched: usize,
    unresolved: usize,
}

impl DecisionObserver for Commentary {
    fn on_idea(&mut self, _agent: AgentId, _idea: &Idea, verdict: Verdict, _tick: Tick) {
        self.ideas += 1;
        if !verdict.is_accepted() {
            self.suppressed += 1;
        }
    }

    fn on_dispatch(
        &mut self,
        _agent:     AgentId,
        _tactic:    &'static str,
        resolution: Resolution,
        _tick:      Tick,
    ) {
        if resolution.issued() {
            self.dispatched += 1;
        } else {
            self.unresolved += 1;
        }
    }

    fn on_group_commit(
        &mut self,
        tactic: &'static str,
        agents: &[AgentId],
        target: Target,
        tick:   Tick,
    ) {
        println!("{tick}  >> {} agents commit to '{tactic}' against {target:?}", agents.len());
    }

    fn on_mode_switch(&mut self, switch: &Switch) {
        println!(
            "{}  == strategy: {} -> {} ({:?})",
            switch.tick, switch.from, switch.to, switch.reason,
        );
    }

    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== skirmish — arbiter decision pipeline demo ===");
    println!("Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    let mut engine = EngineBuilder::new().build()?;
    register_playbook(&mut engine);
    println!("Catalog:\n{}", engine.catalog_summary());
    println!("Abilities:\n{}", engine.registry().summary());
    println!();

    let mut world = SkirmishWorld::new(SEED);
    let mut commentary = Commentary::default();
    let t0 = Instant::now();

    for t in 0..TOTAL_TICKS {
        let tick = Tick(t);
        let signals: SignalSnapshot = world.signals(t, TOTAL_TICKS);

        let mut orders = OrderBuffer::default();
        engine.run_tick(tick, &signals, &world, &mut orders, &mut commentary);
        world.apply_orders(orders);
        world.step(t);

        if t > 0 && t % REPORT_EVERY == 0 {
            println!(
                "{tick}  mode={}  force={} raiders={}  kills={} losses={}",
                engine.mode(),
                world.living_units(),
                world.living_raiders(),
                world.kills,
                world.losses,
            );
        }
    }

    let elapsed = t0.elapsed();
    println!();
    println!("Done in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  ideas={}  suppressed={}  dispatched={}  unresolved={}",
        commentary.ideas, commentary.suppressed, commentary.dispatched, commentary.unresolved,
    );
    println!(
        "  final: {} units vs {} raiders  ({} kills / {} losses)",
        world.living_units(),
        world.living_raiders(),
        world.kills,
        world.losses,
    );

    Ok(())
}
