//! A small self-contained toy world for the skirmish demo.
//!
//! Two home sites, a mixed starting force, and periodic raider waves driven
//! by a seeded RNG.  Movement and combat are deliberately crude — just
//! enough dynamics for the decision pipeline to have something to react to.

use arb_core::{
    AgentId, AgentRng, Command, CommandSink, KindId, Point, SignalSnapshot, SimRng, WorldView,
};
use arb_playbook::kinds;

const MOVE_SPEED:   f32 = 1.5;
const ATTACK_RANGE: f32 = 3.0;
const OUR_DAMAGE:   f32 = 0.12;
const RAID_DAMAGE:  f32 = 0.08;

struct Unit {
    id:     AgentId,
    kind:   KindId,
    pos:    Point,
    health: f32,
}

/// Buffered command sink: the engine fires orders into this, the world
/// applies them at the end of the tick.
#[derive(Default)]
pub struct OrderBuffer {
    orders: Vec<(Vec<AgentId>, Command)>,
}

impl CommandSink for OrderBuffer {
    fn issue(&mut self, agents: &[AgentId], command: Command) {
        self.orders.push((agents.to_vec(), command));
    }
}

pub struct SkirmishWorld {
    units:   Vec<Unit>,
    raiders: Vec<Unit>,
    homes:   Vec<Point>,

    /// Standing order per own unit, replaced whenever a new command arrives.
    standing: Vec<(AgentId, Command)>,

    rng:  SimRng,
    seed: u64,
    /// Independent wander stream per living raider, keyed by id.  Raiders
    /// dying or spawning never disturbs the other raiders' paths.
    raider_rng:     Vec<(AgentId, AgentRng)>,
    next_raider_id: u32,
    pub kills:      u32,
    pub losses:     u32,
}

impl SkirmishWorld {
    pub fn new(seed: u64) -> Self {
        let homes = vec![Point::new(0.0, 0.0), Point::new(60.0, 0.0)];
        let mut units = Vec::new();
        let mut id = 0u32;
        let mut spawn = |kind, x, y, units: &mut Vec<Unit>, id: &mut u32| {
            units.push(Unit { id: AgentId(*id), kind, pos: Point::new(x, y), health: 1.0 });
            *id += 1;
        };

        for i in 0..6 {
            spawn(kinds::SOLDIER, 5.0 + i as f32 * 2.0, 5.0, &mut units, &mut id);
        }
        for i in 0..8 {
            let home = if i < 4 { 0.0 } else { 60.0 };
            spawn(kinds::WORKER, home + i as f32 % 4.0, 2.0, &mut units, &mut id);
        }
        spawn(kinds::SCOUT, 30.0, 10.0, &mut units, &mut id);
        spawn(kinds::SCOUT, 30.0, -10.0, &mut units, &mut id);

        Self {
            units,
            raiders: Vec::new(),
            homes,
            standing: Vec::new(),
            rng: SimRng::new(seed),
            seed,
            raider_rng: Vec::new(),
            next_raider_id: 1000,
            kills: 0,
            losses: 0,
        }
    }

    pub fn living_units(&self) -> usize {
        self.units.len()
    }

    pub fn living_raiders(&self) -> usize {
        self.raiders.len()
    }

    /// Absorb the tick's buffered orders as standing orders.
    pub fn apply_orders(&mut self, buffer: OrderBuffer) {
        for (agents, command) in buffer.orders {
            for agent in agents {
                self.standing.retain(|(a, _)| *a != agent);
                self.standing.push((agent, command.clone()));
            }
        }
    }

    /// Advance the toy dynamics by one tick.
    pub fn step(&mut self, tick: u64) {
        self.maybe_spawn_raid(tick);
        self.advance_own_units();
        self.advance_raiders();
        self.reap();
    }

    /// Derive the per-tick signal bundle from observable world state.
    pub fn signals(&self, tick: u64, total_ticks: u64) -> SignalSnapshot {
        let our_hp: f32 = self.units.iter().map(|u| u.health).sum();
        let their_hp: f32 = self.raiders.iter().map(|u| u.health).sum();
        let strength_ratio = if their_hp > 0.0 { our_hp / their_hp } else { 4.0 };

        let near_home = self
            .homes
            .iter()
            .map(|&h| self.raiders.iter().filter(|r| r.pos.distance(h) < 15.0).count())
            .sum::<usize>();
        let threat_level = (near_home as f32 / 5.0).min(1.0);

        let swing = self.kills as f32 - self.losses as f32;
        let momentum = (swing / 10.0).clamp(-1.0, 1.0);

        let mut signals = SignalSnapshot::default();
        signals.strength_ratio = strength_ratio.min(4.0);
        signals.threat_level = threat_level;
        signals.momentum = momentum;
        signals.initiative = momentum * 0.5;
        signals.phase = (tick as f32 / total_ticks as f32).min(1.0);
        signals.cohesion = self.cohesion();
        signals
    }

    // ── Dynamics ──────────────────────────────────────────────────────────

    fn maybe_spawn_raid(&mut self, tick: u64) {
        // Raids grow more likely as the session matures.
        let p = 0.004 + (tick as f64 / 2000.0) * 0.008;
        if !self.rng.gen_bool(p) {
            return;
        }
        let home = self.homes[self.rng.gen_range(0..self.homes.len())];
        let count = self.rng.gen_range(1..4);
        for _ in 0..count {
            let id = AgentId(self.next_raider_id);
            let dx: f32 = self.rng.gen_range(-40.0..40.0);
            let dy: f32 = self.rng.gen_range(25.0..35.0);
            self.raiders.push(Unit {
                id,
                kind:   kinds::SOLDIER,
                pos:    Point::new(home.x + dx, dy),
                health: self.rng.gen_range(0.5..1.0),
            });
            self.raider_rng.push((id, AgentRng::new(self.seed, id)));
            self.next_raider_id += 1;
        }
    }

    fn advance_own_units(&mut self) {
        let raider_pos: Vec<(AgentId, Point)> =
            self.raiders.iter().map(|r| (r.id, r.pos)).collect();
        let mut damage: Vec<(AgentId, f32)> = Vec::new();

        for unit in &mut self.units {
            let Some((_, order)) = self.standing.iter().find(|(a, _)| *a == unit.id) else {
                continue;
            };
            let destination = match order {
                Command::Attack { target } => match target.agent() {
                    Some(victim) => {
                        let Some(&(_, vp)) =
                            raider_pos.iter().find(|(id, _)| *id == victim)
                        else {
                            continue;
                        };
                        if unit.pos.distance(vp) <= ATTACK_RANGE {
                            damage.push((victim, OUR_DAMAGE));
                            continue;
                        }
                        vp
                    }
                    None => target.point().unwrap_or(unit.pos),
                },
                Command::MoveTo { to } | Command::Patrol { to } => *to,
                Command::HoldAt { at } | Command::Gather { at } => *at,
            };
            unit.pos = step_toward(unit.pos, destination, MOVE_SPEED);
        }

        for (victim, dmg) in damage {
            if let Some(r) = self.raiders.iter_mut().find(|r| r.id == victim) {
                r.health -= dmg;
            }
        }
    }

    fn advance_raiders(&mut self) {
        let unit_pos: Vec<(AgentId, Point)> = self.units.iter().map(|u| (u.id, u.pos)).collect();
        let homes = self.homes.clone();
        let rngs = &mut self.raider_rng;
        let mut damage: Vec<(AgentId, f32)> = Vec::new();

        for raider in &mut self.raiders {
            // Fight whatever is in reach, otherwise push toward a home site.
            let victim = unit_pos
                .iter()
                .filter(|(_, p)| raider.pos.distance(*p) <= ATTACK_RANGE)
                .min_by(|a, b| {
                    raider.pos.distance(a.1)
                        .partial_cmp(&raider.pos.distance(b.1))
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            if let Some(&(id, _)) = victim {
                damage.push((id, RAID_DAMAGE));
                continue;
            }
            let mut goal = homes
                .iter()
                .copied()
                .min_by(|a, b| {
                    raider.pos.distance(*a)
                        .partial_cmp(&raider.pos.distance(*b))
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .unwrap_or(Point::ORIGIN);
            // Per-raider wander jitter so approach paths fan out.
            if let Some((_, jitter)) = rngs.iter_mut().find(|(id, _)| *id == raider.id) {
                goal.x += jitter.gen_range(-3.0..3.0);
                goal.y += jitter.gen_range(-3.0..3.0);
            }
            raider.pos = step_toward(raider.pos, goal, MOVE_SPEED * 0.8);
        }

        for (victim, dmg) in damage {
            if let Some(u) = self.units.iter_mut().find(|u| u.id == victim) {
                u.health -= dmg;
            }
        }
    }

    fn reap(&mut self) {
        let before_raiders = self.raiders.len();
        let before_units = self.units.len();
        self.raiders.retain(|r| r.health > 0.0);
        self.units.retain(|u| u.health > 0.0);
        self.kills += (before_raiders - self.raiders.len()) as u32;
        self.losses += (before_units - self.units.len()) as u32;

        let units = &self.units;
        self.standing.retain(|(a, _)| units.iter().any(|u| u.id == *a));
        let raiders = &self.raiders;
        self.raider_rng.retain(|(a, _)| raiders.iter().any(|r| r.id == *a));
    }

    fn cohesion(&self) -> f32 {
        let soldiers: Vec<Point> = self
            .units
            .iter()
            .filter(|u| u.kind == kinds::SOLDIER)
            .map(|u| u.pos)
            .collect();
        let Some(center) = Point::centroid(&soldiers) else {
            return 1.0;
        };
        let spread =
            soldiers.iter().map(|p| p.distance(center)).sum::<f32>() / soldiers.len() as f32;
        (1.0 - spread / 40.0).clamp(0.0, 1.0)
    }
}

fn step_toward(from: Point, to: Point, speed: f32) -> Point {
    let d = from.distance(to);
    if d <= speed {
        return to;
    }
    let t = speed / d;
    Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t)
}

impl WorldView for SkirmishWorld {
    fn agents(&self) -> Vec<AgentId> {
        self.units.iter().map(|u| u.id).collect()
    }

    fn enemies(&self) -> Vec<AgentId> {
        self.raiders.iter().map(|r| r.id).collect()
    }

    fn kind_of(&self, agent: AgentId) -> KindId {
        self.units
            .iter()
            .chain(self.raiders.iter())
            .find(|u| u.id == agent)
            .map(|u| u.kind)
            .unwrap_or(KindId::INVALID)
    }

    fn position_of(&self, agent: AgentId) -> Option<Point> {
        self.units
            .iter()
            .chain(self.raiders.iter())
            .find(|u| u.id == agent)
            .map(|u| u.pos)
    }

    fn health_of(&self, agent: AgentId) -> f32 {
        self.units
            .iter()
            .chain(self.raiders.iter())
            .find(|u| u.id == agent)
            .map(|u| u.health)
            .unwrap_or(0.0)
    }

    fn is_alive(&self, agent: AgentId) -> bool {
        self.units
            .iter()
            .chain(self.raiders.iter())
            .any(|u| u.id == agent)
    }

    fn home_sites(&self) -> Vec<Point> {
        self.homes.clone()
    }

    fn enemies_within(&self, center: Point, radius: f32) -> Vec<AgentId> {
        self.raiders
            .iter()
            .filter(|r| r.pos.distance(center) <= radius)
            .map(|r| r.id)
            .collect()
    }

    fn allies_within(&self, center: Point, radius: f32) -> Vec<AgentId> {
        self.units
            .iter()
            .filter(|u| u.pos.distance(center) <= radius)
            .map(|u| u.id)
            .collect()
    }

    fn force_centroid(&self) -> Option<Point> {
        let pts: Vec<Point> = self
            .units
            .iter()
            .filter(|u| u.kind == kinds::SOLDIER)
            .map(|u| u.pos)
            .collect();
        Point::centroid(&pts)
    }
}
