use crate::api::config::SimConfig;
use crate::api::types::BodyId;
use crate::core::body::Body;
use crate::core::params::SimParams;
use crate::core::rng::Rng;
use crate::core::viewport::Viewport;

/// The growable collection of all live bodies, in insertion order, plus the
/// deterministic RNG that attributes are drawn from at spawn time.
///
/// Insertion order is irrelevant to the physics (bodies are independent) but
/// is preserved for draw order: later-spawned bodies paint on top.
pub struct World {
    bodies: Vec<Body>,
    rng: Rng,
    next_id: u32,
}

impl World {
    pub fn new(seed: u64) -> Self {
        Self {
            bodies: Vec::with_capacity(256),
            rng: Rng::new(seed),
            next_id: 1,
        }
    }

    /// Append one body at the given surface coordinates. Never rejected;
    /// the collection grows without bound unless the eviction sweep is on.
    pub fn spawn(&mut self, x: f32, y: f32, cfg: &SimConfig) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body::spawn(id, x, y, &mut self.rng, cfg));
        id
    }

    /// Discard all bodies. Spawn-time determinism is unaffected: the RNG
    /// stream continues where it left off.
    pub fn clear(&mut self) {
        log::debug!("world: clearing {} bodies", self.bodies.len());
        self.bodies.clear();
    }

    /// Replace the RNG stream. Applied when the host loads a config with a
    /// new seed; existing bodies keep their attributes.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = Rng::new(seed);
    }

    /// Advance every body by one frame, strictly sequentially, in insertion
    /// order. Deterministic given the spawn-time seed.
    pub fn step_all(&mut self, params: SimParams, viewport: Viewport) {
        for body in &mut self.bodies {
            body.step(params, viewport);
        }
    }

    /// Eviction policy (off by default): a body resting on the floor below
    /// `cfg.settle_speed` for `cfg.settle_frames` consecutive frames is
    /// removed. Returns the number of bodies evicted.
    pub fn sweep_settled(&mut self, viewport: Viewport, cfg: &SimConfig) -> usize {
        if !cfg.evict_settled {
            return 0;
        }
        for body in &mut self.bodies {
            if body.is_settling(viewport, cfg.settle_speed) {
                body.settled_frames += 1;
            } else {
                body.settled_frames = 0;
            }
        }
        let before = self.bodies.len();
        self.bodies.retain(|b| b.settled_frames < cfg.settle_frames);
        before - self.bodies.len()
    }

    pub fn count(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterate bodies in insertion (draw) order.
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn spawn_grows_count_and_clear_resets_it() {
        let cfg = SimConfig::default();
        let mut world = World::new(42);
        for i in 1..=5 {
            world.spawn(100.0, 100.0, &cfg);
            assert_eq!(world.count(), i);
        }
        world.clear();
        assert_eq!(world.count(), 0);
        assert!(world.is_empty());
    }

    #[test]
    fn ids_are_unique_and_survive_clear() {
        let cfg = SimConfig::default();
        let mut world = World::new(42);
        let a = world.spawn(0.0, 0.0, &cfg);
        world.clear();
        let b = world.spawn(0.0, 0.0, &cfg);
        assert_ne!(a, b);
    }

    #[test]
    fn equal_seeds_spawn_identical_bodies() {
        let cfg = SimConfig::default();
        let mut wa = World::new(7);
        let mut wb = World::new(7);
        for _ in 0..20 {
            wa.spawn(250.0, 40.0, &cfg);
            wb.spawn(250.0, 40.0, &cfg);
        }
        for (a, b) in wa.iter().zip(wb.iter()) {
            assert_eq!(a.radius, b.radius);
            assert_eq!(a.hue, b.hue);
            assert_eq!(a.vel, b.vel);
        }
    }

    #[test]
    fn step_all_preserves_insertion_order() {
        let cfg = SimConfig::default();
        let mut world = World::new(42);
        let ids: Vec<BodyId> = (0..10).map(|_| world.spawn(100.0, 100.0, &cfg)).collect();
        world.step_all(SimParams::default(), Viewport::new(800.0, 600.0));
        let seen: Vec<BodyId> = world.iter().map(|b| b.id).collect();
        assert_eq!(ids, seen);
    }

    #[test]
    fn sweep_is_inert_unless_enabled() {
        let cfg = SimConfig::default();
        let vp = Viewport::new(800.0, 600.0);
        let mut world = World::new(42);
        world.spawn(400.0, 580.0, &cfg);
        // Pin the body to a resting state.
        for _ in 0..200 {
            let evicted = world.sweep_settled(vp, &cfg);
            assert_eq!(evicted, 0);
        }
        assert_eq!(world.count(), 1);
    }

    #[test]
    fn sweep_evicts_a_settled_body() {
        let cfg = SimConfig {
            evict_settled: true,
            settle_frames: 3,
            ..SimConfig::default()
        };
        let vp = Viewport::new(800.0, 600.0);
        let mut world = World::new(42);
        world.spawn(400.0, 100.0, &cfg);

        // Force the spawned body into a rest pose on the floor.
        {
            let body = world.bodies.first_mut().unwrap();
            body.pos = Vec2::new(400.0, vp.height - body.radius);
            body.vel = Vec2::ZERO;
        }

        assert_eq!(world.sweep_settled(vp, &cfg), 0);
        assert_eq!(world.sweep_settled(vp, &cfg), 0);
        assert_eq!(world.sweep_settled(vp, &cfg), 1);
        assert!(world.is_empty());
    }

    #[test]
    fn sweep_spares_airborne_bodies() {
        let cfg = SimConfig {
            evict_settled: true,
            settle_frames: 1,
            ..SimConfig::default()
        };
        let vp = Viewport::new(800.0, 600.0);
        let mut world = World::new(42);
        world.spawn(400.0, 100.0, &cfg);
        assert_eq!(world.sweep_settled(vp, &cfg), 0);
        assert_eq!(world.count(), 1);
    }
}
