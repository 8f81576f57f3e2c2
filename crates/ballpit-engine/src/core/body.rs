use glam::Vec2;

use crate::api::config::SimConfig;
use crate::api::types::BodyId;
use crate::core::params::SimParams;
use crate::core::rng::Rng;
use crate::core::viewport::Viewport;

/// Horizontal damping applied on every floor contact (rolling friction).
/// Fixed by the simulation, independent of the restitution parameter.
pub const ROLL_FRICTION: f32 = 0.95;

/// Energy retained on a side-wall hit. Fixed, not host-configurable.
pub const WALL_RESTITUTION: f32 = 0.8;

/// One simulated circular body. Position and velocity are in surface pixels
/// and pixels-per-frame; radius and hue are fixed at spawn time.
#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// HSL hue in degrees. Saturation and lightness are fixed by the paint
    /// contract in `renderer::instance`.
    pub hue: f32,
    /// Consecutive frames spent resting on the floor, maintained by the
    /// world's eviction sweep. Stays 0 while the sweep is disabled.
    pub settled_frames: u32,
}

impl Body {
    /// Create a body with explicit attributes.
    pub fn new(id: BodyId, pos: Vec2, vel: Vec2, radius: f32, hue: f32) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            hue,
            settled_frames: 0,
        }
    }

    /// Create a body at the spawn point with randomized radius, hue, and
    /// horizontal speed. Vertical speed starts at zero.
    pub fn spawn(id: BodyId, x: f32, y: f32, rng: &mut Rng, cfg: &SimConfig) -> Self {
        let radius = rng.range(cfg.radius_min, cfg.radius_max);
        let hue = rng.range(0.0, cfg.hue_span);
        let dx = rng.range(-cfg.spawn_speed, cfg.spawn_speed);
        Self::new(id, Vec2::new(x, y), Vec2::new(dx, 0.0), radius, hue)
    }

    /// Advance one frame: explicit Euler integration plus boundary response.
    /// Pure state transition; drawing happens in a separate extraction pass.
    ///
    /// Floor and wall checks are independent and may both fire in the same
    /// step; there is no corner special-casing.
    pub fn step(&mut self, params: SimParams, viewport: Viewport) {
        self.vel.y += params.gravity;
        self.pos += self.vel;

        // Floor: reflect and damp vertical speed, clamp to the surface so the
        // body never sinks, and bleed horizontal speed (rolling friction).
        if self.pos.y + self.radius > viewport.height {
            self.vel.y = -self.vel.y * params.restitution;
            self.pos.y = viewport.height - self.radius;
            self.vel.x *= ROLL_FRICTION;
        }

        // Walls: one shared velocity reflection, then each violated side is
        // clamped independently (both clamp in a pathological narrow viewport).
        if self.pos.x + self.radius > viewport.width || self.pos.x - self.radius < 0.0 {
            self.vel.x = -self.vel.x * WALL_RESTITUTION;
            if self.pos.x + self.radius > viewport.width {
                self.pos.x = viewport.width - self.radius;
            }
            if self.pos.x - self.radius < 0.0 {
                self.pos.x = self.radius;
            }
        }
    }

    /// True when the body is hovering at the floor and moving slower than
    /// `settle_speed`. Used by the eviction sweep.
    ///
    /// A damped body never stops dead: it keeps micro-bouncing a few pixels
    /// above the floor, so the proximity band scales with the speed threshold
    /// to keep that bounce tail inside it.
    pub fn is_settling(&self, viewport: Viewport, settle_speed: f32) -> bool {
        let band = 4.0 * settle_speed;
        self.pos.y + self.radius >= viewport.height - band
            && self.vel.length() < settle_speed
    }
}
