pub mod api;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::SimConfig;
pub use api::types::{BodyId, SimEvent, EVENT_COUNT};
pub use core::body::{Body, ROLL_FRICTION, WALL_RESTITUTION};
pub use core::params::SimParams;
pub use core::rng::Rng;
pub use core::viewport::Viewport;
pub use core::world::World;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::instance::{
    RenderBuffer, RenderInstance, FILL_LIGHTNESS, FILL_SATURATION, STROKE_RGBA,
};
pub use systems::render::build_render_buffer;
