//! Browser bridge for the ballpit simulation.
//!
//! The wasm module computes; the host paints. Each requestAnimationFrame the
//! JS side calls [`sim_tick`], reads the instance buffer through
//! [`get_instances_ptr`] / [`get_instance_count`], paints the fade rectangle
//! (color and alpha from the accessors below) and then one circle per
//! instance. Pointer and touch input arrives through [`sim_pointer_down`];
//! the host maps touch-start to it and suppresses default scrolling so drags
//! on the canvas keep spawning instead of panning the page.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use ballpit_engine::InputEvent;

pub mod runner;

pub use runner::SimRunner;

thread_local! {
    static RUNNER: RefCell<Option<SimRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SimRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Simulation not initialized. Call sim_init() first.");
        f(runner)
    })
}

/// Create the simulation for a surface of the given size. Must be called
/// before any other export. Calling it again replaces the running simulation.
#[wasm_bindgen]
pub fn sim_init(width: f32, height: f32) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = SimRunner::new(width, height);
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("ballpit: initialized at {}x{}", width, height);
}

/// Load static configuration from JSON. Invalid JSON is logged and ignored.
#[wasm_bindgen]
pub fn sim_load_config(json: &str) {
    with_runner(|r| r.load_config(json));
}

/// Advance the simulation by one frame.
#[wasm_bindgen]
pub fn sim_tick() {
    with_runner(|r| r.tick());
}

#[wasm_bindgen]
pub fn sim_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

/// Queue a clear command; the world empties at the start of the next tick.
#[wasm_bindgen]
pub fn sim_clear() {
    with_runner(|r| r.push_input(InputEvent::Clear));
}

/// Surface dimension change. Takes effect immediately; bodies left outside
/// the new bounds are pulled back in on their next step.
#[wasm_bindgen]
pub fn sim_resize(width: f32, height: f32) {
    with_runner(|r| r.resize(width, height));
}

// ---- Live parameters (host sliders, polled once per tick) ----

#[wasm_bindgen]
pub fn set_gravity(value: f32) {
    with_runner(|r| r.set_gravity(value));
}

#[wasm_bindgen]
pub fn set_restitution(value: f32) {
    with_runner(|r| r.set_restitution(value));
}

#[wasm_bindgen]
pub fn set_eviction(enabled: bool) {
    with_runner(|r| r.set_eviction(enabled));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn body_count() -> u32 {
    with_runner(|r| r.body_count())
}

/// The count readout text, e.g. "12 Objects".
#[wasm_bindgen]
pub fn count_label() -> String {
    with_runner(|r| r.count_label())
}

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_max_instances() -> u32 {
    with_runner(|r| r.max_instances())
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len())
}

// ---- Paint contract accessors ----

/// Opacity of the per-frame fade rectangle that produces the motion trail.
#[wasm_bindgen]
pub fn get_fade_alpha() -> f32 {
    with_runner(|r| r.fade_alpha())
}

#[wasm_bindgen]
pub fn get_clear_r() -> f32 {
    with_runner(|r| r.clear_r())
}

#[wasm_bindgen]
pub fn get_clear_g() -> f32 {
    with_runner(|r| r.clear_g())
}

#[wasm_bindgen]
pub fn get_clear_b() -> f32 {
    with_runner(|r| r.clear_b())
}

/// Fixed fill saturation in percent; bodies paint as `hsl(hue, sat%, light%)`.
#[wasm_bindgen]
pub fn get_fill_saturation() -> f32 {
    with_runner(|r| r.fill_saturation())
}

#[wasm_bindgen]
pub fn get_fill_lightness() -> f32 {
    with_runner(|r| r.fill_lightness())
}

#[wasm_bindgen]
pub fn get_stroke_r() -> f32 {
    with_runner(|r| r.stroke_r())
}

#[wasm_bindgen]
pub fn get_stroke_g() -> f32 {
    with_runner(|r| r.stroke_g())
}

#[wasm_bindgen]
pub fn get_stroke_b() -> f32 {
    with_runner(|r| r.stroke_b())
}

/// Opacity of the circle outline stroke.
#[wasm_bindgen]
pub fn get_stroke_alpha() -> f32 {
    with_runner(|r| r.stroke_alpha())
}

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    with_runner(|r| r.world_width())
}

#[wasm_bindgen]
pub fn get_world_height() -> f32 {
    with_runner(|r| r.world_height())
}
