/// Input event types the simulation understands.
/// Spawn coordinates are surface-local pixels.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A click or touch began at (x, y): spawn one body there.
    /// The host maps touch-start to this and suppresses default scrolling.
    PointerDown { x: f32, y: f32 },
    /// Empty the world and reset the count readout.
    Clear,
}

/// A queue of input events.
/// JS pushes events between frames; Rust drains them at the start of each tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
