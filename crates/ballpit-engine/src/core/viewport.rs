/// Current drawable surface bounds, in surface-local pixels.
/// Mutated only on host resize events; read by every body step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Replace the bounds. Bodies are not repositioned here; one that ends up
    /// outside the new bounds is pulled back by the normal clamp on its next step.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}
