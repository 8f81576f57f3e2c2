/// Live simulation parameters, polled once per frame by the runner and passed
/// down into every body step. Values are used as-is: a non-finite gravity or
/// restitution contaminates body motion visibly but never panics and never
/// stops the frame loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    /// Downward velocity increment per frame (not per second).
    pub gravity: f32,
    /// Fraction of vertical speed retained, sign-flipped, on a floor hit.
    /// Expected in [0, 1] but not clamped.
    pub restitution: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            restitution: 0.8,
        }
    }
}
