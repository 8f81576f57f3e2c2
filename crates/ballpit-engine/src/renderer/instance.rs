use bytemuck::{Pod, Zeroable};

/// Fixed fill saturation, in percent: bodies paint as `hsl(hue, 70%, 50%)`.
pub const FILL_SATURATION: f32 = 70.0;
/// Fixed fill lightness, in percent.
pub const FILL_LIGHTNESS: f32 = 50.0;
/// Circle outline: semi-transparent white, `rgba(255, 255, 255, 0.3)`.
pub const STROKE_RGBA: [f32; 4] = [255.0, 255.0, 255.0, 0.3];

/// Per-body render data read by the host canvas renderer each frame.
/// Must match the JS-side protocol: 4 floats = 16 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderInstance {
    /// Center X in surface pixels.
    pub x: f32,
    /// Center Y in surface pixels.
    pub y: f32,
    /// Circle radius in pixels.
    pub radius: f32,
    /// HSL hue in degrees; saturation/lightness are the constants above.
    pub hue: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 4;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all body instances for the current frame,
/// in draw order (earliest spawn first).
pub struct RenderBuffer {
    instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn instances(&self) -> &[RenderInstance] {
        &self.instances
    }

    /// Raw pointer to instance data for host-side Float32Array reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_instance_is_4_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), 16);
        assert_eq!(RenderInstance::STRIDE_BYTES, 16);
    }

    #[test]
    fn render_buffer_push_and_count() {
        let mut buf = RenderBuffer::new();
        buf.push(RenderInstance::default());
        buf.push(RenderInstance::default());
        assert_eq!(buf.instance_count(), 2);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
    }
}
