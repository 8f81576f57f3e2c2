use crate::core::body::Body;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from the world's bodies.
/// Pure extraction: one instance per body, in the order given, so the host
/// paints later-spawned bodies on top.
pub fn build_render_buffer<'a>(bodies: impl Iterator<Item = &'a Body>, buffer: &mut RenderBuffer) {
    buffer.clear();
    for body in bodies {
        buffer.push(RenderInstance {
            x: body.pos.x,
            y: body.pos.y,
            radius: body.radius,
            hue: body.hue,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BodyId;
    use glam::Vec2;

    fn body(id: u32, x: f32, hue: f32) -> Body {
        Body::new(BodyId(id), Vec2::new(x, 50.0), Vec2::ZERO, 12.0, hue)
    }

    #[test]
    fn extraction_preserves_spawn_order() {
        let bodies = vec![body(1, 10.0, 0.0), body(2, 20.0, 120.0), body(3, 30.0, 240.0)];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(bodies.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 3);
        let xs: Vec<f32> = buffer.instances().iter().map(|i| i.x).collect();
        assert_eq!(xs, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn instance_carries_body_attributes() {
        let bodies = vec![body(1, 42.0, 300.0)];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(bodies.iter(), &mut buffer);

        let inst = &buffer.instances()[0];
        assert_eq!(inst.x, 42.0);
        assert_eq!(inst.y, 50.0);
        assert_eq!(inst.radius, 12.0);
        assert_eq!(inst.hue, 300.0);
    }

    #[test]
    fn rebuild_replaces_previous_frame() {
        let mut buffer = RenderBuffer::new();
        build_render_buffer(vec![body(1, 1.0, 0.0)].iter(), &mut buffer);
        build_render_buffer(vec![body(2, 2.0, 0.0)].iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 1);
        assert_eq!(buffer.instances()[0].x, 2.0);
    }
}
