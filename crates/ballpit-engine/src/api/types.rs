use bytemuck::{Pod, Zeroable};

/// Unique identifier for a spawned body.
/// Ids are never reused within a world; removal goes through the id, not
/// positional equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// Event kind: the body count changed (after a spawn, a clear, or an eviction
/// sweep). `a` carries the new count.
pub const EVENT_COUNT: f32 = 1.0;

/// A simulation event communicated from Rust to the host via a flat float
/// buffer. Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SimEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl SimEvent {
    pub const FLOATS: usize = 4;

    /// Body-count-changed event. The host mirrors `count` into the
    /// "`<n>` Objects" readout.
    pub fn count(count: usize) -> Self {
        Self {
            kind: EVENT_COUNT,
            a: count as f32,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_event_is_4_floats() {
        assert_eq!(std::mem::size_of::<SimEvent>(), 16);
        assert_eq!(SimEvent::FLOATS, 4);
    }

    #[test]
    fn count_event_carries_count() {
        let ev = SimEvent::count(37);
        assert_eq!(ev.kind, EVENT_COUNT);
        assert_eq!(ev.a, 37.0);
    }
}
