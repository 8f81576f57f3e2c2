use serde::{Deserialize, Serialize};

/// Static simulation configuration, loaded from a JSON string supplied by the
/// host at startup. Every field has a default, so partial JSON (or none at
/// all) is fine. Live per-frame knobs (gravity, restitution) are NOT here;
/// see `SimParams`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Initial surface width in pixels (replaced by resize events).
    pub world_width: f32,
    /// Initial surface height in pixels.
    pub world_height: f32,
    /// Seed for the spawn-time RNG. Equal seeds give identical runs.
    pub seed: u64,
    /// Smallest spawnable radius.
    pub radius_min: f32,
    /// Largest spawnable radius (exclusive).
    pub radius_max: f32,
    /// Hue is drawn uniformly from [0, hue_span) degrees.
    pub hue_span: f32,
    /// Initial horizontal speed is drawn uniformly from [-spawn_speed, spawn_speed).
    pub spawn_speed: f32,
    /// Opacity of the per-frame dark overlay that produces the motion trail.
    pub fade_alpha: f32,
    /// RGB of the trail overlay, 0-255 per channel.
    pub clear_color: [f32; 3],
    /// Remove bodies that have come to rest on the floor. Off by default:
    /// the observed contract is "never remove".
    pub evict_settled: bool,
    /// A body slower than this while hovering at the floor counts as settling.
    pub settle_speed: f32,
    /// Consecutive settling frames before a body is evicted.
    pub settle_frames: u32,
    /// Capacity hint for the host-side instance buffer. The world itself
    /// grows without bound.
    pub max_instances: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            seed: 42,
            radius_min: 10.0,
            radius_max: 30.0,
            hue_span: 360.0,
            spawn_speed: 5.0,
            fade_alpha: 0.4,
            clear_color: [15.0, 15.0, 19.0],
            evict_settled: false,
            settle_speed: 1.0,
            settle_frames: 60,
            max_instances: 4096,
        }
    }
}

impl SimConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_object_gives_defaults() {
        let cfg = SimConfig::from_json("{}").unwrap();
        assert_eq!(cfg.radius_min, 10.0);
        assert_eq!(cfg.radius_max, 30.0);
        assert_eq!(cfg.fade_alpha, 0.4);
        assert!(!cfg.evict_settled);
    }

    #[test]
    fn parse_partial_config() {
        let json = r#"{
            "seed": 7,
            "evict_settled": true,
            "settle_frames": 120,
            "clear_color": [0.0, 0.0, 0.0]
        }"#;
        let cfg = SimConfig::from_json(json).unwrap();
        assert_eq!(cfg.seed, 7);
        assert!(cfg.evict_settled);
        assert_eq!(cfg.settle_frames, 120);
        assert_eq!(cfg.clear_color, [0.0, 0.0, 0.0]);
        // Unspecified fields keep their defaults.
        assert_eq!(cfg.spawn_speed, 5.0);
    }

    #[test]
    fn defaults_survive_a_json_round_trip() {
        let cfg = SimConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back = SimConfig::from_json(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(SimConfig::from_json("not json").is_err());
    }
}
