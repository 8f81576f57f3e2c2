use ballpit_engine::{
    build_render_buffer, InputEvent, InputQueue, RenderBuffer, SimConfig, SimEvent, SimParams,
    Viewport, World, FILL_LIGHTNESS, FILL_SATURATION, STROKE_RGBA,
};

/// Owns all simulation state and wires up the per-frame loop.
///
/// The host's requestAnimationFrame callback calls `tick()` once per display
/// refresh, then paints: first the low-opacity fade rectangle (color and alpha
/// from the accessors below), then every instance in the render buffer. One
/// tick is exactly one integration step; cadence follows the host's refresh
/// signal, so gravity is a per-frame velocity delta by design.
///
/// All mutation funnels through this single owner, which preserves the
/// single-writer model the simulation assumes.
pub struct SimRunner {
    config: SimConfig,
    /// Live knobs, rewritten by the host sliders at any time and polled once
    /// per tick. Never validated: NaN propagates into body motion without
    /// stopping the loop.
    params: SimParams,
    world: World,
    viewport: Viewport,
    input: InputQueue,
    render_buffer: RenderBuffer,
    /// Events emitted during the most recent tick, read by the host after it.
    events: Vec<SimEvent>,
}

impl SimRunner {
    pub fn new(width: f32, height: f32) -> Self {
        let config = SimConfig {
            world_width: width,
            world_height: height,
            ..SimConfig::default()
        };
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);
        Self {
            world: World::new(config.seed),
            viewport: Viewport::new(width, height),
            params: SimParams::default(),
            input: InputQueue::new(),
            render_buffer,
            events: Vec::new(),
            config,
        }
    }

    /// Replace the static config from host-supplied JSON. A parse failure is
    /// logged and leaves the current config untouched.
    pub fn load_config(&mut self, json: &str) {
        match SimConfig::from_json(json) {
            Ok(config) => {
                if config.seed != self.config.seed {
                    self.world.reseed(config.seed);
                }
                self.viewport.resize(config.world_width, config.world_height);
                self.render_buffer = RenderBuffer::with_capacity(config.max_instances);
                self.config = config;
                log::info!("config loaded");
            }
            Err(e) => log::warn!("ignoring invalid config JSON: {}", e),
        }
    }

    /// Push an input event into the queue (called from JS between frames).
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Host surface dimension change. Bodies persist and are not repositioned;
    /// the boundary clamp catches strays on their next step.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.params.gravity = gravity;
    }

    pub fn set_restitution(&mut self, restitution: f32) {
        self.params.restitution = restitution;
    }

    /// Toggle the settled-body eviction sweep at runtime.
    pub fn set_eviction(&mut self, enabled: bool) {
        self.config.evict_settled = enabled;
    }

    /// Run one frame: drain input, advance every body one step, optionally
    /// sweep settled bodies, rebuild the render buffer.
    pub fn tick(&mut self) {
        self.events.clear();

        for event in self.input.drain() {
            match event {
                InputEvent::PointerDown { x, y } => {
                    self.world.spawn(x, y, &self.config);
                    self.events.push(SimEvent::count(self.world.count()));
                }
                InputEvent::Clear => {
                    self.world.clear();
                    self.events.push(SimEvent::count(0));
                }
            }
        }

        // Parameters are polled exactly once per frame; every body in this
        // tick sees the same values.
        let params = self.params;
        self.world.step_all(params, self.viewport);

        let evicted = self.world.sweep_settled(self.viewport, &self.config);
        if evicted > 0 {
            log::debug!("evicted {} settled bodies", evicted);
            self.events.push(SimEvent::count(self.world.count()));
        }

        build_render_buffer(self.world.iter(), &mut self.render_buffer);
    }

    // ---- Accessors read by the host each frame ----

    pub fn body_count(&self) -> u32 {
        self.world.count() as u32
    }

    /// The body-count readout text, e.g. "12 Objects".
    pub fn count_label(&self) -> String {
        format!("{} Objects", self.world.count())
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn max_instances(&self) -> u32 {
        self.config.max_instances as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.events.len() as u32
    }

    pub fn fade_alpha(&self) -> f32 {
        self.config.fade_alpha
    }

    pub fn clear_r(&self) -> f32 {
        self.config.clear_color[0]
    }

    pub fn clear_g(&self) -> f32 {
        self.config.clear_color[1]
    }

    pub fn clear_b(&self) -> f32 {
        self.config.clear_color[2]
    }

    pub fn world_width(&self) -> f32 {
        self.viewport.width
    }

    pub fn world_height(&self) -> f32 {
        self.viewport.height
    }

    // Fill and stroke are fixed by the paint contract, not configurable;
    // exposed as accessors because the host cannot read Rust consts.

    pub fn fill_saturation(&self) -> f32 {
        FILL_SATURATION
    }

    pub fn fill_lightness(&self) -> f32 {
        FILL_LIGHTNESS
    }

    pub fn stroke_r(&self) -> f32 {
        STROKE_RGBA[0]
    }

    pub fn stroke_g(&self) -> f32 {
        STROKE_RGBA[1]
    }

    pub fn stroke_b(&self) -> f32 {
        STROKE_RGBA[2]
    }

    pub fn stroke_alpha(&self) -> f32 {
        STROKE_RGBA[3]
    }
}
