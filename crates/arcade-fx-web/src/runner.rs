use std::cell::RefCell;
use std::rc::Rc;

use arcade_fx::{
    Controller, EffectPresets, FrameQueue, FxError, ImageSize, ParallaxBackground,
    ParallaxConfig, ParallaxLayer, ParticleConfig, ParticleSystem, Surface,
    ScreenShake, ScreenShakeConfig, Flash, FlashConfig, SlowMotion, SlowMotionConfig,
    TransitionEffect, TransitionConfig, TransitionKind, Color,
    create_screen_shake, create_flash, create_slow_motion, create_transition,
    draw_flash, draw_transition,
};
use glam::Vec2;

/// Latest values reported by the running controllers.
#[derive(Debug, Clone)]
pub struct FxOutputs {
    pub shake: Vec2,
    pub flash: (Color, f32),
    pub time_scale: f32,
    /// `None` once no transition overlay should be drawn.
    pub transition: Option<(TransitionKind, f32)>,
    pub completed_transitions: u32,
}

impl Default for FxOutputs {
    fn default() -> Self {
        Self {
            shake: Vec2::ZERO,
            flash: (Color::white(), 0.0),
            time_scale: 1.0,
            transition: None,
            completed_transitions: 0,
        }
    }
}

/// Wires particles, the four controllers, and an optional parallax
/// background to one frame loop.
///
/// The browser owns `requestAnimationFrame`; it calls [`FxRunner::tick`] once
/// per frame with its timestamp and then [`FxRunner::draw`].
pub struct FxRunner<I: ImageSize> {
    frames: FrameQueue,
    particles: ParticleSystem,
    presets: EffectPresets,
    outputs: Rc<RefCell<FxOutputs>>,
    shake: Option<Controller<ScreenShake>>,
    flash: Option<Controller<Flash>>,
    slow_motion: Option<Controller<SlowMotion>>,
    transition: Option<Controller<TransitionEffect>>,
    parallax: ParallaxBackground<I>,
    width: f32,
    height: f32,
}

impl<I: ImageSize> FxRunner<I> {
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        Self {
            frames: FrameQueue::new(),
            particles: ParticleSystem::with_capacity(seed, 1024),
            presets: EffectPresets::builtin(),
            outputs: Rc::new(RefCell::new(FxOutputs::default())),
            shake: None,
            flash: None,
            slow_motion: None,
            transition: None,
            parallax: ParallaxBackground::new(ParallaxConfig { layers: Vec::new(), width, height }),
            width,
            height,
        }
    }

    /// Merge presets from JSON over the current table.
    pub fn load_presets(&mut self, json: &str) -> Result<(), FxError> {
        let presets = EffectPresets::from_json(json)?;
        self.presets.merge(presets);
        Ok(())
    }

    pub fn presets(&self) -> &EffectPresets {
        &self.presets
    }

    /// Advance every running effect to `now` (milliseconds).
    pub fn tick(&mut self, now: f64) {
        let batch = self.frames.begin_frame();
        let frames = &mut self.frames;
        if let Some(c) = self.shake.as_mut() {
            c.on_frame(&batch, now, frames);
        }
        if let Some(c) = self.flash.as_mut() {
            c.on_frame(&batch, now, frames);
        }
        if let Some(c) = self.slow_motion.as_mut() {
            c.on_frame(&batch, now, frames);
        }
        if let Some(c) = self.transition.as_mut() {
            c.on_frame(&batch, now, frames);
        }
        self.particles.tick(now);
    }

    /// Draw background, particles, flash, then the transition overlay on top.
    pub fn draw<S: Surface<Image = I>>(&self, surface: &mut S) -> Result<(), FxError> {
        self.parallax.draw(surface)?;
        self.particles.draw(surface)?;
        let outputs = self.outputs.borrow();
        let (color, alpha) = &outputs.flash;
        draw_flash(surface, color, *alpha, self.width, self.height)?;
        if let Some((kind, progress)) = outputs.transition {
            draw_transition(surface, kind, progress, self.width, self.height)?;
        }
        Ok(())
    }

    // ---- Triggers ----

    pub fn burst(&mut self, config: &ParticleConfig, now: f64) {
        self.particles.spawn(config, now);
    }

    /// Spawn a named particle preset at (x, y).
    pub fn burst_preset(&mut self, name: &str, x: f32, y: f32, now: f64) -> Result<(), FxError> {
        let config = self.presets.particle(name)?.clone().at(x, y);
        self.particles.spawn(&config, now);
        Ok(())
    }

    pub fn shake(&mut self, config: ScreenShakeConfig, now: f64) {
        if let Some(old) = self.shake.as_mut() {
            old.stop(&mut self.frames);
        }
        let outputs = self.outputs.clone();
        let mut c = create_screen_shake(config, move |offset| outputs.borrow_mut().shake = offset);
        c.start(now, &mut self.frames);
        self.shake = Some(c);
    }

    pub fn flash(&mut self, config: FlashConfig, now: f64) {
        if let Some(old) = self.flash.as_mut() {
            old.stop(&mut self.frames);
        }
        let outputs = self.outputs.clone();
        let mut c = create_flash(config, move |value| outputs.borrow_mut().flash = value);
        c.start(now, &mut self.frames);
        self.flash = Some(c);
    }

    pub fn slow_motion(&mut self, config: SlowMotionConfig, now: f64) {
        if let Some(old) = self.slow_motion.as_mut() {
            old.stop(&mut self.frames);
        }
        let outputs = self.outputs.clone();
        let mut c = create_slow_motion(config, move |factor| outputs.borrow_mut().time_scale = factor);
        c.start(now, &mut self.frames);
        self.slow_motion = Some(c);
    }

    pub fn transition(&mut self, config: TransitionConfig, now: f64) {
        if let Some(old) = self.transition.as_mut() {
            old.stop(&mut self.frames);
        }
        let on_update = self.outputs.clone();
        let on_complete = self.outputs.clone();
        let mut c = create_transition(
            config,
            move |value| on_update.borrow_mut().transition = Some(value),
            move || on_complete.borrow_mut().completed_transitions += 1,
        );
        c.start(now, &mut self.frames);
        self.transition = Some(c);
    }

    /// Remove the transition overlay (e.g. after the new scene has loaded).
    pub fn clear_transition(&mut self) {
        if let Some(c) = self.transition.as_mut() {
            c.stop(&mut self.frames);
        }
        self.outputs.borrow_mut().transition = None;
    }

    /// Stop every controller and drop all particles.
    pub fn stop_all(&mut self) {
        let frames = &mut self.frames;
        if let Some(c) = self.shake.as_mut() {
            c.stop(frames);
        }
        if let Some(c) = self.flash.as_mut() {
            c.stop(frames);
        }
        if let Some(c) = self.slow_motion.as_mut() {
            c.stop(frames);
        }
        self.clear_transition();
        self.particles.clear();
    }

    // ---- Parallax ----

    pub fn add_parallax_layer(&mut self, image: I, speed: f32) {
        self.parallax.push_layer(ParallaxLayer::new(image, speed));
    }

    pub fn scroll(&mut self, delta_x: f32, delta_y: f32) {
        self.parallax.update(delta_x, delta_y);
    }

    pub fn layer_positions(&self) -> &[Vec2] {
        self.parallax.layer_positions()
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.parallax.resize(width, height);
    }

    // ---- Accessors (read by JavaScript via wasm_bindgen exports) ----

    pub fn outputs(&self) -> FxOutputs {
        self.outputs.borrow().clone()
    }

    pub fn shake_offset(&self) -> Vec2 {
        self.outputs.borrow().shake
    }

    pub fn time_scale(&self) -> f32 {
        self.outputs.borrow().time_scale
    }

    pub fn particle_count(&self) -> u32 {
        self.particles.len() as u32
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.pending()
    }
}
