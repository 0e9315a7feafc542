pub mod runner;
pub mod canvas;

pub use runner::{FxRunner, FxOutputs};
pub use canvas::{Canvas2d, CanvasImage};

use std::cell::RefCell;

use arcade_fx::{
    FlashConfig, FxError, ScreenShakeConfig, SlowMotionConfig, TransitionConfig, TransitionKind,
};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

// The browser host calls these exports from its own requestAnimationFrame
// loop. Nothing runs until `fx_init` is called explicitly.

thread_local! {
    static RUNNER: RefCell<Option<FxRunner<CanvasImage>>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut FxRunner<CanvasImage>) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Effects not initialized. Call fx_init() first.");
        f(runner)
    })
}

fn to_js(err: FxError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub fn fx_init(seed: u32, width: f32, height: f32) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(FxRunner::new(seed as u64, width, height));
    });
    log::info!("arcade-fx: initialized ({}x{})", width, height);
}

#[wasm_bindgen]
pub fn fx_load_presets(json: &str) -> Result<(), JsValue> {
    with_runner(|r| r.load_presets(json)).map_err(to_js)
}

#[wasm_bindgen]
pub fn fx_tick(now: f64) {
    with_runner(|r| r.tick(now));
}

#[wasm_bindgen]
pub fn fx_draw(ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
    with_runner(|r| r.draw(&mut Canvas2d::new(ctx))).map_err(to_js)
}

#[wasm_bindgen]
pub fn fx_resize(width: f32, height: f32) {
    with_runner(|r| r.resize(width, height));
}

// ---- Triggers ----

/// Spawn a named particle preset. Unknown names are logged and ignored.
#[wasm_bindgen]
pub fn fx_burst(x: f32, y: f32, preset: &str, now: f64) {
    with_runner(|r| {
        if let Err(err) = r.burst_preset(preset, x, y, now) {
            log::warn!("fx_burst: {}", err);
        }
    });
}

#[wasm_bindgen]
pub fn fx_shake(intensity: f32, duration: f64, now: f64) {
    let config = ScreenShakeConfig { intensity, duration, ..Default::default() };
    with_runner(|r| r.shake(config, now));
}

#[wasm_bindgen]
pub fn fx_flash(color: &str, duration: f64, now: f64) {
    let config = FlashConfig { color: color.into(), duration, ..Default::default() };
    with_runner(|r| r.flash(config, now));
}

#[wasm_bindgen]
pub fn fx_slow_motion(target_factor: f32, duration: f64, now: f64) {
    let config = SlowMotionConfig { target_factor, duration, ..Default::default() };
    with_runner(|r| r.slow_motion(config, now));
}

/// Start a transition by name (`"fade"`, `"wipe-left"`, `"circle"`, ...).
#[wasm_bindgen]
pub fn fx_transition(kind: &str, duration: f64, now: f64) {
    let config = TransitionConfig { kind: TransitionKind::from_name(kind), duration, ..Default::default() };
    with_runner(|r| r.transition(config, now));
}

#[wasm_bindgen]
pub fn fx_clear_transition() {
    with_runner(|r| r.clear_transition());
}

#[wasm_bindgen]
pub fn fx_stop_all() {
    with_runner(|r| r.stop_all());
}

// ---- Parallax ----

#[wasm_bindgen]
pub fn fx_add_parallax_layer(image: HtmlImageElement, speed: f32) {
    with_runner(|r| r.add_parallax_layer(CanvasImage(image), speed));
}

#[wasm_bindgen]
pub fn fx_scroll(delta_x: f32, delta_y: f32) {
    with_runner(|r| r.scroll(delta_x, delta_y));
}

/// Flat `[x0, y0, x1, y1, ...]` layer offsets.
#[wasm_bindgen]
pub fn fx_layer_positions() -> js_sys::Float32Array {
    with_runner(|r| {
        let flat: Vec<f32> = r.layer_positions().iter().flat_map(|p| [p.x, p.y]).collect();
        js_sys::Float32Array::from(flat.as_slice())
    })
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn fx_shake_x() -> f32 {
    with_runner(|r| r.shake_offset().x)
}

#[wasm_bindgen]
pub fn fx_shake_y() -> f32 {
    with_runner(|r| r.shake_offset().y)
}

#[wasm_bindgen]
pub fn fx_time_scale() -> f32 {
    with_runner(|r| r.time_scale())
}

#[wasm_bindgen]
pub fn fx_particle_count() -> u32 {
    with_runner(|r| r.particle_count())
}

#[wasm_bindgen]
pub fn fx_completed_transitions() -> u32 {
    with_runner(|r| r.outputs().completed_transitions)
}
