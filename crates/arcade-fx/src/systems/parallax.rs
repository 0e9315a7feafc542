//! Tiled multi-layer parallax background.
//!
//! Each layer scrolls at `speed` times the camera delta and tiles its image
//! across the viewport. Positions stay wrapped into `[-image_size, 0)` so the
//! accumulators never grow without bound.

use glam::Vec2;

use crate::error::FxError;
use crate::renderer::traits::{ImageSize, Surface};

/// One background layer: a tileable image and its scroll factor.
#[derive(Debug, Clone)]
pub struct ParallaxLayer<I> {
    pub image: I,
    /// 0 = fixed, 1 = moves with the camera.
    pub speed: f32,
}

impl<I> ParallaxLayer<I> {
    pub fn new(image: I, speed: f32) -> Self {
        Self { image, speed }
    }
}

/// Layers plus the viewport they must cover.
#[derive(Debug, Clone)]
pub struct ParallaxConfig<I> {
    pub layers: Vec<ParallaxLayer<I>>,
    pub width: f32,
    pub height: f32,
}

/// A set of parallax layers with one position accumulator per layer.
#[derive(Debug, Clone)]
pub struct ParallaxBackground<I> {
    layers: Vec<ParallaxLayer<I>>,
    positions: Vec<Vec2>,
    width: f32,
    height: f32,
}

/// Images narrower than one pixel on an axis are neither wrapped nor tiled.
const MIN_TILE_SIZE: f32 = 1.0;

fn tiles(size: f32) -> bool {
    size >= MIN_TILE_SIZE
}

/// Wrap `pos` into `[-size, 0)`. Sizes below one pixel leave it untouched.
fn wrap(pos: f32, size: f32) -> f32 {
    if !tiles(size) {
        return pos;
    }
    // rem_euclid may round up to exactly `size` for tiny negative inputs.
    let r = pos.rem_euclid(size) - size;
    if r >= 0.0 { r - size } else { r }
}

/// Copies needed along one axis so no offset in `[-size, 0)` leaves a gap.
fn tile_count(viewport: f32, size: f32) -> u32 {
    (viewport / size).ceil().max(0.0) as u32 + 1
}

impl<I: ImageSize> ParallaxBackground<I> {
    pub fn new(config: ParallaxConfig<I>) -> Self {
        let positions = vec![Vec2::ZERO; config.layers.len()];
        Self {
            layers: config.layers,
            positions,
            width: config.width,
            height: config.height,
        }
    }

    /// Scroll every layer by the camera delta scaled by its speed.
    pub fn update(&mut self, delta_x: f32, delta_y: f32) {
        for (layer, pos) in self.layers.iter().zip(self.positions.iter_mut()) {
            let x = pos.x - delta_x * layer.speed;
            let y = pos.y - delta_y * layer.speed;
            pos.x = wrap(x, layer.image.width());
            pos.y = wrap(y, layer.image.height());
        }
    }

    /// Tile each layer back to front, starting at its wrapped position.
    pub fn draw<S: Surface<Image = I>>(&self, surface: &mut S) -> Result<(), FxError> {
        for (layer, pos) in self.layers.iter().zip(&self.positions) {
            let (iw, ih) = (layer.image.width(), layer.image.height());
            if !tiles(iw) || !tiles(ih) {
                surface.draw_image(&layer.image, pos.x, pos.y)?;
                continue;
            }
            let cols = tile_count(self.width, iw);
            let rows = tile_count(self.height, ih);
            for row in 0..rows {
                for col in 0..cols {
                    let x = pos.x + col as f32 * iw;
                    let y = pos.y + row as f32 * ih;
                    surface.draw_image(&layer.image, x, y)?;
                }
            }
        }
        Ok(())
    }

    /// Add a layer in front of the existing ones, starting at the origin.
    pub fn push_layer(&mut self, layer: ParallaxLayer<I>) {
        self.layers.push(layer);
        self.positions.push(Vec2::ZERO);
    }

    pub fn layer_positions(&self) -> &[Vec2] {
        &self.positions
    }

    pub fn layers(&self) -> &[ParallaxLayer<I>] {
        &self.layers
    }

    /// Change the viewport to cover (e.g. after a canvas resize).
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}
