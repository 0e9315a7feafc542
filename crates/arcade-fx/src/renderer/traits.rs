//! Drawing surface contract.
//!
//! All effects draw through this trait instead of a concrete canvas type.
//! The web bridge implements it over `CanvasRenderingContext2d`; headless
//! hosts and tests use [`RecordingSurface`](super::recording::RecordingSurface).
//!
//! The method set mirrors the subset of the Canvas 2D API the effects need.

use crate::error::FxError;

/// Rule used to decide which parts of a path are "inside" when filling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    /// Inside if the winding number is non-zero (Canvas default).
    #[default]
    NonZero,
    /// Inside if the path is crossed an odd number of times.
    /// Used for cut-outs that must not depend on path direction.
    EvenOdd,
}

/// Pixel dimensions of an image handle.
pub trait ImageSize {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
}

/// A 2D drawing context provided by the host.
///
/// Paint state (`fill_style`, `global_alpha`) is saved and restored as a stack
/// via [`save`](Surface::save) / [`restore`](Surface::restore), like Canvas 2D.
pub trait Surface {
    /// Image handle type accepted by [`draw_image`](Surface::draw_image).
    type Image: ImageSize;

    fn set_fill_style(&mut self, style: &str);

    fn set_global_alpha(&mut self, alpha: f32);

    fn save(&mut self);

    fn restore(&mut self);

    /// Start a new path, discarding any previous sub-paths.
    fn begin_path(&mut self);

    /// Add a circular arc (angles in radians) to the current path.
    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32) -> Result<(), FxError>;

    /// Add a closed rectangle sub-path to the current path.
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Fill the current path with the current fill style.
    fn fill(&mut self, rule: FillRule);

    /// Fill a rectangle directly, without touching the current path.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Blit an image with its top-left corner at (x, y).
    fn draw_image(&mut self, image: &Self::Image, x: f32, y: f32) -> Result<(), FxError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fill_rule_is_non_zero() {
        assert_eq!(FillRule::default(), FillRule::NonZero);
        assert_ne!(FillRule::NonZero, FillRule::EvenOdd);
    }
}
