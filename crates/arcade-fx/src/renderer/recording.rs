use crate::error::FxError;
use super::traits::{FillRule, ImageSize, Surface};

/// Image handle for headless drawing: an id plus pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageRef {
    pub id: u32,
    pub width: f32,
    pub height: f32,
}

impl ImageRef {
    pub fn new(id: u32, width: f32, height: f32) -> Self {
        Self { id, width, height }
    }
}

impl ImageSize for ImageRef {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }
}

/// A single recorded drawing call, with the paint state it was issued under.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Arc { x: f32, y: f32, radius: f32, start: f32, end: f32 },
    Rect { x: f32, y: f32, width: f32, height: f32 },
    Fill { style: String, alpha: f32, rule: FillRule },
    FillRect { x: f32, y: f32, width: f32, height: f32, style: String, alpha: f32 },
    DrawImage { id: u32, x: f32, y: f32, alpha: f32 },
    BeginPath,
}

#[derive(Debug, Clone, PartialEq)]
struct PaintState {
    fill_style: String,
    global_alpha: f32,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            fill_style: "#000000".to_string(),
            global_alpha: 1.0,
        }
    }
}

/// Headless [`Surface`] that records every call instead of rasterizing.
///
/// Tracks the save/restore stack so callers can check that effects leave the
/// paint state the way they found it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    state: PaintState,
    stack: Vec<PaintState>,
    fail_images: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `draw_image` call fail, to exercise error propagation.
    pub fn with_failing_images(mut self) -> Self {
        self.fail_images = true;
        self
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn fill_style(&self) -> &str {
        &self.state.fill_style
    }

    pub fn global_alpha(&self) -> f32 {
        self.state.global_alpha
    }

    /// Depth of the save/restore stack (0 when balanced).
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    type Image = ImageRef;

    fn set_fill_style(&mut self, style: &str) {
        self.state.fill_style = style.to_string();
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.state.global_alpha = alpha;
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32) -> Result<(), FxError> {
        // Canvas 2D throws IndexSizeError for negative radii.
        if radius < 0.0 {
            return Err(FxError::Surface(format!("negative arc radius {radius}")));
        }
        self.commands.push(DrawCommand::Arc { x, y, radius, start, end });
        Ok(())
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::Rect { x, y, width, height });
    }

    fn fill(&mut self, rule: FillRule) {
        self.commands.push(DrawCommand::Fill {
            style: self.state.fill_style.clone(),
            alpha: self.state.global_alpha,
            rule,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            style: self.state.fill_style.clone(),
            alpha: self.state.global_alpha,
        });
    }

    fn draw_image(&mut self, image: &ImageRef, x: f32, y: f32) -> Result<(), FxError> {
        if self.fail_images {
            return Err(FxError::Surface(format!("image {} not decoded", image.id)));
        }
        self.commands.push(DrawCommand::DrawImage {
            id: image.id,
            x,
            y,
            alpha: self.state.global_alpha,
        });
        Ok(())
    }
}
