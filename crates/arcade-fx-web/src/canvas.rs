//! `Surface` over a browser `CanvasRenderingContext2d`.

use arcade_fx::{FillRule, FxError, ImageSize, Surface};
use web_sys::{CanvasRenderingContext2d, CanvasWindingRule, HtmlImageElement};

/// A decoded `<img>` used as a parallax tile.
#[derive(Debug, Clone)]
pub struct CanvasImage(pub HtmlImageElement);

impl ImageSize for CanvasImage {
    fn width(&self) -> f32 {
        self.0.natural_width() as f32
    }

    fn height(&self) -> f32 {
        self.0.natural_height() as f32
    }
}

/// Borrowed 2D context for the duration of one draw call.
pub struct Canvas2d<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> Canvas2d<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for Canvas2d<'_> {
    type Image = CanvasImage;

    fn set_fill_style(&mut self, style: &str) {
        self.ctx.set_fill_style_str(style);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32) -> Result<(), FxError> {
        self.ctx
            .arc(x as f64, y as f64, radius as f64, start_angle as f64, end_angle as f64)
            .map_err(|e| FxError::Surface(format!("{:?}", e)))
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx.rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill(&mut self, rule: FillRule) {
        match rule {
            FillRule::NonZero => self.ctx.fill(),
            FillRule::EvenOdd => self.ctx.fill_with_canvas_winding_rule(CanvasWindingRule::Evenodd),
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx.fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn draw_image(&mut self, image: &CanvasImage, x: f32, y: f32) -> Result<(), FxError> {
        self.ctx
            .draw_image_with_html_image_element(&image.0, x as f64, y as f64)
            .map_err(|e| FxError::Surface(format!("{:?}", e)))
    }
}
