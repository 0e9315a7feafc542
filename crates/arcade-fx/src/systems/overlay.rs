use crate::error::FxError;
use crate::renderer::traits::Surface;
use crate::systems::effects::Color;

/// Fill the whole frame with `color` at `alpha`. Nothing is drawn at alpha <= 0.
pub fn draw_flash<S: Surface>(
    surface: &mut S,
    color: &Color,
    alpha: f32,
    width: f32,
    height: f32,
) -> Result<(), FxError> {
    if alpha <= 0.0 {
        return Ok(());
    }
    surface.save();
    surface.set_fill_style(color.as_str());
    surface.set_global_alpha(alpha.min(1.0));
    surface.fill_rect(0.0, 0.0, width, height);
    surface.restore();
    Ok(())
}
