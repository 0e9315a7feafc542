//! Full-frame transition overlays (fades, wipes, iris in/out).

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::error::FxError;
use crate::renderer::traits::{FillRule, Surface};
use crate::systems::effects::Color;

/// Shape of a transition overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum TransitionKind {
    /// Whole frame darkens uniformly.
    #[default]
    Fade,
    /// Black grows from the left edge.
    WipeRight,
    /// Black grows from the right edge.
    WipeLeft,
    /// Black grows from the bottom edge.
    WipeUp,
    /// Black grows from the top edge.
    WipeDown,
    /// Black circle grows from the center.
    Circle,
    /// Everything outside a shrinking center circle is black.
    CircleReverse,
}

impl TransitionKind {
    pub const ALL: [TransitionKind; 7] = [
        Self::Fade, Self::WipeRight, Self::WipeLeft, Self::WipeUp,
        Self::WipeDown, Self::Circle, Self::CircleReverse,
    ];

    /// Parse a transition name. Unknown names fall back to `Fade`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "fade" => Self::Fade,
            "wipe-right" => Self::WipeRight,
            "wipe-left" => Self::WipeLeft,
            "wipe-up" => Self::WipeUp,
            "wipe-down" => Self::WipeDown,
            "circle" => Self::Circle,
            "circle-reverse" => Self::CircleReverse,
            other => {
                log::debug!("unknown transition '{}', using fade", other);
                Self::Fade
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::WipeRight => "wipe-right",
            Self::WipeLeft => "wipe-left",
            Self::WipeUp => "wipe-up",
            Self::WipeDown => "wipe-down",
            Self::Circle => "circle",
            Self::CircleReverse => "circle-reverse",
        }
    }
}

impl From<String> for TransitionKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Paint the overlay for `kind` at `progress` (clamped to [0, 1]).
///
/// Paint state is saved before and restored after, so no fill style or
/// alpha leaks into the caller's drawing.
pub fn draw_transition<S: Surface>(
    surface: &mut S,
    kind: TransitionKind,
    progress: f32,
    width: f32,
    height: f32,
) -> Result<(), FxError> {
    let p = progress.clamp(0.0, 1.0);
    surface.save();
    surface.set_fill_style(Color::BLACK);
    let result = paint(surface, kind, p, width, height);
    surface.restore();
    result
}

fn paint<S: Surface>(surface: &mut S, kind: TransitionKind, p: f32, w: f32, h: f32) -> Result<(), FxError> {
    let (cx, cy) = (w / 2.0, h / 2.0);
    let max_radius = w.max(h);

    match kind {
        TransitionKind::Fade => {
            surface.set_global_alpha(p);
            surface.fill_rect(0.0, 0.0, w, h);
        }
        TransitionKind::WipeRight => surface.fill_rect(0.0, 0.0, w * p, h),
        TransitionKind::WipeLeft => surface.fill_rect(w * (1.0 - p), 0.0, w * p, h),
        TransitionKind::WipeUp => surface.fill_rect(0.0, h * (1.0 - p), w, h * p),
        TransitionKind::WipeDown => surface.fill_rect(0.0, 0.0, w, h * p),
        TransitionKind::Circle => {
            surface.begin_path();
            surface.arc(cx, cy, p * max_radius, 0.0, TAU)?;
            surface.fill(FillRule::NonZero);
        }
        TransitionKind::CircleReverse => {
            // Circle + frame in one path; even-odd leaves the circle unfilled
            // regardless of which direction either sub-path winds.
            surface.begin_path();
            surface.arc(cx, cy, (1.0 - p) * max_radius, 0.0, TAU)?;
            surface.rect(0.0, 0.0, w, h);
            surface.fill(FillRule::EvenOdd);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{DrawCommand, RecordingSurface};

    fn arcs(surface: &RecordingSurface) -> Vec<f32> {
        surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Arc { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn names_round_trip() {
        for kind in TransitionKind::ALL {
            assert_eq!(TransitionKind::from_name(kind.name()), kind);
        }
    }

    #[test]
    fn unknown_name_falls_back_to_fade() {
        assert_eq!(TransitionKind::from_name("spiral"), TransitionKind::Fade);
    }

    #[test]
    fn deserializes_kebab_case() {
        let kind: TransitionKind = serde_json::from_str("\"circle-reverse\"").unwrap();
        assert_eq!(kind, TransitionKind::CircleReverse);
    }

    #[test]
    fn circle_full_progress_covers_frame() {
        let mut s = RecordingSurface::new();
        draw_transition(&mut s, TransitionKind::Circle, 1.0, 800.0, 600.0).unwrap();
        assert_eq!(arcs(&s), vec![800.0]);
        assert!(s.commands().iter().any(|c| matches!(
            c,
            DrawCommand::Fill { style, rule: FillRule::NonZero, .. } if style == "#000000"
        )));
    }

    #[test]
    fn circle_zero_progress_is_empty() {
        let mut s = RecordingSurface::new();
        draw_transition(&mut s, TransitionKind::Circle, 0.0, 800.0, 600.0).unwrap();
        assert_eq!(arcs(&s), vec![0.0]);
    }

    #[test]
    fn circle_reverse_cuts_out_shrinking_hole() {
        let mut s = RecordingSurface::new();
        draw_transition(&mut s, TransitionKind::CircleReverse, 0.25, 400.0, 300.0).unwrap();
        assert_eq!(arcs(&s), vec![300.0]);
        assert!(s.commands().contains(&DrawCommand::Rect { x: 0.0, y: 0.0, width: 400.0, height: 300.0 }));
        assert!(matches!(s.commands().last(), Some(DrawCommand::Fill { rule: FillRule::EvenOdd, .. })));
    }

    #[test]
    fn wipes_cover_expected_extent() {
        let cases = [
            (TransitionKind::WipeRight, [0.0, 0.0, 100.0, 100.0]),
            (TransitionKind::WipeLeft, [100.0, 0.0, 100.0, 100.0]),
            (TransitionKind::WipeUp, [0.0, 50.0, 200.0, 50.0]),
            (TransitionKind::WipeDown, [0.0, 0.0, 200.0, 50.0]),
        ];
        for (kind, [x, y, width, height]) in cases {
            let mut s = RecordingSurface::new();
            draw_transition(&mut s, kind, 0.5, 200.0, 100.0).unwrap();
            let expected = DrawCommand::FillRect {
                x, y, width, height,
                style: "#000000".into(),
                alpha: 1.0,
            };
            assert_eq!(s.commands(), &[expected], "{:?}", kind);
        }
    }

    #[test]
    fn fade_uses_progress_as_alpha_and_restores_state() {
        let mut s = RecordingSurface::new();
        s.set_fill_style("#123456");
        draw_transition(&mut s, TransitionKind::Fade, 0.4, 10.0, 10.0).unwrap();
        assert!(matches!(s.commands(), [DrawCommand::FillRect { alpha, .. }] if (*alpha - 0.4).abs() < 1e-6));
        assert_eq!(s.fill_style(), "#123456");
        assert_eq!(s.global_alpha(), 1.0);
        assert_eq!(s.save_depth(), 0);
    }

    #[test]
    fn progress_is_clamped() {
        let mut s = RecordingSurface::new();
        draw_transition(&mut s, TransitionKind::CircleReverse, 1.5, 100.0, 50.0).unwrap();
        assert_eq!(arcs(&s), vec![0.0]);
    }
}
