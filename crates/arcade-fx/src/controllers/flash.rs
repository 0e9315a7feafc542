use serde::{Deserialize, Serialize};

use crate::extensions::easing::Easing;
use crate::systems::effects::Color;
use super::{Controller, TimedEffect};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashConfig {
    pub color: Color,
    /// Milliseconds.
    pub duration: f64,
    pub easing: Easing,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            color: Color::white(),
            duration: 200.0,
            easing: Easing::Linear,
        }
    }
}

/// Full-screen flash that fades from opaque to transparent.
#[derive(Debug, Clone)]
pub struct Flash {
    pub color: Color,
}

impl TimedEffect for Flash {
    type Output = (Color, f32);

    fn sample(&mut self, progress: f32) -> (Color, f32) {
        (self.color.clone(), 1.0 - progress)
    }

    fn finish(&mut self) -> (Color, f32) {
        (self.color.clone(), 0.0)
    }

    fn reset(&mut self) -> Option<(Color, f32)> {
        Some((self.color.clone(), 0.0))
    }
}

/// Build an idle flash that reports `(color, alpha)` each frame.
pub fn create_flash(
    config: FlashConfig,
    on_flash: impl FnMut((Color, f32)) + 'static,
) -> Controller<Flash> {
    Controller::new(Flash { color: config.color }, config.duration, on_flash)
        .with_easing(config.easing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scheduler::FrameQueue;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn alpha_fades_linearly() {
        let mut flash = Flash { color: Color::from("red") };
        assert_eq!(flash.sample(0.0), (Color::from("red"), 1.0));
        assert_eq!(flash.sample(0.75).1, 0.25);
        assert_eq!(flash.finish().1, 0.0);
    }

    #[test]
    fn flash_runs_to_zero_alpha() {
        let alphas = Rc::new(RefCell::new(Vec::new()));
        let sink = alphas.clone();
        let config = FlashConfig { duration: 100.0, ..FlashConfig::default() };
        let mut flash = create_flash(config, move |(_, a)| sink.borrow_mut().push(a));
        let mut frames = FrameQueue::new();
        flash.start(0.0, &mut frames);
        for now in [50.0, 100.0] {
            let batch = frames.begin_frame();
            flash.on_frame(&batch, now, &mut frames);
        }
        assert_eq!(*alphas.borrow(), vec![0.5, 0.0]);
        assert!(!flash.is_active());
    }

    #[test]
    fn stop_reports_zero_alpha() {
        let alphas = Rc::new(RefCell::new(Vec::new()));
        let sink = alphas.clone();
        let mut flash = create_flash(FlashConfig::default(), move |(_, a)| sink.borrow_mut().push(a));
        let mut frames = FrameQueue::new();
        flash.start(0.0, &mut frames);
        flash.stop(&mut frames);
        assert_eq!(*alphas.borrow(), vec![0.0]);
    }
}
