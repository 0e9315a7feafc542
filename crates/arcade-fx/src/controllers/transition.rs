use serde::{Deserialize, Serialize};

use crate::extensions::easing::Easing;
use crate::systems::transition::TransitionKind;
use super::{Controller, TimedEffect};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub kind: TransitionKind,
    /// Milliseconds.
    pub duration: f64,
    pub easing: Easing,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            kind: TransitionKind::Fade,
            duration: 500.0,
            easing: Easing::Linear,
        }
    }
}

/// Reports `(kind, progress)` so the host can call `draw_transition`.
/// Has no reset value: stopping a transition leaves the overlay to the host.
#[derive(Debug, Clone, Copy)]
pub struct TransitionEffect {
    pub kind: TransitionKind,
}

impl TimedEffect for TransitionEffect {
    type Output = (TransitionKind, f32);

    fn sample(&mut self, progress: f32) -> (TransitionKind, f32) {
        (self.kind, progress)
    }

    fn finish(&mut self) -> (TransitionKind, f32) {
        (self.kind, 1.0)
    }

    fn reset(&mut self) -> Option<(TransitionKind, f32)> {
        None
    }
}

/// Build an idle transition. `on_complete` fires once when it finishes.
pub fn create_transition(
    config: TransitionConfig,
    on_update: impl FnMut((TransitionKind, f32)) + 'static,
    on_complete: impl FnMut() + 'static,
) -> Controller<TransitionEffect> {
    Controller::new(TransitionEffect { kind: config.kind }, config.duration, on_update)
        .with_easing(config.easing)
        .with_on_complete(on_complete)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scheduler::FrameQueue;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn transition(kind: TransitionKind) -> (Controller<TransitionEffect>, Rc<RefCell<Vec<(TransitionKind, f32)>>>, Rc<Cell<u32>>) {
        let updates = Rc::new(RefCell::new(Vec::new()));
        let done = Rc::new(Cell::new(0));
        let (u, d) = (updates.clone(), done.clone());
        let config = TransitionConfig { kind, duration: 400.0, ..TransitionConfig::default() };
        let c = create_transition(config, move |v| u.borrow_mut().push(v), move || d.set(d.get() + 1));
        (c, updates, done)
    }

    #[test]
    fn reports_progress_then_completes_once() {
        let (mut t, updates, done) = transition(TransitionKind::Circle);
        let mut frames = FrameQueue::new();
        t.start(0.0, &mut frames);
        for now in [100.0, 200.0, 400.0, 500.0] {
            let batch = frames.begin_frame();
            t.on_frame(&batch, now, &mut frames);
        }
        assert_eq!(
            *updates.borrow(),
            vec![
                (TransitionKind::Circle, 0.25),
                (TransitionKind::Circle, 0.5),
                (TransitionKind::Circle, 1.0),
            ]
        );
        assert_eq!(done.get(), 1);
    }

    #[test]
    fn stop_emits_nothing() {
        let (mut t, updates, done) = transition(TransitionKind::WipeLeft);
        let mut frames = FrameQueue::new();
        t.start(0.0, &mut frames);
        t.stop(&mut frames);
        assert!(updates.borrow().is_empty());
        assert_eq!(done.get(), 0);
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn config_parses_kind_name() {
        let config: TransitionConfig = serde_json::from_str(r#"{ "kind": "wipe-up", "duration": 250 }"#).unwrap();
        assert_eq!(config.kind, TransitionKind::WipeUp);
        assert_eq!(config.duration, 250.0);
    }
}
