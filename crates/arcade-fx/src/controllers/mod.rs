//! Self-driven timed effects: screen shake, flash, slow-motion, transitions.
//!
//! Each effect runs inside a [`Controller`], a two-state machine
//! (`Idle` / `Active`) that re-requests a frame from a [`FrameScheduler`]
//! every tick until its duration has elapsed. The host delivers fired frames
//! with [`Controller::on_frame`]; the controller only reacts to the handle it
//! is waiting for, so a cancelled or stale frame never produces a callback.
//!
//! Usage:
//!   let mut frames = FrameQueue::new();
//!   let mut shake = create_screen_shake(ScreenShakeConfig::default(), |offset| { /* move camera */ });
//!   shake.start(now, &mut frames);
//!   // each host frame:
//!   let batch = frames.begin_frame();
//!   shake.on_frame(&batch, now, &mut frames);

pub mod shake;
pub mod flash;
pub mod slow_motion;
pub mod transition;

pub use shake::{ScreenShake, ScreenShakeConfig, create_screen_shake};
pub use flash::{Flash, FlashConfig, create_flash};
pub use slow_motion::{SlowMotion, SlowMotionConfig, create_slow_motion};
pub use transition::{TransitionEffect, TransitionConfig, create_transition};

use crate::core::scheduler::{FrameBatch, FrameHandle, FrameScheduler};
use crate::extensions::easing::Easing;

/// The effect-specific half of a controller: what value to emit at a given
/// progress, on completion, and on cancellation.
pub trait TimedEffect {
    type Output;

    /// Value for an in-progress frame. `progress` is in [0, 1).
    fn sample(&mut self, progress: f32) -> Self::Output;

    /// Value emitted once when the duration elapses.
    fn finish(&mut self) -> Self::Output;

    /// Neutral value emitted by [`Controller::stop`], if the effect has one.
    fn reset(&mut self) -> Option<Self::Output>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ControllerState {
    Idle,
    Active { start_time: f64, pending: FrameHandle },
}

/// Drives a [`TimedEffect`] frame by frame.
pub struct Controller<E: TimedEffect> {
    effect: E,
    /// Milliseconds. Zero or negative completes on the first frame.
    duration: f64,
    easing: Easing,
    state: ControllerState,
    on_update: Box<dyn FnMut(E::Output)>,
    on_complete: Option<Box<dyn FnMut()>>,
}

impl<E: TimedEffect> Controller<E> {
    pub fn new(effect: E, duration: f64, on_update: impl FnMut(E::Output) + 'static) -> Self {
        Self {
            effect,
            duration,
            easing: Easing::Linear,
            state: ControllerState::Idle,
            on_update: Box::new(on_update),
            on_complete: None,
        }
    }

    // -- Builder methods --

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Called once after the final update when the duration elapses (not on `stop`).
    pub fn with_on_complete(mut self, on_complete: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(on_complete));
        self
    }

    /// Begin the effect. No-op if it is already running.
    pub fn start(&mut self, now: f64, scheduler: &mut impl FrameScheduler) {
        if self.is_active() {
            return;
        }
        let pending = scheduler.request_frame();
        self.state = ControllerState::Active { start_time: now, pending };
        log::debug!("effect started (duration {}ms)", self.duration);
    }

    /// Cancel the effect and emit its reset value.
    pub fn stop(&mut self, scheduler: &mut impl FrameScheduler) {
        if let ControllerState::Active { pending, .. } = self.state {
            scheduler.cancel_frame(pending);
            log::debug!("effect stopped");
        }
        self.state = ControllerState::Idle;
        if let Some(value) = self.effect.reset() {
            (self.on_update)(value);
        }
    }

    /// Handle one host frame. Returns true if this controller ran.
    pub fn on_frame(&mut self, batch: &FrameBatch, now: f64, scheduler: &mut impl FrameScheduler) -> bool {
        let ControllerState::Active { start_time, pending } = self.state else {
            return false;
        };
        if !batch.contains(pending) {
            return false;
        }

        let progress = self.raw_progress(start_time, now);
        if progress < 1.0 {
            let value = self.effect.sample(self.easing.apply(progress));
            (self.on_update)(value);
            let pending = scheduler.request_frame();
            self.state = ControllerState::Active { start_time, pending };
        } else {
            self.state = ControllerState::Idle;
            let value = self.effect.finish();
            (self.on_update)(value);
            if let Some(on_complete) = self.on_complete.as_mut() {
                on_complete();
            }
            log::debug!("effect completed");
        }
        true
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ControllerState::Active { .. })
    }

    /// Normalized progress at `now`; 0 when idle.
    pub fn progress(&self, now: f64) -> f32 {
        match self.state {
            ControllerState::Idle => 0.0,
            ControllerState::Active { start_time, .. } => self.raw_progress(start_time, now),
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn effect(&self) -> &E {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut E {
        &mut self.effect
    }

    fn raw_progress(&self, start_time: f64, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - start_time) / self.duration).clamp(0.0, 1.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scheduler::FrameQueue;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Emits raw progress, finishes with 1.0, resets to -1.0.
    struct Probe;

    impl TimedEffect for Probe {
        type Output = f32;
        fn sample(&mut self, progress: f32) -> f32 {
            progress
        }
        fn finish(&mut self) -> f32 {
            1.0
        }
        fn reset(&mut self) -> Option<f32> {
            Some(-1.0)
        }
    }

    fn probe(duration: f64) -> (Controller<Probe>, Rc<RefCell<Vec<f32>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let c = Controller::new(Probe, duration, move |v| sink.borrow_mut().push(v));
        (c, log)
    }

    fn run_frame(c: &mut Controller<Probe>, frames: &mut FrameQueue, now: f64) -> bool {
        let batch = frames.begin_frame();
        c.on_frame(&batch, now, frames)
    }

    #[test]
    fn idle_until_started() {
        let (c, log) = probe(100.0);
        assert!(!c.is_active());
        assert_eq!(c.progress(50.0), 0.0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn runs_each_frame_then_completes() {
        let (mut c, log) = probe(100.0);
        let mut frames = FrameQueue::new();
        c.start(0.0, &mut frames);
        assert!(c.is_active());

        assert!(run_frame(&mut c, &mut frames, 25.0));
        assert!(run_frame(&mut c, &mut frames, 50.0));
        assert!(run_frame(&mut c, &mut frames, 100.0));
        assert!(!c.is_active());
        assert_eq!(*log.borrow(), vec![0.25, 0.5, 1.0]);
        assert_eq!(frames.pending(), 0);
        assert!(!run_frame(&mut c, &mut frames, 125.0));
    }

    #[test]
    fn double_start_does_not_duplicate_loop() {
        let (mut c, _) = probe(100.0);
        let mut frames = FrameQueue::new();
        c.start(0.0, &mut frames);
        c.start(10.0, &mut frames);
        assert_eq!(frames.pending(), 1);
        // Start time is from the first call.
        assert_eq!(c.progress(50.0), 0.5);
    }

    #[test]
    fn stop_cancels_pending_frame_and_resets_once() {
        let (mut c, log) = probe(100.0);
        let mut frames = FrameQueue::new();
        c.start(0.0, &mut frames);
        run_frame(&mut c, &mut frames, 10.0);
        c.stop(&mut frames);

        assert!(!c.is_active());
        assert_eq!(frames.pending(), 0);
        assert_eq!(*log.borrow(), vec![0.1, -1.0]);
        assert!(!run_frame(&mut c, &mut frames, 20.0));
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn stale_handle_is_ignored_after_stop() {
        let (mut c, log) = probe(100.0);
        let mut frames = FrameQueue::new();
        c.start(0.0, &mut frames);
        // Batch taken before stop() still holds the old handle.
        let stale = frames.begin_frame();
        c.stop(&mut frames);
        assert!(!c.on_frame(&stale, 10.0, &mut frames));
        assert_eq!(*log.borrow(), vec![-1.0]);
    }

    #[test]
    fn restart_after_stop_ignores_old_handle() {
        let (mut c, log) = probe(100.0);
        let mut frames = FrameQueue::new();
        c.start(0.0, &mut frames);
        let stale = frames.begin_frame();
        c.stop(&mut frames);
        c.start(50.0, &mut frames);
        assert!(!c.on_frame(&stale, 60.0, &mut frames));
        assert!(run_frame(&mut c, &mut frames, 75.0));
        assert_eq!(*log.borrow(), vec![-1.0, 0.25]);
    }

    #[test]
    fn non_positive_duration_completes_on_first_frame() {
        for duration in [0.0, -50.0] {
            let (mut c, log) = probe(duration);
            let mut frames = FrameQueue::new();
            c.start(0.0, &mut frames);
            run_frame(&mut c, &mut frames, 0.0);
            assert!(!c.is_active());
            assert_eq!(*log.borrow(), vec![1.0]);
        }
    }

    #[test]
    fn on_complete_fires_once_on_natural_end_only() {
        let done = Rc::new(RefCell::new(0));
        let counter = done.clone();
        let (c, _) = probe(10.0);
        let mut c = c.with_on_complete(move || *counter.borrow_mut() += 1);
        let mut frames = FrameQueue::new();

        c.start(0.0, &mut frames);
        c.stop(&mut frames);
        assert_eq!(*done.borrow(), 0);

        c.start(0.0, &mut frames);
        run_frame(&mut c, &mut frames, 20.0);
        run_frame(&mut c, &mut frames, 30.0);
        assert_eq!(*done.borrow(), 1);
    }

    #[test]
    fn easing_remaps_progress() {
        let (c, log) = probe(100.0);
        let mut c = c.with_easing(Easing::QuadIn);
        let mut frames = FrameQueue::new();
        c.start(0.0, &mut frames);
        run_frame(&mut c, &mut frames, 50.0);
        assert_eq!(*log.borrow(), vec![0.25]);
    }

    #[test]
    fn independent_controllers_share_a_scheduler() {
        let (mut a, log_a) = probe(100.0);
        let (mut b, log_b) = probe(200.0);
        let mut frames = FrameQueue::new();
        a.start(0.0, &mut frames);
        b.start(0.0, &mut frames);

        let batch = frames.begin_frame();
        assert!(a.on_frame(&batch, 50.0, &mut frames));
        assert!(b.on_frame(&batch, 50.0, &mut frames));
        a.stop(&mut frames);
        assert!(b.is_active());
        assert_eq!(frames.pending(), 1);
        assert_eq!(*log_a.borrow(), vec![0.5, -1.0]);
        assert_eq!(*log_b.borrow(), vec![0.25]);
    }
}
