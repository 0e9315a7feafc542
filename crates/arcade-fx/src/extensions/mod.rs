// extensions/mod.rs
//
// Optional helpers layered on top of the effect controllers.
// Controllers default to linear progress; easing is opt-in per controller.

pub mod easing;

pub use easing::{Easing, lerp, ease};
