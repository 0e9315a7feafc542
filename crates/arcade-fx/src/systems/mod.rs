pub mod effects;
pub mod transition;
pub mod overlay;
pub mod parallax;
