pub mod presets;

pub use presets::EffectPresets;
