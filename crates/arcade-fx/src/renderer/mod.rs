pub mod traits;
pub mod recording;

// Re-export key types for convenient access
pub use traits::{Surface, FillRule, ImageSize};
pub use recording::{RecordingSurface, DrawCommand, ImageRef};
