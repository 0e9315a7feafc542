pub mod scheduler;

pub use scheduler::{FrameBatch, FrameHandle, FrameQueue, FrameScheduler};
