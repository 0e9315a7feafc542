/// Opaque handle to a requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// "Call me on the next frame" primitive supplied by the host.
///
/// Mirrors `requestAnimationFrame` / `cancelAnimationFrame` without tying
/// controllers to a browser API.
pub trait FrameScheduler {
    /// Request a callback on the next frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a previously requested frame. Unknown or already-fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Handles that fired together on one host frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameBatch {
    handles: Vec<FrameHandle>,
}

impl FrameBatch {
    pub fn contains(&self, handle: FrameHandle) -> bool {
        self.handles.contains(&handle)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// In-memory scheduler driven by the host's own frame loop.
///
/// Requests made during frame N are delivered by the `begin_frame` call of
/// frame N+1. Cancelled handles are dropped before delivery.
#[derive(Debug, Default)]
pub struct FrameQueue {
    requested: Vec<FrameHandle>,
    next_id: u64,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every outstanding request. Call once at the top of each host frame.
    pub fn begin_frame(&mut self) -> FrameBatch {
        FrameBatch {
            handles: std::mem::take(&mut self.requested),
        }
    }

    /// Number of requests waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.requested.len()
    }

    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.requested.contains(&handle)
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        self.requested.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.requested.retain(|h| *h != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique() {
        let mut q = FrameQueue::new();
        let a = q.request_frame();
        let b = q.request_frame();
        assert_ne!(a, b);
        assert_eq!(q.pending(), 2);
    }

    #[test]
    fn begin_frame_drains_requests() {
        let mut q = FrameQueue::new();
        let a = q.request_frame();
        let batch = q.begin_frame();
        assert!(batch.contains(a));
        assert_eq!(batch.len(), 1);
        assert_eq!(q.pending(), 0);
        assert!(q.begin_frame().is_empty());
    }

    #[test]
    fn cancelled_handles_never_fire() {
        let mut q = FrameQueue::new();
        let a = q.request_frame();
        let b = q.request_frame();
        q.cancel_frame(a);
        let batch = q.begin_frame();
        assert!(!batch.contains(a));
        assert!(batch.contains(b));
    }

    #[test]
    fn cancel_unknown_handle_is_ignored() {
        let mut q = FrameQueue::new();
        q.cancel_frame(FrameHandle(99));
        assert_eq!(q.pending(), 0);
    }
}
