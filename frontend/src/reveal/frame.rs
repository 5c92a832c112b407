/// Coalesces bursts of scroll and resize events into one sample per
/// animation frame.
///
/// Event handlers call [`FrameGate::request`] and only schedule an
/// animation frame when it returns `true`; the frame callback calls
/// [`FrameGate::begin`] before sampling. Any number of events between two
/// frames therefore produce exactly one presentation update.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: Option<i32>,
    requested: bool,
}

impl FrameGate {
    pub fn request(&mut self) -> bool {
        if self.requested {
            return false;
        }
        self.requested = true;
        true
    }

    /// Records the handle returned by `requestAnimationFrame`.
    pub fn scheduled(&mut self, handle: i32) {
        self.pending = Some(handle);
    }

    /// Scheduling failed; let the next event try again.
    pub fn abandon(&mut self) {
        self.requested = false;
        self.pending = None;
    }

    pub fn begin(&mut self) {
        self.requested = false;
        self.pending = None;
    }

    /// Takes the outstanding frame handle so it can be cancelled.
    pub fn cancel(&mut self) -> Option<i32> {
        self.requested = false;
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_of_events_schedules_one_frame() {
        let mut gate = FrameGate::default();
        let scheduled = (0..25).filter(|_| gate.request()).count();
        assert_eq!(scheduled, 1);
        assert!(gate.is_pending());
    }

    #[test]
    fn next_event_after_frame_schedules_again() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        gate.scheduled(7);
        gate.begin();
        assert!(!gate.is_pending());
        assert!(gate.request());
    }

    #[test]
    fn cancel_hands_back_outstanding_handle() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        gate.scheduled(42);
        assert_eq!(gate.cancel(), Some(42));
        assert_eq!(gate.cancel(), None);
        assert!(gate.request());
    }

    #[test]
    fn abandoned_request_can_be_retried() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        gate.abandon();
        assert!(gate.request());
    }
}
