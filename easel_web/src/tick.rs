// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bookkeeping for the animation-frame loop.

/// The outstanding `requestAnimationFrame` handle, if any.
///
/// The loop only runs while a handler is registered: a tick that fires with
/// nobody listening is not renewed, and registering a handler restarts it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TickSchedule {
    pending: Option<i32>,
}

impl TickSchedule {
    /// Whether a new frame should be requested.
    pub(crate) fn wants_request(self, running: bool) -> bool {
        running && self.pending.is_none()
    }

    pub(crate) fn requested(&mut self, handle: i32) {
        self.pending = Some(handle);
    }

    /// The requested frame fired; nothing is pending any more.
    pub(crate) fn fired(&mut self) {
        self.pending = None;
    }

    /// Forget the pending frame, returning its handle for cancellation.
    pub(crate) fn cancel(&mut self) -> Option<i32> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::TickSchedule;

    #[test]
    fn idle_loop_is_not_renewed() {
        let mut schedule = TickSchedule::default();
        assert!(!schedule.wants_request(false));
        schedule.requested(1);
        schedule.fired();
        assert!(!schedule.wants_request(false));
    }

    #[test]
    fn running_loop_renews_after_each_tick() {
        let mut schedule = TickSchedule::default();
        assert!(schedule.wants_request(true));
        schedule.requested(1);
        assert!(!schedule.wants_request(true));
        schedule.fired();
        assert!(schedule.wants_request(true));
    }

    #[test]
    fn lapsed_loop_restarts_when_running_again() {
        let mut schedule = TickSchedule::default();
        schedule.requested(4);
        // The handler stops; the last tick fires and is not renewed.
        schedule.fired();
        assert!(!schedule.wants_request(false));
        // A new handler is registered.
        assert!(schedule.wants_request(true));
    }

    #[test]
    fn cancel_hands_back_the_pending_handle() {
        let mut schedule = TickSchedule::default();
        assert_eq!(schedule.cancel(), None);
        schedule.requested(7);
        assert_eq!(schedule.cancel(), Some(7));
        assert!(schedule.wants_request(true));
    }
}
