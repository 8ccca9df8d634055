// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-handler event dispatch with a shutdown continuation.
//!
//! A [`Dispatcher`] is idle until [`Dispatcher::run`] registers a handler and a
//! continuation. From then on every event passed to [`Dispatcher::deliver`]
//! reaches the handler, one at a time and in order, until one of:
//!
//! - [`Dispatcher::stop`] is called,
//! - the handler returns [`Outcome::Stop`],
//! - the handler returns an error.
//!
//! The handler is then dropped and the continuation runs exactly once, with
//! `Ok(())` or with the handler's error. The failing event is not retried.
//!
//! All methods take `&self`, so a handler may hold a reference to the
//! dispatcher it runs under (for example through an `Rc`). A `stop` issued from
//! inside the handler takes effect as soon as the handler returns, and events
//! delivered from inside the handler are queued behind the current one.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use easel_dispatch::{Dispatcher, Outcome};
//! use easel_event::{CloseEvent, Event, SurfaceId, Timestamp};
//!
//! let dispatcher: Dispatcher<&'static str> = Dispatcher::new();
//! let result = Rc::new(RefCell::new(None));
//! let sink = result.clone();
//! dispatcher
//!     .run(
//!         |event: &Event| match event {
//!             Event::CanvasClosed(_) => Ok(Outcome::Stop),
//!             _ => Ok(Outcome::Continue),
//!         },
//!         move |r| *sink.borrow_mut() = Some(r),
//!     )
//!     .unwrap();
//!
//! let surface = SurfaceId::new(1).unwrap();
//! assert!(dispatcher.deliver(CloseEvent { surface, timestamp: Timestamp(0) }.into()));
//! assert!(!dispatcher.is_running());
//! assert_eq!(*result.borrow(), Some(Ok(())));
//! ```

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use core::cell::RefCell;
use core::fmt;

use easel_event::{Event, Timestamp};

use crate::{Desktop, RunError, Shell};

/// What a handler wants to happen after it has seen an event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Keep delivering events.
    Continue,
    /// Stop the dispatcher and run the continuation with `Ok(())`.
    Stop,
}

type Handler<E> = Box<dyn FnMut(&Event) -> Result<Outcome, E>>;
type OnStop<E> = Box<dyn FnOnce(Result<(), E>)>;

enum State<E> {
    Idle,
    Running {
        // `None` while the handler is executing.
        handler: Option<Handler<E>>,
        on_stop: OnStop<E>,
        stop_requested: bool,
    },
}

/// Delivers events to one registered handler.
///
/// `E` is the handler's error type; it is handed to the shutdown continuation
/// when the handler fails.
pub struct Dispatcher<E> {
    state: RefCell<State<E>>,
    pending: RefCell<VecDeque<Event>>,
}

impl<E> Dispatcher<E> {
    /// Create an idle dispatcher.
    pub fn new() -> Self {
        Self {
            state: RefCell::new(State::Idle),
            pending: RefCell::new(VecDeque::new()),
        }
    }

    /// Returns `true` while a handler is registered.
    pub fn is_running(&self) -> bool {
        matches!(*self.state.borrow(), State::Running { .. })
    }

    /// Register `handler` and the continuation `on_stop`.
    ///
    /// Fails with [`RunError::AlreadyRunning`] if a handler is registered,
    /// including when called from inside the running handler.
    pub fn run<H, F>(&self, handler: H, on_stop: F) -> Result<(), RunError>
    where
        H: FnMut(&Event) -> Result<Outcome, E> + 'static,
        F: FnOnce(Result<(), E>) + 'static,
    {
        let mut state = self.state.borrow_mut();
        if matches!(*state, State::Running { .. }) {
            return Err(RunError::AlreadyRunning);
        }
        *state = State::Running {
            handler: Some(Box::new(handler)),
            on_stop: Box::new(on_stop),
            stop_requested: false,
        };
        log::debug!("event dispatch started");
        Ok(())
    }

    /// Deregister the handler and run the continuation with `Ok(())`.
    ///
    /// Does nothing when idle. Called from inside the handler, the stop is
    /// completed once the handler returns.
    pub fn stop(&self) {
        {
            let mut state = self.state.borrow_mut();
            match &mut *state {
                State::Idle => return,
                State::Running {
                    handler: None,
                    stop_requested,
                    ..
                } => {
                    *stop_requested = true;
                    return;
                }
                State::Running { handler: Some(_), .. } => {}
            }
        }
        self.finish(Ok(()));
    }

    /// Hand `event` to the handler.
    ///
    /// Returns `true` if the handler saw the event. Idle dispatchers drop
    /// events and return `false`; an event delivered from inside the handler
    /// is queued, returns `false`, and reaches the handler right after the
    /// current event.
    pub fn deliver(&self, event: Event) -> bool {
        let mut handler = {
            let mut state = self.state.borrow_mut();
            match &mut *state {
                State::Idle => return false,
                State::Running { handler, .. } => match handler.take() {
                    Some(handler) => handler,
                    None => {
                        self.pending.borrow_mut().push_back(event);
                        return false;
                    }
                },
            }
        };

        let mut next = Some(event);
        while let Some(event) = next {
            match handler(&event) {
                Ok(Outcome::Continue) if !self.stop_requested() => {}
                Ok(_) => {
                    self.finish(Ok(()));
                    return true;
                }
                Err(err) => {
                    log::warn!("event handler failed on {:?}; stopping", event.tag());
                    self.finish(Err(err));
                    return true;
                }
            }
            next = self.pending.borrow_mut().pop_front();
        }

        if let State::Running { handler: slot, .. } = &mut *self.state.borrow_mut() {
            *slot = Some(handler);
        }
        true
    }

    /// Deliver a batch of events in order; returns how many the handler saw.
    pub fn deliver_all(&self, events: impl IntoIterator<Item = Event>) -> usize {
        events
            .into_iter()
            .filter(|event| self.deliver(*event))
            .count()
    }

    /// Deliver one animation-frame tick: an [`Event::Frame`] per on-screen
    /// surface of `desktop`, bottom to top.
    ///
    /// The desktop is only borrowed between frames, so the handler may close
    /// surfaces; a surface closed partway through the tick gets no frame.
    /// Returns how many frames the handler saw.
    pub fn deliver_frames<S: Shell>(
        &self,
        desktop: &RefCell<Desktop<S>>,
        timestamp: Timestamp,
    ) -> usize {
        let order = desktop.borrow().frame_order();
        let mut seen = 0;
        for surface in order {
            if !self.is_running() {
                break;
            }
            let Some(event) = desktop.borrow().animation_frame(surface, timestamp) else {
                continue;
            };
            if self.deliver(event) {
                seen += 1;
            }
        }
        seen
    }

    fn stop_requested(&self) -> bool {
        matches!(
            *self.state.borrow(),
            State::Running {
                stop_requested: true,
                ..
            }
        )
    }

    fn finish(&self, result: Result<(), E>) {
        let previous = core::mem::replace(&mut *self.state.borrow_mut(), State::Idle);
        self.pending.borrow_mut().clear();
        if let State::Running { on_stop, .. } = previous {
            log::debug!("event dispatch stopped");
            on_stop(result);
        }
    }
}

impl<E> Default for Dispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Dispatcher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let running = self
            .state
            .try_borrow()
            .map(|s| matches!(*s, State::Running { .. }))
            .unwrap_or(true);
        let pending = self.pending.try_borrow().map(|p| p.len()).unwrap_or(0);
        f.debug_struct("Dispatcher")
            .field("running", &running)
            .field("pending", &pending)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use easel_event::{FrameEvent, SurfaceId, Timestamp};

    fn frame(t: i64) -> Event {
        FrameEvent {
            surface: SurfaceId::new(1).unwrap(),
            timestamp: Timestamp(t),
        }
        .into()
    }

    #[test]
    fn idle_dispatcher_drops_events() {
        let d: Dispatcher<()> = Dispatcher::new();
        assert!(!d.is_running());
        assert!(!d.deliver(frame(0)));
        d.stop();
    }

    #[test]
    fn second_run_is_rejected() {
        let d: Dispatcher<()> = Dispatcher::new();
        d.run(|_: &Event| Ok(Outcome::Continue), |_| {}).unwrap();
        assert_eq!(
            d.run(|_: &Event| Ok(Outcome::Continue), |_| {}),
            Err(RunError::AlreadyRunning)
        );
    }

    #[test]
    fn handler_sees_events_in_order() {
        let d: Dispatcher<()> = Dispatcher::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        d.run(
            move |e: &Event| {
                sink.borrow_mut().push(e.timestamp().0);
                Ok(Outcome::Continue)
            },
            |_| {},
        )
        .unwrap();
        assert_eq!(d.deliver_all([frame(1), frame(2), frame(3)]), 3);
        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn restart_after_stop() {
        let d: Dispatcher<()> = Dispatcher::new();
        let stops = Rc::new(RefCell::new(0));
        for _ in 0..2 {
            let stops = stops.clone();
            d.run(|_: &Event| Ok(Outcome::Continue), move |_| {
                *stops.borrow_mut() += 1;
            })
            .unwrap();
            d.stop();
        }
        assert_eq!(*stops.borrow(), 2);
        assert!(!d.is_running());
    }

    #[test]
    fn continuation_may_restart_the_dispatcher() {
        let d: Rc<Dispatcher<()>> = Rc::new(Dispatcher::new());
        let again = d.clone();
        d.run(|_: &Event| Ok(Outcome::Stop), move |_| {
            again.run(|_: &Event| Ok(Outcome::Continue), |_| {}).unwrap();
        })
        .unwrap();
        assert!(d.deliver(frame(0)));
        assert!(d.is_running());
    }
}
