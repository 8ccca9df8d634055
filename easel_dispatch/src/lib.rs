// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_dispatch --heading-base-level=0

//! Easel Dispatch: from raw host input to one event handler.
//!
//! Two objects split the work:
//!
//! - [`Desktop`] keeps the UI bookkeeping: the surface registry, the stacking
//!   order of frames, keyboard focus, title-bar dragging and the close glyph.
//!   It consumes raw pointer and keyboard input ([`PointerInput`],
//!   [`KeyInput`]) and produces normalized [`Event`](easel_event::Event)s.
//!   Host frame operations go through the [`Shell`] trait.
//! - [`Dispatcher`] delivers those events to the single handler registered
//!   with [`Dispatcher::run`], and runs a shutdown continuation exactly once
//!   when the handler stops, asks to stop, or fails.
//!
//! Keeping them apart lets the bookkeeping run while no handler is registered,
//! and lets a handler call back into the desktop while it runs.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use easel_dispatch::{Desktop, Dispatcher, Headless, Outcome, Part, PointerInput, SurfaceOptions, Target};
//! use easel_event::{Button, Event, Timestamp};
//! use kurbo::Point;
//!
//! let mut desktop = Desktop::new(Headless);
//! let id = desktop.create_onscreen(320, 200, SurfaceOptions::default()).unwrap();
//! desktop.show(id).unwrap();
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = seen.clone();
//! let dispatcher: Dispatcher<()> = Dispatcher::new();
//! dispatcher
//!     .run(
//!         move |event: &Event| {
//!             sink.borrow_mut().push(event.tag());
//!             Ok(Outcome::Continue)
//!         },
//!         |_| {},
//!     )
//!     .unwrap();
//!
//! // Press the close glyph in the title bar.
//! let press = PointerInput {
//!     target: Some(Target { surface: id, part: Part::Header }),
//!     offset: Point::new(305.0, 15.0),
//!     page: Point::new(305.0, 15.0),
//!     button: Button::Left,
//!     timestamp: Timestamp(0),
//! };
//! dispatcher.deliver_all(desktop.pointer_down(&press));
//!
//! assert_eq!(seen.borrow().len(), 1);
//! assert!(desktop.get(id).is_err());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod decoration;
mod desktop;
mod dispatcher;
pub mod drag;
mod error;
mod shell;
mod surface;

pub use desktop::{Desktop, EventBatch, KeyInput, Part, PointerInput, Target};
pub use dispatcher::{Dispatcher, Outcome};
pub use error::{RunError, SurfaceError};
pub use shell::{Headless, Shell};
pub use surface::{MAX_SURFACE_EXTENT, SurfaceKind, SurfaceOptions, SurfaceRecord};
