// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_event --heading-base-level=0

//! Easel Event: the events an Easel application receives.
//!
//! Every native input or window notification is normalized into one
//! [`Event`]: a closed union with a payload struct per variant. Each payload
//! names the [`SurfaceId`] it is addressed to and a [`Timestamp`] in
//! microseconds. [`Event::tag`] exposes the integer discriminant for hosts
//! that exchange events as small integers.
//!
//! Key events identify keys physically with [`KeyCode`], whose values are USB
//! HID usage ids. [`KeyCode::from_dom_code`] translates the browser's
//! `KeyboardEvent.code` names.
//!
//! ```rust
//! use easel_event::{Event, EventTag, KeyCode, KeyEvent, KeyState, Modifiers, SurfaceId, Timestamp};
//!
//! let surface = SurfaceId::new(1).unwrap();
//! let event: Event = KeyEvent {
//!     surface,
//!     timestamp: Timestamp::from_millis(12.5),
//!     key: KeyCode::from_dom_code("KeyQ"),
//!     char: Some('q'),
//!     modifiers: Modifiers::empty(),
//!     dead: false,
//!     state: KeyState::Down,
//! }
//! .into();
//!
//! assert_eq!(event.tag(), EventTag::KeyAction);
//! assert_eq!(event.tag() as u8, 5);
//! assert_eq!(event.timestamp().as_micros(), 12_500);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod event;
mod id;
mod input;
mod key;

pub use event::{
    ButtonEvent, CloseEvent, CursorEvent, Event, EventTag, FocusEvent, FrameEvent, KeyEvent,
    MoveEvent, ResizeEvent,
};
pub use id::{SurfaceId, Timestamp};
pub use input::{Button, ButtonState, FocusChange, KeyState, Modifiers};
pub use key::KeyCode;
