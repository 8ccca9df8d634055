// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tagged event union and its payloads.

use kurbo::Point;

use crate::{Button, ButtonState, FocusChange, KeyCode, KeyState, Modifiers, SurfaceId, Timestamp};

/// A surface should draw its next frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameEvent {
    /// Surface to draw.
    pub surface: SurfaceId,
    /// Time of the repaint opportunity.
    pub timestamp: Timestamp,
}

/// A surface gained or lost keyboard focus.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FocusEvent {
    /// Affected surface.
    pub surface: SurfaceId,
    /// Time of the change.
    pub timestamp: Timestamp,
    /// Whether focus came in or went out.
    pub change: FocusChange,
}

/// The drawing region of a surface changed size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResizeEvent {
    /// Affected surface.
    pub surface: SurfaceId,
    /// Time of the change.
    pub timestamp: Timestamp,
    /// New width in pixels.
    pub width: i32,
    /// New height in pixels.
    pub height: i32,
}

/// A surface's frame moved on screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MoveEvent {
    /// Affected surface.
    pub surface: SurfaceId,
    /// Time of the move.
    pub timestamp: Timestamp,
    /// New top-left corner of the frame, in page coordinates.
    pub position: Point,
}

/// The user asked to close a surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CloseEvent {
    /// Closed surface.
    pub surface: SurfaceId,
    /// Time of the request.
    pub timestamp: Timestamp,
}

/// A key was pressed or released while a surface had focus.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KeyEvent {
    /// Focused surface.
    pub surface: SurfaceId,
    /// Time of the key action.
    pub timestamp: Timestamp,
    /// Physical key.
    pub key: KeyCode,
    /// Character produced, when the key produces exactly one.
    pub char: Option<char>,
    /// Modifiers and lock states.
    pub modifiers: Modifiers,
    /// The key starts a dead-key sequence.
    pub dead: bool,
    /// Press or release.
    pub state: KeyState,
}

/// A pointer button was pressed or released over a surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ButtonEvent {
    /// Surface under the pointer.
    pub surface: SurfaceId,
    /// Time of the button action.
    pub timestamp: Timestamp,
    /// Pointer position relative to the drawing region.
    pub position: Point,
    /// Button.
    pub button: Button,
    /// Press or release.
    pub state: ButtonState,
}

/// The pointer moved over a surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CursorEvent {
    /// Surface under the pointer.
    pub surface: SurfaceId,
    /// Time of the move.
    pub timestamp: Timestamp,
    /// Pointer position relative to the drawing region.
    pub position: Point,
}

/// Discriminant of an [`Event`], with the integer values hosts exchange.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum EventTag {
    /// [`Event::Frame`].
    Frame = 0,
    /// [`Event::CanvasFocused`].
    CanvasFocused = 1,
    /// [`Event::CanvasResized`].
    CanvasResized = 2,
    /// [`Event::CanvasMoved`].
    CanvasMoved = 3,
    /// [`Event::CanvasClosed`].
    CanvasClosed = 4,
    /// [`Event::KeyAction`].
    KeyAction = 5,
    /// [`Event::ButtonAction`].
    ButtonAction = 6,
    /// [`Event::MouseMove`].
    MouseMove = 7,
}

/// One input or window event, addressed to one surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event {
    /// Draw the next frame.
    Frame(FrameEvent),
    /// Focus changed.
    CanvasFocused(FocusEvent),
    /// Drawing region resized.
    CanvasResized(ResizeEvent),
    /// Frame moved.
    CanvasMoved(MoveEvent),
    /// Close requested.
    CanvasClosed(CloseEvent),
    /// Key pressed or released.
    KeyAction(KeyEvent),
    /// Pointer button pressed or released.
    ButtonAction(ButtonEvent),
    /// Pointer moved.
    MouseMove(CursorEvent),
}

impl Event {
    /// The variant's tag.
    pub const fn tag(&self) -> EventTag {
        match self {
            Self::Frame(_) => EventTag::Frame,
            Self::CanvasFocused(_) => EventTag::CanvasFocused,
            Self::CanvasResized(_) => EventTag::CanvasResized,
            Self::CanvasMoved(_) => EventTag::CanvasMoved,
            Self::CanvasClosed(_) => EventTag::CanvasClosed,
            Self::KeyAction(_) => EventTag::KeyAction,
            Self::ButtonAction(_) => EventTag::ButtonAction,
            Self::MouseMove(_) => EventTag::MouseMove,
        }
    }

    /// The surface the event is addressed to.
    pub const fn surface(&self) -> SurfaceId {
        match self {
            Self::Frame(e) => e.surface,
            Self::CanvasFocused(e) => e.surface,
            Self::CanvasResized(e) => e.surface,
            Self::CanvasMoved(e) => e.surface,
            Self::CanvasClosed(e) => e.surface,
            Self::KeyAction(e) => e.surface,
            Self::ButtonAction(e) => e.surface,
            Self::MouseMove(e) => e.surface,
        }
    }

    /// When the event happened.
    pub const fn timestamp(&self) -> Timestamp {
        match self {
            Self::Frame(e) => e.timestamp,
            Self::CanvasFocused(e) => e.timestamp,
            Self::CanvasResized(e) => e.timestamp,
            Self::CanvasMoved(e) => e.timestamp,
            Self::CanvasClosed(e) => e.timestamp,
            Self::KeyAction(e) => e.timestamp,
            Self::ButtonAction(e) => e.timestamp,
            Self::MouseMove(e) => e.timestamp,
        }
    }
}

macro_rules! impl_from_payload {
    ($($payload:ident => $variant:ident),+ $(,)?) => {
        $(
            impl From<$payload> for Event {
                fn from(e: $payload) -> Self {
                    Self::$variant(e)
                }
            }
        )+
    };
}

impl_from_payload!(
    FrameEvent => Frame,
    FocusEvent => CanvasFocused,
    ResizeEvent => CanvasResized,
    MoveEvent => CanvasMoved,
    CloseEvent => CanvasClosed,
    KeyEvent => KeyAction,
    ButtonEvent => ButtonAction,
    CursorEvent => MouseMove,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> SurfaceId {
        SurfaceId::new(n).unwrap()
    }

    #[test]
    fn tags_follow_declaration_order() {
        let s = id(1);
        let t = Timestamp(5);
        let p = Point::new(1.0, 2.0);
        let events: [Event; 8] = [
            FrameEvent {
                surface: s,
                timestamp: t,
            }
            .into(),
            FocusEvent {
                surface: s,
                timestamp: t,
                change: FocusChange::In,
            }
            .into(),
            ResizeEvent {
                surface: s,
                timestamp: t,
                width: 3,
                height: 4,
            }
            .into(),
            MoveEvent {
                surface: s,
                timestamp: t,
                position: p,
            }
            .into(),
            CloseEvent {
                surface: s,
                timestamp: t,
            }
            .into(),
            KeyEvent {
                surface: s,
                timestamp: t,
                key: KeyCode::A,
                char: Some('a'),
                modifiers: Modifiers::empty(),
                dead: false,
                state: KeyState::Down,
            }
            .into(),
            ButtonEvent {
                surface: s,
                timestamp: t,
                position: p,
                button: Button::Left,
                state: ButtonState::Down,
            }
            .into(),
            CursorEvent {
                surface: s,
                timestamp: t,
                position: p,
            }
            .into(),
        ];
        for (i, e) in events.iter().enumerate() {
            assert_eq!(usize::from(e.tag() as u8), i);
            assert_eq!(e.surface(), s);
            assert_eq!(e.timestamp(), t);
        }
    }
}
