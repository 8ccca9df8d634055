// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small value types carried by input events.

bitflags::bitflags! {
    /// Modifier keys and lock states held while a key event was produced.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Either Shift key.
        const SHIFT     = 0b0000_0001;
        /// Either Alt or Option key.
        const ALT       = 0b0000_0010;
        /// Either Control key.
        const CTRL      = 0b0000_0100;
        /// Either Windows or Command key.
        const META      = 0b0000_1000;
        /// Caps Lock is engaged.
        const CAPS_LOCK = 0b0001_0000;
        /// Num Lock is engaged.
        const NUM_LOCK  = 0b0010_0000;
    }
}

impl Modifiers {
    /// Build a set from individual host flags.
    pub fn from_flags(
        shift: bool,
        alt: bool,
        ctrl: bool,
        meta: bool,
        caps_lock: bool,
        num_lock: bool,
    ) -> Self {
        let mut m = Self::empty();
        m.set(Self::SHIFT, shift);
        m.set(Self::ALT, alt);
        m.set(Self::CTRL, ctrl);
        m.set(Self::META, meta);
        m.set(Self::CAPS_LOCK, caps_lock);
        m.set(Self::NUM_LOCK, num_lock);
        m
    }
}

/// A pointer button.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Button {
    /// No button, or a button without a mapping.
    #[default]
    None = 0,
    /// Primary button.
    Left = 1,
    /// Middle button or wheel press.
    Middle = 2,
    /// Secondary button.
    Right = 3,
    /// Wheel rotated away from the user.
    WheelUp = 4,
    /// Wheel rotated toward the user.
    WheelDown = 5,
}

impl Button {
    /// Integer tag of this button.
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Look a button up by integer tag.
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::None),
            1 => Some(Self::Left),
            2 => Some(Self::Middle),
            3 => Some(Self::Right),
            4 => Some(Self::WheelUp),
            5 => Some(Self::WheelDown),
            _ => None,
        }
    }

    /// Translate a DOM `MouseEvent.button` index; index `n` has tag `n + 1`.
    ///
    /// ```
    /// use easel_event::Button;
    ///
    /// assert_eq!(Button::from_dom(0), Button::Left);
    /// assert_eq!(Button::from_dom(2), Button::Right);
    /// assert_eq!(Button::from_dom(-1), Button::None);
    /// ```
    pub fn from_dom(index: i16) -> Self {
        index
            .checked_add(1)
            .and_then(|tag| u8::try_from(tag).ok())
            .and_then(Self::from_tag)
            .unwrap_or(Self::None)
    }
}

/// Whether a key went down or came up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum KeyState {
    /// Released.
    Up = 0,
    /// Pressed, including auto-repeat.
    Down = 1,
}

/// Whether a pointer button went down or came up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ButtonState {
    /// Released.
    Up = 0,
    /// Pressed.
    Down = 1,
}

/// Direction of a keyboard focus change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FocusChange {
    /// The surface lost focus.
    Out = 0,
    /// The surface gained focus.
    In = 1,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_bits() {
        assert_eq!(Modifiers::SHIFT.bits(), 1);
        assert_eq!(Modifiers::ALT.bits(), 2);
        assert_eq!(Modifiers::CTRL.bits(), 4);
        assert_eq!(Modifiers::META.bits(), 8);
        assert_eq!(Modifiers::CAPS_LOCK.bits(), 16);
        assert_eq!(Modifiers::NUM_LOCK.bits(), 32);
    }

    #[test]
    fn modifiers_from_host_flags() {
        let m = Modifiers::from_flags(true, false, true, false, false, true);
        assert_eq!(m, Modifiers::SHIFT | Modifiers::CTRL | Modifiers::NUM_LOCK);
        assert!(Modifiers::from_flags(false, false, false, false, false, false).is_empty());
    }

    #[test]
    fn dom_buttons_shift_by_one() {
        assert_eq!(Button::from_dom(1), Button::Middle);
        assert_eq!(Button::from_dom(3), Button::WheelUp);
        assert_eq!(Button::from_dom(4), Button::WheelDown);
        assert_eq!(Button::from_dom(5), Button::None);
        assert_eq!(Button::from_dom(i16::MAX), Button::None);
    }
}
