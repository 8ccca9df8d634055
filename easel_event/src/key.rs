// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Physical key codes.
//!
//! [`KeyCode`] names a key by its position on the keyboard, not by the
//! character it produces. Discriminants are USB HID keyboard usage ids, so a
//! key code is stable across layouts and hosts. [`KeyCode::from_dom_code`]
//! translates the DOM `KeyboardEvent.code` names.

macro_rules! key_codes {
    (
        $(
            $(#[$vmeta:meta])*
            $variant:ident = $usb:literal $(=> $($dom:literal)|+)?,
        )+
    ) => {
        /// A physical key, identified by its USB HID usage id.
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum KeyCode {
            $( $(#[$vmeta])* $variant = $usb, )+
        }

        impl KeyCode {
            /// Every key code, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Look a key up by USB HID usage id.
            pub const fn from_usb(usage: u8) -> Option<Self> {
                match usage {
                    $( $usb => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Translate a DOM `KeyboardEvent.code` value.
            ///
            /// Names without a physical counterpart map to [`KeyCode::Undefined`].
            pub fn from_dom_code(code: &str) -> Self {
                match code {
                    $( $( $($dom)|+ => Self::$variant, )? )+
                    _ => Self::Undefined,
                }
            }
        }
    };
}

key_codes! {
    /// A key that could not be identified.
    #[default]
    Undefined = 0x03 => "" | "Unidentified",

    /// Escape.
    Escape = 0x29 => "Escape",
    /// F1.
    F1 = 0x3A => "F1",
    /// F2.
    F2 = 0x3B => "F2",
    /// F3.
    F3 = 0x3C => "F3",
    /// F4.
    F4 = 0x3D => "F4",
    /// F5.
    F5 = 0x3E => "F5",
    /// F6.
    F6 = 0x3F => "F6",
    /// F7.
    F7 = 0x40 => "F7",
    /// F8.
    F8 = 0x41 => "F8",
    /// F9.
    F9 = 0x42 => "F9",
    /// F10.
    F10 = 0x43 => "F10",
    /// F11.
    F11 = 0x44 => "F11",
    /// F12.
    F12 = 0x45 => "F12",
    /// Print Screen.
    PrintScreen = 0x46 => "PrintScreen",
    /// Scroll Lock.
    ScrollLock = 0x47 => "ScrollLock",
    /// Pause.
    Pause = 0x48 => "Pause",

    /// `` ` `` and `~`.
    GraveTilde = 0x35 => "Backquote",
    /// `1` and `!`.
    Digit1 = 0x1E => "Digit1",
    /// `2` and `@`.
    Digit2 = 0x1F => "Digit2",
    /// `3` and `#`.
    Digit3 = 0x20 => "Digit3",
    /// `4` and `$`.
    Digit4 = 0x21 => "Digit4",
    /// `5` and `%`.
    Digit5 = 0x22 => "Digit5",
    /// `6` and `^`.
    Digit6 = 0x23 => "Digit6",
    /// `7` and `&`.
    Digit7 = 0x24 => "Digit7",
    /// `8` and `*`.
    Digit8 = 0x25 => "Digit8",
    /// `9` and `(`.
    Digit9 = 0x26 => "Digit9",
    /// `0` and `)`.
    Digit0 = 0x27 => "Digit0",
    /// `-` and `_`.
    Minus = 0x2D => "Minus",
    /// `=` and `+`.
    Equal = 0x2E => "Equal",
    /// Backspace.
    Backspace = 0x2A => "Backspace",

    /// Tab.
    Tab = 0x2B => "Tab",
    /// Q.
    Q = 0x14 => "KeyQ",
    /// W.
    W = 0x1A => "KeyW",
    /// E.
    E = 0x08 => "KeyE",
    /// R.
    R = 0x15 => "KeyR",
    /// T.
    T = 0x17 => "KeyT",
    /// Y.
    Y = 0x1C => "KeyY",
    /// U.
    U = 0x18 => "KeyU",
    /// I.
    I = 0x0C => "KeyI",
    /// O.
    O = 0x12 => "KeyO",
    /// P.
    P = 0x13 => "KeyP",
    /// `[` and `{`.
    LeftBracket = 0x2F => "BracketLeft",
    /// `]` and `}`.
    RightBracket = 0x30 => "BracketRight",
    /// `\` and `|`.
    Backslash = 0x31 => "Backslash",

    /// Caps Lock.
    CapsLock = 0x39 => "CapsLock",
    /// A.
    A = 0x04 => "KeyA",
    /// S.
    S = 0x16 => "KeyS",
    /// D.
    D = 0x07 => "KeyD",
    /// F.
    F = 0x09 => "KeyF",
    /// G.
    G = 0x0A => "KeyG",
    /// H.
    H = 0x0B => "KeyH",
    /// J.
    J = 0x0D => "KeyJ",
    /// K.
    K = 0x0E => "KeyK",
    /// L.
    L = 0x0F => "KeyL",
    /// `;` and `:`.
    Semicolon = 0x33 => "Semicolon",
    /// `'` and `"`.
    Quote = 0x34 => "Quote",
    /// Extra key left of Return on ISO keyboards. Hosts report it as `Backslash`.
    NonUsHash = 0x32,
    /// Return.
    Return = 0x28 => "Enter",

    /// Left Shift.
    LeftShift = 0xE1 => "ShiftLeft",
    /// Extra key right of left Shift on ISO keyboards.
    NonUsBackslash = 0x64 => "IntlBackslash",
    /// Z.
    Z = 0x1D => "KeyZ",
    /// X.
    X = 0x1B => "KeyX",
    /// C.
    C = 0x06 => "KeyC",
    /// V.
    V = 0x19 => "KeyV",
    /// B.
    B = 0x05 => "KeyB",
    /// N.
    N = 0x11 => "KeyN",
    /// M.
    M = 0x10 => "KeyM",
    /// `,` and `<`.
    Comma = 0x36 => "Comma",
    /// `.` and `>`.
    Period = 0x37 => "Period",
    /// `/` and `?`.
    Slash = 0x38 => "Slash",
    /// Right Shift.
    RightShift = 0xE5 => "ShiftRight",

    /// Left Control.
    LeftControl = 0xE0 => "ControlLeft",
    /// Left Windows or Command key.
    LeftMeta = 0xE3 => "MetaLeft",
    /// Left Alt or Option key.
    LeftAlt = 0xE2 => "AltLeft",
    /// Space bar.
    Space = 0x2C => "Space",
    /// Right Alt or Option key.
    RightAlt = 0xE6 => "AltRight",
    /// Right Windows or Command key.
    RightMeta = 0xE7 => "MetaRight",
    /// Context menu key.
    Menu = 0x76 => "ContextMenu",
    /// Right Control.
    RightControl = 0xE4 => "ControlRight",

    /// Insert.
    Insert = 0x49 => "Insert",
    /// Home.
    Home = 0x4A => "Home",
    /// Page Up.
    PageUp = 0x4B => "PageUp",
    /// Forward delete.
    DeleteForward = 0x4C => "Delete",
    /// End.
    End = 0x4D => "End",
    /// Page Down.
    PageDown = 0x4E => "PageDown",

    /// Up arrow.
    Up = 0x52 => "ArrowUp",
    /// Left arrow.
    Left = 0x50 => "ArrowLeft",
    /// Down arrow.
    Down = 0x51 => "ArrowDown",
    /// Right arrow.
    Right = 0x4F => "ArrowRight",

    /// Num Lock, or Clear on Mac keypads.
    PadNumLockClear = 0x53 => "NumpadLock" | "NumLock",
    /// Keypad `=`.
    PadEquals = 0x67 => "NumpadEqual",
    /// Keypad `/`.
    PadDivide = 0x54 => "NumpadDivide",
    /// Keypad `*`.
    PadMultiply = 0x55 => "NumpadMultiply",
    /// Keypad `-`.
    PadMinus = 0x56 => "NumpadSubtract",
    /// Keypad 7 and Home.
    Pad7 = 0x5F => "Numpad7",
    /// Keypad 8 and Up.
    Pad8 = 0x60 => "Numpad8",
    /// Keypad 9 and Page Up.
    Pad9 = 0x61 => "Numpad9",
    /// Keypad `+`.
    PadPlus = 0x57 => "NumpadAdd",
    /// Keypad 4 and Left.
    Pad4 = 0x5C => "Numpad4",
    /// Keypad 5.
    Pad5 = 0x5D => "Numpad5",
    /// Keypad 6 and Right.
    Pad6 = 0x5E => "Numpad6",
    /// Keypad `,` (Brazilian keyboards).
    PadComma = 0x85 => "NumpadComma",
    /// Keypad 1 and End.
    Pad1 = 0x59 => "Numpad1",
    /// Keypad 2 and Down.
    Pad2 = 0x5A => "Numpad2",
    /// Keypad 3 and Page Down.
    Pad3 = 0x5B => "Numpad3",
    /// Keypad 0 and Insert.
    Pad0 = 0x62 => "Numpad0",
    /// Keypad `.` and Delete.
    PadDecimal = 0x63 => "NumpadDecimal",
    /// Keypad Enter.
    PadEnter = 0x58 => "NumpadEnter",

    /// F13.
    F13 = 0x68 => "F13",
    /// F14.
    F14 = 0x69 => "F14",
    /// F15.
    F15 = 0x6A => "F15",
    /// F16.
    F16 = 0x6B => "F16",
    /// F17.
    F17 = 0x6C => "F17",
    /// F18.
    F18 = 0x6D => "F18",
    /// F19.
    F19 = 0x6E => "F19",
    /// F20.
    F20 = 0x6F => "F20",
    /// F21.
    F21 = 0x70 => "F21",
    /// F22.
    F22 = 0x71 => "F22",
    /// F23.
    F23 = 0x72 => "F23",
    /// F24.
    F24 = 0x73 => "F24",

    /// `_` and `\` left of right Shift on JIS keyboards.
    International1 = 0x87 => "IntlRo",
    /// Katakana/Hiragana on JIS keyboards.
    International2 = 0x88 => "KanaMode",
    /// `|` and Yen left of Backspace on JIS keyboards.
    International3 = 0x89 => "IntlYen",
    /// Henkan on JIS keyboards.
    International4 = 0x8A => "Convert",
    /// Muhenkan on JIS keyboards.
    International5 = 0x8B => "NonConvert",
    /// Keypad comma on JIS keyboards.
    International6 = 0x8C,
    /// Double-byte/single-byte toggle.
    International7 = 0x8D,
    /// Reserved.
    International8 = 0x8E,
    /// Reserved.
    International9 = 0x8F,
    /// Hangul/English toggle, or Kana on Mac.
    Lang1 = 0x90 => "Lang1",
    /// Hanja conversion, or Eisu on Mac.
    Lang2 = 0x91 => "Lang2",
    /// Katakana.
    Lang3 = 0x92 => "Lang3" | "Katakana",
    /// Hiragana.
    Lang4 = 0x93 => "Lang4" | "Hiragana",
    /// Zenkaku/Hankaku.
    Lang5 = 0x94 => "Lang5",

    /// Help, found on older Mac keyboards.
    Help = 0x75 => "Help",
    /// Mute.
    Mute = 0x7F => "AudioVolumeMute",
    /// Volume up.
    VolumeUp = 0x80 => "AudioVolumeUp",
    /// Volume down.
    VolumeDown = 0x81 => "AudioVolumeDown",
}

impl KeyCode {
    /// The USB HID usage id of this key.
    pub const fn usb(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usb_ids_round_trip() {
        for &key in KeyCode::ALL {
            assert_eq!(KeyCode::from_usb(key.usb()), Some(key), "{key:?}");
        }
        assert_eq!(KeyCode::from_usb(0x00), None);
        assert_eq!(KeyCode::from_usb(0xFF), None);
    }

    #[test]
    fn usb_ids_are_distinct() {
        let mut seen = [false; 256];
        for &key in KeyCode::ALL {
            let id = usize::from(key.usb());
            assert!(!seen[id], "duplicate usage id {id:#04x}");
            seen[id] = true;
        }
    }

    #[test]
    fn well_known_usage_ids() {
        assert_eq!(KeyCode::Undefined.usb(), 0x03);
        assert_eq!(KeyCode::A.usb(), 0x04);
        assert_eq!(KeyCode::Z.usb(), 0x1D);
        assert_eq!(KeyCode::Escape.usb(), 0x29);
        assert_eq!(KeyCode::F12.usb(), 0x45);
        assert_eq!(KeyCode::LeftControl.usb(), 0xE0);
        assert_eq!(KeyCode::RightMeta.usb(), 0xE7);
    }

    #[test]
    fn dom_codes_translate() {
        assert_eq!(KeyCode::from_dom_code("KeyA"), KeyCode::A);
        assert_eq!(KeyCode::from_dom_code("Backquote"), KeyCode::GraveTilde);
        assert_eq!(KeyCode::from_dom_code("Enter"), KeyCode::Return);
        assert_eq!(KeyCode::from_dom_code("Delete"), KeyCode::DeleteForward);
        assert_eq!(KeyCode::from_dom_code("IntlYen"), KeyCode::International3);
        assert_eq!(KeyCode::from_dom_code("Katakana"), KeyCode::Lang3);
        assert_eq!(KeyCode::from_dom_code("Lang3"), KeyCode::Lang3);
        assert_eq!(KeyCode::from_dom_code("AudioVolumeMute"), KeyCode::Mute);
        assert_eq!(KeyCode::from_dom_code("Numpad5"), KeyCode::Pad5);
    }

    #[test]
    fn unknown_dom_codes_are_undefined() {
        for code in ["", "Unidentified", "LaunchApp1", "keya", "MediaRecord"] {
            assert_eq!(KeyCode::from_dom_code(code), KeyCode::Undefined, "{code:?}");
        }
    }
}
