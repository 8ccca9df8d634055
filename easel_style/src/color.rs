// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packed ARGB colors and their CSS encodings.

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::ParseError;

/// A color packed into 32 bits as `0xAARRGGBB`.
///
/// This is the representation colors use when they cross the boundary into an
/// application: alpha in the most significant byte, then red, green and blue.
/// Stored little-endian in memory, a packed color reads as the byte sequence
/// B, G, R, A, which is also the layout of [pixmap](https://docs.rs/easel_pixmap) buffers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// Pack individual channels.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(u32::from_be_bytes([a, r, g, b]))
    }

    /// Pack an opaque color.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    /// Alpha channel.
    pub const fn alpha(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    /// Red channel.
    pub const fn red(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    /// Green channel.
    pub const fn green(self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    /// Blue channel.
    pub const fn blue(self) -> u8 {
        self.0.to_be_bytes()[3]
    }

    /// Returns `true` when alpha is 255.
    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }

    /// The color as four bytes in B, G, R, A order.
    pub const fn to_bgra(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Build a color from four bytes in B, G, R, A order.
    pub const fn from_bgra(bytes: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(bytes))
    }

    /// The color as four bytes in R, G, B, A order, as used by `ImageData`.
    pub const fn to_rgba(self) -> [u8; 4] {
        let [a, r, g, b] = self.0.to_be_bytes();
        [r, g, b, a]
    }

    /// Build a color from four bytes in R, G, B, A order.
    pub const fn from_rgba(bytes: [u8; 4]) -> Self {
        let [r, g, b, a] = bytes;
        Self::from_argb(a, r, g, b)
    }

    /// Encode as a CSS color string.
    ///
    /// Opaque colors use `#rrggbb`; everything else uses
    /// `rgba(r,g,b,alpha)` with alpha normalized to `0.0..=1.0`.
    pub fn to_css(self) -> String {
        if self.is_opaque() {
            return format!("#{:06x}", self.0 & 0x00FF_FFFF);
        }
        let alpha = f64::from(self.alpha()) / 255.0;
        format!(
            "rgba({},{},{},{alpha})",
            self.red(),
            self.green(),
            self.blue()
        )
    }

    /// Decode a CSS color string.
    ///
    /// Accepts the forms a canvas context reports back (`#rrggbb` and
    /// `rgba(r, g, b, a)`) as well as `#rgb`, `#rrggbbaa` and `rgb(r, g, b)`.
    /// Hex forms without an alpha component are opaque.
    pub fn from_css(s: &str) -> Result<Self, ParseError> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        let body = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))
            .and_then(|body| body.strip_suffix(')'))
            .ok_or(ParseError::Color)?;
        let mut parts = body.split(',').map(str::trim);
        let r = parse_channel(parts.next())?;
        let g = parse_channel(parts.next())?;
        let b = parse_channel(parts.next())?;
        let a = match parts.next() {
            Some(a) => parse_alpha(a)?,
            None => 0xFF,
        };
        if parts.next().is_some() {
            return Err(ParseError::Color);
        }
        Ok(Self::from_argb(a, r, g, b))
    }
}

fn parse_hex(hex: &str) -> Result<Color, ParseError> {
    // `from_str_radix` tolerates a leading sign, CSS does not.
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::Color);
    }
    let value = u32::from_str_radix(hex, 16).map_err(|_| ParseError::Color)?;
    match hex.len() {
        6 => Ok(Color(0xFF00_0000 | value)),
        8 => Ok(Color(value.rotate_right(8))),
        3 => {
            let [_, _, rg, b] = value.to_be_bytes();
            let expand = |nibble: u8| nibble * 0x11;
            Ok(Color::from_rgb(expand(rg & 0x0F), expand(b >> 4), expand(b & 0x0F)))
        }
        _ => Err(ParseError::Color),
    }
}

fn parse_channel(part: Option<&str>) -> Result<u8, ParseError> {
    part.ok_or(ParseError::Color)?
        .parse::<u8>()
        .map_err(|_| ParseError::Color)
}

fn parse_alpha(part: &str) -> Result<u8, ParseError> {
    let alpha = part.parse::<f64>().map_err(|_| ParseError::Color)?;
    if !alpha.is_finite() {
        return Err(ParseError::Color);
    }
    Ok(unit_to_byte(alpha))
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to 0.5..=255.5 before the cast."
)]
fn unit_to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_css(s)
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}
