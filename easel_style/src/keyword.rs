// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed keyword sets for canvas style state.
//!
//! Every set gets the same translation surface: a stable integer tag (for hosts
//! that pass enums as small integers) and the CSS keyword the canvas API uses.

use core::fmt;
use core::str::FromStr;

use crate::ParseError;

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($what:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $tag:literal => $css:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $tag, )+
        }

        impl $name {
            /// Every variant, in tag order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Stable integer tag of this variant.
            pub const fn tag(self) -> u8 {
                self as u8
            }

            /// Look a variant up by its integer tag.
            pub const fn from_tag(tag: u8) -> Option<Self> {
                match tag {
                    $( $tag => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// The CSS keyword the canvas API uses for this variant.
            pub const fn as_css(self) -> &'static str {
                match self {
                    $( Self::$variant => $css, )+
                }
            }

            /// Parse a CSS keyword.
            pub fn from_css(s: &str) -> Result<Self, ParseError> {
                match s {
                    $( $css => Ok(Self::$variant), )+
                    _ => Err(ParseError::Keyword { expected: $what }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_css())
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_css(s)
            }
        }
    };
}

keyword_enum! {
    /// Compositing and blending operation (`globalCompositeOperation`).
    pub enum CompositeOp ("composite operation") {
        /// Draw source over destination.
        #[default]
        SourceOver = 0 => "source-over",
        /// Keep source where it overlaps destination.
        SourceIn = 1 => "source-in",
        /// Keep source where it does not overlap destination.
        SourceOut = 2 => "source-out",
        /// Draw source only where destination exists.
        SourceAtop = 3 => "source-atop",
        /// Draw destination over source.
        DestinationOver = 4 => "destination-over",
        /// Keep destination where it overlaps source.
        DestinationIn = 5 => "destination-in",
        /// Keep destination where it does not overlap source.
        DestinationOut = 6 => "destination-out",
        /// Keep destination only where source exists.
        DestinationAtop = 7 => "destination-atop",
        /// Additive blending.
        Lighter = 8 => "lighter",
        /// Replace destination with source.
        Copy = 9 => "copy",
        /// Exclusive or of source and destination.
        Xor = 10 => "xor",
        /// Multiply blend.
        Multiply = 11 => "multiply",
        /// Screen blend.
        Screen = 12 => "screen",
        /// Overlay blend.
        Overlay = 13 => "overlay",
        /// Darken blend.
        Darken = 14 => "darken",
        /// Lighten blend.
        Lighten = 15 => "lighten",
        /// Color dodge blend.
        ColorDodge = 16 => "color-dodge",
        /// Color burn blend.
        ColorBurn = 17 => "color-burn",
        /// Hard light blend.
        HardLight = 18 => "hard-light",
        /// Soft light blend.
        SoftLight = 19 => "soft-light",
        /// Difference blend.
        Difference = 20 => "difference",
        /// Exclusion blend.
        Exclusion = 21 => "exclusion",
        /// Hue blend.
        Hue = 22 => "hue",
        /// Saturation blend.
        Saturation = 23 => "saturation",
        /// Color blend.
        Color = 24 => "color",
        /// Luminosity blend.
        Luminosity = 25 => "luminosity",
    }
}

keyword_enum! {
    /// Shape at the open ends of stroked lines (`lineCap`).
    pub enum LineCap ("line cap") {
        /// Flat end at the endpoint.
        #[default]
        Butt = 0 => "butt",
        /// Square extending half the line width past the endpoint.
        Square = 1 => "square",
        /// Half-disc centered on the endpoint.
        Round = 2 => "round",
    }
}

keyword_enum! {
    /// Shape where two stroked segments meet (`lineJoin`).
    pub enum LineJoin ("line join") {
        /// Rounded corner.
        Round = 0 => "round",
        /// Sharp corner, limited by the miter limit.
        #[default]
        Miter = 1 => "miter",
        /// Beveled corner.
        Bevel = 2 => "bevel",
    }
}

keyword_enum! {
    /// Tiling mode of an image pattern.
    pub enum Repeat ("repeat mode") {
        /// Draw the image once.
        NoRepeat = 0 => "no-repeat",
        /// Tile horizontally.
        RepeatX = 1 => "repeat-x",
        /// Tile vertically.
        RepeatY = 2 => "repeat-y",
        /// Tile in both directions.
        #[default]
        RepeatXY = 3 => "repeat",
    }
}

keyword_enum! {
    /// Font slant.
    pub enum Slant ("font slant") {
        /// Upright glyphs.
        #[default]
        Roman = 0 => "normal",
        /// Italic glyphs.
        Italic = 1 => "italic",
        /// Slanted upright glyphs.
        Oblique = 2 => "oblique",
    }
}
