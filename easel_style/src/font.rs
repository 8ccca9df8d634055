// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::Slant;

/// A font selection, rendered as the CSS `font` shorthand.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Family name or generic family, such as `"Arial"` or `"serif"`.
    pub family: String,
    /// Size in points.
    pub size: f64,
    /// Slant.
    pub slant: Slant,
    /// Numeric weight, `400` for regular and `700` for bold.
    pub weight: u16,
}

impl Font {
    /// Regular weight.
    pub const REGULAR: u16 = 400;
    /// Bold weight.
    pub const BOLD: u16 = 700;

    /// A regular, upright font of the given family and size.
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
            slant: Slant::Roman,
            weight: Self::REGULAR,
        }
    }

    /// Set the slant.
    #[must_use]
    pub fn with_slant(mut self, slant: Slant) -> Self {
        self.slant = slant;
        self
    }

    /// Set the weight.
    #[must_use]
    pub fn with_weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    /// The CSS shorthand, `"<slant> <weight> <size>pt <family>"`.
    ///
    /// ```
    /// use easel_style::{Font, Slant};
    ///
    /// let font = Font::new("Arial", 12.0).with_slant(Slant::Italic);
    /// assert_eq!(font.to_css(), "italic 400 12pt Arial");
    /// ```
    pub fn to_css(&self) -> String {
        format!(
            "{} {} {}pt {}",
            self.slant.as_css(),
            self.weight,
            self.size,
            self.family
        )
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_order() {
        let font = Font::new("Times New Roman", 10.5)
            .with_slant(Slant::Oblique)
            .with_weight(Font::BOLD);
        assert_eq!(font.to_css(), "oblique 700 10.5pt Times New Roman");
    }

    #[test]
    fn defaults_are_upright_regular() {
        assert_eq!(Font::new("serif", 8.0).to_css(), "normal 400 8pt serif");
    }
}
