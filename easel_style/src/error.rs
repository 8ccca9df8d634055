// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a CSS string cannot be translated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// The string is not a color notation this crate understands.
    Color,
    /// The string is not one of the keywords of a closed set.
    Keyword {
        /// Name of the keyword set, such as `"line cap"`.
        expected: &'static str,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color => f.write_str("invalid CSS color"),
            Self::Keyword { expected } => write!(f, "unknown {expected} keyword"),
        }
    }
}

impl core::error::Error for ParseError {}
