// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Errors produced when building or addressing a [`Pixmap`](crate::Pixmap).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PixmapError {
    /// A dimension is outside `1..=MAX_EXTENT`.
    InvalidSize {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
    /// A byte buffer does not hold exactly `width * height * 4` bytes.
    LengthMismatch {
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
    /// A pixel coordinate lies outside the pixmap.
    OutOfBounds {
        /// Column.
        x: i32,
        /// Row.
        y: i32,
    },
}

impl fmt::Display for PixmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "invalid pixmap size {width}x{height}")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} bytes of pixel data, got {actual}")
            }
            Self::OutOfBounds { x, y } => write!(f, "pixel ({x}, {y}) is out of bounds"),
        }
    }
}

impl core::error::Error for PixmapError {}
