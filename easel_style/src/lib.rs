// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_style --heading-base-level=0

//! Easel Style: colors and style keywords as they cross the canvas boundary.
//!
//! Canvas 2D describes colors and most style settings as strings. Applications
//! using Easel describe them with small value types instead, and this crate
//! converts between the two:
//!
//! - [`Color`]: a packed 32-bit ARGB value with a lossless CSS encoding for
//!   opaque colors (`#rrggbb`) and an `rgba(...)` encoding otherwise.
//! - [`CompositeOp`], [`LineCap`], [`LineJoin`], [`Repeat`], [`Slant`]: closed
//!   keyword sets. Each variant has a stable integer tag and a CSS keyword, and
//!   both directions of the translation are provided.
//! - [`Font`]: assembles the CSS font shorthand used by `ctx.font`.
//!
//! ## Colors
//!
//! ```rust
//! use easel_style::Color;
//!
//! let teal = Color::from_rgb(0x00, 0x80, 0x80);
//! assert_eq!(teal.to_css(), "#008080");
//! assert_eq!(Color::from_css("#008080").unwrap(), teal);
//!
//! let half = Color::from_argb(0, 255, 0, 0);
//! assert_eq!(half.to_css(), "rgba(255,0,0,0)");
//! ```
//!
//! ## Keywords
//!
//! ```rust
//! use easel_style::{CompositeOp, LineJoin};
//!
//! assert_eq!(CompositeOp::Multiply.as_css(), "multiply");
//! assert_eq!("destination-out".parse::<CompositeOp>(), Ok(CompositeOp::DestinationOut));
//! assert_eq!(LineJoin::from_tag(2), Some(LineJoin::Bevel));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod error;
mod font;
mod keyword;

pub use color::Color;
pub use error::ParseError;
pub use font::Font;
pub use keyword::{CompositeOp, LineCap, LineJoin, Repeat, Slant};
