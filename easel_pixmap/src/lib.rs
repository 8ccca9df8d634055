// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_pixmap --heading-base-level=0

//! Easel Pixmap: bounds-clamped pixel copies and BGRA pixel buffers.
//!
//! The heart of this crate is [`clamp_blit`], which intersects a copy request
//! with the extents of a source and a destination buffer. The result always
//! lies inside both buffers, and any shift applied to one start edge is applied
//! to the other, so pixels stay paired. A request that does not overlap yields
//! an empty rectangle instead of an error.
//!
//! [`Pixmap`] builds on it: an owned image whose bytes are in B, G, R, A order,
//! with [`Pixmap::blit`] and [`Pixmap::sub`] for copying regions. Canvas
//! `ImageData` uses R, G, B, A, so every transfer to or from the host goes
//! through [`swap_red_blue`] (or [`Pixmap::from_rgba`] / [`Pixmap::to_rgba`]).
//!
//! ```rust
//! use easel_pixmap::{BlitRect, Extent, clamp_blit};
//!
//! // A 20x20 copy that starts 5 pixels left and above a 10x10 destination.
//! let r = clamp_blit(
//!     Extent::new(10, 10),
//!     Extent::new(10, 10),
//!     BlitRect { dst_x: 5, dst_y: 5, src_x: 0, src_y: 0, width: 20, height: 20 },
//! );
//! assert_eq!((r.width, r.height), (5, 5));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod clamp;
mod error;
mod pixmap;

pub use clamp::{BlitRect, Extent, clamp_blit};
pub use error::PixmapError;
pub use pixmap::{MAX_EXTENT, Pixmap, swap_red_blue};
