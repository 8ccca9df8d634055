// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM element ids of the parts of a frame.
//!
//! Every on-screen surface owns up to three elements: the frame `<div>`
//! (`f{id}`), the title-bar `<canvas>` (`h{id}`) and the drawing `<canvas>`
//! (`s{id}`). Off-screen surfaces own only a detached drawing canvas. Input
//! listeners live on the document and recover the frame part from the event
//! target's id.

use easel_dispatch::{Part, Target};
use easel_event::SurfaceId;

/// One of the elements making up a frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    /// The positioned `<div>` holding the other two.
    Frame,
    /// The title-bar canvas.
    Header,
    /// The drawing canvas.
    Surface,
}

impl Element {
    const fn prefix(self) -> char {
        match self {
            Self::Frame => 'f',
            Self::Header => 'h',
            Self::Surface => 's',
        }
    }

    /// The element id used for `surface`.
    pub fn id(self, surface: SurfaceId) -> String {
        format!("{}{surface}", self.prefix())
    }

    /// Recover the element kind and surface from an element id.
    ///
    /// ```
    /// use easel_web::ids::Element;
    ///
    /// let (kind, surface) = Element::parse("h7").unwrap();
    /// assert_eq!(kind, Element::Header);
    /// assert_eq!(surface.get(), 7);
    /// assert!(Element::parse("s0").is_none());
    /// ```
    pub fn parse(id: &str) -> Option<(Self, SurfaceId)> {
        let mut chars = id.chars();
        let kind = match chars.next()? {
            'f' => Self::Frame,
            'h' => Self::Header,
            's' => Self::Surface,
            _ => return None,
        };
        let digits = chars.as_str();
        // `u32::from_str` accepts a leading `+`.
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let surface = SurfaceId::new(digits.parse().ok()?)?;
        Some((kind, surface))
    }
}

/// The frame part an input event landed on, given the target element's id.
///
/// Frames themselves are not targets: only the title bar and drawing region
/// take pointer input.
pub fn target_of(id: &str) -> Option<Target> {
    let (kind, surface) = Element::parse(id)?;
    let part = match kind {
        Element::Header => Part::Header,
        Element::Surface => Part::Surface,
        Element::Frame => return None,
    };
    Some(Target { surface, part })
}
