// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface records and creation options.

use alloc::string::String;

use easel_event::SurfaceId;
use kurbo::Point;

use crate::decoration::HEADER_HEIGHT;

/// Largest width or height of a surface, in pixels.
pub const MAX_SURFACE_EXTENT: i32 = 32767;

/// Options for an on-screen surface.
///
/// ```
/// use easel_dispatch::SurfaceOptions;
/// use kurbo::Point;
///
/// let opts = SurfaceOptions::default()
///     .with_title("Sketch")
///     .with_position(Point::new(40.0, 30.0))
///     .with_closable(false);
/// assert!(opts.decorated);
/// assert!(!opts.closable);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceOptions {
    /// Draw a title bar above the drawing region.
    pub decorated: bool,
    /// The drawing region follows the frame's size.
    pub resizeable: bool,
    /// Offer a minimize control.
    pub minimize: bool,
    /// Offer a maximize control.
    pub maximize: bool,
    /// Offer a close control.
    pub closable: bool,
    /// Title shown in the title bar.
    pub title: Option<String>,
    /// Initial top-left corner of the frame, in page coordinates.
    pub position: Point,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            decorated: true,
            resizeable: true,
            minimize: true,
            maximize: true,
            closable: true,
            title: None,
            position: Point::ORIGIN,
        }
    }
}

impl SurfaceOptions {
    /// Set whether the frame has a title bar.
    #[must_use]
    pub fn with_decorated(mut self, decorated: bool) -> Self {
        self.decorated = decorated;
        self
    }

    /// Set whether the drawing region may be resized.
    #[must_use]
    pub fn with_resizeable(mut self, resizeable: bool) -> Self {
        self.resizeable = resizeable;
        self
    }

    /// Set whether a minimize control is offered.
    #[must_use]
    pub fn with_minimize(mut self, minimize: bool) -> Self {
        self.minimize = minimize;
        self
    }

    /// Set whether a maximize control is offered.
    #[must_use]
    pub fn with_maximize(mut self, maximize: bool) -> Self {
        self.maximize = maximize;
        self
    }

    /// Set whether a close control is offered.
    #[must_use]
    pub fn with_closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the initial position.
    #[must_use]
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }
}

/// Whether a surface lives in a frame on screen.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceKind {
    /// A surface inside a frame.
    Onscreen(SurfaceOptions),
    /// A drawing target that is never shown.
    Offscreen,
}

/// Bookkeeping for one surface.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceRecord {
    pub(crate) id: SurfaceId,
    pub(crate) kind: SurfaceKind,
    pub(crate) position: Point,
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) visible: bool,
}

impl SurfaceRecord {
    /// The surface's id.
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// On-screen or off-screen, with creation options.
    pub fn kind(&self) -> &SurfaceKind {
        &self.kind
    }

    /// Creation options of an on-screen surface.
    pub fn options(&self) -> Option<&SurfaceOptions> {
        match &self.kind {
            SurfaceKind::Onscreen(options) => Some(options),
            SurfaceKind::Offscreen => None,
        }
    }

    /// Returns `true` for on-screen surfaces.
    pub fn is_onscreen(&self) -> bool {
        matches!(self.kind, SurfaceKind::Onscreen(_))
    }

    /// Top-left corner of the frame. Off-screen surfaces report the origin.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Width of the drawing region in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the drawing region in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns `true` while the frame is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Title, if any.
    pub fn title(&self) -> Option<&str> {
        self.options().and_then(|o| o.title.as_deref())
    }

    /// Height of the title bar; zero for undecorated and off-screen surfaces.
    pub fn header_height(&self) -> f64 {
        match self.options() {
            Some(o) if o.decorated => HEADER_HEIGHT,
            _ => 0.0,
        }
    }
}

pub(crate) fn check_size(width: i32, height: i32) -> Result<(), crate::SurfaceError> {
    let valid = 1..=MAX_SURFACE_EXTENT;
    if valid.contains(&width) && valid.contains(&height) {
        Ok(())
    } else {
        Err(crate::SurfaceError::InvalidSize { width, height })
    }
}
