// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between desktop bookkeeping and the host's windowing system.

use easel_event::SurfaceId;
use kurbo::Point;

/// Host operations on the frame that holds an on-screen surface.
///
/// A [`Desktop`](crate::Desktop) calls these after updating its own records,
/// so an implementation only mirrors state and never decides it. Calls for
/// off-screen surfaces are not made.
pub trait Shell {
    /// Put the frame above every other frame.
    fn raise(&mut self, surface: SurfaceId);

    /// Move the frame's top-left corner to `position` (page coordinates).
    fn move_frame(&mut self, surface: SurfaceId, position: Point);

    /// Show or hide the frame.
    fn set_visible(&mut self, surface: SurfaceId, visible: bool);

    /// Resize the drawing region.
    fn resize(&mut self, surface: SurfaceId, width: i32, height: i32);

    /// Tear down the frame and everything in it.
    fn destroy(&mut self, surface: SurfaceId);
}

/// A shell without a screen; every operation is a no-op.
#[derive(Copy, Clone, Debug, Default)]
pub struct Headless;

impl Shell for Headless {
    fn raise(&mut self, _: SurfaceId) {}

    fn move_frame(&mut self, _: SurfaceId, _: Point) {}

    fn set_visible(&mut self, _: SurfaceId, _: bool) {}

    fn resize(&mut self, _: SurfaceId, _: i32, _: i32) {}

    fn destroy(&mut self, _: SurfaceId) {}
}
