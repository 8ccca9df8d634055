// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Title-bar drag tracking.
//!
//! ## Usage
//!
//! 1) On pointer-down in a title bar, call [`DragState::start`] with the
//!    surface and the pointer's page position.
//! 2) On each pointer move, call [`DragState::update`] to get the surface and
//!    the delta since the previous position.
//! 3) On pointer-up, call [`DragState::end`].
//!
//! ```
//! use easel_dispatch::drag::DragState;
//! use easel_event::SurfaceId;
//! use kurbo::{Point, Vec2};
//!
//! let id = SurfaceId::new(3).unwrap();
//! let mut drag = DragState::default();
//! drag.start(id, Point::new(10.0, 20.0));
//! assert_eq!(drag.update(Point::new(15.0, 18.0)), Some((id, Vec2::new(5.0, -2.0))));
//! assert_eq!(drag.end(), Some(id));
//! assert!(!drag.is_dragging());
//! ```

use easel_event::SurfaceId;
use kurbo::{Point, Vec2};

#[derive(Copy, Clone, Debug, PartialEq)]
struct Active {
    surface: SurfaceId,
    last: Point,
}

/// Tracks the surface being dragged by its title bar.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragState {
    active: Option<Active>,
}

impl DragState {
    /// Begin dragging `surface` from page position `pos`, replacing any drag in
    /// progress.
    pub fn start(&mut self, surface: SurfaceId, pos: Point) {
        self.active = Some(Active { surface, last: pos });
    }

    /// Record a new pointer position and return the movement since the last one.
    pub fn update(&mut self, pos: Point) -> Option<(SurfaceId, Vec2)> {
        let active = self.active.as_mut()?;
        let delta = pos - active.last;
        active.last = pos;
        Some((active.surface, delta))
    }

    /// Stop dragging; returns the surface that was being dragged.
    pub fn end(&mut self) -> Option<SurfaceId> {
        self.active.take().map(|a| a.surface)
    }

    /// Returns `true` while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// The surface being dragged.
    pub fn target(&self) -> Option<SurfaceId> {
        self.active.map(|a| a.surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> SurfaceId {
        SurfaceId::new(n).unwrap()
    }

    #[test]
    fn new_drag_state_is_not_dragging() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.target(), None);
    }

    #[test]
    fn update_returns_none_when_not_dragging() {
        let mut drag = DragState::default();
        assert_eq!(drag.update(Point::new(15.0, 25.0)), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn multiple_updates_track_incremental_deltas() {
        let mut drag = DragState::default();
        drag.start(id(1), Point::new(0.0, 0.0));

        assert_eq!(
            drag.update(Point::new(5.0, 3.0)),
            Some((id(1), Vec2::new(5.0, 3.0)))
        );
        assert_eq!(
            drag.update(Point::new(8.0, 7.0)),
            Some((id(1), Vec2::new(3.0, 4.0)))
        );
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some((id(1), Vec2::ZERO)));
    }

    #[test]
    fn restarting_switches_target() {
        let mut drag = DragState::default();
        drag.start(id(1), Point::new(0.0, 0.0));
        drag.start(id(2), Point::new(4.0, 4.0));
        assert_eq!(drag.target(), Some(id(2)));
        assert_eq!(
            drag.update(Point::new(5.0, 5.0)),
            Some((id(2), Vec2::new(1.0, 1.0)))
        );
    }

    #[test]
    fn end_resets_state() {
        let mut drag = DragState::default();
        drag.start(id(1), Point::new(10.0, 20.0));
        assert_eq!(drag.end(), Some(id(1)));
        assert_eq!(drag.end(), None);
        assert_eq!(drag.update(Point::new(1.0, 1.0)), None);
        assert!(!drag.is_dragging());
    }
}
