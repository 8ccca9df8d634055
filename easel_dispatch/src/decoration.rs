// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry of the title bar drawn above decorated surfaces.

use kurbo::{Point, Rect};

/// Height of the title bar in pixels.
pub const HEADER_HEIGHT: f64 = 30.0;

/// Distance of the close glyph's left edge from the right edge of the bar.
pub const CLOSE_GLYPH_LEFT: f64 = 20.0;

/// Distance of the close glyph's right edge from the right edge of the bar.
pub const CLOSE_GLYPH_RIGHT: f64 = 10.0;

/// Top of the close glyph.
pub const CLOSE_GLYPH_TOP: f64 = 10.0;

/// Bottom of the close glyph.
pub const CLOSE_GLYPH_BOTTOM: f64 = 20.0;

/// Baseline of the centered title text.
pub const TITLE_BASELINE: f64 = 21.0;

/// The close glyph's square for a bar `width` pixels wide.
pub fn close_glyph_rect(width: f64) -> Rect {
    Rect::new(
        width - CLOSE_GLYPH_LEFT,
        CLOSE_GLYPH_TOP,
        width - CLOSE_GLYPH_RIGHT,
        CLOSE_GLYPH_BOTTOM,
    )
}

/// Hit test the close glyph; edges count as inside.
///
/// `offset` is relative to the title bar's top-left corner.
///
/// ```
/// use easel_dispatch::decoration::close_glyph_contains;
/// use kurbo::Point;
///
/// assert!(close_glyph_contains(200.0, Point::new(180.0, 10.0)));
/// assert!(close_glyph_contains(200.0, Point::new(190.0, 20.0)));
/// assert!(!close_glyph_contains(200.0, Point::new(179.5, 15.0)));
/// ```
pub fn close_glyph_contains(width: f64, offset: Point) -> bool {
    let r = close_glyph_rect(width);
    (r.x0..=r.x1).contains(&offset.x) && (r.y0..=r.y1).contains(&offset.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_hugs_the_right_edge() {
        let r = close_glyph_rect(320.0);
        assert_eq!(r, Rect::new(300.0, 10.0, 310.0, 20.0));
    }

    #[test]
    fn hit_test_is_inclusive() {
        for p in [
            Point::new(300.0, 10.0),
            Point::new(310.0, 10.0),
            Point::new(300.0, 20.0),
            Point::new(310.0, 20.0),
            Point::new(305.0, 15.0),
        ] {
            assert!(close_glyph_contains(320.0, p), "{p:?}");
        }
        for p in [
            Point::new(299.0, 15.0),
            Point::new(311.0, 15.0),
            Point::new(305.0, 9.0),
            Point::new(305.0, 21.0),
            Point::new(5.0, 5.0),
        ] {
            assert!(!close_glyph_contains(320.0, p), "{p:?}");
        }
    }
}
