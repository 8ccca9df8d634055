// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout and title-bar artwork of a frame, independent of the DOM.

use easel_dispatch::SurfaceRecord;
use easel_dispatch::decoration::{
    CLOSE_GLYPH_BOTTOM, CLOSE_GLYPH_TOP, HEADER_HEIGHT, TITLE_BASELINE, close_glyph_rect,
};
use kurbo::{Line, Point, Rect};

/// Title-bar background.
pub const HEADER_FILL: &str = "#585858";
/// Title text and close glyph.
pub const HEADER_INK: &str = "#F0F0F0F0";
/// Title text font.
pub const TITLE_FONT: &str = "bold 16px Arial";
/// Stroke width of the close glyph.
pub const GLYPH_WIDTH: f64 = 2.0;

/// CSS box of a frame `<div>` and the offset of its drawing canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameLayout {
    /// Page position of the frame's top-left corner.
    pub origin: Point,
    /// Frame width; the width of the drawing region.
    pub width: f64,
    /// Frame height; title bar plus drawing region.
    pub height: f64,
    /// Top of the drawing canvas inside the frame.
    pub surface_top: f64,
    /// Whether the frame gets a border and a title bar.
    pub decorated: bool,
}

impl FrameLayout {
    /// Lay out the frame of an on-screen surface.
    pub fn of(record: &SurfaceRecord) -> Self {
        let header = record.header_height();
        Self {
            origin: record.position(),
            width: f64::from(record.width()),
            height: f64::from(record.height()) + header,
            surface_top: header,
            decorated: header > 0.0,
        }
    }
}

/// CSS pixel length.
pub fn px(v: f64) -> String {
    format!("{v}px")
}

/// What a title bar `width` pixels wide shows.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderArt<'a> {
    /// Background fill.
    pub background: Rect,
    /// Title text and the point its baseline is centered on.
    pub title: Option<(&'a str, Point)>,
    /// The two strokes of the close glyph, when the surface is closable.
    pub close: Option<[Line; 2]>,
}

impl<'a> HeaderArt<'a> {
    /// Artwork for a bar of `width` pixels.
    pub fn new(width: f64, title: Option<&'a str>, closable: bool) -> Self {
        let close = closable.then(|| {
            let r = close_glyph_rect(width);
            [
                Line::new((r.x0, CLOSE_GLYPH_TOP), (r.x1, CLOSE_GLYPH_BOTTOM)),
                Line::new((r.x0, CLOSE_GLYPH_BOTTOM), (r.x1, CLOSE_GLYPH_TOP)),
            ]
        });
        Self {
            background: Rect::new(0.0, 0.0, width, HEADER_HEIGHT),
            title: title.map(|t| (t, Point::new(width / 2.0, TITLE_BASELINE))),
            close,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_dispatch::decoration::close_glyph_contains;
    use easel_dispatch::{Desktop, Headless, SurfaceOptions};

    #[test]
    fn decorated_frames_stack_the_title_bar_above_the_canvas() {
        let mut desktop = Desktop::new(Headless);
        let opts = SurfaceOptions::default().with_position(Point::new(40.0, 12.0));
        let id = desktop.create_onscreen(200, 100, opts).unwrap();
        let layout = FrameLayout::of(desktop.get(id).unwrap());
        assert_eq!(layout.origin, Point::new(40.0, 12.0));
        assert_eq!((layout.width, layout.height), (200.0, 130.0));
        assert_eq!(layout.surface_top, HEADER_HEIGHT);
        assert!(layout.decorated);
    }

    #[test]
    fn undecorated_frames_are_just_the_canvas() {
        let mut desktop = Desktop::new(Headless);
        let opts = SurfaceOptions::default().with_decorated(false);
        let id = desktop.create_onscreen(64, 48, opts).unwrap();
        let layout = FrameLayout::of(desktop.get(id).unwrap());
        assert_eq!((layout.width, layout.height), (64.0, 48.0));
        assert_eq!(layout.surface_top, 0.0);
        assert!(!layout.decorated);
    }

    #[test]
    fn close_glyph_strokes_stay_inside_the_hit_box() {
        let art = HeaderArt::new(150.0, Some("Demo"), true);
        let [a, b] = art.close.unwrap();
        for p in [a.p0, a.p1, b.p0, b.p1] {
            assert!(close_glyph_contains(150.0, p), "{p:?}");
        }
        assert_eq!(art.title, Some(("Demo", Point::new(75.0, TITLE_BASELINE))));
        assert_eq!(art.background, Rect::new(0.0, 0.0, 150.0, HEADER_HEIGHT));
    }

    #[test]
    fn plain_bars_have_no_glyph_or_title() {
        let art = HeaderArt::new(80.0, None, false);
        assert!(art.close.is_none());
        assert!(art.title.is_none());
    }

    #[test]
    fn lengths_are_css_pixels() {
        assert_eq!(px(30.0), "30px");
        assert_eq!(px(12.5), "12.5px");
    }
}
