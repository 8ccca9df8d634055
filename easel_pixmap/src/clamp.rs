// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle intersection for pixel copies between two buffers.

/// Size of a pixel buffer.
///
/// Negative extents are treated as zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Extent {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Extent {
    /// Create an extent.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A copy of `width * height` pixels from `(src_x, src_y)` in one buffer to
/// `(dst_x, dst_y)` in another.
///
/// As a request, offsets may be negative and the size may overhang either
/// buffer. As the output of [`clamp_blit`], the rectangle lies inside both.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlitRect {
    /// Left edge in the destination.
    pub dst_x: i32,
    /// Top edge in the destination.
    pub dst_y: i32,
    /// Left edge in the source.
    pub src_x: i32,
    /// Top edge in the source.
    pub src_y: i32,
    /// Number of columns to copy.
    pub width: i32,
    /// Number of rows to copy.
    pub height: i32,
}

impl BlitRect {
    /// Returns `true` when there is nothing to copy.
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Clip a blit request against both buffers.
///
/// Every adjustment to a start edge is applied to the source and destination
/// alike, so the pixels that remain are still paired one to one. When nothing
/// overlaps, the result has zero width and height and its offsets are clamped
/// into the respective buffers.
///
/// ```
/// use easel_pixmap::{BlitRect, Extent, clamp_blit};
///
/// let request = BlitRect { dst_x: -5, dst_y: -5, src_x: 0, src_y: 0, width: 20, height: 20 };
/// let clamped = clamp_blit(Extent::new(100, 100), Extent::new(50, 50), request);
/// assert_eq!(
///     clamped,
///     BlitRect { dst_x: 0, dst_y: 0, src_x: 5, src_y: 5, width: 15, height: 15 }
/// );
/// ```
pub fn clamp_blit(dst: Extent, src: Extent, rect: BlitRect) -> BlitRect {
    let (dst_x, src_x, width) = clamp_axis(
        i64::from(dst.width).max(0),
        i64::from(src.width).max(0),
        i64::from(rect.dst_x),
        i64::from(rect.src_x),
        i64::from(rect.width),
    );
    let (dst_y, src_y, height) = clamp_axis(
        i64::from(dst.height).max(0),
        i64::from(src.height).max(0),
        i64::from(rect.dst_y),
        i64::from(rect.src_y),
        i64::from(rect.height),
    );
    if width <= 0 || height <= 0 {
        return BlitRect {
            dst_x: narrow(dst_x.clamp(0, i64::from(dst.width).max(0))),
            dst_y: narrow(dst_y.clamp(0, i64::from(dst.height).max(0))),
            src_x: narrow(src_x.clamp(0, i64::from(src.width).max(0))),
            src_y: narrow(src_y.clamp(0, i64::from(src.height).max(0))),
            width: 0,
            height: 0,
        };
    }
    BlitRect {
        dst_x: narrow(dst_x),
        dst_y: narrow(dst_y),
        src_x: narrow(src_x),
        src_y: narrow(src_y),
        width: narrow(width),
        height: narrow(height),
    }
}

/// One axis of [`clamp_blit`]: returns `(dst, src, len)`.
fn clamp_axis(dst_len: i64, src_len: i64, mut d: i64, mut s: i64, mut len: i64) -> (i64, i64, i64) {
    if d < 0 {
        s -= d;
        len += d;
        d = 0;
    }
    if s < 0 {
        d -= s;
        len += s;
        s = 0;
    }
    if d + len > dst_len {
        len = dst_len - d;
    }
    if s + len > src_len {
        len = src_len - s;
    }
    (d, s, len)
}

/// Narrow a value known to lie between zero and an `i32` extent.
fn narrow(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { 0 } else { i32::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(dst_x: i32, dst_y: i32, src_x: i32, src_y: i32, width: i32, height: i32) -> BlitRect {
        BlitRect {
            dst_x,
            dst_y,
            src_x,
            src_y,
            width,
            height,
        }
    }

    fn assert_within(dst: Extent, src: Extent, r: BlitRect) {
        assert!(r.width >= 0 && r.height >= 0, "{r:?}");
        assert!(r.dst_x >= 0 && r.dst_y >= 0, "{r:?}");
        assert!(r.src_x >= 0 && r.src_y >= 0, "{r:?}");
        assert!(r.dst_x + r.width <= dst.width.max(0), "{dst:?} {r:?}");
        assert!(r.dst_y + r.height <= dst.height.max(0), "{dst:?} {r:?}");
        assert!(r.src_x + r.width <= src.width.max(0), "{src:?} {r:?}");
        assert!(r.src_y + r.height <= src.height.max(0), "{src:?} {r:?}");
    }

    #[test]
    fn negative_destination_shifts_source() {
        let r = clamp_blit(
            Extent::new(100, 100),
            Extent::new(50, 50),
            rect(-5, -5, 0, 0, 20, 20),
        );
        assert_eq!(r, rect(0, 0, 5, 5, 15, 15));
    }

    #[test]
    fn overhang_is_trimmed_to_destination() {
        let r = clamp_blit(
            Extent::new(10, 10),
            Extent::new(10, 10),
            rect(5, 5, 0, 0, 20, 20),
        );
        assert_eq!((r.width, r.height), (5, 5));
        assert_eq!((r.dst_x, r.dst_y, r.src_x, r.src_y), (5, 5, 0, 0));
    }

    #[test]
    fn negative_source_shifts_destination() {
        let r = clamp_blit(
            Extent::new(10, 10),
            Extent::new(10, 10),
            rect(0, 1, -3, -4, 6, 6),
        );
        assert_eq!(r, rect(3, 5, 0, 0, 3, 2));
    }

    #[test]
    fn source_limits_width_after_destination() {
        let r = clamp_blit(
            Extent::new(100, 100),
            Extent::new(8, 8),
            rect(0, 0, 6, 0, 10, 10),
        );
        assert_eq!(r, rect(0, 0, 6, 0, 2, 8));
    }

    #[test]
    fn disjoint_requests_are_empty_and_in_bounds() {
        let dst = Extent::new(10, 10);
        let src = Extent::new(10, 10);
        for req in [
            rect(20, 0, 0, 0, 5, 5),
            rect(0, 0, 0, 30, 5, 5),
            rect(-50, -50, 0, 0, 10, 10),
            rect(0, 0, 0, 0, -1, 4),
            rect(0, 0, 0, 0, 4, 0),
        ] {
            let r = clamp_blit(dst, src, req);
            assert!(r.is_empty(), "{req:?} -> {r:?}");
            assert_eq!((r.width, r.height), (0, 0));
            assert_within(dst, src, r);
        }
    }

    #[test]
    fn extreme_inputs_do_not_overflow() {
        let dst = Extent::new(i32::MAX, i32::MAX);
        let src = Extent::new(i32::MAX, 1);
        let r = clamp_blit(
            dst,
            src,
            rect(i32::MIN, i32::MAX, i32::MAX, i32::MIN, i32::MAX, i32::MAX),
        );
        assert_within(dst, src, r);
        let r = clamp_blit(dst, src, rect(i32::MAX - 1, 0, 0, 0, i32::MAX, 1));
        assert_eq!(r, rect(i32::MAX - 1, 0, 0, 0, 1, 1));
    }

    #[test]
    fn negative_extents_behave_as_zero() {
        let r = clamp_blit(
            Extent::new(-4, 10),
            Extent::new(10, 10),
            rect(0, 0, 0, 0, 5, 5),
        );
        assert!(r.is_empty());
        assert_within(Extent::new(-4, 10), Extent::new(10, 10), r);
    }

    #[test]
    fn results_lie_within_both_buffers() {
        let extents = [0, 1, 3, 7];
        let offsets = [-9, -3, -1, 0, 1, 2, 5, 9];
        let sizes = [-2, 0, 1, 4, 12];
        for &dw in &extents {
            for &sw in &extents {
                let dst = Extent::new(dw, 7 - dw);
                let src = Extent::new(sw, 3);
                for &dx in &offsets {
                    for &sx in &offsets {
                        for &w in &sizes {
                            for &dy in &[-2, 0, 3] {
                                let req = rect(dx, dy, sx, 1 - dy, w, w / 2 + 1);
                                assert_within(dst, src, clamp_blit(dst, src, req));
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn in_bounds_requests_are_unchanged() {
        let dst = Extent::new(20, 30);
        let src = Extent::new(40, 10);
        for req in [
            rect(0, 0, 0, 0, 20, 10),
            rect(3, 4, 5, 6, 2, 2),
            rect(19, 29, 39, 9, 1, 1),
        ] {
            let once = clamp_blit(dst, src, req);
            assert_eq!(once, req);
            assert_eq!(clamp_blit(dst, src, once), once);
        }
    }

    #[test]
    fn wider_buffer_does_not_matter_for_fitting_requests() {
        let small = Extent::new(16, 16);
        let large = Extent::new(64, 16);
        let req = rect(2, 3, 4, 5, 8, 6);
        assert_eq!(clamp_blit(small, large, req), clamp_blit(large, small, req));
    }
}
