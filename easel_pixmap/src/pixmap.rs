// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use easel_style::Color;

use crate::{BlitRect, Extent, PixmapError, clamp_blit};

/// Largest width or height a [`Pixmap`] may have.
pub const MAX_EXTENT: i32 = 32767;

/// An owned image in B, G, R, A byte order.
///
/// Rows are stored top to bottom without padding, so the byte offset of pixel
/// `(x, y)` is `(y * width + x) * 4`. Read as little-endian `u32`s, the pixels
/// are packed ARGB [`Color`] values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pixmap {
    width: i32,
    height: i32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Create a transparent pixmap.
    pub fn new(width: i32, height: i32) -> Result<Self, PixmapError> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Adopt a buffer that is already in B, G, R, A order.
    pub fn from_bgra(width: i32, height: i32, data: Vec<u8>) -> Result<Self, PixmapError> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(PixmapError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Adopt a buffer in R, G, B, A order, as read from an `ImageData`.
    pub fn from_rgba(width: i32, height: i32, mut data: Vec<u8>) -> Result<Self, PixmapError> {
        swap_red_blue(&mut data);
        Self::from_bgra(width, height, data)
    }

    /// Width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Width and height.
    pub fn extent(&self) -> Extent {
        Extent::new(self.width, self.height)
    }

    /// The pixel bytes in B, G, R, A order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the pixel bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Take the pixel bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// A copy of the pixel bytes in R, G, B, A order.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        swap_red_blue(&mut out);
        out
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        let bgra = color.to_bgra();
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&bgra);
        }
    }

    /// The pixel at `(x, y)`, or `None` outside the pixmap.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let at = self.offset(x, y)?;
        let mut bgra = [0; 4];
        bgra.copy_from_slice(&self.data[at..at + 4]);
        Some(Color::from_bgra(bgra))
    }

    /// Overwrite the pixel at `(x, y)`.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), PixmapError> {
        let at = self
            .offset(x, y)
            .ok_or(PixmapError::OutOfBounds { x, y })?;
        self.data[at..at + 4].copy_from_slice(&color.to_bgra());
        Ok(())
    }

    /// Copy a `width * height` region starting at `(x, y)` into a new pixmap.
    ///
    /// Parts of the region outside `self` are left transparent.
    pub fn sub(&self, x: i32, y: i32, width: i32, height: i32) -> Result<Self, PixmapError> {
        let mut out = Self::new(width, height)?;
        out.blit(
            self,
            BlitRect {
                dst_x: 0,
                dst_y: 0,
                src_x: x,
                src_y: y,
                width,
                height,
            },
        );
        Ok(out)
    }

    /// Copy pixels from `src` into `self`, clipped against both.
    ///
    /// Returns the rectangle that was actually copied, which is empty when the
    /// request does not overlap one of the buffers.
    ///
    /// ```
    /// use easel_pixmap::{BlitRect, Pixmap};
    /// use easel_style::Color;
    ///
    /// let mut canvas = Pixmap::new(4, 4).unwrap();
    /// let mut brush = Pixmap::new(2, 2).unwrap();
    /// brush.fill(Color::WHITE);
    ///
    /// let copied = canvas.blit(&brush, BlitRect { dst_x: 3, dst_y: 3, src_x: 0, src_y: 0, width: 2, height: 2 });
    /// assert_eq!((copied.width, copied.height), (1, 1));
    /// assert_eq!(canvas.pixel(3, 3), Some(Color::WHITE));
    /// ```
    pub fn blit(&mut self, src: &Self, rect: BlitRect) -> BlitRect {
        let rect = clamp_blit(self.extent(), src.extent(), rect);
        if rect.is_empty() {
            return rect;
        }
        let row_len = to_index(rect.width) * 4;
        for row in 0..rect.height {
            let from = src.row_offset(rect.src_x, rect.src_y + row);
            let to = self.row_offset(rect.dst_x, rect.dst_y + row);
            self.data[to..to + row_len].copy_from_slice(&src.data[from..from + row_len]);
        }
        rect
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if (0..self.width).contains(&x) && (0..self.height).contains(&y) {
            Some(self.row_offset(x, y))
        } else {
            None
        }
    }

    // Callers keep (x, y) inside the pixmap.
    fn row_offset(&self, x: i32, y: i32) -> usize {
        (to_index(y) * to_index(self.width) + to_index(x)) * 4
    }
}

/// Swap the first and third byte of every 4-byte pixel, converting between
/// R, G, B, A and B, G, R, A in place. A trailing partial pixel is left alone.
pub fn swap_red_blue(bytes: &mut [u8]) {
    for px in bytes.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
}

fn byte_len(width: i32, height: i32) -> Result<usize, PixmapError> {
    let valid = 1..=MAX_EXTENT;
    if !valid.contains(&width) || !valid.contains(&height) {
        return Err(PixmapError::InvalidSize { width, height });
    }
    Ok(to_index(width) * to_index(height) * 4)
}

fn to_index(v: i32) -> usize {
    usize::try_from(v).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::from_rgb(0xFF, 0, 0);
    const BLUE: Color = Color::from_rgb(0, 0, 0xFF);

    #[test]
    fn new_pixmaps_are_transparent() {
        let pm = Pixmap::new(3, 2).unwrap();
        assert_eq!(pm.as_bytes().len(), 24);
        assert!(pm.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(pm.pixel(2, 1), Some(Color::TRANSPARENT));
    }

    #[test]
    fn sizes_outside_the_valid_range_are_rejected() {
        for (w, h) in [(0, 1), (1, 0), (-1, 5), (MAX_EXTENT + 1, 1), (1, i32::MAX)] {
            assert_eq!(
                Pixmap::new(w, h),
                Err(PixmapError::InvalidSize {
                    width: w,
                    height: h
                })
            );
        }
        assert!(Pixmap::new(MAX_EXTENT, 1).is_ok());
    }

    #[test]
    fn buffer_length_must_match() {
        assert_eq!(
            Pixmap::from_bgra(2, 2, vec![0; 15]),
            Err(PixmapError::LengthMismatch {
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn bytes_are_bgra() {
        let mut pm = Pixmap::new(1, 1).unwrap();
        pm.fill(Color(0x80_11_22_33));
        assert_eq!(pm.as_bytes(), &[0x33, 0x22, 0x11, 0x80]);
        assert_eq!(pm.to_rgba(), vec![0x11, 0x22, 0x33, 0x80]);
    }

    #[test]
    fn rgba_input_is_converted() {
        let pm = Pixmap::from_rgba(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(pm.as_bytes(), &[3, 2, 1, 4, 7, 6, 5, 8]);
        assert_eq!(pm.pixel(0, 0), Some(Color::from_argb(4, 1, 2, 3)));
    }

    #[test]
    fn swap_leaves_partial_pixels() {
        let mut bytes = [1, 2, 3, 4, 9, 8];
        swap_red_blue(&mut bytes);
        assert_eq!(bytes, [3, 2, 1, 4, 9, 8]);
    }

    #[test]
    fn put_and_read_pixels() {
        let mut pm = Pixmap::new(4, 3).unwrap();
        pm.put_pixel(3, 2, RED).unwrap();
        assert_eq!(pm.pixel(3, 2), Some(RED));
        assert_eq!(pm.pixel(2, 2), Some(Color::TRANSPARENT));
        assert_eq!(pm.pixel(4, 0), None);
        assert_eq!(pm.pixel(0, -1), None);
        assert_eq!(
            pm.put_pixel(-1, 0, RED),
            Err(PixmapError::OutOfBounds { x: -1, y: 0 })
        );
    }

    #[test]
    fn blit_copies_the_clamped_region() {
        let mut dst = Pixmap::new(4, 4).unwrap();
        dst.fill(BLUE);
        let mut src = Pixmap::new(3, 3).unwrap();
        src.fill(RED);
        src.put_pixel(0, 0, Color::WHITE).unwrap();

        let copied = dst.blit(
            &src,
            BlitRect {
                dst_x: -1,
                dst_y: 2,
                src_x: 0,
                src_y: 0,
                width: 3,
                height: 3,
            },
        );
        assert_eq!(
            copied,
            BlitRect {
                dst_x: 0,
                dst_y: 2,
                src_x: 1,
                src_y: 0,
                width: 2,
                height: 2,
            }
        );
        assert_eq!(dst.pixel(0, 2), Some(RED));
        assert_eq!(dst.pixel(1, 3), Some(RED));
        assert_eq!(dst.pixel(2, 2), Some(BLUE));
        assert_eq!(dst.pixel(0, 1), Some(BLUE));
    }

    #[test]
    fn empty_blit_changes_nothing() {
        let mut dst = Pixmap::new(2, 2).unwrap();
        let before = dst.clone();
        let mut src = Pixmap::new(2, 2).unwrap();
        src.fill(RED);
        let copied = dst.blit(
            &src,
            BlitRect {
                dst_x: 5,
                dst_y: 0,
                src_x: 0,
                src_y: 0,
                width: 2,
                height: 2,
            },
        );
        assert!(copied.is_empty());
        assert_eq!(dst, before);
    }

    #[test]
    fn sub_image_leaves_uncovered_area_transparent() {
        let mut pm = Pixmap::new(3, 3).unwrap();
        pm.fill(RED);
        let sub = pm.sub(2, 1, 2, 3).unwrap();
        assert_eq!((sub.width(), sub.height()), (2, 3));
        assert_eq!(sub.pixel(0, 0), Some(RED));
        assert_eq!(sub.pixel(0, 1), Some(RED));
        assert_eq!(sub.pixel(1, 0), Some(Color::TRANSPARENT));
        assert_eq!(sub.pixel(0, 2), Some(Color::TRANSPARENT));
    }
}
