// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Affine, BezPath, PathEl, Point, Rect, Vec2};
use web_sys::{DomMatrix2dInit, Path2d};

use crate::Error;

/// A path built apart from any canvas, then filled, stroked or clipped with
/// [`Canvas::fill_path`](crate::Canvas::fill_path) and friends.
#[derive(Clone)]
pub struct Path(Path2d);

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Path { .. }")
    }
}

impl Path {
    /// An empty path.
    pub fn new() -> Result<Self, Error> {
        Ok(Self(Path2d::new()?))
    }

    /// A path with the same elements as a kurbo path.
    pub fn from_bez_path(path: &BezPath) -> Result<Self, Error> {
        let p = Self::new()?;
        for el in path.elements() {
            match *el {
                PathEl::MoveTo(pt) => p.move_to(pt),
                PathEl::LineTo(pt) => p.line_to(pt),
                PathEl::QuadTo(p1, pt) => p.quadratic_curve_to(p1, pt),
                PathEl::CurveTo(p1, p2, pt) => p.bezier_curve_to(p1, p2, pt),
                PathEl::ClosePath => p.close(),
            }
        }
        Ok(p)
    }

    pub(crate) fn as_path_2d(&self) -> &Path2d {
        &self.0
    }

    /// Close the current subpath.
    pub fn close(&self) {
        self.0.close_path();
    }

    /// Start a subpath at `p`.
    pub fn move_to(&self, p: Point) {
        self.0.move_to(p.x, p.y);
    }

    /// Add a line to `p`.
    pub fn line_to(&self, p: Point) {
        self.0.line_to(p.x, p.y);
    }

    /// Add a circular arc around `center` from angle `start` to `end`.
    pub fn arc(
        &self,
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        ccw: bool,
    ) -> Result<(), Error> {
        Ok(self
            .0
            .arc_with_anticlockwise(center.x, center.y, radius, start, end, ccw)?)
    }

    /// Add an arc tangent to the lines through `p1` and `p2`.
    pub fn arc_to(&self, p1: Point, p2: Point, radius: f64) -> Result<(), Error> {
        Ok(self.0.arc_to(p1.x, p1.y, p2.x, p2.y, radius)?)
    }

    /// Add a quadratic Bézier curve.
    pub fn quadratic_curve_to(&self, cp: Point, p: Point) {
        self.0.quadratic_curve_to(cp.x, cp.y, p.x, p.y);
    }

    /// Add a cubic Bézier curve.
    pub fn bezier_curve_to(&self, cp1: Point, cp2: Point, p: Point) {
        self.0.bezier_curve_to(cp1.x, cp1.y, cp2.x, cp2.y, p.x, p.y);
    }

    /// Add a closed rectangle subpath.
    pub fn rect(&self, r: Rect) {
        self.0.rect(r.x0, r.y0, r.width(), r.height());
    }

    /// Add an elliptical arc.
    pub fn ellipse(
        &self,
        center: Point,
        radii: Vec2,
        rotation: f64,
        start: f64,
        end: f64,
        ccw: bool,
    ) -> Result<(), Error> {
        Ok(self.0.ellipse_with_anticlockwise(
            center.x, center.y, radii.x, radii.y, rotation, start, end, ccw,
        )?)
    }

    /// Append the subpaths of `other`.
    pub fn add(&self, other: &Self) {
        self.0.add_path(&other.0);
    }

    /// Append the subpaths of `other`, transformed by `t`.
    pub fn add_transformed(&self, other: &Self, t: Affine) {
        let [a, b, c, d, e, f] = t.as_coeffs();
        let m = DomMatrix2dInit::new();
        m.set_a(a);
        m.set_b(b);
        m.set_c(c);
        m.set_d(d);
        m.set_e(e);
        m.set_f(f);
        self.0.add_path_with_transformation(&other.0, &m);
    }
}
