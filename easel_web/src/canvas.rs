// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pass-throughs to a canvas element's 2D context.

use core::fmt;

use easel_pixmap::{BlitRect, Extent, Pixmap, clamp_blit};
use easel_style::{Color, CompositeOp, Font, LineCap, LineJoin, Repeat};
use js_sys::{Array, Reflect};
use kurbo::{Affine, BezPath, PathEl, Point, Rect, Vec2};
use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{
    CanvasGradient, CanvasPattern, CanvasRenderingContext2d, CanvasWindingRule, Document,
    HtmlCanvasElement, ImageData,
};

use crate::{Error, Path};

/// How the inside of a self-intersecting path is decided.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FillRule {
    /// Inside where the winding number is non-zero.
    #[default]
    NonZero,
    /// Inside where the winding number is odd.
    EvenOdd,
}

impl FillRule {
    fn to_canvas(self) -> CanvasWindingRule {
        match self {
            Self::NonZero => CanvasWindingRule::Nonzero,
            Self::EvenOdd => CanvasWindingRule::Evenodd,
        }
    }
}

/// A gradient created by a [`Canvas`]; usable as a fill or stroke style.
#[derive(Clone, Debug)]
pub struct Gradient(CanvasGradient);

impl Gradient {
    /// Add a color stop at `offset` in `0..=1`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Canvas color stop offsets are single precision."
    )]
    pub fn add_color_stop(&self, color: Color, offset: f64) -> Result<(), Error> {
        Ok(self.0.add_color_stop(offset as f32, &color.to_css())?)
    }
}

/// An image pattern created by a [`Canvas`]; usable as a fill or stroke style.
#[derive(Clone, Debug)]
pub struct Pattern(CanvasPattern);

/// A fill or stroke style.
#[derive(Clone, Debug)]
pub enum Paint {
    /// A solid color.
    Color(Color),
    /// A linear, radial or conic gradient.
    Gradient(Gradient),
    /// A repeated image.
    Pattern(Pattern),
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<Gradient> for Paint {
    fn from(gradient: Gradient) -> Self {
        Self::Gradient(gradient)
    }
}

impl From<Pattern> for Paint {
    fn from(pattern: Pattern) -> Self {
        Self::Pattern(pattern)
    }
}

impl Paint {
    fn from_js(value: JsValue) -> Self {
        if let Some(css) = value.as_string() {
            return Self::Color(Color::from_css(&css).unwrap_or(Color::TRANSPARENT));
        }
        match value.dyn_into::<CanvasGradient>() {
            Ok(g) => Self::Gradient(Gradient(g)),
            Err(value) => match value.dyn_into::<CanvasPattern>() {
                Ok(p) => Self::Pattern(Pattern(p)),
                Err(_) => Self::Color(Color::TRANSPARENT),
            },
        }
    }
}

/// A drawing surface: a `<canvas>` element and its 2D context.
///
/// Handles are cheap to clone and all refer to the same element.
#[derive(Clone)]
pub struct Canvas {
    element: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("id", &self.element.id())
            .field("width", &self.element.width())
            .field("height", &self.element.height())
            .finish_non_exhaustive()
    }
}

fn extent_of(element: &HtmlCanvasElement) -> Extent {
    let clamp = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
    Extent::new(clamp(element.width()), clamp(element.height()))
}

fn dimension(v: i32, width: i32, height: i32) -> Result<u32, Error> {
    u32::try_from(v).map_err(|_| Error::InvalidSize { width, height })
}

impl Canvas {
    /// Create a detached canvas element of `width * height` pixels.
    pub(crate) fn create(document: &Document, width: i32, height: i32) -> Result<Self, Error> {
        let element = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| Error::Js(String::from("created element is not a canvas")))?;
        element.set_width(dimension(width, width, height)?);
        element.set_height(dimension(height, width, height)?);
        Self::wrap(element)
    }

    /// Wrap an existing canvas element.
    pub fn wrap(element: HtmlCanvasElement) -> Result<Self, Error> {
        let ctx = element
            .get_context("2d")?
            .ok_or_else(|| Error::Js(String::from("missing 2d context")))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::Js(String::from("context is not 2d")))?;
        Ok(Self { element, ctx })
    }

    /// The underlying element.
    pub fn element(&self) -> &HtmlCanvasElement {
        &self.element
    }

    /// The underlying context.
    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }

    /// Size of the backing store in pixels.
    pub fn extent(&self) -> Extent {
        extent_of(&self.element)
    }

    /// Resize the backing store, keeping the top-left content.
    ///
    /// Uncovered pixels are painted with the current fill style.
    pub(crate) fn resize(&self, width: i32, height: i32) -> Result<(), Error> {
        let old = self.extent();
        let saved = self
            .ctx
            .get_image_data(0.0, 0.0, f64::from(old.width), f64::from(old.height))?;
        self.element.set_width(dimension(width, width, height)?);
        self.element.set_height(dimension(height, width, height)?);
        // Resizing resets the context state.
        self.reset_state(1.0);
        self.ctx
            .fill_rect(0.0, 0.0, f64::from(width), f64::from(height));
        self.ctx.put_image_data(&saved, 0.0, 0.0)?;
        Ok(())
    }

    /// Initial drawing state of a fresh surface.
    pub(crate) fn reset_state(&self, line_width: f64) {
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_line_width(line_width);
        self.ctx.set_fill_style_str("white");
        self.ctx.set_stroke_style_str("black");
    }

    // Transform

    /// Replace the current transform.
    pub fn set_transform(&self, t: Affine) -> Result<(), Error> {
        let [a, b, c, d, e, f] = t.as_coeffs();
        Ok(self.ctx.set_transform(a, b, c, d, e, f)?)
    }

    /// Multiply the current transform by `t`.
    pub fn transform(&self, t: Affine) -> Result<(), Error> {
        let [a, b, c, d, e, f] = t.as_coeffs();
        Ok(self.ctx.transform(a, b, c, d, e, f)?)
    }

    /// Translate by `v`.
    pub fn translate(&self, v: Vec2) -> Result<(), Error> {
        Ok(self.ctx.translate(v.x, v.y)?)
    }

    /// Scale by `v.x` horizontally and `v.y` vertically.
    pub fn scale(&self, v: Vec2) -> Result<(), Error> {
        Ok(self.ctx.scale(v.x, v.y)?)
    }

    /// Shear by `v.x` horizontally and `v.y` vertically.
    pub fn shear(&self, v: Vec2) -> Result<(), Error> {
        Ok(self.ctx.transform(1.0, v.y, v.x, 1.0, 0.0, 0.0)?)
    }

    /// Rotate by `theta` radians.
    pub fn rotate(&self, theta: f64) -> Result<(), Error> {
        Ok(self.ctx.rotate(theta)?)
    }

    // State

    /// Push the drawing state.
    pub fn save(&self) {
        self.ctx.save();
    }

    /// Pop the drawing state.
    pub fn restore(&self) {
        self.ctx.restore();
    }

    /// Stroke width.
    pub fn line_width(&self) -> f64 {
        self.ctx.line_width()
    }

    /// Set the stroke width.
    pub fn set_line_width(&self, width: f64) {
        self.ctx.set_line_width(width);
    }

    /// Shape of stroke ends.
    pub fn line_cap(&self) -> LineCap {
        LineCap::from_css(&self.ctx.line_cap()).unwrap_or_default()
    }

    /// Set the shape of stroke ends.
    pub fn set_line_cap(&self, cap: LineCap) {
        self.ctx.set_line_cap(cap.as_css());
    }

    /// Shape of stroke corners.
    pub fn line_join(&self) -> LineJoin {
        LineJoin::from_css(&self.ctx.line_join()).unwrap_or_default()
    }

    /// Set the shape of stroke corners.
    pub fn set_line_join(&self, join: LineJoin) {
        self.ctx.set_line_join(join.as_css());
    }

    /// Miter length limit.
    pub fn miter_limit(&self) -> f64 {
        self.ctx.miter_limit()
    }

    /// Set the miter length limit.
    pub fn set_miter_limit(&self, limit: f64) {
        self.ctx.set_miter_limit(limit);
    }

    /// Dash pattern; empty for solid strokes.
    pub fn line_dash(&self) -> Vec<f64> {
        self.ctx
            .get_line_dash()
            .iter()
            .filter_map(|v| v.as_f64())
            .collect()
    }

    /// Set the dash pattern; an empty slice gives solid strokes.
    pub fn set_line_dash(&self, dash: &[f64]) -> Result<(), Error> {
        let array = Array::new();
        for &v in dash {
            array.push(&JsValue::from_f64(v));
        }
        Ok(self.ctx.set_line_dash(&array)?)
    }

    /// Phase of the dash pattern.
    pub fn line_dash_offset(&self) -> f64 {
        self.ctx.line_dash_offset()
    }

    /// Set the phase of the dash pattern.
    pub fn set_line_dash_offset(&self, offset: f64) {
        self.ctx.set_line_dash_offset(offset);
    }

    fn style(&self, property: &str) -> Result<JsValue, Error> {
        Ok(Reflect::get(&self.ctx, &JsValue::from_str(property))?)
    }

    /// Current stroke style.
    pub fn stroke_style(&self) -> Result<Paint, Error> {
        self.style("strokeStyle").map(Paint::from_js)
    }

    /// Stroke color; transparent black when stroking with a gradient or pattern.
    pub fn stroke_color(&self) -> Result<Color, Error> {
        Ok(match self.stroke_style()? {
            Paint::Color(c) => c,
            _ => Color::TRANSPARENT,
        })
    }

    /// Set the stroke style.
    pub fn set_stroke_style(&self, paint: &Paint) {
        match paint {
            Paint::Color(c) => self.ctx.set_stroke_style_str(&c.to_css()),
            Paint::Gradient(g) => self.ctx.set_stroke_style_canvas_gradient(&g.0),
            Paint::Pattern(p) => self.ctx.set_stroke_style_canvas_pattern(&p.0),
        }
    }

    /// Stroke with a solid color.
    pub fn set_stroke_color(&self, color: Color) {
        self.set_stroke_style(&Paint::Color(color));
    }

    /// Current fill style.
    pub fn fill_style(&self) -> Result<Paint, Error> {
        self.style("fillStyle").map(Paint::from_js)
    }

    /// Fill color; transparent black when filling with a gradient or pattern.
    pub fn fill_color(&self) -> Result<Color, Error> {
        Ok(match self.fill_style()? {
            Paint::Color(c) => c,
            _ => Color::TRANSPARENT,
        })
    }

    /// Set the fill style.
    pub fn set_fill_style(&self, paint: &Paint) {
        match paint {
            Paint::Color(c) => self.ctx.set_fill_style_str(&c.to_css()),
            Paint::Gradient(g) => self.ctx.set_fill_style_canvas_gradient(&g.0),
            Paint::Pattern(p) => self.ctx.set_fill_style_canvas_pattern(&p.0),
        }
    }

    /// Fill with a solid color.
    pub fn set_fill_color(&self, color: Color) {
        self.set_fill_style(&Paint::Color(color));
    }

    /// Opacity applied to everything drawn.
    pub fn global_alpha(&self) -> f64 {
        self.ctx.global_alpha()
    }

    /// Set the opacity applied to everything drawn.
    pub fn set_global_alpha(&self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    /// How drawing combines with existing pixels.
    pub fn composite_op(&self) -> Result<CompositeOp, Error> {
        let css = self.ctx.global_composite_operation()?;
        Ok(CompositeOp::from_css(&css).unwrap_or_default())
    }

    /// Set how drawing combines with existing pixels.
    pub fn set_composite_op(&self, op: CompositeOp) -> Result<(), Error> {
        Ok(self.ctx.set_global_composite_operation(op.as_css())?)
    }

    /// Shadow color.
    pub fn shadow_color(&self) -> Color {
        Color::from_css(&self.ctx.shadow_color()).unwrap_or(Color::TRANSPARENT)
    }

    /// Set the shadow color.
    pub fn set_shadow_color(&self, color: Color) {
        self.ctx.set_shadow_color(&color.to_css());
    }

    /// Shadow blur radius.
    pub fn shadow_blur(&self) -> f64 {
        self.ctx.shadow_blur()
    }

    /// Set the shadow blur radius.
    pub fn set_shadow_blur(&self, blur: f64) {
        self.ctx.set_shadow_blur(blur);
    }

    /// Shadow displacement.
    pub fn shadow_offset(&self) -> Vec2 {
        Vec2::new(self.ctx.shadow_offset_x(), self.ctx.shadow_offset_y())
    }

    /// Set the shadow displacement.
    pub fn set_shadow_offset(&self, offset: Vec2) {
        self.ctx.set_shadow_offset_x(offset.x);
        self.ctx.set_shadow_offset_y(offset.y);
    }

    /// Set the text font.
    pub fn set_font(&self, font: &Font) {
        self.ctx.set_font(&font.to_css());
    }

    // Current path

    /// Start a new, empty path.
    pub fn clear_path(&self) {
        self.ctx.begin_path();
    }

    /// Close the current subpath.
    pub fn close_path(&self) {
        self.ctx.close_path();
    }

    /// Start a subpath at `p`.
    pub fn move_to(&self, p: Point) {
        self.ctx.move_to(p.x, p.y);
    }

    /// Add a line to `p`.
    pub fn line_to(&self, p: Point) {
        self.ctx.line_to(p.x, p.y);
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
            .ctx
            .arc_with_anticlockwise(center.x, center.y, radius, start, end, ccw)?)
    }

    /// Add an arc tangent to the lines through `p1` and `p2`.
    pub fn arc_to(&self, p1: Point, p2: Point, radius: f64) -> Result<(), Error> {
        Ok(self.ctx.arc_to(p1.x, p1.y, p2.x, p2.y, radius)?)
    }

    /// Add a quadratic Bézier curve.
    pub fn quadratic_curve_to(&self, cp: Point, p: Point) {
        self.ctx.quadratic_curve_to(cp.x, cp.y, p.x, p.y);
    }

    /// Add a cubic Bézier curve.
    pub fn bezier_curve_to(&self, cp1: Point, cp2: Point, p: Point) {
        self.ctx
            .bezier_curve_to(cp1.x, cp1.y, cp2.x, cp2.y, p.x, p.y);
    }

    /// Add a closed rectangle subpath.
    pub fn rect(&self, r: Rect) {
        self.ctx.rect(r.x0, r.y0, r.width(), r.height());
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
        Ok(self.ctx.ellipse_with_anticlockwise(
            center.x, center.y, radii.x, radii.y, rotation, start, end, ccw,
        )?)
    }

    /// Append a kurbo path to the current path.
    pub fn append_bez_path(&self, path: &BezPath) {
        for el in path.elements() {
            match *el {
                PathEl::MoveTo(p) => self.ctx.move_to(p.x, p.y),
                PathEl::LineTo(p) => self.ctx.line_to(p.x, p.y),
                PathEl::QuadTo(p1, p) => self.ctx.quadratic_curve_to(p1.x, p1.y, p.x, p.y),
                PathEl::CurveTo(p1, p2, p) => {
                    self.ctx.bezier_curve_to(p1.x, p1.y, p2.x, p2.y, p.x, p.y);
                }
                PathEl::ClosePath => self.ctx.close_path(),
            }
        }
    }

    /// Fill the current path.
    pub fn fill(&self, rule: FillRule) {
        self.ctx.fill_with_canvas_winding_rule(rule.to_canvas());
    }

    /// Fill a detached path.
    pub fn fill_path(&self, path: &Path, rule: FillRule) {
        self.ctx
            .fill_with_path_2d_and_winding(path.as_path_2d(), rule.to_canvas());
    }

    /// Stroke the current path.
    pub fn stroke(&self) {
        self.ctx.stroke();
    }

    /// Stroke a detached path.
    pub fn stroke_path(&self, path: &Path) {
        self.ctx.stroke_with_path(path.as_path_2d());
    }

    /// Intersect the clip region with the current path.
    pub fn clip(&self, rule: FillRule) {
        self.ctx.clip_with_canvas_winding_rule(rule.to_canvas());
    }

    /// Intersect the clip region with a detached path.
    pub fn clip_path(&self, path: &Path, rule: FillRule) {
        self.ctx
            .clip_with_path_2d_and_winding(path.as_path_2d(), rule.to_canvas());
    }

    // Immediate drawing

    /// Fill a rectangle without touching the current path.
    pub fn fill_rect(&self, r: Rect) {
        self.ctx.fill_rect(r.x0, r.y0, r.width(), r.height());
    }

    /// Stroke a rectangle without touching the current path.
    pub fn stroke_rect(&self, r: Rect) {
        self.ctx.stroke_rect(r.x0, r.y0, r.width(), r.height());
    }

    /// Fill text with its baseline starting at `p`.
    pub fn fill_text(&self, text: &str, p: Point) -> Result<(), Error> {
        Ok(self.ctx.fill_text(text, p.x, p.y)?)
    }

    /// Stroke text with its baseline starting at `p`.
    pub fn stroke_text(&self, text: &str, p: Point) -> Result<(), Error> {
        Ok(self.ctx.stroke_text(text, p.x, p.y)?)
    }

    // Pixels

    /// Copy pixels from `src`, clamped to both canvases.
    ///
    /// Returns the region actually copied.
    pub fn blit(&self, src: &Self, rect: BlitRect) -> Result<BlitRect, Error> {
        let r = clamp_blit(self.extent(), src.extent(), rect);
        if r.is_empty() {
            return Ok(r);
        }
        let (w, h) = (f64::from(r.width), f64::from(r.height));
        self.ctx
            .draw_image_with_html_canvas_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                &src.element,
                f64::from(r.src_x),
                f64::from(r.src_y),
                w,
                h,
                f64::from(r.dst_x),
                f64::from(r.dst_y),
                w,
                h,
            )?;
        Ok(r)
    }

    /// Read one pixel; transparent black outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Result<Color, Error> {
        let image = self.ctx.get_image_data(f64::from(x), f64::from(y), 1.0, 1.0)?;
        let data = image.data();
        Ok(match data.0.as_slice() {
            [r, g, b, a, ..] => Color::from_rgba([*r, *g, *b, *a]),
            _ => Color::TRANSPARENT,
        })
    }

    /// Overwrite one pixel, ignoring the transform and composite state.
    pub fn put_pixel(&self, x: i32, y: i32, color: Color) -> Result<(), Error> {
        let rgba = color.to_rgba();
        let image = ImageData::new_with_u8_clamped_array_and_sh(Clamped(&rgba[..]), 1, 1)?;
        Ok(self.ctx.put_image_data(&image, f64::from(x), f64::from(y))?)
    }

    /// Read a region into a BGRA buffer.
    pub fn image_data(&self, x: i32, y: i32, w: i32, h: i32) -> Result<Pixmap, Error> {
        if w <= 0 || h <= 0 {
            return Err(Error::InvalidSize {
                width: w,
                height: h,
            });
        }
        let image = self
            .ctx
            .get_image_data(f64::from(x), f64::from(y), f64::from(w), f64::from(h))?;
        Ok(Pixmap::from_rgba(w, h, image.data().0)?)
    }

    /// Write a region of a BGRA buffer, clamped to both the buffer and the
    /// canvas. Ignores the transform and composite state.
    ///
    /// Returns the region actually written.
    pub fn put_image_data(&self, src: &Pixmap, rect: BlitRect) -> Result<BlitRect, Error> {
        let r = clamp_blit(self.extent(), src.extent(), rect);
        if r.is_empty() {
            return Ok(r);
        }
        let region = src.sub(r.src_x, r.src_y, r.width, r.height)?;
        self.put_pixmap(&region, Point::new(f64::from(r.dst_x), f64::from(r.dst_y)))?;
        Ok(r)
    }

    pub(crate) fn put_pixmap(&self, pixmap: &Pixmap, at: Point) -> Result<(), Error> {
        let image = to_image_data(pixmap)?;
        Ok(self.ctx.put_image_data(&image, at.x, at.y)?)
    }

    // Styles

    /// A linear gradient along `p0 -> p1`.
    pub fn linear_gradient(&self, p0: Point, p1: Point) -> Gradient {
        Gradient(self.ctx.create_linear_gradient(p0.x, p0.y, p1.x, p1.y))
    }

    /// A radial gradient between two circles.
    pub fn radial_gradient(
        &self,
        c0: Point,
        r0: f64,
        c1: Point,
        r1: f64,
    ) -> Result<Gradient, Error> {
        Ok(Gradient(
            self.ctx.create_radial_gradient(c0.x, c0.y, r0, c1.x, c1.y, r1)?,
        ))
    }

    /// A conic gradient around `center`, starting at angle `start`.
    pub fn conic_gradient(&self, center: Point, start: f64) -> Gradient {
        Gradient(self.ctx.create_conic_gradient(start, center.x, center.y))
    }

    /// A pattern repeating `image`.
    pub fn pattern(&self, image: &Pixmap, repeat: Repeat) -> Result<Pattern, Error> {
        let document = self
            .element
            .owner_document()
            .ok_or_else(|| Error::Js(String::from("canvas has no document")))?;
        let tile = Self::create(&document, image.width(), image.height())?;
        tile.put_pixmap(image, Point::ORIGIN)?;
        self.ctx
            .create_pattern_with_html_canvas_element(&tile.element, repeat.as_css())?
            .map(Pattern)
            .ok_or_else(|| Error::Js(String::from("pattern source is empty")))
    }

    /// Draw an image element with its top-left corner at `at`.
    pub(crate) fn draw_image(
        &self,
        image: &web_sys::HtmlImageElement,
        at: Point,
    ) -> Result<(), Error> {
        Ok(self
            .ctx
            .draw_image_with_html_image_element(image, at.x, at.y)?)
    }

    /// Encode the canvas as a `data:image/png;base64,` URL.
    pub fn to_png_data_url(&self) -> Result<String, Error> {
        Ok(self.element.to_data_url_with_type("image/png")?)
    }
}

fn to_image_data(pixmap: &Pixmap) -> Result<ImageData, Error> {
    let rgba = pixmap.to_rgba();
    let width = dimension(pixmap.width(), pixmap.width(), pixmap.height())?;
    let height = dimension(pixmap.height(), pixmap.width(), pixmap.height())?;
    Ok(ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(&rgba[..]),
        width,
        height,
    )?)
}
