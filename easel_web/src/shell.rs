// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frames as absolutely positioned `<div>`s in the document body.

use core::fmt;

use easel_dispatch::decoration::HEADER_HEIGHT;
use easel_dispatch::{Shell, SurfaceRecord};
use easel_event::SurfaceId;
use hashbrown::HashMap;
use kurbo::{Point, Rect};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, HtmlElement, ResizeObserver};

use crate::frame::{FrameLayout, GLYPH_WIDTH, HEADER_FILL, HEADER_INK, HeaderArt, TITLE_FONT, px};
use crate::ids::Element;
use crate::{Canvas, Error};

// Line widths of fresh surfaces.
const ONSCREEN_LINE_WIDTH: f64 = 1.0;
const OFFSCREEN_LINE_WIDTH: f64 = 2.0;

#[allow(
    clippy::cast_possible_truncation,
    reason = "The title bar is a whole number of pixels."
)]
const HEADER_ROWS: i32 = HEADER_HEIGHT as i32;

struct Frame {
    element: HtmlElement,
    header: Option<Canvas>,
    title: Option<String>,
    closable: bool,
}

/// A [`Shell`] that mirrors surfaces into the DOM.
///
/// Also owns the drawing canvas of every surface, on-screen or not.
pub struct DomShell {
    document: Document,
    frames: HashMap<SurfaceId, Frame>,
    canvases: HashMap<SurfaceId, Canvas>,
    suppress_menu: Closure<dyn FnMut(Event)>,
    observer: Option<ResizeObserver>,
}

impl fmt::Debug for DomShell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomShell")
            .field("frames", &self.frames.len())
            .field("canvases", &self.canvases.len())
            .field("observed", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::warn!("cannot set {property}: {}", Error::from(err));
    }
}

impl DomShell {
    pub(crate) fn new(document: Document) -> Self {
        let suppress_menu = Closure::<dyn FnMut(Event)>::new(|e: Event| e.prevent_default());
        Self {
            document,
            frames: HashMap::new(),
            canvases: HashMap::new(),
            suppress_menu,
            observer: None,
        }
    }

    /// Watch the drawing canvas of every frame, present and future, with
    /// `observer`. Frames stop being watched when they are destroyed.
    pub(crate) fn set_observer(&mut self, observer: ResizeObserver) {
        for id in self.frames.keys() {
            if let Some(canvas) = self.canvases.get(id) {
                observer.observe(canvas.element());
            }
        }
        self.observer = Some(observer);
    }

    /// The drawing canvas of a surface.
    pub fn canvas(&self, id: SurfaceId) -> Option<&Canvas> {
        self.canvases.get(&id)
    }

    /// Build the hidden frame of a freshly registered on-screen surface.
    pub(crate) fn attach_onscreen(&mut self, record: &SurfaceRecord) -> Result<Canvas, Error> {
        let id = record.id();
        let layout = FrameLayout::of(record);
        let body = self
            .document
            .body()
            .ok_or_else(|| Error::Js(String::from("document has no body")))?;

        let element = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| Error::Js(String::from("created element is not html")))?;
        element.set_id(&Element::Frame.id(id));
        set_style(&element, "position", "absolute");
        set_style(&element, "visibility", "hidden");
        set_style(&element, "left", &px(layout.origin.x));
        set_style(&element, "top", &px(layout.origin.y));
        set_style(&element, "width", &px(layout.width));
        set_style(&element, "height", &px(layout.height));
        element.set_oncontextmenu(Some(self.suppress_menu.as_ref().unchecked_ref()));

        let header = if layout.decorated {
            set_style(&element, "border", "1px solid black");
            let header = Canvas::create(&self.document, record.width(), HEADER_ROWS)?;
            header.element().set_id(&Element::Header.id(id));
            set_style(header.element(), "position", "absolute");
            element.append_child(header.element())?;
            Some(header)
        } else {
            None
        };

        let surface = Canvas::create(&self.document, record.width(), record.height())?;
        surface.element().set_id(&Element::Surface.id(id));
        set_style(surface.element(), "position", "absolute");
        set_style(surface.element(), "top", &px(layout.surface_top));
        element.append_child(surface.element())?;
        surface.reset_state(ONSCREEN_LINE_WIDTH);
        surface.fill_rect(Rect::new(
            0.0,
            0.0,
            layout.width,
            f64::from(record.height()),
        ));

        body.append_child(&element)?;

        let frame = Frame {
            element,
            header,
            title: record.title().map(String::from),
            closable: record.options().is_some_and(|o| o.closable),
        };
        decorate(&frame, record.width());
        if let Some(observer) = &self.observer {
            observer.observe(surface.element());
        }
        self.frames.insert(id, frame);
        self.canvases.insert(id, surface.clone());
        Ok(surface)
    }

    /// Create the detached canvas of an off-screen surface.
    pub(crate) fn attach_offscreen(
        &mut self,
        id: SurfaceId,
        width: i32,
        height: i32,
    ) -> Result<Canvas, Error> {
        let surface = Canvas::create(&self.document, width, height)?;
        surface.element().set_id(&Element::Surface.id(id));
        set_style(surface.element(), "position", "absolute");
        surface.reset_state(OFFSCREEN_LINE_WIDTH);
        self.canvases.insert(id, surface.clone());
        Ok(surface)
    }

    /// Resize a surface's drawing canvas, keeping its content.
    pub(crate) fn resize_canvas(
        &self,
        id: SurfaceId,
        width: i32,
        height: i32,
    ) -> Result<(), Error> {
        let canvas = self.canvases.get(&id).ok_or(Error::NotFound(id))?;
        canvas.resize(width, height)
    }

    /// Forget an off-screen surface.
    pub(crate) fn detach(&mut self, id: SurfaceId) {
        self.canvases.remove(&id);
    }
}

fn decorate(frame: &Frame, width: i32) {
    let Some(header) = &frame.header else {
        return;
    };
    let art = HeaderArt::new(f64::from(width), frame.title.as_deref(), frame.closable);
    let ctx = header.context();
    ctx.set_fill_style_str(HEADER_FILL);
    ctx.fill_rect(
        art.background.x0,
        art.background.y0,
        art.background.width(),
        art.background.height(),
    );
    if let Some((title, at)) = art.title {
        ctx.set_fill_style_str(HEADER_INK);
        ctx.set_font(TITLE_FONT);
        ctx.set_text_align("center");
        if let Err(err) = ctx.fill_text(title, at.x, at.y) {
            log::warn!("cannot draw title: {}", Error::from(err));
        }
    }
    ctx.set_stroke_style_str(HEADER_INK);
    ctx.set_line_width(GLYPH_WIDTH);
    if let Some(lines) = art.close {
        ctx.begin_path();
        for line in lines {
            ctx.move_to(line.p0.x, line.p0.y);
            ctx.line_to(line.p1.x, line.p1.y);
        }
        ctx.stroke();
    }
}

impl Shell for DomShell {
    fn raise(&mut self, surface: SurfaceId) {
        let (Some(frame), Some(body)) = (self.frames.get(&surface), self.document.body()) else {
            return;
        };
        // Re-appending moves the frame to the end of the body, above its siblings.
        if let Err(err) = body.append_child(&frame.element) {
            log::warn!("cannot raise {surface}: {}", Error::from(err));
        }
    }

    fn move_frame(&mut self, surface: SurfaceId, position: Point) {
        if let Some(frame) = self.frames.get(&surface) {
            set_style(&frame.element, "left", &px(position.x));
            set_style(&frame.element, "top", &px(position.y));
        }
    }

    fn set_visible(&mut self, surface: SurfaceId, visible: bool) {
        if let Some(frame) = self.frames.get(&surface) {
            let value = if visible { "visible" } else { "hidden" };
            set_style(&frame.element, "visibility", value);
        }
    }

    fn resize(&mut self, surface: SurfaceId, width: i32, height: i32) {
        let Some(frame) = self.frames.get(&surface) else {
            return;
        };
        let header = if frame.header.is_some() {
            HEADER_HEIGHT
        } else {
            0.0
        };
        set_style(&frame.element, "width", &px(f64::from(width)));
        set_style(&frame.element, "height", &px(f64::from(height) + header));
        if let Some(h) = &frame.header {
            h.element().set_width(u32::try_from(width).unwrap_or_default());
            decorate(frame, width);
        }
        if let Err(err) = self.resize_canvas(surface, width, height) {
            log::warn!("cannot resize {surface}: {err}");
        }
    }

    fn destroy(&mut self, surface: SurfaceId) {
        let canvas = self.canvases.remove(&surface);
        if let (Some(observer), Some(canvas)) = (&self.observer, &canvas) {
            observer.unobserve(canvas.element());
        }
        if let Some(frame) = self.frames.remove(&surface) {
            frame.element.remove();
        }
    }
}
