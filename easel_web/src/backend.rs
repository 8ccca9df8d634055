// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The browser host: listeners, the animation-frame loop and surface
//! management on top of a [`Desktop`] and a [`Dispatcher`].

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use core::fmt;

use easel_dispatch::{Desktop, Dispatcher, KeyInput, Outcome, PointerInput, SurfaceOptions};
use easel_event::{Button, Event, Modifiers, SurfaceId, Timestamp};
use easel_pixmap::Pixmap;
use js_sys::Array;
use kurbo::Point;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, EventTarget, KeyboardEvent, MouseEvent, ResizeObserver, ResizeObserverEntry, Window,
};

use crate::ids::{self, Element};
use crate::shell::DomShell;
use crate::tick::TickSchedule;
use crate::{Canvas, Error, image};

/// A document listener, removed again when dropped.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    fn install(
        target: &EventTarget,
        kind: &'static str,
        callback: Closure<dyn FnMut(web_sys::Event)>,
    ) -> Result<Self, Error> {
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// Everything installed by [`Backend::init`].
struct Hooks {
    _listeners: Vec<Listener>,
    resize: ResizeObserver,
    _on_resize: Closure<dyn FnMut(Array)>,
}

impl Drop for Hooks {
    fn drop(&mut self) {
        self.resize.disconnect();
    }
}

struct Inner {
    window: Window,
    document: Document,
    desktop: RefCell<Desktop<DomShell>>,
    dispatcher: Dispatcher<Error>,
    hooks: RefCell<Option<Hooks>>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    tick_schedule: Cell<TickSchedule>,
}

impl Drop for Inner {
    fn drop(&mut self) {
        let mut schedule = self.tick_schedule.get();
        if let Some(handle) = schedule.cancel() {
            let _ = self.window.cancel_animation_frame(handle);
        }
    }
}

/// The browser host.
///
/// A `Backend` owns the surfaces, the event handler registration and the
/// document listeners. Handles are cheap to clone; the DOM callbacks only
/// hold weak references, so dropping the last handle removes the listeners
/// and stops the animation-frame loop.
#[derive(Clone)]
pub struct Backend {
    inner: Rc<Inner>,
}

impl fmt::Debug for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Backend")
            .field("initialized", &self.is_initialized())
            .field("running", &self.inner.dispatcher.is_running())
            .finish_non_exhaustive()
    }
}

fn mouse_input(e: &MouseEvent, button: Button) -> PointerInput {
    let target = e
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| ids::target_of(&el.id()));
    PointerInput {
        target,
        offset: Point::new(f64::from(e.offset_x()), f64::from(e.offset_y())),
        page: Point::new(f64::from(e.page_x()), f64::from(e.page_y())),
        button,
        timestamp: Timestamp::from_millis(e.time_stamp()),
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Observed sizes are rounded CSS pixels, far inside i32."
)]
fn css_pixels(v: f64) -> i32 {
    v.round() as i32
}

impl Inner {
    fn deliver(&self, events: impl IntoIterator<Item = Event>) {
        // The desktop must not be borrowed here: handlers call back into it.
        self.dispatcher.deliver_all(events);
    }

    fn on_key(&self, e: &KeyboardEvent, down: bool) {
        let code = e.code();
        let key = e.key();
        let input = KeyInput {
            code: &code,
            key: &key,
            modifiers: Modifiers::from_flags(
                e.shift_key(),
                e.alt_key(),
                e.ctrl_key(),
                e.meta_key(),
                e.get_modifier_state("CapsLock"),
                e.get_modifier_state("NumLock"),
            ),
            timestamp: Timestamp::from_millis(e.time_stamp()),
        };
        let event = {
            let mut desktop = self.desktop.borrow_mut();
            if down {
                desktop.key_down(&input)
            } else {
                desktop.key_up(&input)
            }
        };
        if let Some(event) = event {
            e.prevent_default();
            self.deliver([event]);
        }
    }

    fn on_pointer_down(&self, e: &MouseEvent) {
        let input = mouse_input(e, Button::from_dom(e.button()));
        if input.target.is_none() {
            return;
        }
        e.prevent_default();
        let events = self.desktop.borrow_mut().pointer_down(&input);
        self.deliver(events);
    }

    fn on_pointer_up(&self, e: &MouseEvent) {
        let input = mouse_input(e, Button::from_dom(e.button()));
        let event = self.desktop.borrow_mut().pointer_up(&input);
        self.deliver(event);
    }

    fn on_pointer_move(&self, e: &MouseEvent) {
        let input = mouse_input(e, Button::None);
        let event = self.desktop.borrow_mut().pointer_move(&input);
        self.deliver(event);
    }

    fn on_resize(&self, entries: &Array) {
        let timestamp = self.now();
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<ResizeObserverEntry>() else {
                continue;
            };
            let Some((Element::Surface, surface)) = Element::parse(&entry.target().id()) else {
                continue;
            };
            let rect = entry.content_rect();
            let (width, height) = (css_pixels(rect.width()), css_pixels(rect.height()));
            let event = {
                let mut desktop = self.desktop.borrow_mut();
                let event = desktop.surface_resized(surface, width, height, timestamp);
                if event.is_some() {
                    if let Err(err) = desktop.shell().resize_canvas(surface, width, height) {
                        log::warn!("cannot follow layout of {surface}: {err}");
                    }
                }
                event
            };
            self.deliver(event);
        }
    }

    fn on_tick(&self, millis: f64) {
        let mut schedule = self.tick_schedule.get();
        schedule.fired();
        self.tick_schedule.set(schedule);
        // Frames are looked up one at a time; the handler may close surfaces.
        self.dispatcher.deliver_frames(&self.desktop, Timestamp::from_millis(millis));
        self.request_tick();
    }

    /// Ask for the next animation frame if a handler is registered and none
    /// is pending.
    fn request_tick(&self) {
        let mut schedule = self.tick_schedule.get();
        if !schedule.wants_request(self.dispatcher.is_running()) {
            return;
        }
        let tick = self.tick.borrow();
        let Some(tick) = tick.as_ref() else {
            return;
        };
        match self
            .window
            .request_animation_frame(tick.as_ref().unchecked_ref())
        {
            Ok(handle) => {
                schedule.requested(handle);
                self.tick_schedule.set(schedule);
            }
            Err(err) => log::warn!("animation frames stopped: {}", Error::from(err)),
        }
    }

    fn now(&self) -> Timestamp {
        self.window
            .performance()
            .map(|p| Timestamp::from_millis(p.now()))
            .unwrap_or_default()
    }
}

fn listener<E, F>(
    weak: &Weak<Inner>,
    target: &EventTarget,
    kind: &'static str,
    mut f: F,
) -> Result<Listener, Error>
where
    E: JsCast,
    F: FnMut(&Inner, &E) + 'static,
{
    let weak = weak.clone();
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let (Some(inner), Some(event)) = (weak.upgrade(), event.dyn_ref::<E>()) else {
            return;
        };
        f(&inner, event);
    });
    Listener::install(target, kind, callback)
}

impl Backend {
    /// Bind to the current window and document.
    ///
    /// Nothing is installed until [`Backend::init`].
    pub fn new() -> Result<Self, Error> {
        let window = web_sys::window().ok_or_else(|| Error::Js(String::from("no window")))?;
        let document = window
            .document()
            .ok_or_else(|| Error::Js(String::from("no document")))?;
        let shell = DomShell::new(document.clone());
        Ok(Self {
            inner: Rc::new(Inner {
                window,
                document,
                desktop: RefCell::new(Desktop::new(shell)),
                dispatcher: Dispatcher::new(),
                hooks: RefCell::new(None),
                tick: RefCell::new(None),
                tick_schedule: Cell::new(TickSchedule::default()),
            }),
        })
    }

    /// Install the document listeners and the layout observer.
    ///
    /// Calling it again has no effect.
    pub fn init(&self) -> Result<(), Error> {
        if self.is_initialized() {
            log::debug!("backend already initialized");
            return Ok(());
        }
        let weak = Rc::downgrade(&self.inner);
        let doc: &EventTarget = &self.inner.document;
        let listeners = vec![
            listener(&weak, doc, "keydown", |inner, e: &KeyboardEvent| {
                inner.on_key(e, true);
            })?,
            listener(&weak, doc, "keyup", |inner, e: &KeyboardEvent| {
                inner.on_key(e, false);
            })?,
            listener(&weak, doc, "mousedown", |inner, e: &MouseEvent| {
                inner.on_pointer_down(e);
            })?,
            listener(&weak, doc, "mouseup", |inner, e: &MouseEvent| {
                inner.on_pointer_up(e);
            })?,
            listener(&weak, doc, "mousemove", |inner, e: &MouseEvent| {
                inner.on_pointer_move(e);
            })?,
        ];

        let on_resize = {
            let weak = weak.clone();
            Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
                if let Some(inner) = weak.upgrade() {
                    inner.on_resize(&entries);
                }
            })
        };
        let resize = ResizeObserver::new(on_resize.as_ref().unchecked_ref())?;
        self.inner
            .desktop
            .borrow_mut()
            .shell_mut()
            .set_observer(resize.clone());

        *self.inner.hooks.borrow_mut() = Some(Hooks {
            _listeners: listeners,
            resize,
            _on_resize: on_resize,
        });

        let tick = Closure::<dyn FnMut(f64)>::new(move |millis: f64| {
            if let Some(inner) = weak.upgrade() {
                inner.on_tick(millis);
            }
        });
        *self.inner.tick.borrow_mut() = Some(tick);
        log::debug!("backend initialized");
        Ok(())
    }

    /// Whether [`Backend::init`] has run.
    pub fn is_initialized(&self) -> bool {
        self.inner.hooks.borrow().is_some()
    }

    fn ensure_initialized(&self) -> Result<(), Error> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    /// Register the event handler and its shutdown continuation.
    ///
    /// `handler` sees every event until it returns [`Outcome::Stop`] or an
    /// error, or until [`Backend::stop`]; `on_stop` then runs once, with the
    /// handler's error if there was one.
    ///
    /// The animation-frame loop runs while a handler is registered.
    pub fn run<H, F>(&self, handler: H, on_stop: F) -> Result<(), Error>
    where
        H: FnMut(&Event) -> Result<Outcome, Error> + 'static,
        F: FnOnce(Result<(), Error>) + 'static,
    {
        self.ensure_initialized()?;
        self.inner.dispatcher.run(handler, on_stop)?;
        self.inner.request_tick();
        Ok(())
    }

    /// Deregister the event handler; idempotent.
    pub fn stop(&self) {
        self.inner.dispatcher.stop();
    }

    /// Whether an event handler is registered.
    pub fn is_running(&self) -> bool {
        self.inner.dispatcher.is_running()
    }

    /// The host clock, in the time base of event timestamps.
    pub fn now(&self) -> Timestamp {
        self.inner.now()
    }

    /// Create a hidden, framed surface with a drawing region of
    /// `width * height` pixels. Its canvas starts out white.
    pub fn create_onscreen(
        &self,
        width: i32,
        height: i32,
        options: SurfaceOptions,
    ) -> Result<SurfaceId, Error> {
        self.ensure_initialized()?;
        let mut desktop = self.inner.desktop.borrow_mut();
        let id = desktop.create_onscreen(width, height, options)?;
        let record = desktop.get(id)?.clone();
        if let Err(err) = desktop.shell_mut().attach_onscreen(&record) {
            let _ = desktop.close(id);
            return Err(err);
        }
        Ok(id)
    }

    /// Create a surface that is never shown.
    pub fn create_offscreen(&self, width: i32, height: i32) -> Result<SurfaceId, Error> {
        self.ensure_initialized()?;
        let mut desktop = self.inner.desktop.borrow_mut();
        let id = desktop.create_offscreen(width, height)?;
        if let Err(err) = desktop.shell_mut().attach_offscreen(id, width, height) {
            let _ = desktop.close(id);
            return Err(err);
        }
        Ok(id)
    }

    /// Create an off-screen surface holding a copy of `pixmap`.
    pub fn create_offscreen_from_pixmap(&self, pixmap: &Pixmap) -> Result<SurfaceId, Error> {
        let id = self.create_offscreen(pixmap.width(), pixmap.height())?;
        let canvas = self.canvas(id)?;
        if let Err(err) = canvas.put_pixmap(pixmap, Point::ORIGIN) {
            let _ = self.close(id);
            return Err(err);
        }
        Ok(id)
    }

    /// Load an image from `url` into a new off-screen surface of its size.
    ///
    /// `done` runs once with the new surface or the failure.
    pub fn create_offscreen_from_image(
        &self,
        url: &str,
        done: impl FnOnce(Result<SurfaceId, Error>) + 'static,
    ) {
        if let Err(err) = self.ensure_initialized() {
            done(Err(err));
            return;
        }
        let weak = Rc::downgrade(&self.inner);
        image::load(url, move |loaded| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let backend = Self { inner };
            done(loaded.and_then(|img| {
                let (width, height) = image::size_of(&img);
                let id = backend.create_offscreen(width, height)?;
                backend.canvas(id)?.draw_image(&img, Point::ORIGIN)?;
                Ok(id)
            }));
        });
    }

    /// Load an image from `url` and draw it into surface `id` at `at`.
    ///
    /// `done` runs once, after drawing or with the failure.
    pub fn import_image(
        &self,
        id: SurfaceId,
        url: &str,
        at: Point,
        done: impl FnOnce(Result<(), Error>) + 'static,
    ) {
        let canvas = match self.canvas(id) {
            Ok(canvas) => canvas,
            Err(err) => {
                done(Err(err));
                return;
            }
        };
        image::load(url, move |loaded| {
            done(loaded.and_then(|img| canvas.draw_image(&img, at)));
        });
    }

    /// Load an image from `url` into a BGRA buffer.
    pub fn load_pixmap(&self, url: &str, done: impl FnOnce(Result<Pixmap, Error>) + 'static) {
        let document = self.inner.document.clone();
        image::load(url, move |loaded| {
            done(loaded.and_then(|img| image::to_pixmap(&document, &img)));
        });
    }

    /// Encode surface `id` as a PNG data URL.
    pub fn export_png(&self, id: SurfaceId) -> Result<String, Error> {
        self.canvas(id)?.to_png_data_url()
    }

    /// Encode a BGRA buffer as a PNG data URL.
    ///
    /// The pixels go through a scratch canvas that is never attached to the
    /// document, so no surface is created.
    ///
    /// ```no_run
    /// # #[cfg(target_arch = "wasm32")]
    /// # fn main() -> Result<(), easel_web::Error> {
    /// use easel_pixmap::Pixmap;
    ///
    /// let backend = easel_web::Backend::new()?;
    /// let pixmap = Pixmap::new(4, 4)?;
    /// let url = backend.export_pixmap_png(&pixmap)?;
    /// assert!(url.starts_with("data:image/png"));
    /// # Ok(())
    /// # }
    /// # #[cfg(not(target_arch = "wasm32"))]
    /// # fn main() {}
    /// ```
    pub fn export_pixmap_png(&self, pixmap: &Pixmap) -> Result<String, Error> {
        let scratch = Canvas::create(&self.inner.document, pixmap.width(), pixmap.height())?;
        scratch.put_pixmap(pixmap, Point::ORIGIN)?;
        scratch.to_png_data_url()
    }

    /// The drawing canvas of surface `id`.
    pub fn canvas(&self, id: SurfaceId) -> Result<Canvas, Error> {
        self.inner
            .desktop
            .borrow()
            .shell()
            .canvas(id)
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    /// Show a surface's frame and give it focus.
    pub fn show(&self, id: SurfaceId) -> Result<(), Error> {
        Ok(self.inner.desktop.borrow_mut().show(id)?)
    }

    /// Hide a surface's frame.
    pub fn hide(&self, id: SurfaceId) -> Result<(), Error> {
        Ok(self.inner.desktop.borrow_mut().hide(id)?)
    }

    /// Destroy a surface and its frame.
    pub fn close(&self, id: SurfaceId) -> Result<(), Error> {
        let mut desktop = self.inner.desktop.borrow_mut();
        desktop.close(id)?;
        desktop.shell_mut().detach(id);
        Ok(())
    }

    /// Top-left corner of a surface's frame in page coordinates.
    pub fn position(&self, id: SurfaceId) -> Result<Point, Error> {
        Ok(self.inner.desktop.borrow().position(id)?)
    }

    /// Move a surface's frame.
    pub fn set_position(&self, id: SurfaceId, position: Point) -> Result<(), Error> {
        Ok(self.inner.desktop.borrow_mut().set_position(id, position)?)
    }

    /// Size of a surface's drawing region.
    pub fn size(&self, id: SurfaceId) -> Result<(i32, i32), Error> {
        Ok(self.inner.desktop.borrow().size(id)?)
    }

    /// Resize a surface's drawing region, keeping its content.
    pub fn set_size(&self, id: SurfaceId, width: i32, height: i32) -> Result<(), Error> {
        let mut desktop = self.inner.desktop.borrow_mut();
        desktop.set_size(id, width, height)?;
        // Frames are resized through the shell; off-screen canvases are not.
        if !desktop.get(id)?.is_onscreen() {
            desktop.shell().resize_canvas(id, width, height)?;
        }
        Ok(())
    }

    /// Put a surface's frame above all others.
    pub fn raise(&self, id: SurfaceId) -> Result<(), Error> {
        Ok(self.inner.desktop.borrow_mut().raise(id)?)
    }

    /// The surface receiving key events.
    pub fn focus(&self) -> Option<SurfaceId> {
        self.inner.desktop.borrow().focus()
    }

    /// Deliver `event` to the handler as if the host had produced it.
    ///
    /// Returns whether the handler saw it.
    pub fn post(&self, event: Event) -> bool {
        self.inner.dispatcher.deliver(event)
    }
}
