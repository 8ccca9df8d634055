// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface registry, stacking order, focus, and title-bar interaction.
//!
//! A [`Desktop`] owns the UI bookkeeping that runs whether or not an event
//! handler is registered: which surfaces exist, which frame is on top, which
//! surface has keyboard focus, and which frame is being dragged. Raw pointer
//! and keyboard input goes in; normalized [`Event`]s come out, ready to be
//! passed to a [`Dispatcher`](crate::Dispatcher).
//!
//! The desktop never calls the handler itself, so a handler can freely call
//! back into the desktop (to close or move a surface, say) while it runs.

use alloc::vec::Vec;

use easel_event::{
    Button, ButtonEvent, ButtonState, CloseEvent, CursorEvent, Event, FocusChange, FocusEvent,
    FrameEvent, KeyCode, KeyEvent, KeyState, Modifiers, MoveEvent, ResizeEvent, SurfaceId,
    Timestamp,
};
use hashbrown::HashMap;
use kurbo::Point;
use smallvec::SmallVec;

use crate::decoration::close_glyph_contains;
use crate::drag::DragState;
use crate::surface::check_size;
use crate::{Shell, SurfaceError, SurfaceKind, SurfaceOptions, SurfaceRecord};

/// Events produced by one pointer-down.
pub type EventBatch = SmallVec<[Event; 3]>;

/// The part of a frame under the pointer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    /// The title bar of a decorated frame.
    Header,
    /// The drawing region.
    Surface,
}

/// A frame part of a specific surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Target {
    /// Surface owning the frame.
    pub surface: SurfaceId,
    /// Part of the frame.
    pub part: Part,
}

/// A raw pointer notification from the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerInput {
    /// Frame part under the pointer, if any.
    pub target: Option<Target>,
    /// Pointer position relative to the target part.
    pub offset: Point,
    /// Pointer position in page coordinates.
    pub page: Point,
    /// Button that changed state; [`Button::None`] for moves.
    pub button: Button,
    /// When the host saw the input.
    pub timestamp: Timestamp,
}

/// A raw keyboard notification from the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KeyInput<'a> {
    /// Physical key name, as in DOM `KeyboardEvent.code`.
    pub code: &'a str,
    /// Produced key value, as in DOM `KeyboardEvent.key`.
    pub key: &'a str,
    /// Modifiers and lock states.
    pub modifiers: Modifiers,
    /// When the host saw the input.
    pub timestamp: Timestamp,
}

/// The set of surfaces and the interaction state between them.
#[derive(Debug)]
pub struct Desktop<S> {
    shell: S,
    last_id: u32,
    surfaces: HashMap<SurfaceId, SurfaceRecord>,
    // Bottom to top; on-screen surfaces only.
    stack: Vec<SurfaceId>,
    focus: Option<SurfaceId>,
    drag: DragState,
}

impl<S: Shell> Desktop<S> {
    /// Create an empty desktop that mirrors its state onto `shell`.
    pub fn new(shell: S) -> Self {
        Self {
            shell,
            last_id: 0,
            surfaces: HashMap::new(),
            stack: Vec::new(),
            focus: None,
            drag: DragState::default(),
        }
    }

    /// The host shell.
    pub fn shell(&self) -> &S {
        &self.shell
    }

    /// Mutable access to the host shell.
    pub fn shell_mut(&mut self) -> &mut S {
        &mut self.shell
    }

    /// Register a hidden on-screen surface with a drawing region of
    /// `width * height` pixels.
    pub fn create_onscreen(
        &mut self,
        width: i32,
        height: i32,
        options: SurfaceOptions,
    ) -> Result<SurfaceId, SurfaceError> {
        check_size(width, height)?;
        let id = self.allocate()?;
        let position = options.position;
        self.surfaces.insert(
            id,
            SurfaceRecord {
                id,
                kind: SurfaceKind::Onscreen(options),
                position,
                width,
                height,
                visible: false,
            },
        );
        self.stack.push(id);
        log::debug!("created on-screen surface {id} ({width}x{height})");
        Ok(id)
    }

    /// Register an off-screen surface.
    pub fn create_offscreen(&mut self, width: i32, height: i32) -> Result<SurfaceId, SurfaceError> {
        check_size(width, height)?;
        let id = self.allocate()?;
        self.surfaces.insert(
            id,
            SurfaceRecord {
                id,
                kind: SurfaceKind::Offscreen,
                position: Point::ORIGIN,
                width,
                height,
                visible: false,
            },
        );
        log::debug!("created off-screen surface {id} ({width}x{height})");
        Ok(id)
    }

    /// Look a surface up.
    pub fn get(&self, id: SurfaceId) -> Result<&SurfaceRecord, SurfaceError> {
        self.surfaces.get(&id).ok_or(SurfaceError::NotFound(id))
    }

    /// Iterate over all surfaces in no particular order.
    pub fn surfaces(&self) -> impl Iterator<Item = &SurfaceRecord> {
        self.surfaces.values()
    }

    /// On-screen surfaces, bottom to top.
    pub fn stack(&self) -> &[SurfaceId] {
        &self.stack
    }

    /// The surface receiving keyboard input.
    pub fn focus(&self) -> Option<SurfaceId> {
        self.focus
    }

    /// The surface whose frame is being dragged.
    pub fn drag_target(&self) -> Option<SurfaceId> {
        self.drag.target()
    }

    /// Show a surface's frame and give it focus.
    ///
    /// Off-screen surfaces are left alone.
    pub fn show(&mut self, id: SurfaceId) -> Result<(), SurfaceError> {
        let record = self.record_mut(id)?;
        if !record.is_onscreen() {
            return Ok(());
        }
        record.visible = true;
        self.shell.set_visible(id, true);
        self.focus = Some(id);
        Ok(())
    }

    /// Hide a surface's frame; it loses focus if it had it.
    pub fn hide(&mut self, id: SurfaceId) -> Result<(), SurfaceError> {
        let record = self.record_mut(id)?;
        if !record.is_onscreen() {
            return Ok(());
        }
        record.visible = false;
        self.shell.set_visible(id, false);
        if self.focus == Some(id) {
            self.focus = None;
        }
        Ok(())
    }

    /// Remove a surface and destroy its frame.
    pub fn close(&mut self, id: SurfaceId) -> Result<(), SurfaceError> {
        let record = self.surfaces.remove(&id).ok_or(SurfaceError::NotFound(id))?;
        if record.is_onscreen() {
            self.stack.retain(|&s| s != id);
            self.shell.set_visible(id, false);
            self.shell.destroy(id);
        }
        if self.focus == Some(id) {
            self.focus = None;
        }
        if self.drag.target() == Some(id) {
            self.drag.end();
        }
        log::debug!("closed surface {id}");
        Ok(())
    }

    /// Top-left corner of a surface's frame.
    pub fn position(&self, id: SurfaceId) -> Result<Point, SurfaceError> {
        self.get(id).map(SurfaceRecord::position)
    }

    /// Move a surface's frame. Off-screen surfaces stay at the origin.
    pub fn set_position(&mut self, id: SurfaceId, position: Point) -> Result<(), SurfaceError> {
        let record = self.record_mut(id)?;
        if record.is_onscreen() {
            record.position = position;
            self.shell.move_frame(id, position);
        }
        Ok(())
    }

    /// Size of a surface's drawing region.
    pub fn size(&self, id: SurfaceId) -> Result<(i32, i32), SurfaceError> {
        self.get(id).map(|r| (r.width, r.height))
    }

    /// Resize a surface's drawing region.
    pub fn set_size(&mut self, id: SurfaceId, width: i32, height: i32) -> Result<(), SurfaceError> {
        check_size(width, height)?;
        let record = self.record_mut(id)?;
        record.width = width;
        record.height = height;
        if record.is_onscreen() {
            self.shell.resize(id, width, height);
        }
        Ok(())
    }

    /// Put a surface's frame on top of all others.
    pub fn raise(&mut self, id: SurfaceId) -> Result<(), SurfaceError> {
        if self.get(id)?.is_onscreen() {
            self.raise_onscreen(id);
        }
        Ok(())
    }

    /// Translate a key press for the focused surface.
    ///
    /// Returns `None` when no surface has focus.
    pub fn key_down(&mut self, input: &KeyInput<'_>) -> Option<Event> {
        self.key(input, KeyState::Down)
    }

    /// Translate a key release for the focused surface.
    pub fn key_up(&mut self, input: &KeyInput<'_>) -> Option<Event> {
        self.key(input, KeyState::Up)
    }

    fn key(&self, input: &KeyInput<'_>, state: KeyState) -> Option<Event> {
        let Some(surface) = self.focus else {
            log::trace!("dropping key {:?}: no focused surface", input.code);
            return None;
        };
        let mut chars = input.key.chars();
        let char = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };
        Some(
            KeyEvent {
                surface,
                timestamp: input.timestamp,
                key: KeyCode::from_dom_code(input.code),
                char,
                modifiers: input.modifiers,
                dead: input.key == "Dead",
                state,
            }
            .into(),
        )
    }

    /// Handle a pointer press.
    ///
    /// In a title bar, a press on the close glyph of a closable surface closes
    /// it and yields one [`Event::CanvasClosed`]; anywhere else in the bar it
    /// focuses and raises the surface and starts a drag. In a drawing region
    /// it focuses and raises the surface and yields [`Event::ButtonAction`].
    /// A change of focus is reported first, as a focus-out for the previous
    /// surface followed by a focus-in for the new one.
    pub fn pointer_down(&mut self, input: &PointerInput) -> EventBatch {
        let mut out = EventBatch::new();
        let Some(Target { surface, part }) = input.target else {
            return out;
        };
        let (decorated, closable, width) = match self.surfaces.get(&surface) {
            Some(SurfaceRecord {
                kind: SurfaceKind::Onscreen(options),
                width,
                ..
            }) => (options.decorated, options.closable, *width),
            _ => return out,
        };
        match part {
            Part::Header => {
                if !decorated {
                    return out;
                }
                if closable && close_glyph_contains(f64::from(width), input.offset) {
                    out.push(
                        CloseEvent {
                            surface,
                            timestamp: input.timestamp,
                        }
                        .into(),
                    );
                    if let Err(err) = self.close(surface) {
                        log::warn!("close glyph on stale surface: {err}");
                    }
                    return out;
                }
                self.focus_on(surface, input.timestamp, &mut out);
                self.raise_onscreen(surface);
                self.drag.start(surface, input.page);
            }
            Part::Surface => {
                self.focus_on(surface, input.timestamp, &mut out);
                self.raise_onscreen(surface);
                out.push(
                    ButtonEvent {
                        surface,
                        timestamp: input.timestamp,
                        position: input.offset,
                        button: input.button,
                        state: ButtonState::Down,
                    }
                    .into(),
                );
            }
        }
        out
    }

    /// Handle a pointer release anywhere on the page.
    ///
    /// Ends any drag; yields [`Event::ButtonAction`] when released over a
    /// drawing region.
    pub fn pointer_up(&mut self, input: &PointerInput) -> Option<Event> {
        self.drag.end();
        let target = self.surface_target(input)?;
        Some(
            ButtonEvent {
                surface: target,
                timestamp: input.timestamp,
                position: input.offset,
                button: input.button,
                state: ButtonState::Up,
            }
            .into(),
        )
    }

    /// Handle pointer movement anywhere on the page.
    ///
    /// While dragging, moves the dragged frame by the pointer delta and yields
    /// [`Event::CanvasMoved`]. Otherwise yields [`Event::MouseMove`] when the
    /// pointer is over a drawing region.
    pub fn pointer_move(&mut self, input: &PointerInput) -> Option<Event> {
        if let Some((surface, delta)) = self.drag.update(input.page) {
            let Some(record) = self.surfaces.get_mut(&surface) else {
                self.drag.end();
                return None;
            };
            record.position += delta;
            let position = record.position;
            self.shell.move_frame(surface, position);
            return Some(
                MoveEvent {
                    surface,
                    timestamp: input.timestamp,
                    position,
                }
                .into(),
            );
        }
        let surface = self.surface_target(input)?;
        Some(
            CursorEvent {
                surface,
                timestamp: input.timestamp,
                position: input.offset,
            }
            .into(),
        )
    }

    /// The on-screen surfaces due a frame on this tick, bottom to top.
    ///
    /// The handler may close surfaces between frames, so each id should be
    /// turned into an event with [`Desktop::animation_frame`] only right
    /// before it is delivered.
    pub fn frame_order(&self) -> Vec<SurfaceId> {
        self.stack.clone()
    }

    /// An [`Event::Frame`] for `surface`, or `None` if it is no longer a
    /// registered on-screen surface.
    pub fn animation_frame(&self, surface: SurfaceId, timestamp: Timestamp) -> Option<Event> {
        self.surfaces
            .get(&surface)
            .is_some_and(SurfaceRecord::is_onscreen)
            .then(|| FrameEvent { surface, timestamp }.into())
    }

    /// Record a layout-driven size change of a drawing region.
    ///
    /// Yields [`Event::CanvasResized`] when a resizeable on-screen surface
    /// actually changed to a valid size.
    pub fn surface_resized(
        &mut self,
        surface: SurfaceId,
        width: i32,
        height: i32,
        timestamp: Timestamp,
    ) -> Option<Event> {
        check_size(width, height).ok()?;
        let record = self.surfaces.get_mut(&surface)?;
        if !record.options().is_some_and(|o| o.resizeable) {
            return None;
        }
        if (record.width, record.height) == (width, height) {
            return None;
        }
        record.width = width;
        record.height = height;
        Some(
            ResizeEvent {
                surface,
                timestamp,
                width,
                height,
            }
            .into(),
        )
    }

    fn allocate(&mut self) -> Result<SurfaceId, SurfaceError> {
        let next = self.last_id.checked_add(1).ok_or(SurfaceError::IdsExhausted)?;
        let id = SurfaceId::new(next).ok_or(SurfaceError::IdsExhausted)?;
        self.last_id = next;
        Ok(id)
    }

    fn record_mut(&mut self, id: SurfaceId) -> Result<&mut SurfaceRecord, SurfaceError> {
        self.surfaces.get_mut(&id).ok_or(SurfaceError::NotFound(id))
    }

    fn raise_onscreen(&mut self, id: SurfaceId) {
        if self.stack.last() != Some(&id) {
            self.stack.retain(|&s| s != id);
            self.stack.push(id);
        }
        self.shell.raise(id);
    }

    fn focus_on(&mut self, surface: SurfaceId, timestamp: Timestamp, out: &mut EventBatch) {
        if self.focus == Some(surface) {
            return;
        }
        if let Some(previous) = self.focus.replace(surface) {
            out.push(
                FocusEvent {
                    surface: previous,
                    timestamp,
                    change: FocusChange::Out,
                }
                .into(),
            );
        }
        out.push(
            FocusEvent {
                surface,
                timestamp,
                change: FocusChange::In,
            }
            .into(),
        );
    }

    fn surface_target(&self, input: &PointerInput) -> Option<SurfaceId> {
        match input.target {
            Some(Target {
                surface,
                part: Part::Surface,
            }) if self.surfaces.contains_key(&surface) => Some(surface),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Headless;
    use alloc::vec;

    fn desktop() -> Desktop<Headless> {
        Desktop::new(Headless)
    }

    fn press(surface: SurfaceId, part: Part, x: f64, y: f64) -> PointerInput {
        PointerInput {
            target: Some(Target { surface, part }),
            offset: Point::new(x, y),
            page: Point::new(x, y),
            button: Button::Left,
            timestamp: Timestamp(1),
        }
    }

    #[test]
    fn ids_count_up_from_one() {
        let mut d = desktop();
        let a = d.create_onscreen(10, 10, SurfaceOptions::default()).unwrap();
        let b = d.create_offscreen(10, 10).unwrap();
        assert_eq!((a.get(), b.get()), (1, 2));
        d.close(a).unwrap();
        let c = d.create_offscreen(1, 1).unwrap();
        assert_eq!(c.get(), 3);
    }

    #[test]
    fn sizes_are_validated() {
        let mut d = desktop();
        assert_eq!(
            d.create_onscreen(0, 10, SurfaceOptions::default()),
            Err(SurfaceError::InvalidSize {
                width: 0,
                height: 10
            })
        );
        assert!(d.create_offscreen(32768, 1).is_err());
        let id = d.create_offscreen(5, 5).unwrap();
        assert!(d.set_size(id, 5, -1).is_err());
        assert_eq!(d.size(id), Ok((5, 5)));
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let mut d = desktop();
        let id = d.create_offscreen(5, 5).unwrap();
        d.close(id).unwrap();
        assert_eq!(d.get(id), Err(SurfaceError::NotFound(id)));
        assert_eq!(d.show(id), Err(SurfaceError::NotFound(id)));
        assert_eq!(d.close(id), Err(SurfaceError::NotFound(id)));
    }

    #[test]
    fn show_focuses_and_hide_unfocuses() {
        let mut d = desktop();
        let a = d.create_onscreen(10, 10, SurfaceOptions::default()).unwrap();
        let b = d.create_onscreen(10, 10, SurfaceOptions::default()).unwrap();
        d.show(a).unwrap();
        d.show(b).unwrap();
        assert_eq!(d.focus(), Some(b));
        d.hide(a).unwrap();
        assert_eq!(d.focus(), Some(b));
        d.hide(b).unwrap();
        assert_eq!(d.focus(), None);
        assert!(!d.get(b).unwrap().is_visible());
    }

    #[test]
    fn offscreen_surfaces_stay_put() {
        let mut d = desktop();
        let id = d.create_offscreen(4, 4).unwrap();
        d.set_position(id, Point::new(9.0, 9.0)).unwrap();
        d.show(id).unwrap();
        assert_eq!(d.position(id), Ok(Point::ORIGIN));
        assert_eq!(d.focus(), None);
        assert!(d.stack().is_empty());
    }

    #[test]
    fn keys_go_to_the_focused_surface() {
        let mut d = desktop();
        let input = KeyInput {
            code: "KeyA",
            key: "a",
            modifiers: Modifiers::SHIFT,
            timestamp: Timestamp(7),
        };
        assert_eq!(d.key_down(&input), None);

        let id = d.create_onscreen(10, 10, SurfaceOptions::default()).unwrap();
        d.show(id).unwrap();
        let Some(Event::KeyAction(e)) = d.key_down(&input) else {
            panic!("expected a key event");
        };
        assert_eq!(e.surface, id);
        assert_eq!(e.key, KeyCode::A);
        assert_eq!(e.char, Some('a'));
        assert_eq!(e.modifiers, Modifiers::SHIFT);
        assert!(!e.dead);
        assert_eq!(e.state, KeyState::Down);
    }

    #[test]
    fn named_and_dead_keys_have_no_char() {
        let mut d = desktop();
        let id = d.create_onscreen(10, 10, SurfaceOptions::default()).unwrap();
        d.show(id).unwrap();
        let named = KeyInput {
            code: "Enter",
            key: "Enter",
            modifiers: Modifiers::empty(),
            timestamp: Timestamp(0),
        };
        let Some(Event::KeyAction(e)) = d.key_up(&named) else {
            panic!("expected a key event");
        };
        assert_eq!((e.key, e.char, e.state), (KeyCode::Return, None, KeyState::Up));

        let dead = KeyInput {
            code: "BracketLeft",
            key: "Dead",
            ..named
        };
        let Some(Event::KeyAction(e)) = d.key_down(&dead) else {
            panic!("expected a key event");
        };
        assert!(e.dead);
        assert_eq!(e.char, None);

        let accented = KeyInput {
            code: "Digit2",
            key: "é",
            ..named
        };
        let Some(Event::KeyAction(e)) = d.key_down(&accented) else {
            panic!("expected a key event");
        };
        assert_eq!(e.char, Some('é'));
    }

    #[test]
    fn surface_press_focuses_raises_and_reports_button() {
        let mut d = desktop();
        let a = d.create_onscreen(10, 10, SurfaceOptions::default()).unwrap();
        let b = d.create_onscreen(10, 10, SurfaceOptions::default()).unwrap();
        d.show(b).unwrap();
        assert_eq!(d.stack(), &[a, b]);

        let events = d.pointer_down(&press(a, Part::Surface, 3.0, 4.0));
        assert_eq!(events.len(), 3);
        assert!(matches!(
            events[0],
            Event::CanvasFocused(FocusEvent { surface, change: FocusChange::Out, .. }) if surface == b
        ));
        assert!(matches!(
            events[1],
            Event::CanvasFocused(FocusEvent { surface, change: FocusChange::In, .. }) if surface == a
        ));
        let Event::ButtonAction(button) = events[2] else {
            panic!("expected a button event");
        };
        assert_eq!(button.position, Point::new(3.0, 4.0));
        assert_eq!(button.button, Button::Left);
        assert_eq!(button.state, ButtonState::Down);
        assert_eq!(d.stack(), &[b, a]);
        assert_eq!(d.focus(), Some(a));

        // Already focused: no focus events the second time.
        let events = d.pointer_down(&press(a, Part::Surface, 0.0, 0.0));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn header_press_starts_a_drag() {
        let mut d = desktop();
        let opts = SurfaceOptions::default().with_position(Point::new(100.0, 50.0));
        let id = d.create_onscreen(200, 100, opts).unwrap();
        d.show(id).unwrap();

        let events = d.pointer_down(&press(id, Part::Header, 40.0, 15.0));
        assert!(events.is_empty());
        assert_eq!(d.drag_target(), Some(id));

        let mut step = press(id, Part::Header, 0.0, 0.0);
        step.page = Point::new(45.0, 12.0);
        let Some(Event::CanvasMoved(moved)) = d.pointer_move(&step) else {
            panic!("expected a move event");
        };
        assert_eq!(moved.position, Point::new(105.0, 47.0));
        assert_eq!(d.position(id), Ok(Point::new(105.0, 47.0)));

        assert_eq!(d.pointer_up(&step), None);
        assert_eq!(d.drag_target(), None);
        assert_eq!(d.pointer_move(&step), None);
    }

    #[test]
    fn close_glyph_closes_without_dragging() {
        let mut d = desktop();
        let id = d.create_onscreen(200, 100, SurfaceOptions::default()).unwrap();
        d.show(id).unwrap();
        let events = d.pointer_down(&press(id, Part::Header, 185.0, 15.0));
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], Event::CanvasClosed(CloseEvent { surface, .. }) if surface == id));
        assert_eq!(d.drag_target(), None);
        assert_eq!(d.focus(), None);
        assert!(d.get(id).is_err());
        assert!(d.stack().is_empty());
    }

    #[test]
    fn close_glyph_is_inert_when_not_closable() {
        let mut d = desktop();
        let opts = SurfaceOptions::default().with_closable(false);
        let id = d.create_onscreen(200, 100, opts).unwrap();
        let events = d.pointer_down(&press(id, Part::Header, 185.0, 15.0));
        assert!(events.iter().all(|e| !matches!(e, Event::CanvasClosed(_))));
        assert_eq!(d.drag_target(), Some(id));
    }

    #[test]
    fn moves_over_the_drawing_region_report_the_cursor() {
        let mut d = desktop();
        let id = d.create_onscreen(20, 20, SurfaceOptions::default()).unwrap();
        let Some(Event::MouseMove(m)) = d.pointer_move(&press(id, Part::Surface, 2.0, 3.0)) else {
            panic!("expected a cursor event");
        };
        assert_eq!(m.position, Point::new(2.0, 3.0));
        assert_eq!(d.pointer_move(&press(id, Part::Header, 2.0, 3.0)), None);
    }

    #[test]
    fn frames_cover_onscreen_surfaces_bottom_to_top() {
        let mut d = desktop();
        let a = d.create_onscreen(5, 5, SurfaceOptions::default()).unwrap();
        let _off = d.create_offscreen(5, 5).unwrap();
        let b = d.create_onscreen(5, 5, SurfaceOptions::default()).unwrap();
        d.raise(a).unwrap();
        assert_eq!(d.frame_order(), vec![b, a]);
        let Some(Event::Frame(f)) = d.animation_frame(a, Timestamp(9)) else {
            panic!("expected a frame event");
        };
        assert_eq!((f.surface, f.timestamp), (a, Timestamp(9)));
    }

    #[test]
    fn closed_and_offscreen_surfaces_get_no_frame() {
        let mut d = desktop();
        let a = d.create_onscreen(5, 5, SurfaceOptions::default()).unwrap();
        let off = d.create_offscreen(5, 5).unwrap();
        let order = d.frame_order();
        d.close(a).unwrap();
        assert_eq!(order, vec![a]);
        assert_eq!(d.animation_frame(a, Timestamp(0)), None);
        assert_eq!(d.animation_frame(off, Timestamp(0)), None);
    }

    #[test]
    fn resize_reports_only_real_changes() {
        let mut d = desktop();
        let id = d.create_onscreen(5, 5, SurfaceOptions::default()).unwrap();
        let fixed = d
            .create_onscreen(5, 5, SurfaceOptions::default().with_resizeable(false))
            .unwrap();
        assert_eq!(d.surface_resized(id, 5, 5, Timestamp(0)), None);
        assert_eq!(d.surface_resized(id, 0, 5, Timestamp(0)), None);
        assert_eq!(d.surface_resized(fixed, 8, 8, Timestamp(0)), None);
        let Some(Event::CanvasResized(r)) = d.surface_resized(id, 8, 6, Timestamp(0)) else {
            panic!("expected a resize event");
        };
        assert_eq!((r.width, r.height), (8, 6));
        assert_eq!(d.size(id), Ok((8, 6)));
    }
}
