// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted session against a headless desktop.
//!
//! Two framed surfaces are created; a recorded sequence of clicks, a
//! title-bar drag, key presses and a press on the close glyph is fed through
//! the desktop, and every event the handler sees is printed. The handler
//! stops the session when the last surface closes.
//!
//! Run:
//! - `cargo run -p easel_demos --bin headless_session`

use std::cell::RefCell;
use std::rc::Rc;

use easel_dispatch::{
    Desktop, Dispatcher, Headless, KeyInput, Outcome, Part, PointerInput, SurfaceOptions, Target,
};
use easel_event::{Button, Event, Modifiers, SurfaceId, Timestamp};
use kurbo::Point;

enum Step {
    Down(Target, Point, Point),
    Move(Option<Target>, Point, Point),
    Up(Option<Target>, Point, Point),
    Key(&'static str, &'static str),
    Frame,
}

fn main() {
    let desktop = Rc::new(RefCell::new(Desktop::new(Headless)));
    let (editor, palette) = {
        let mut d = desktop.borrow_mut();
        let editor = d
            .create_onscreen(
                320,
                200,
                SurfaceOptions::default()
                    .with_title("Editor")
                    .with_position(Point::new(20.0, 20.0)),
            )
            .unwrap();
        let palette = d
            .create_onscreen(
                120,
                200,
                SurfaceOptions::default()
                    .with_title("Palette")
                    .with_resizeable(false)
                    .with_position(Point::new(360.0, 20.0)),
            )
            .unwrap();
        d.show(editor).unwrap();
        d.show(palette).unwrap();
        (editor, palette)
    };

    let dispatcher: Dispatcher<String> = Dispatcher::new();
    let handler_desktop = desktop.clone();
    dispatcher
        .run(
            move |event: &Event| {
                println!("{:>8}us  {:?}", event.timestamp().as_micros(), event);
                if let Event::CanvasClosed(_) = event {
                    if handler_desktop.borrow().stack().is_empty() {
                        return Ok(Outcome::Stop);
                    }
                }
                Ok(Outcome::Continue)
            },
            |result| println!("session ended: {result:?}"),
        )
        .unwrap();

    let header = |surface: SurfaceId| Target {
        surface,
        part: Part::Header,
    };
    let body = |surface: SurfaceId| Target {
        surface,
        part: Part::Surface,
    };
    let script = [
        Step::Down(body(editor), Point::new(15.0, 25.0), Point::new(36.0, 76.0)),
        Step::Up(Some(body(editor)), Point::new(15.0, 25.0), Point::new(36.0, 76.0)),
        Step::Key("KeyH", "h"),
        Step::Key("KeyI", "i"),
        Step::Down(header(palette), Point::new(40.0, 12.0), Point::new(401.0, 33.0)),
        Step::Move(None, Point::ORIGIN, Point::new(380.0, 53.0)),
        Step::Move(None, Point::ORIGIN, Point::new(350.0, 73.0)),
        Step::Up(None, Point::ORIGIN, Point::new(350.0, 73.0)),
        Step::Frame,
        Step::Move(Some(body(palette)), Point::new(5.0, 6.0), Point::new(0.0, 0.0)),
        Step::Down(header(editor), Point::new(305.0, 15.0), Point::new(0.0, 0.0)),
        Step::Key("Escape", "Escape"),
        Step::Frame,
        Step::Down(header(palette), Point::new(105.0, 15.0), Point::new(0.0, 0.0)),
    ];

    for (tick, step) in (0_u32..).zip(script) {
        let timestamp = Timestamp::from_millis(f64::from(tick) * 16.0);
        if let Step::Frame = step {
            // Frames are looked up one surface at a time; the handler may close some.
            dispatcher.deliver_frames(&*desktop, timestamp);
            continue;
        }
        let pointer = |target, offset, page, button| PointerInput {
            target,
            offset,
            page,
            button,
            timestamp,
        };
        let events: Vec<Event> = {
            let mut d = desktop.borrow_mut();
            match step {
                Step::Down(t, offset, page) => d
                    .pointer_down(&pointer(Some(t), offset, page, Button::Left))
                    .into_iter()
                    .collect(),
                Step::Move(t, offset, page) => d
                    .pointer_move(&pointer(t, offset, page, Button::None))
                    .into_iter()
                    .collect(),
                Step::Up(t, offset, page) => d
                    .pointer_up(&pointer(t, offset, page, Button::Left))
                    .into_iter()
                    .collect(),
                Step::Key(code, key) => {
                    let input = KeyInput {
                        code,
                        key,
                        modifiers: Modifiers::empty(),
                        timestamp,
                    };
                    d.key_down(&input).into_iter().chain(d.key_up(&input)).collect()
                }
                Step::Frame => Vec::new(),
            }
        };
        dispatcher.deliver_all(events);
        if !dispatcher.is_running() {
            break;
        }
    }

    let d = desktop.borrow();
    println!("surfaces left: {}", d.surfaces().count());
}
