// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The keyword tables shared with the canvas, and CSS color parsing.
//!
//! Prints every keyword with its numeric tag, then parses a handful of CSS
//! color strings, some of them malformed.
//!
//! Run:
//! - `cargo run -p easel_demos --example style_tables`

use easel_event::KeyCode;
use easel_style::{Color, CompositeOp, Font, LineCap, LineJoin, Repeat, Slant};

fn main() {
    println!("composite operations:");
    for op in CompositeOp::ALL {
        println!("  {:>2} {}", op.tag(), op.as_css());
    }
    let caps: Vec<_> = LineCap::ALL.iter().map(|c| c.as_css()).collect();
    let joins: Vec<_> = LineJoin::ALL.iter().map(|j| j.as_css()).collect();
    let repeats: Vec<_> = Repeat::ALL.iter().map(|r| r.as_css()).collect();
    println!("line caps: {caps:?}");
    println!("line joins: {joins:?}");
    println!("repeat: {repeats:?}");

    let font = Font::new("Georgia", 14.0)
        .with_slant(Slant::Italic)
        .with_weight(700);
    println!("font: {}", font.to_css());

    for input in ["#FF8000", "rgba(255, 128, 0, 0.5)", "#ff800080", "rgb(1,2,3)", "#12345"] {
        match Color::from_css(input) {
            Ok(color) => println!("{input:>12} -> {:#010X} -> {}", color.0, color.to_css()),
            Err(err) => println!("{input:>12} -> error: {err}"),
        }
    }

    for code in ["KeyA", "ArrowLeft", "NumpadEnter", "Fn"] {
        let key = KeyCode::from_dom_code(code);
        println!("{code:>12} -> {key:?} (usage {:#04X})", key.usb());
    }
}
