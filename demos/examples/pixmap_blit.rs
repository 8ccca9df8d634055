// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clamped pixel copies between BGRA pixmaps.
//!
//! Copies a small checkerboard tile onto a larger pixmap at a few offsets,
//! some of them hanging off an edge, and prints how each request was clipped
//! together with the colors that ended up in the corners.
//!
//! Run:
//! - `cargo run -p easel_demos --example pixmap_blit`

use easel_pixmap::{BlitRect, Pixmap};
use easel_style::Color;

fn main() {
    let light = Color::from_rgb(0xEE, 0xEE, 0xEE);
    let dark = Color::from_rgb(0x20, 0x40, 0x80);

    let mut tile = Pixmap::new(8, 8).unwrap();
    for y in 0..8 {
        for x in 0..8 {
            let color = if (x / 2 + y / 2) % 2 == 0 { light } else { dark };
            tile.put_pixel(x, y, color).unwrap();
        }
    }

    let mut canvas = Pixmap::new(20, 12).unwrap();
    canvas.fill(Color::WHITE);

    let requests = [
        ("inside", 2, 2),
        ("left edge", -3, 1),
        ("bottom right", 16, 9),
        ("off canvas", 40, 40),
    ];
    for (name, dst_x, dst_y) in requests {
        let request = BlitRect {
            dst_x,
            dst_y,
            src_x: 0,
            src_y: 0,
            width: tile.width(),
            height: tile.height(),
        };
        let copied = canvas.blit(&tile, request);
        if copied.is_empty() {
            println!("{name:>12}: nothing copied");
        } else {
            println!(
                "{name:>12}: {}x{} from ({}, {}) to ({}, {})",
                copied.width, copied.height, copied.src_x, copied.src_y, copied.dst_x, copied.dst_y
            );
        }
    }

    for (x, y) in [(0, 0), (19, 0), (0, 11), (19, 11)] {
        let css = canvas
            .pixel(x, y)
            .map_or_else(|| String::from("-"), Color::to_css);
        println!("pixel ({x:>2}, {y:>2}) = {css}");
    }

    // ImageData wants RGBA; the pixmap keeps BGRA.
    let rgba = tile.to_rgba();
    println!("first texel BGRA {:02X?} RGBA {:02X?}", &tile.as_bytes()[..4], &rgba[..4]);
}
