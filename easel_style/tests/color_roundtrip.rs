// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exhaustive CSS round trip for opaque colors.

use easel_style::Color;

#[test]
fn every_opaque_color_survives_css() {
    for rgb in 0..=0x00FF_FFFF_u32 {
        let color = Color(0xFF00_0000 | rgb);
        let css = color.to_css();
        assert_eq!(css.len(), 7, "{css}");
        assert_eq!(Color::from_css(&css), Ok(color), "{css}");
    }
}

#[test]
fn display_and_parse_agree() {
    let color = Color::from_argb(0x40, 0xDE, 0xAD, 0x42);
    let shown = color.to_string();
    assert_eq!(shown, color.to_css());
    assert_eq!(shown.parse::<Color>(), Ok(color));
}
