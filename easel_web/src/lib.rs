// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_web --heading-base-level=0

//! Easel Web: the browser host for Easel.
//!
//! When targeting `wasm32`, [`Backend`] puts every on-screen surface in an
//! absolutely positioned `<div>` with a drawn title bar and a drawing
//! `<canvas>`, listens for keyboard and mouse input on the document, runs a
//! `requestAnimationFrame` loop and follows layout-driven canvas resizes. The
//! raw input goes through an [`easel_dispatch::Desktop`] and the resulting
//! events reach the handler registered with [`Backend::run`].
//!
//! Drawing is a thin layer over the host: [`Canvas`] forwards to
//! `CanvasRenderingContext2D` and [`Path`] to `Path2D`. The few things Easel
//! adds on top are pixel copies clamped with [`easel_pixmap::clamp_blit`] and
//! the R/B swap between BGRA [`Pixmap`](easel_pixmap::Pixmap)s and RGBA
//! `ImageData`.
//!
//! ```no_run
//! # #[cfg(target_arch = "wasm32")]
//! # fn main() -> Result<(), easel_web::Error> {
//! use easel_dispatch::{Outcome, SurfaceOptions};
//! use easel_event::Event;
//! use easel_style::Color;
//! use kurbo::Rect;
//!
//! easel_web::init_logging();
//! let backend = easel_web::Backend::new()?;
//! backend.init()?;
//! let id = backend.create_onscreen(320, 200, SurfaceOptions::default().with_title("Hello"))?;
//! backend.show(id)?;
//!
//! let host = backend.clone();
//! backend.run(
//!     move |event: &Event| {
//!         match event {
//!             Event::Frame(f) => {
//!                 let canvas = host.canvas(f.surface)?;
//!                 canvas.set_fill_color(Color::from_rgb(0x20, 0x60, 0xA0));
//!                 canvas.fill_rect(Rect::new(10.0, 10.0, 110.0, 60.0));
//!             }
//!             Event::CanvasClosed(_) => return Ok(Outcome::Stop),
//!             _ => {}
//!         }
//!         Ok(Outcome::Continue)
//!     },
//!     |result| log::info!("stopped: {result:?}"),
//! )?;
//! # Ok(())
//! # }
//! # #[cfg(not(target_arch = "wasm32"))]
//! # fn main() {}
//! ```
//!
//! Element ids, frame layout and title-bar artwork are plain Rust and are
//! available on every target; everything touching the DOM is `wasm32` only.

mod error;
pub mod frame;
pub mod ids;

#[cfg(target_arch = "wasm32")]
mod backend;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod image;
#[cfg(target_arch = "wasm32")]
mod path;
#[cfg(target_arch = "wasm32")]
mod shell;
#[cfg(any(target_arch = "wasm32", test))]
mod tick;

pub use error::Error;

#[cfg(target_arch = "wasm32")]
pub use backend::Backend;
#[cfg(target_arch = "wasm32")]
pub use canvas::{Canvas, FillRule, Gradient, Paint, Pattern};
#[cfg(target_arch = "wasm32")]
pub use path::Path;
#[cfg(target_arch = "wasm32")]
pub use shell::DomShell;

/// Send `log` records and panic messages to the browser console.
///
/// Safe to call more than once; only the first call installs anything.
#[cfg(all(target_arch = "wasm32", feature = "console"))]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("a logger was already installed");
    }
}
