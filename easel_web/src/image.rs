// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Asynchronous image decoding through `<img>` elements.

use std::cell::RefCell;
use std::rc::Rc;

use easel_pixmap::Pixmap;
use kurbo::Point;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlImageElement};

use crate::{Canvas, Error};

type Pending = Rc<RefCell<Option<Box<dyn FnOnce(Result<HtmlImageElement, Error>)>>>>;

/// Start loading `url`; `done` runs once, when it has decoded or failed.
///
/// Failures to start the load are reported through `done` as well.
pub(crate) fn load(url: &str, done: impl FnOnce(Result<HtmlImageElement, Error>) + 'static) {
    let image = match HtmlImageElement::new() {
        Ok(image) => image,
        Err(err) => {
            done(Err(Error::from(err)));
            return;
        }
    };
    let pending: Pending = Rc::new(RefCell::new(Some(Box::new(done))));

    let on_load = {
        let pending = pending.clone();
        let image = image.clone();
        Closure::once_into_js(move || {
            if let Some(done) = pending.borrow_mut().take() {
                done(Ok(image));
            }
        })
    };
    let on_error = {
        let url = String::from(url);
        Closure::once_into_js(move || {
            if let Some(done) = pending.borrow_mut().take() {
                done(Err(Error::Io(format!("cannot load {url}"))));
            }
        })
    };
    image.set_onload(Some(on_load.unchecked_ref()));
    image.set_onerror(Some(on_error.unchecked_ref()));
    image.set_src(url);
}

/// Natural size of a decoded image, as signed pixel counts.
pub(crate) fn size_of(image: &HtmlImageElement) -> (i32, i32) {
    let clamp = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
    (clamp(image.natural_width()), clamp(image.natural_height()))
}

/// Decode `image` into a BGRA buffer through a scratch canvas.
pub(crate) fn to_pixmap(document: &Document, image: &HtmlImageElement) -> Result<Pixmap, Error> {
    let (width, height) = size_of(image);
    let scratch = Canvas::create(document, width, height)?;
    scratch.draw_image(image, Point::ORIGIN)?;
    scratch.image_data(0, 0, width, height)
}
