// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use easel_dispatch::{RunError, SurfaceError};
use easel_event::SurfaceId;
use easel_pixmap::PixmapError;

/// Errors from the browser host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The backend was used before [`Backend::init`](crate::Backend::init).
    NotInitialized,
    /// No surface with this id exists, or it was closed.
    NotFound(SurfaceId),
    /// A surface or pixel buffer dimension is out of range.
    InvalidSize {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
    /// Every surface id has been handed out.
    IdsExhausted,
    /// An event handler is already registered.
    AlreadyRunning,
    /// A pixel buffer did not match its declared size.
    Pixmap(PixmapError),
    /// The host rejected a call; carries the host's message.
    Js(String),
    /// An image could not be fetched or decoded.
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => f.write_str("backend used before init"),
            Self::NotFound(id) => write!(f, "surface {id} not found"),
            Self::InvalidSize { width, height } => write!(f, "invalid size {width}x{height}"),
            Self::IdsExhausted => f.write_str("no surface ids left"),
            Self::AlreadyRunning => f.write_str("an event handler is already running"),
            Self::Pixmap(err) => write!(f, "pixel buffer: {err}"),
            Self::Js(msg) => write!(f, "host error: {msg}"),
            Self::Io(msg) => write!(f, "image i/o: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pixmap(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SurfaceError> for Error {
    fn from(err: SurfaceError) -> Self {
        match err {
            SurfaceError::NotFound(id) => Self::NotFound(id),
            SurfaceError::InvalidSize { width, height } => Self::InvalidSize { width, height },
            SurfaceError::IdsExhausted => Self::IdsExhausted,
        }
    }
}

impl From<RunError> for Error {
    fn from(err: RunError) -> Self {
        match err {
            RunError::AlreadyRunning => Self::AlreadyRunning,
        }
    }
}

impl From<PixmapError> for Error {
    fn from(err: PixmapError) -> Self {
        match err {
            PixmapError::InvalidSize { width, height } => Self::InvalidSize { width, height },
            other => Self::Pixmap(other),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast;

        let msg = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| format!("{value:?}")),
        };
        Self::Js(msg)
    }
}
