// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use easel_event::SurfaceId;

/// Errors from surface management on a [`Desktop`](crate::Desktop).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceError {
    /// No surface with this id exists, or it was closed.
    NotFound(SurfaceId),
    /// A surface dimension is outside `1..=MAX_SURFACE_EXTENT`.
    InvalidSize {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
    /// Every surface id has been handed out.
    IdsExhausted,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "surface {id} not found"),
            Self::InvalidSize { width, height } => {
                write!(f, "invalid surface size {width}x{height}")
            }
            Self::IdsExhausted => f.write_str("no surface ids left"),
        }
    }
}

impl core::error::Error for SurfaceError {}

/// Error returned by [`Dispatcher::run`](crate::Dispatcher::run).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RunError {
    /// A handler is already registered.
    AlreadyRunning,
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRunning => f.write_str("an event handler is already running"),
        }
    }
}

impl core::error::Error for RunError {}
