// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::num::NonZeroU32;

/// Identifier of a surface.
///
/// Ids are allocated from a counter that starts at 1 and are never reused
/// while the allocating desktop lives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(NonZeroU32);

impl SurfaceId {
    /// Wrap a raw id. Returns `None` for zero.
    pub const fn new(raw: u32) -> Option<Self> {
        match NonZeroU32::new(raw) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// The raw id.
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in time, in microseconds, on the host's monotonic clock.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Create a timestamp from microseconds.
    pub const fn from_micros(micros: i64) -> Self {
        Self(micros)
    }

    /// Convert a host timestamp in (fractional) milliseconds.
    ///
    /// Sub-microsecond precision is truncated. Values beyond the `i64` range
    /// saturate and NaN becomes zero.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Float to integer casts saturate, which is the wanted behavior."
    )]
    pub fn from_millis(millis: f64) -> Self {
        Self((millis * 1000.0) as i64)
    }

    /// Microseconds since the host clock's origin.
    pub const fn as_micros(self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_a_surface_id() {
        assert_eq!(SurfaceId::new(0), None);
        assert_eq!(SurfaceId::new(7).map(SurfaceId::get), Some(7));
    }

    #[test]
    fn host_milliseconds_become_microseconds() {
        assert_eq!(Timestamp::from_millis(1.5), Timestamp(1500));
        assert_eq!(Timestamp::from_millis(16.6667), Timestamp(16666));
        assert_eq!(Timestamp::from_millis(f64::NAN), Timestamp(0));
        assert_eq!(Timestamp::from_millis(f64::INFINITY), Timestamp(i64::MAX));
    }
}
