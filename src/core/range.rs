use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DrawerError, DrawerResult};

/// Displayed bounds of a widget's independent variable.
///
/// `start < end` always holds. Setters that would break the ordering are
/// ignored and report `false`; the last valid bound stays in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainRange {
    start: f64,
    end: f64,
}

impl DomainRange {
    pub fn new(start: f64, end: f64) -> DrawerResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(DrawerError::InvalidData(
                "range bounds must be finite".to_owned(),
            ));
        }
        if start >= end {
            return Err(DrawerError::InvalidData(format!(
                "range start must be below end, got [{start}, {end}]"
            )));
        }
        Ok(Self { start, end })
    }

    /// Builds a range from the first and last sample of an axis.
    ///
    /// Axes with a single distinct value get a one-unit span so the scale
    /// factor stays finite.
    #[must_use]
    pub(crate) fn seeded(first: f64, last: f64) -> Self {
        let (start, end) = if first <= last {
            (first, last)
        } else {
            (last, first)
        };
        if start < end {
            Self { start, end }
        } else {
            Self {
                start,
                end: start + 1.0,
            }
        }
    }

    #[must_use]
    pub fn start(self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.end
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    /// Inclusive containment test used by the scale mapper.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.start && value <= self.end
    }

    /// Moves the lower bound. Returns `false` (and changes nothing) when the
    /// new bound is not strictly below the current end.
    pub fn set_start(&mut self, start: f64) -> bool {
        if !start.is_finite() || start >= self.end {
            debug!(
                requested = start,
                end = self.end,
                "ignoring range start update"
            );
            return false;
        }
        self.start = start;
        true
    }

    /// Moves the upper bound. Returns `false` (and changes nothing) when the
    /// new bound is not strictly above the current start.
    pub fn set_end(&mut self, end: f64) -> bool {
        if !end.is_finite() || self.start >= end {
            debug!(
                requested = end,
                start = self.start,
                "ignoring range end update"
            );
            return false;
        }
        self.end = end;
        true
    }
}
