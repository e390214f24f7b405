use std::ops::RangeInclusive;

use crate::bend::BendViews;

/// Allowed trace lengths [mils].
pub const TRACE_LENGTH_RANGE: RangeInclusive<f64> = 1.0..=100.0;
/// Allowed trace widths [mils].
pub const TRACE_WIDTH_RANGE: RangeInclusive<f64> = 1.0..=50.0;
pub const INITIAL_TRACE_LENGTH: f64 = 50.0;
pub const INITIAL_TRACE_WIDTH: f64 = 10.0;

/// Slider state of the bend explorer and the drawings derived from it.
///
/// Setting either value snaps it to a whole mil inside its range and
/// replaces the views with a freshly generated set.
#[derive(Clone, Debug, PartialEq)]
pub struct BendExplorer {
    trace_length: f64,
    trace_width: f64,
    views: BendViews,
}

impl Default for BendExplorer {
    fn default() -> Self {
        Self::new(INITIAL_TRACE_LENGTH, INITIAL_TRACE_WIDTH)
    }
}

impl BendExplorer {
    pub fn new(trace_length: f64, trace_width: f64) -> Self {
        let trace_length = snap(trace_length, &TRACE_LENGTH_RANGE);
        let trace_width = snap(trace_width, &TRACE_WIDTH_RANGE);
        Self {
            trace_length,
            trace_width,
            views: BendViews::generate(trace_length, trace_width),
        }
    }

    #[inline]
    pub fn trace_length(&self) -> f64 {
        self.trace_length
    }

    #[inline]
    pub fn trace_width(&self) -> f64 {
        self.trace_width
    }

    #[inline]
    pub fn views(&self) -> &BendViews {
        &self.views
    }

    /// Returns `true` if the length changed.
    pub fn set_trace_length(&mut self, trace_length: f64) -> bool {
        let trace_length = snap(trace_length, &TRACE_LENGTH_RANGE);
        if trace_length == self.trace_length {
            return false;
        }
        self.trace_length = trace_length;
        self.regenerate();
        true
    }

    /// Returns `true` if the width changed.
    pub fn set_trace_width(&mut self, trace_width: f64) -> bool {
        let trace_width = snap(trace_width, &TRACE_WIDTH_RANGE);
        if trace_width == self.trace_width {
            return false;
        }
        self.trace_width = trace_width;
        self.regenerate();
        true
    }

    fn regenerate(&mut self) {
        self.views = BendViews::generate(self.trace_length, self.trace_width);
    }
}

fn snap(value: f64, range: &RangeInclusive<f64>) -> f64 {
    if value.is_nan() {
        return *range.start();
    }
    value.round().clamp(*range.start(), *range.end())
}
