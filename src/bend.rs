//! Sampled outlines of bent traces.
//!
//! Every outline is built fresh from the trace length and width; nothing is
//! updated in place. [`BendViews::generate`] produces the three side-by-side
//! comparisons, and [`BendExplorer`] regenerates them whenever a slider moves.

pub mod paths;

mod explorer;
mod views;

pub use explorer::{
    BendExplorer, INITIAL_TRACE_LENGTH, INITIAL_TRACE_WIDTH, TRACE_LENGTH_RANGE,
    TRACE_WIDTH_RANGE,
};
pub use views::{BendViews, CombinedView, DiagonalRadiusView, MatchedLengthView, ViewFrame};

/// Number of samples taken along every arc and every straight segment.
pub const ANGLE_SAMPLES: usize = 200;
/// Extra room around a drawing, as a fraction of its main dimension.
pub const MARGIN_FRACTION: f64 = 0.2;
/// The grid spacing is the trace length divided by this.
pub const GRID_DIVISIONS: f64 = 10.0;

/// An ordered sequence of 2-D points, in mils.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    pub x: ndarray::Array1<f64>,
    pub y: ndarray::Array1<f64>,
}

impl Curve {
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The points as `[x, y]` pairs, in sampling order.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.x.iter().zip(self.y.iter()).map(|(&x, &y)| [x, y])
    }

    pub fn first(&self) -> Option<[f64; 2]> {
        self.points().next()
    }

    pub fn last(&self) -> Option<[f64; 2]> {
        self.points().last()
    }
}

/// `n` evenly spaced values from `start` to `end`, with `end` hit exactly.
pub(crate) fn linspace(start: f64, end: f64, n: usize) -> ndarray::Array1<f64> {
    let mut values = ndarray::Array1::linspace(start, end, n);
    if n > 0 {
        values[n - 1] = end;
    }
    values
}

/// Describes a bend shape that can be measured and drawn.
pub trait BendPath {
    /// Length of the path [mils].
    fn length(&self) -> f64;
    /// Sampled pieces of the path, each drawn as its own polyline.
    fn segments(&self) -> Vec<Curve>;
}
