//! Bend shapes.

mod arc;
mod right_angle;

pub use arc::QuarterArc;
pub use right_angle::RightAngle;

use crate::bend::BendPath;

/// A centerline path together with the inner and outer edges of the trace.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PathFamily<P: BendPath> {
    pub center: P,
    pub inner: P,
    pub outer: P,
}

impl<P: BendPath> PathFamily<P> {
    /// Lengths of the center, inner and outer paths.
    pub fn lengths(&self) -> [f64; 3] {
        [self.center.length(), self.inner.length(), self.outer.length()]
    }

    /// Formats the lengths as a titled annotation with one decimal place.
    pub fn label(&self, title: &str) -> String {
        let [center, inner, outer] = self.lengths();
        format!(
            "{}:\nCenter: {:.1} mils\nInner: {:.1} mils\nOuter: {:.1} mils",
            title, center, inner, outer
        )
    }
}
