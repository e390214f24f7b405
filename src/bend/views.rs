use crate::bend::paths::{PathFamily, QuarterArc, RightAngle};
use crate::bend::{BendPath, GRID_DIVISIONS, MARGIN_FRACTION};

/// Square axis extent and grid spacing of one drawing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewFrame {
    /// Both axes run from 0 to `limit`.
    pub limit: f64,
    pub grid_step: f64,
}

impl ViewFrame {
    /// Frames a drawing whose largest feature is `dimension + offset`.
    pub fn new(dimension: f64, offset: f64, trace_length: f64) -> Self {
        Self {
            limit: dimension + offset + MARGIN_FRACTION * dimension,
            grid_step: trace_length / GRID_DIVISIONS,
        }
    }

    /// Tick positions `0, step, 2·step, …` strictly below `limit + step`.
    pub fn ticks(&self) -> ndarray::Array1<f64> {
        if !(self.grid_step > 0.0) || !self.limit.is_finite() {
            return ndarray::Array1::zeros(1);
        }
        ndarray::Array1::range(0.0, self.limit + self.grid_step, self.grid_step)
    }
}

/// Plot 1: arcs of radius `L/2` against the right-angle bend.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CombinedView {
    pub arcs: PathFamily<QuarterArc>,
    pub corners: PathFamily<RightAngle>,
    pub frame: ViewFrame,
}

impl CombinedView {
    pub fn right_angle_label(&self) -> String {
        self.corners.label("Right Angle Bend")
    }

    pub fn circular_label(&self) -> String {
        self.arcs.label("Circular Bend")
    }
}

/// Plot 2: arcs of radius `L·√2/2` against the right-angle bend.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DiagonalRadiusView {
    pub radius: f64,
    pub arcs: PathFamily<QuarterArc>,
    pub corners: PathFamily<RightAngle>,
    pub frame: ViewFrame,
}

impl DiagonalRadiusView {
    pub fn right_angle_label(&self) -> String {
        self.corners.label("Right Angle Bend")
    }

    pub fn circular_label(&self) -> String {
        self.arcs.label("Circular Trace")
    }
}

/// Plot 3: a single arc as long as the inner edge of the right-angle bend.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MatchedLengthView {
    /// `(2/π)·(L - W)`.
    pub radius: f64,
    pub arc: QuarterArc,
    pub corners: PathFamily<RightAngle>,
    pub frame: ViewFrame,
}

impl MatchedLengthView {
    pub fn right_angle_label(&self) -> String {
        self.corners.label("Right Angle Bend")
    }

    pub fn quarter_label(&self) -> String {
        format!("Quarter Circ: {:.1} mils", self.arc.length())
    }
}

/// All three drawings for one trace length and width [mils].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BendViews {
    pub trace_length: f64,
    pub trace_width: f64,
    pub combined: CombinedView,
    pub diagonal: DiagonalRadiusView,
    pub matched: MatchedLengthView,
}

impl BendViews {
    /// Builds every drawing from scratch.
    ///
    /// Widths larger than the length are not rejected: the inner radii go
    /// negative and are passed through to the caller.
    pub fn generate(trace_length: f64, trace_width: f64) -> Self {
        let ref_length = trace_length / 2.0;
        let offset = trace_width / 2.0;

        let corners = RightAngle::family(ref_length, offset);

        let combined = CombinedView {
            arcs: QuarterArc::family(ref_length, offset),
            corners,
            frame: ViewFrame::new(ref_length, offset, trace_length),
        };

        let green_radius = trace_length * std::f64::consts::SQRT_2 / 2.0;
        let diagonal = DiagonalRadiusView {
            radius: green_radius,
            arcs: QuarterArc::family(green_radius, offset),
            corners,
            frame: ViewFrame::new(green_radius, offset, trace_length),
        };

        let quarter_radius = QuarterArc::radius_for_length(trace_length - trace_width);
        let matched = MatchedLengthView {
            radius: quarter_radius,
            arc: QuarterArc::new(quarter_radius),
            corners,
            frame: ViewFrame::new(ref_length, offset, trace_length),
        };

        if corners.inner.corner < 0.0 || quarter_radius < 0.0 {
            tracing::warn!(trace_length, trace_width, "trace is wider than it is long");
        }
        tracing::debug!(trace_length, trace_width, "generated bend views");

        Self { trace_length, trace_width, combined, diagonal, matched }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reference_trace() {
        let views = BendViews::generate(50.0, 10.0);

        assert_eq!(views.combined.corners.lengths(), [50.0, 40.0, 60.0]);
        assert_relative_eq!(views.combined.arcs.center.length(), 39.269908169872416);
        assert_eq!(views.combined.arcs.inner.radius, 20.0);
        assert_eq!(views.combined.arcs.outer.radius, 30.0);
        assert_relative_eq!(views.matched.arc.length(), 40.0, max_relative = 1e-15);
        assert_eq!(views.matched.quarter_label(), "Quarter Circ: 40.0 mils");
    }

    #[test]
    fn labels() {
        let views = BendViews::generate(50.0, 10.0);

        assert_eq!(
            views.combined.circular_label(),
            "Circular Bend:\nCenter: 39.3 mils\nInner: 31.4 mils\nOuter: 47.1 mils"
        );
        assert_eq!(
            views.diagonal.circular_label(),
            "Circular Trace:\nCenter: 55.5 mils\nInner: 47.7 mils\nOuter: 63.4 mils"
        );
        assert_eq!(views.diagonal.right_angle_label(), views.combined.right_angle_label());
    }

    #[test]
    fn diagonal_radius() {
        let views = BendViews::generate(50.0, 10.0);

        assert_relative_eq!(views.diagonal.radius, 35.35533905932738, max_relative = 1e-15);
        assert_relative_eq!(views.diagonal.arcs.outer.radius, 40.35533905932738, max_relative = 1e-15);
    }

    #[test]
    fn frames() {
        let views = BendViews::generate(50.0, 10.0);

        assert_eq!(views.combined.frame, ViewFrame { limit: 35.0, grid_step: 5.0 });
        assert_eq!(views.matched.frame, views.combined.frame);
        assert_relative_eq!(views.diagonal.frame.limit, 35.35533905932738 * 1.2 + 5.0, max_relative = 1e-12);

        let ticks = views.combined.frame.ticks();
        assert_eq!(ticks.len(), 8);
        assert_eq!(ticks[0], 0.0);
        assert_eq!(ticks[7], 35.0);
    }

    #[test]
    fn degenerate_width_passes_through() {
        let views = BendViews::generate(10.0, 30.0);

        assert_eq!(views.combined.corners.inner.corner, -10.0);
        assert!(views.matched.radius < 0.0);
        assert_relative_eq!(views.matched.arc.length(), -20.0, max_relative = 1e-12);
    }
}
