use crate::bend::paths::PathFamily;
use crate::bend::{linspace, BendPath, Curve, ANGLE_SAMPLES};

/// A square corner at `(corner, corner)`.
///
/// Drawn as a horizontal run along `y = corner` for `x` in `[0, corner]`,
/// then a vertical run along `x = corner` for `y` in `[0, corner]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RightAngle {
    pub corner: f64,
}

impl RightAngle {
    #[inline]
    pub fn new(corner: f64) -> Self {
        Self { corner }
    }

    /// Corners at `corner` and `corner ± offset`.
    pub fn family(corner: f64, offset: f64) -> PathFamily<Self> {
        PathFamily {
            center: Self::new(corner),
            inner: Self::new(corner - offset),
            outer: Self::new(corner + offset),
        }
    }

    pub fn horizontal(&self) -> Curve {
        Curve {
            x: linspace(0.0, self.corner, ANGLE_SAMPLES),
            y: ndarray::Array1::from_elem(ANGLE_SAMPLES, self.corner),
        }
    }

    pub fn vertical(&self) -> Curve {
        Curve {
            x: ndarray::Array1::from_elem(ANGLE_SAMPLES, self.corner),
            y: linspace(0.0, self.corner, ANGLE_SAMPLES),
        }
    }
}

impl BendPath for RightAngle {
    #[inline]
    fn length(&self) -> f64 {
        2.0 * self.corner
    }

    fn segments(&self) -> Vec<Curve> {
        vec![self.horizontal(), self.vertical()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_meet_at_the_corner() {
        let bend = RightAngle::new(25.0);
        let segments = bend.segments();

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].first(), Some([0.0, 25.0]));
        assert_eq!(segments[0].last(), Some([25.0, 25.0]));
        assert_eq!(segments[1].first(), Some([25.0, 0.0]));
        assert_eq!(segments[1].last(), Some([25.0, 25.0]));
        assert!(segments.iter().all(|s| s.len() == ANGLE_SAMPLES));
    }

    #[test]
    fn family_lengths() {
        let family = RightAngle::family(25.0, 5.0);
        assert_eq!(family.lengths(), [50.0, 40.0, 60.0]);
        assert_eq!(
            family.label("Right Angle Bend"),
            "Right Angle Bend:\nCenter: 50.0 mils\nInner: 40.0 mils\nOuter: 60.0 mils"
        );
    }

    #[test]
    fn zero_corner_collapses() {
        let bend = RightAngle::new(0.0);
        assert!(bend.horizontal().points().all(|p| p == [0.0, 0.0]));
        assert_eq!(bend.length(), 0.0);
    }
}
