use std::f64::consts::FRAC_PI_2;

use crate::bend::paths::PathFamily;
use crate::bend::{linspace, BendPath, Curve, ANGLE_SAMPLES};

/// A quarter circle centred on the origin, swept from the x axis to the y axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuarterArc {
    pub radius: f64,
}

impl QuarterArc {
    #[inline]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Concentric arcs at `radius` and `radius ± offset`.
    pub fn family(radius: f64, offset: f64) -> PathFamily<Self> {
        PathFamily {
            center: Self::new(radius),
            inner: Self::new(radius - offset),
            outer: Self::new(radius + offset),
        }
    }

    /// Radius of the arc whose length is `length`.
    #[inline]
    pub fn radius_for_length(length: f64) -> f64 {
        (2.0 / std::f64::consts::PI) * length
    }

    /// Samples `(r·cos θ, r·sin θ)` over evenly spaced θ in `[0, π/2]`.
    pub fn sample(&self) -> Curve {
        let theta = linspace(0.0, FRAC_PI_2, ANGLE_SAMPLES);
        Curve {
            x: theta.mapv(|t| self.radius * t.cos()),
            y: theta.mapv(|t| self.radius * t.sin()),
        }
    }
}

impl BendPath for QuarterArc {
    #[inline]
    fn length(&self) -> f64 {
        FRAC_PI_2 * self.radius
    }

    fn segments(&self) -> Vec<Curve> {
        vec![self.sample()]
    }
}
