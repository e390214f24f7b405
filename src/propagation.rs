use std::f64::consts::FRAC_PI_4;

use crate::Error;

/// Speed of light in vacuum [m / s].
pub const SPEED_OF_LIGHT: f64 = 2.99792458e8;
/// Length of one inch [m].
pub const INCH_TO_METER: f64 = 0.0254;
/// Picoseconds per second.
pub const SECONDS_TO_PICOSECONDS: f64 = 1e12;

/// Physical description of a trace, with lengths already expressed in inches.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TraceGeometry {
    /// Nominal length measured along the trace centerline [in].
    pub length_in: f64,
    /// Width of the trace [in].
    pub width_in: f64,
    /// Relative permittivity of the substrate.
    pub dielectric: f64,
}

impl TraceGeometry {
    /// Creates a new `TraceGeometry`, rejecting a dielectric constant that is not positive.
    ///
    /// Widths wider than the trace is long are accepted; the effective lengths
    /// simply go negative.
    pub fn new(length_in: f64, width_in: f64, dielectric: f64) -> Result<Self, Error> {
        check_dielectric(dielectric)?;
        Ok(Self { length_in, width_in, dielectric })
    }

    /// Phase velocity of a signal in the substrate [m / s].
    #[inline]
    pub fn propagation_speed(&self) -> Result<f64, Error> {
        check_dielectric(self.dielectric)?;
        Ok(SPEED_OF_LIGHT / f64::sqrt(self.dielectric))
    }
}

/// A path length in both inches and meters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EffectiveLength {
    pub inches: f64,
    pub meters: f64,
}

impl EffectiveLength {
    #[inline]
    fn from_inches(inches: f64) -> Self {
        Self { inches, meters: inches * INCH_TO_METER }
    }

    /// One-way travel time at `speed` [ps].
    #[inline]
    pub fn travel_time_ps(&self, speed: f64) -> f64 {
        (self.meters / speed) * SECONDS_TO_PICOSECONDS
    }
}

/// Travel times along a straight trace and the two bent alternatives.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PropagationResult {
    /// The inputs the result was computed from.
    pub geometry: TraceGeometry,
    pub straight: EffectiveLength,
    /// Centerline shortened by a quarter-circle bend: `L - (π/4)·W`.
    pub circular: EffectiveLength,
    /// Centerline shortened by a square corner: `L - W`.
    pub right_angle: EffectiveLength,
    /// Propagation speed in the dielectric [m / s].
    pub speed: f64,
    pub straight_ps: f64,
    pub circular_ps: f64,
    pub right_angle_ps: f64,
    /// `straight_ps - circular_ps`, positive when the bend is faster.
    pub circular_delta_ps: f64,
    /// `straight_ps - right_angle_ps`, positive when the bend is faster.
    pub right_angle_delta_ps: f64,
}

/// Computes effective lengths, travel times and the delay saved by each bend.
pub fn compute(geometry: &TraceGeometry) -> Result<PropagationResult, Error> {
    let speed = geometry.propagation_speed()?;

    let straight = EffectiveLength::from_inches(geometry.length_in);
    let circular = EffectiveLength::from_inches(geometry.length_in - FRAC_PI_4 * geometry.width_in);
    let right_angle = EffectiveLength::from_inches(geometry.length_in - geometry.width_in);

    let straight_ps = straight.travel_time_ps(speed);
    let circular_ps = circular.travel_time_ps(speed);
    let right_angle_ps = right_angle.travel_time_ps(speed);

    let result = PropagationResult {
        geometry: *geometry,
        straight,
        circular,
        right_angle,
        speed,
        straight_ps,
        circular_ps,
        right_angle_ps,
        circular_delta_ps: straight_ps - circular_ps,
        right_angle_delta_ps: straight_ps - right_angle_ps,
    };
    tracing::debug!(
        length_in = geometry.length_in,
        width_in = geometry.width_in,
        dielectric = geometry.dielectric,
        speed,
        circular_delta_ps = result.circular_delta_ps,
        right_angle_delta_ps = result.right_angle_delta_ps,
        "computed propagation times"
    );

    Ok(result)
}

/// Scalar form of [`compute`].
#[inline]
pub fn compute_propagation_times(
    l_inch: f64,
    w_inch: f64,
    er: f64,
) -> Result<PropagationResult, Error> {
    compute(&TraceGeometry { length_in: l_inch, width_in: w_inch, dielectric: er })
}

fn check_dielectric(dielectric: f64) -> Result<(), Error> {
    // NaN fails this comparison too
    if dielectric > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidDielectric(dielectric))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn speed_of_light_matches_codata() {
        assert_eq!(SPEED_OF_LIGHT, physical_constants::SPEED_OF_LIGHT_IN_VACUUM);
    }

    #[test]
    fn reference_board() {
        let result = compute_propagation_times(10.0, 0.005, 3.3).unwrap();

        assert_eq!(result.straight.inches, 10.0);
        assert_relative_eq!(result.straight.meters, 0.254, max_relative = 1e-12);
        assert_relative_eq!(result.circular.inches, 9.996073009, max_relative = 1e-9);
        assert_relative_eq!(result.right_angle.inches, 9.995, max_relative = 1e-12);
        assert_relative_eq!(result.speed, 1.650303167e8, max_relative = 1e-9);
        assert_relative_eq!(result.straight_ps, 1539.111147, max_relative = 1e-9);
        assert_relative_eq!(result.circular_ps, 1538.50674, max_relative = 1e-8);
        assert_relative_eq!(result.right_angle_ps, 1538.341592, max_relative = 1e-9);
        assert_relative_eq!(result.circular_delta_ps, 0.6044075342, max_relative = 1e-6);
        assert_relative_eq!(result.right_angle_delta_ps, 0.7695555736, max_relative = 1e-6);
    }

    #[test]
    fn formula_structure() {
        let (l, w, er) = (4.2, 0.012, 4.5);
        let result = compute_propagation_times(l, w, er).unwrap();
        let v = SPEED_OF_LIGHT / er.sqrt();

        assert_relative_eq!(result.speed, v);
        assert_relative_eq!(
            result.circular_ps,
            (l - std::f64::consts::PI / 4.0 * w) * 0.0254 / v * 1e12,
            max_relative = 1e-12
        );
        assert_relative_eq!(result.right_angle_ps, (l - w) * 0.0254 / v * 1e12, max_relative = 1e-12);
    }

    #[test]
    fn zero_width_has_no_delta() {
        let result = compute_propagation_times(3.0, 0.0, 4.0).unwrap();

        assert_eq!(result.circular.inches, result.straight.inches);
        assert_eq!(result.right_angle.inches, result.straight.inches);
        assert_eq!(result.circular_delta_ps, 0.0);
        assert_eq!(result.right_angle_delta_ps, 0.0);
    }

    #[test]
    fn vacuum_speed_is_c() {
        let result = compute_propagation_times(1.0, 0.01, 1.0).unwrap();
        assert_eq!(result.speed, SPEED_OF_LIGHT);
    }

    #[test]
    fn oversized_width_passes_through() {
        let result = compute_propagation_times(1.0, 2.0, 4.0).unwrap();

        assert_relative_eq!(result.right_angle.inches, -1.0);
        assert!(result.circular.inches < 0.0);
        assert!(result.right_angle_ps < 0.0);
    }

    #[test]
    fn non_positive_dielectric_is_rejected() {
        assert_eq!(
            compute_propagation_times(10.0, 0.005, 0.0),
            Err(Error::InvalidDielectric(0.0))
        );
        assert_eq!(
            compute_propagation_times(10.0, 0.005, -2.0),
            Err(Error::InvalidDielectric(-2.0))
        );
        assert!(matches!(
            compute_propagation_times(10.0, 0.005, f64::NAN),
            Err(Error::InvalidDielectric(_))
        ));
        assert!(TraceGeometry::new(1.0, 0.1, -1.0).is_err());
    }

    proptest! {
        #[test]
        fn bends_are_faster(l in 0.01f64..100.0, frac in 0.001f64..0.999, er in 1.0f64..12.0) {
            let w = l * frac;
            let result = compute_propagation_times(l, w, er).unwrap();

            prop_assert!(result.circular_delta_ps > 0.0);
            prop_assert!(result.right_angle_delta_ps > 0.0);
            // the square corner cuts more than the arc
            prop_assert!(result.right_angle_delta_ps > result.circular_delta_ps);
        }
    }
}
