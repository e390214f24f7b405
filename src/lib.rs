//! Calculators for the signal delay and layout of bent printed circuit board traces.
//!
//! Two independent tools share this crate:
//!
//! * [`propagation`] compares the time of flight along a straight trace with a
//!   circular-arc bend and a right-angle bend of the same centerline length.
//! * [`bend`] samples the outlines of quarter-circle and right-angle bends so
//!   they can be drawn side by side.
//!
//! The desktop front ends live in `src/bin` and are built with the `gui` feature.

mod form;
mod propagation;
mod report;
mod units;

pub mod bend;
pub mod prelude;

pub use form::{
    FormInput, DEFAULT_DIELECTRIC, DEFAULT_LENGTH, DEFAULT_WIDTH, DIELECTRIC_ERROR_MESSAGE,
    NUMERIC_ERROR_MESSAGE,
};
pub use propagation::{
    compute, compute_propagation_times, EffectiveLength, PropagationResult, TraceGeometry,
    INCH_TO_METER, SECONDS_TO_PICOSECONDS, SPEED_OF_LIGHT,
};
pub use report::{format_significant, REPORT_BANNER, REPORT_PRECISION};
pub use units::{to_inches, LengthUnit};

/// Represents an error in a calculation or in the values handed to it.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("Unknown unit: {0}")]
    InvalidUnit(String),
    #[error("Could not read {field} as a number ( input: {input:?} )")]
    NonNumericInput {
        field: &'static str,
        input: String,
    },
    #[error("Dielectric constant must be greater than zero ( Er: {0} )")]
    InvalidDielectric(f64),
}
