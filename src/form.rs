use crate::{compute, Error, LengthUnit, TraceGeometry};

/// Text shown when a field cannot be read as a number.
pub const NUMERIC_ERROR_MESSAGE: &str = "Error: Please enter valid numeric values.";
/// Text shown when the dielectric constant is not positive.
pub const DIELECTRIC_ERROR_MESSAGE: &str = "Error: Dielectric constant must be greater than zero.";

pub const DEFAULT_LENGTH: &str = "10.0";
pub const DEFAULT_WIDTH: &str = "0.005";
pub const DEFAULT_DIELECTRIC: &str = "3.3";

/// The raw contents of the calculator form.
#[derive(Clone, Debug, PartialEq)]
pub struct FormInput {
    pub length: String,
    pub length_unit: String,
    pub width: String,
    pub width_unit: String,
    pub dielectric: String,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH.to_string(),
            length_unit: LengthUnit::Inches.to_string(),
            width: DEFAULT_WIDTH.to_string(),
            width_unit: LengthUnit::Inches.to_string(),
            dielectric: DEFAULT_DIELECTRIC.to_string(),
        }
    }
}

impl FormInput {
    /// Parses every field and converts the lengths to inches.
    ///
    /// Fields are read before units are checked, and the dielectric constant
    /// is checked last, so the first problem found is the one reported.
    pub fn validate(&self) -> Result<TraceGeometry, Error> {
        let length = parse_field("L", &self.length)?;
        let width = parse_field("W", &self.width)?;
        let dielectric = parse_field("Er", &self.dielectric)?;

        let length_unit: LengthUnit = self.length_unit.parse()?;
        let width_unit: LengthUnit = self.width_unit.parse()?;

        TraceGeometry::new(
            length_unit.to_inches(length),
            width_unit.to_inches(width),
            dielectric,
        )
    }

    /// Produces the text for the output box: either a report or an error line.
    pub fn evaluate(&self) -> String {
        match self.validate().and_then(|geometry| compute(&geometry)) {
            Ok(result) => result.report(),
            Err(err) => {
                tracing::info!(%err, "rejected calculator input");
                match err {
                    Error::InvalidDielectric(_) => DIELECTRIC_ERROR_MESSAGE.to_string(),
                    Error::NonNumericInput { .. } | Error::InvalidUnit(_) => {
                        NUMERIC_ERROR_MESSAGE.to_string()
                    }
                }
            }
        }
    }
}

fn parse_field(field: &'static str, input: &str) -> Result<f64, Error> {
    input.trim().parse::<f64>().map_err(|_| Error::NonNumericInput {
        field,
        input: input.to_string(),
    })
}
