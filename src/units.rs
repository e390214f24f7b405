use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A length unit offered by the calculator's unit selectors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Inches,
    Meters,
    Mils,
}

impl LengthUnit {
    /// Every unit, in the order the selectors list them.
    pub const ALL: [LengthUnit; 3] = [LengthUnit::Inches, LengthUnit::Meters, LengthUnit::Mils];

    /// The label shown in a unit selector.
    pub fn label(self) -> &'static str {
        match self {
            LengthUnit::Inches => "inches",
            LengthUnit::Meters => "meters",
            LengthUnit::Mils => "mils",
        }
    }

    /// Converts `value`, expressed in this unit, to inches.
    #[inline]
    pub fn to_inches(self, value: f64) -> f64 {
        match self {
            LengthUnit::Inches => value,
            LengthUnit::Meters => value / 0.0254,
            LengthUnit::Mils => value * 0.001,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        LengthUnit::ALL
            .into_iter()
            .find(|unit| unit.label() == tag)
            .ok_or_else(|| Error::InvalidUnit(tag.to_string()))
    }
}

/// Converts `value` to inches, reading the unit from a selector label.
///
/// Unknown labels fail with [`Error::InvalidUnit`] instead of falling back to a default.
pub fn to_inches(value: f64, unit: &str) -> Result<f64, Error> {
    Ok(unit.parse::<LengthUnit>()?.to_inches(value))
}
