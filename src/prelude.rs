//! Includes commonly used library components.

pub use crate::{
    compute,
    to_inches,
    EffectiveLength,
    Error,
    FormInput,
    LengthUnit,
    PropagationResult,
    TraceGeometry,
};
pub use crate::bend::{BendExplorer, BendPath, BendViews, Curve};
