use crate::types::CompassDirection;

/// `VIS (<dir> )?<frac>V<frac>` — a directionally variable visibility
/// reported in the remarks, distinct from the main-body prevailing
/// visibility.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableVisibility {
    /// Lower bound, in statute miles.
    pub min: f64,
    /// Upper bound, in statute miles.
    pub max: f64,
    /// Direction the variability was observed in, when reported.
    pub direction: Option<CompassDirection>,
}
