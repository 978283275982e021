#![deny(missing_docs)]

//! # METAR/SPECI decoder
//!
//! Decodes North American METAR and SPECI surface weather reports,
//! including the order-independent RMK remarks tail.
//!
//! ## Quick usage
//!
//! ```rust
//! let obs = metar_decoder::parse(
//!     "METAR KJFK 121851Z 24008KT 10SM FEW250 23/14 A3012 RMK AO2 SLP201 T02330139",
//! )
//! .unwrap();
//! println!("{:#?}", obs);
//! ```
//!
//! ## Error handling
//!
//! [`parse`] returns a [`ParseFailure`] only for the handful of fatal
//! envelope problems (empty input, no station ID, not a METAR/SPECI at
//! all). Everything else in the report body and remarks that doesn't match
//! a known code group is logged at `warn` via the `log` facade and folded
//! into [`Remarks::free_text`], never surfaced as an error.

mod decode;
mod error;
mod observation;
mod parsers;
mod remarks;
mod traits;
mod types;

pub use decode::builder::build as parse;
pub use error::ParseFailure;
pub use observation::{Observation, ReportModifier, ReportType};
pub use remarks::{
    AutomatedStationType, CeilingSecondSite, CloudTypeRemark, ConvectiveCloudCode,
    LocationQualifier, MaintenanceIndicator, ObscurationLayer, PeakWind, PrecipitationAmount,
    PressureTendency, Remarks, ThunderstormLocation, VariableCeiling, VariableVisibility,
    WeatherEvent, WeatherEventMark, WeatherEventMarkKind, WindShift,
};
pub use traits::Parsable;
pub use types::{
    CloudType, CompassDirection, Data, PresentWeather, Pressure, PressureUnit,
    RunwayVisualRange, RvrPrefix, RvrTrend, SkyCondition, SkyCoverage, Temperature, Visibility,
    VisibilityUnit, Wind, WeatherDescriptor, WeatherIntensity, WeatherPhenomenon, WindUnit,
};

/// True if `raw` passes the envelope's prefix checks: the `METAR`/`SPECI`
/// keyword is present, or a bare station ID is found, after an optional
/// date prefix. Unlike [`parse`], this does not validate the timestamp or
/// anything past the keyword/station ID, so it can return `true` for input
/// that [`parse`] would still reject.
pub fn can_parse(raw: &str) -> bool {
    decode::envelope::looks_like_metar(raw)
}
