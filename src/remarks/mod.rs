//! Structured decoding of the unstructured RMK remarks tail.
//!
//! The remarks grammar is a heterogeneous, order-independent, partially
//! overlapping set of ~25 optional code groups. Each
//! sub-record here is produced by one or more recognizers in
//! [`crate::decode::remarks_scan`]; this module only holds the resulting
//! value types and the sparse [`Remarks`] record they're collected into.

mod maintenance;
mod pressure;
mod sky;
mod station;
mod temperature;
mod visibility;
mod weather;
mod wind;

pub use maintenance::MaintenanceIndicator;
pub use pressure::PressureTendency;
pub use sky::{
    CeilingSecondSite, CloudTypeRemark, ConvectiveCloudCode, LocationQualifier, ObscurationLayer,
    ThunderstormLocation, VariableCeiling,
};
pub use station::AutomatedStationType;
pub(crate) use station::decode_sea_level_pressure;
pub(crate) use temperature::decode_signed_tenths;
pub use visibility::VariableVisibility;
pub use weather::{PrecipitationAmount, WeatherEvent, WeatherEventMark, WeatherEventMarkKind};
pub use wind::{PeakWind, WindShift};

use crate::types::{Pressure, Temperature, Visibility};

/// Sparse structured content recovered from the RMK remarks tail.
///
/// Every field is optional; the grammar does not require any particular
/// subset of remark groups to appear, and the decoder never fabricates a
/// value for a group that wasn't present.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Remarks {
    /// `AO1`/`AO2` automated station type, when reported.
    pub automated_station_type: Option<AutomatedStationType>,
    /// Sea-level pressure decoded from `SLPxyz`, when reported and not
    /// `SLPNO`.
    pub sea_level_pressure: Option<Pressure>,
    /// Precise temperature/dewpoint decoded from the `T`-group, when
    /// reported.
    pub precise_temperature: Option<Temperature>,
    /// Peak wind since the last METAR, from `PK WND`.
    pub peak_wind: Option<PeakWind>,
    /// Wind shift, from `WSHFT`.
    pub wind_shift: Option<WindShift>,
    /// Directionally variable visibility, from `VIS`.
    pub variable_visibility: Option<VariableVisibility>,
    /// Tower-observed visibility, from `TWR VIS`.
    pub tower_visibility: Option<Visibility>,
    /// Surface-observed visibility, from `SFC VIS`.
    pub surface_visibility: Option<Visibility>,
    /// Hourly precipitation amount, from `Pxxxx`.
    pub hourly_precipitation: Option<PrecipitationAmount>,
    /// Six-hour precipitation amount, from `6xxxx`.
    pub six_hour_precipitation: Option<PrecipitationAmount>,
    /// Twenty-four-hour precipitation amount, from `7xxxx`.
    pub twenty_four_hour_precipitation: Option<PrecipitationAmount>,
    /// Hail size in inches, from `GR <frac>`.
    pub hail_size_inches: Option<f64>,
    /// Weather phenomena with begin/end occurrence chains.
    pub weather_events: Vec<WeatherEvent>,
    /// Thunderstorm/convective cloud location remarks.
    pub thunderstorm_locations: Vec<ThunderstormLocation>,
    /// Three-hour pressure tendency, from `5<code><3d>`.
    pub pressure_tendency: Option<PressureTendency>,
    /// Six-hour maximum temperature in Celsius, from `1<sign><3d>`.
    pub six_hour_max_temperature: Option<f64>,
    /// Six-hour minimum temperature in Celsius, from `2<sign><3d>`.
    pub six_hour_min_temperature: Option<f64>,
    /// Twenty-four-hour maximum temperature in Celsius, from the
    /// `4<sign><3d><sign><3d>` group.
    pub twenty_four_hour_max_temperature: Option<f64>,
    /// Twenty-four-hour minimum temperature in Celsius, from the
    /// `4<sign><3d><sign><3d>` group.
    pub twenty_four_hour_min_temperature: Option<f64>,
    /// Variable ceiling, from `CIG <3d>V<3d>`.
    pub variable_ceiling: Option<VariableCeiling>,
    /// Ceiling measured at a second site, from `CIG <3d>( <loc>)?`.
    pub ceiling_second_site: Option<CeilingSecondSite>,
    /// Sky layers accompanied by an obscuring phenomenon.
    pub obscuration_layers: Vec<ObscurationLayer>,
    /// Free-standing cloud-type remarks.
    pub cloud_types: Vec<CloudTypeRemark>,
    /// Automated-station maintenance indicators (`RVRNO`, `PWINO`, ...).
    pub automated_maintenance_indicators: Vec<MaintenanceIndicator>,
    /// True when a `$` maintenance-required flag was reported.
    pub maintenance_required: bool,
    /// Whitespace-normalized residue of tokens no recognizer consumed, or
    /// `None` when empty.
    pub free_text: Option<String>,
}
