//! The immutable top-level decoded record and its report-type/modifier
//! enums.

use chrono::{DateTime, Utc};

use crate::remarks::Remarks;
use crate::types::{Pressure, PresentWeather, RunwayVisualRange, SkyCondition, Temperature, Visibility, Wind};

/// Whether a report was filed as a routine or special observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReportType {
    /// `METAR` — a routine, scheduled observation. Also the default when
    /// the keyword itself was omitted but a bare station ID was found.
    Metar,
    /// `SPECI` — an unscheduled special observation.
    Speci,
}

/// An optional qualifier token following the station ID's timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReportModifier {
    /// `AUTO` — fully automated observation, no human augmentation.
    Auto,
    /// `COR` — a correction to a previously transmitted report.
    Cor,
    /// `AMD` — an amended forecast-linked report.
    Amd,
    /// `RTD` — a retarded (delayed) report.
    Rtd,
}

/// A fully decoded METAR or SPECI surface weather observation.
///
/// Produced only by [`crate::parse`]; every field reflects what the report
/// text actually contained. The only inferred values are the report type
/// defaulting to METAR when the keyword itself is omitted, and the
/// observation-time month-rollback rule applied during envelope extraction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    /// The four-character ICAO station identifier (e.g. `KJFK`).
    pub station_id: String,
    /// Whether this was filed as a routine or special observation.
    pub report_type: ReportType,
    /// The optional qualifier token following the timestamp, if any.
    pub report_modifier: Option<ReportModifier>,
    /// The observation instant, resolved against the envelope's date
    /// prefix (or the current date, when no prefix was given).
    pub observation_time: DateTime<Utc>,
    /// The raw report text this observation was decoded from, trimmed.
    pub raw_data: String,
    /// Surface wind, when reported.
    pub wind: Option<Wind>,
    /// Prevailing visibility, when reported.
    pub visibility: Option<Visibility>,
    /// Temperature and dewpoint, when reported.
    pub temperature: Option<Temperature>,
    /// Altimeter/QNH setting, when reported.
    pub pressure: Option<Pressure>,
    /// Present weather phenomena, in report order.
    pub present_weather: Vec<PresentWeather>,
    /// Sky condition layers, in report order.
    pub sky_conditions: Vec<SkyCondition>,
    /// Runway visual range groups, in report order.
    pub runway_visual_ranges: Vec<RunwayVisualRange>,
    /// True when the body carried a trailing `NOSIG` flag.
    pub no_significant_change: bool,
    /// Structured content recovered from the `RMK` remarks tail, when
    /// present.
    pub remarks: Option<Remarks>,
}

impl Observation {
    /// True if any sky layer carries a reportable ceiling (broken,
    /// overcast, or indefinite vertical visibility).
    pub fn has_ceiling(&self) -> bool {
        self.sky_conditions.iter().any(SkyCondition::is_ceiling)
    }
}
