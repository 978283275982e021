use crate::types::WeatherIntensity;

/// Whether a weather-event timestamp marks the beginning or end of the
/// phenomenon's occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeatherEventMarkKind {
    /// The phenomenon began at this time.
    Begin,
    /// The phenomenon ended at this time.
    End,
}

/// A single `B`/`E` timestamp in a chained weather-event remark
/// (`RAB15E30`, `TSB0159E0230`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherEventMark {
    /// Whether this mark is a begin or an end.
    pub kind: WeatherEventMarkKind,
    /// Hour, present only when the timestamp was the 4-digit `hhmm` form.
    pub hour: Option<u8>,
    /// Minute of the mark.
    pub minute: u8,
}

/// A weather phenomenon with a begin/end occurrence history, e.g.
/// `RAB15E30` (rain, began at :15, ended at :30).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherEvent {
    /// Leading intensity/proximity marker (`-`, `+`, `VC`), when reported.
    pub intensity: Option<WeatherIntensity>,
    /// The raw two-letter weather code, e.g. `RA`, `TS`, `SN`.
    pub code: String,
    /// The chained begin/end timestamps for this phenomenon.
    pub marks: Vec<WeatherEventMark>,
}

/// A measured precipitation amount over some period, or a trace amount.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrecipitationAmount {
    /// Amount in inches, or `None` for a trace (`is_trace` is then true).
    pub inches: Option<f64>,
    /// True when the group reported a trace amount (`////`).
    pub is_trace: bool,
    /// Length of the accumulation period, in hours (1, 6, or 24).
    pub period_hours: u8,
}
