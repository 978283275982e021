/// `PK WND dddss/(hh)mm` — the peak wind observed since the last METAR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakWind {
    /// Direction the peak wind blew from, in degrees true.
    pub direction_degrees: u16,
    /// Peak wind speed in knots.
    pub speed_kt: u16,
    /// Hour of observation, when the timestamp included it. A bare
    /// `280P105/` with an empty time field leaves both `hour` and
    /// `minute` `None`.
    pub hour: Option<u8>,
    /// Minute of observation, when the timestamp included it.
    pub minute: Option<u8>,
}

/// `WSHFT (hh)mm (FROPA)?` — a wind shift, optionally tied to a frontal
/// passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindShift {
    /// Hour of the shift, when the timestamp was the 4-digit `hhmm` form.
    pub hour: Option<u8>,
    /// Minute of the shift.
    pub minute: u8,
    /// True when the shift was reported as tied to a frontal passage
    /// (`FROPA`).
    pub frontal_passage: bool,
}
