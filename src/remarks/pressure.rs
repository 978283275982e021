/// `5<code><3d>` — the 3-hour pressure tendency, code 0-8 plus a change
/// magnitude in hectopascals. Changes greater than 50.0 hPa are rejected
/// as implausible by the recognizer that builds this.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PressureTendency {
    /// The tendency code, 0-8 (WMO code table 0200).
    pub code: u8,
    /// Magnitude of the pressure change over the last three hours, in
    /// hectopascals.
    pub change_hpa: f64,
}
