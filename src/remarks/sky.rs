use crate::types::{CompassDirection, SkyCoverage, WeatherPhenomenon};

/// A qualifier narrowing where a thunderstorm/convective cloud was
/// observed relative to the station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationQualifier {
    /// `OHD` — directly overhead the station.
    Overhead,
    /// `VC` — in the vicinity of the station.
    InVicinity,
    /// `DSNT` — at a distance from the station.
    Distant,
    /// `DSIPTD` — observed dissipating.
    Dissipated,
    /// `TOP` — the reported height is a cloud top.
    Top,
    /// `TR` — a tornado or funnel cloud was observed.
    Tornado,
}

/// `(TS|CB|TCU|ACC|CBMAM|VIRGA) (qualifier)? (dir(-dir)?)? (MOV dir)?`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThunderstormLocation {
    /// The convective-cloud code this remark is anchored on.
    pub cloud_code: ConvectiveCloudCode,
    /// Where the cloud was observed relative to the station, when
    /// reported.
    pub qualifier: Option<LocationQualifier>,
    /// A single compass direction, when reported instead of a range.
    pub direction: Option<CompassDirection>,
    /// A compass direction range (`NE-E`), when reported instead of a
    /// single direction.
    pub direction_range: Option<(CompassDirection, CompassDirection)>,
    /// Direction the cloud was observed moving toward, from `MOV`.
    pub moving_direction: Option<CompassDirection>,
}

/// The convective-cloud code a thunderstorm-location remark is anchored
/// on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConvectiveCloudCode {
    /// `TS` — thunderstorm.
    Ts,
    /// `CB` — cumulonimbus.
    Cb,
    /// `TCU` — towering cumulus.
    Tcu,
    /// `ACC` — altocumulus castellanus.
    Acc,
    /// `CBMAM` — cumulonimbus mammatus.
    Cbmam,
    /// `VIRGA` — precipitation evaporating before reaching the ground.
    Virga,
}

/// `CIG <3d>V<3d>` — a variable ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableCeiling {
    /// Lower bound, in feet.
    pub min_feet: u32,
    /// Upper bound, in feet.
    pub max_feet: u32,
}

/// `CIG <3d>( <loc>)?` — ceiling measured at a second (usually tower)
/// site, distinct from the main-body ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CeilingSecondSite {
    /// Ceiling height, in feet.
    pub height_feet: u32,
    /// The second site's name, when reported.
    pub location: Option<String>,
}

/// `(FEW|SCT|BKN|OVC) (phenomenon) (height)` — a sky layer accompanied
/// by an obscuring phenomenon, e.g. `BKN FG 006`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObscurationLayer {
    /// Sky coverage of the layer.
    pub coverage: SkyCoverage,
    /// The phenomenon obscuring the layer.
    pub phenomenon: WeatherPhenomenon,
    /// Layer height, in feet.
    pub height_feet: u32,
}

/// A free-standing cloud-type remark, e.g. `CB 2 NE MOV NE` or `SF4`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CloudTypeRemark {
    /// The two-or-three-letter cloud-type code (`CB`, `TCU`, `SF`, ...).
    pub code: String,
    /// Oktas of coverage, 0-8.
    pub oktas: Option<u8>,
    /// Leading `+`/`-` intensity marker, when reported.
    pub intensity: Option<char>,
    /// Location qualifier or direction token, when reported.
    pub location: Option<String>,
    /// Movement description (`MOVG <dir>`), when reported.
    pub movement: Option<String>,
}
